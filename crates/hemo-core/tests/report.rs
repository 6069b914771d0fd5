use hemo_core::{CbcField, Report};
use jiff::civil::date;
use uuid::Uuid;

#[test]
fn new_report_has_nothing_measured() {
    let report = Report::new(Uuid::new_v4(), date(2026, 1, 2));
    assert_eq!(report.supplied_count(), 0);
    for field in CbcField::ALL {
        assert_eq!(report.value(field), None);
    }
}

#[test]
fn nan_reads_as_not_measured() {
    let report = Report::new(Uuid::new_v4(), date(2026, 1, 2))
        .with(CbcField::Hemoglobin, f64::NAN)
        .with(CbcField::Mch, 29.0);
    assert_eq!(report.value(CbcField::Hemoglobin), None);
    assert_eq!(report.supplied_count(), 1);
}

#[test]
fn measured_iterates_in_panel_order() {
    let report = Report::new(Uuid::new_v4(), date(2026, 1, 2))
        .with(CbcField::Mchc, 34.0)
        .with(CbcField::WbcCount, 7.0)
        .with(CbcField::Lymphocytes, 30.0);
    let fields: Vec<_> = report.measured().map(|(f, _)| f).collect();
    assert_eq!(
        fields,
        vec![CbcField::WbcCount, CbcField::Lymphocytes, CbcField::Mchc]
    );
}

#[test]
fn missing_lab_fields_deserialize_as_none() {
    let json = r#"{
        "id": "67e55044-10b1-426f-9247-bb680e5fe0c8",
        "test_date": "2026-04-01",
        "wbc_count": 12.5,
        "mcv": null
    }"#;
    let report: Report = serde_json::from_str(json).unwrap();
    assert_eq!(report.wbc_count, Some(12.5));
    assert_eq!(report.mcv, None);
    assert_eq!(report.platelet_count, None);
    assert_eq!(report.notes, "");
}

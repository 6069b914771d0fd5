use hemo_analysis::ranges::{Deviation, NORMAL_RANGES, range_for};
use hemo_core::CbcField;

#[test]
fn table_is_in_panel_order() {
    for (range, field) in NORMAL_RANGES.iter().zip(CbcField::ALL) {
        assert_eq!(range.field, field);
        assert_eq!(range_for(field).field, field);
        assert_eq!(range.unit, field.unit());
    }
}

#[test]
fn bounds_are_inclusive() {
    let wbc = range_for(CbcField::WbcCount);
    assert!(wbc.contains(4.5));
    assert!(wbc.contains(11.0));
    assert!(!wbc.contains(11.01));
    assert_eq!(wbc.deviation(4.5), None);
    assert_eq!(wbc.deviation(11.0), None);
}

#[test]
fn deviation_is_relative_to_violated_bound() {
    let plt = range_for(CbcField::PlateletCount);
    assert_eq!(plt.deviation(75.0), Some(Deviation::Below(50.0)));
    assert_eq!(plt.deviation(600.0), Some(Deviation::Above(50.0)));
}

#[test]
fn descriptions_use_one_decimal() {
    assert_eq!(Deviation::Above(218.1818).describe(), "218.2% above normal");
    assert_eq!(Deviation::Below(50.0).describe(), "50.0% below normal");
}

#[test]
fn display_uses_shortest_numbers() {
    assert_eq!(range_for(CbcField::WbcCount).display(), "4.5-11 10³/μL");
    assert_eq!(range_for(CbcField::Basophils).display(), "0.5-1 %");
    assert_eq!(range_for(CbcField::Mcv).display(), "80-100 fL");
}

#[test]
fn descriptions_round_ties_up() {
    assert_eq!(Deviation::Above(12.25).describe(), "12.3% above normal");
    assert_eq!(Deviation::Below(12.25).describe(), "12.3% below normal");
    assert_eq!(Deviation::Above(0.25).describe(), "0.3% above normal");
    assert_eq!(Deviation::Below(0.75).describe(), "0.8% below normal");
}

#[test]
fn within_range_has_no_deviation() {
    for range in &NORMAL_RANGES {
        let mid = (range.min + range.max) / 2.0;
        assert!(range.contains(mid));
        assert_eq!(range.deviation(mid), None);
    }
}

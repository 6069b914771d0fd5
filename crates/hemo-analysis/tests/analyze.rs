use hemo_analysis::{analyze, analyze_at};
use hemo_core::{CbcField, Report, RiskLevel, Severity};
use jiff::civil::date;
use uuid::Uuid;

fn blank() -> Report {
    Report::new(Uuid::new_v4(), date(2026, 10, 18))
}

fn midpoints() -> Report {
    blank()
        .with(CbcField::WbcCount, 7.0)
        .with(CbcField::RbcCount, 5.0)
        .with(CbcField::Hemoglobin, 15.0)
        .with(CbcField::Hematocrit, 43.0)
        .with(CbcField::PlateletCount, 275.0)
        .with(CbcField::Neutrophils, 55.0)
        .with(CbcField::Lymphocytes, 30.0)
        .with(CbcField::Monocytes, 5.0)
        .with(CbcField::Eosinophils, 2.0)
        .with(CbcField::Basophils, 0.75)
        .with(CbcField::Mcv, 90.0)
        .with(CbcField::Mch, 29.0)
        .with(CbcField::Mchc, 34.0)
}

fn indicator_types(report: &Report) -> Vec<String> {
    analyze(report)
        .cancer_indicators
        .into_iter()
        .map(|i| i.indicator_type)
        .collect()
}

#[test]
fn empty_report_is_low_risk() {
    let report = blank();
    let result = analyze(&report);

    assert_eq!(result.report_id, report.id);
    assert_eq!(result.risk_score, 0.0);
    assert_eq!(result.risk_level, RiskLevel::Low);
    assert!(result.detected_abnormalities.is_empty());
    assert!(result.cancer_indicators.is_empty());
    assert_eq!(result.confidence_score, 80.0);
}

#[test]
fn normal_midpoints_are_clean() {
    let result = analyze(&midpoints());

    assert!(result.detected_abnormalities.is_empty());
    assert!(result.cancer_indicators.is_empty());
    assert_eq!(result.risk_level, RiskLevel::Low);
    assert_eq!(result.risk_score, 0.0);
    assert!(result.confidence_score >= 90.0);
    assert_eq!(result.confidence_score, 99.0);
    assert!(result.recommendations.starts_with("Low risk detected."));
}

#[test]
fn very_high_wbc_flags_leukemia() {
    let result = analyze(&blank().with(CbcField::WbcCount, 35.0));

    assert_eq!(result.cancer_indicators.len(), 1);
    let indicator = &result.cancer_indicators[0];
    assert_eq!(indicator.indicator_type, "Leukemia");
    assert_eq!(indicator.severity, Severity::High);

    // 15 (capped deviation) + 25 (rule)
    assert_eq!(result.risk_score, 40.0);
    assert_eq!(result.risk_level, RiskLevel::Moderate);
    assert_eq!(result.detected_abnormalities.len(), 1);
    assert_eq!(result.detected_abnormalities[0].parameter, "WBC COUNT");
    assert_eq!(result.detected_abnormalities[0].deviation, "218.2% above normal");
    assert_eq!(result.confidence_score, 71.54);
}

#[test]
fn high_platelets_flag_thrombocytosis_only() {
    let result = analyze(&blank().with(CbcField::PlateletCount, 700.0));

    let types: Vec<_> = result
        .cancer_indicators
        .iter()
        .map(|i| i.indicator_type.as_str())
        .collect();
    assert_eq!(types, vec!["Thrombocytosis"]);
    assert_eq!(result.cancer_indicators[0].severity, Severity::Moderate);
    // 15 (capped deviation) + 12 (rule)
    assert_eq!(result.risk_score, 27.0);
}

#[test]
fn rules_ignore_unmeasured_fields() {
    assert!(indicator_types(&blank().with(CbcField::Mcv, 120.0)).is_empty());
}

#[test]
fn indicators_follow_rule_order() {
    let report = blank()
        .with(CbcField::Neutrophils, 20.0)
        .with(CbcField::Hemoglobin, 8.0)
        .with(CbcField::PlateletCount, 20.0)
        .with(CbcField::Lymphocytes, 60.0)
        .with(CbcField::WbcCount, 35.0);

    assert_eq!(
        indicator_types(&report),
        vec![
            "Leukemia",
            "Lymphocytic Leukemia",
            "Thrombocytopenia",
            "Severe Anemia",
            "Neutropenia",
        ]
    );
}

#[test]
fn stacked_findings_clamp_to_critical() {
    let report = blank()
        .with(CbcField::WbcCount, 35.0)
        .with(CbcField::Lymphocytes, 60.0)
        .with(CbcField::PlateletCount, 20.0)
        .with(CbcField::Hemoglobin, 8.0)
        .with(CbcField::Neutrophils, 20.0);
    let result = analyze(&report);

    assert_eq!(result.detected_abnormalities.len(), 5);
    assert_eq!(result.risk_score, 100.0);
    assert_eq!(result.risk_level, RiskLevel::Critical);
    // five abnormalities is not "more than five": no bonus
    assert_eq!(result.confidence_score, 77.69);
    assert!(result.recommendations.starts_with("URGENT:"));
    assert!(result.recommendations.contains("Specific concerns identified: Leukemia - "));
    assert!(result.recommendations.contains("Multiple abnormal parameters detected."));
}

#[test]
fn multiple_abnormality_bonus_applies_at_five() {
    // Five mildly abnormal differentials, no rule fires.
    let report = blank()
        .with(CbcField::Monocytes, 8.8) // 10% above
        .with(CbcField::Eosinophils, 4.4) // 10% above
        .with(CbcField::Mcv, 110.0) // 10% above
        .with(CbcField::Mch, 34.1) // 10% above
        .with(CbcField::Mchc, 39.6); // 10% above
    let result = analyze(&report);

    assert!(result.cancer_indicators.is_empty());
    assert_eq!(result.detected_abnormalities.len(), 5);
    // 5 * 5 + 15
    assert_eq!(result.risk_score, 40.0);
    assert_eq!(result.risk_level, RiskLevel::Moderate);
}

#[test]
fn negative_values_are_scored_not_rejected() {
    let result = analyze(&blank().with(CbcField::WbcCount, -5.0));
    assert_eq!(result.detected_abnormalities.len(), 1);
    assert_eq!(result.risk_score, 15.0);
    assert_eq!(result.risk_level, RiskLevel::Low);
}

#[test]
fn extreme_inputs_stay_in_bounds() {
    let values = [-1e12, -1.0, 0.0, 1e-9, 1e6, 1e300, f64::INFINITY];
    for value in values {
        let report = CbcField::ALL
            .into_iter()
            .fold(blank(), |r, field| r.with(field, value));
        let result = analyze(&report);
        assert!((0.0..=100.0).contains(&result.risk_score), "{value}");
        assert!((0.0..=99.0).contains(&result.confidence_score), "{value}");
    }
}

#[test]
fn repeated_analysis_only_differs_in_id_and_time() {
    let report = blank()
        .with(CbcField::PlateletCount, 700.0)
        .with(CbcField::Hemoglobin, 9.1);

    let first = analyze(&report);
    let second = analyze(&report);

    assert_ne!(first.id, second.id);
    assert_eq!(first.report_id, second.report_id);
    assert_eq!(first.risk_score, second.risk_score);
    assert_eq!(first.risk_level, second.risk_level);
    assert_eq!(first.detected_abnormalities, second.detected_abnormalities);
    assert_eq!(first.cancer_indicators, second.cancer_indicators);
    assert_eq!(first.recommendations, second.recommendations);
    assert_eq!(first.confidence_score, second.confidence_score);
}

#[test]
fn analyze_at_uses_supplied_id_and_clock() {
    let id = Uuid::new_v4();
    let at: jiff::Timestamp = "2026-10-18T09:30:00Z".parse().unwrap();
    let result = analyze_at(&blank(), id, at);
    assert_eq!(result.id, id);
    assert_eq!(result.analyzed_at, at);
}

#[test]
fn result_serializes_with_indicator_type_key() {
    let result = analyze(&blank().with(CbcField::WbcCount, 25.0));
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["risk_level"], "moderate");
    assert_eq!(json["cancer_indicators"][0]["type"], "Leukocytosis");
    assert_eq!(json["cancer_indicators"][0]["severity"], "moderate");
}

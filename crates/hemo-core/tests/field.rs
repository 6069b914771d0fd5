use hemo_core::{CbcField, CoreError};

#[test]
fn keys_round_trip_through_from_str() {
    for field in CbcField::ALL {
        assert_eq!(field.key().parse::<CbcField>().unwrap(), field);
        assert_eq!(field.to_string(), field.key());
    }
}

#[test]
fn unknown_key_is_rejected() {
    let err = "ferritin".parse::<CbcField>().unwrap_err();
    assert!(matches!(err, CoreError::UnknownField(ref k) if k == "ferritin"));
}

#[test]
fn parameter_names_are_upper_case_labels() {
    assert_eq!(CbcField::WbcCount.parameter_name(), "WBC COUNT");
    assert_eq!(CbcField::PlateletCount.parameter_name(), "PLATELET COUNT");
    assert_eq!(CbcField::Mchc.parameter_name(), "MCHC");
}

#[test]
fn serde_uses_snake_case_keys() {
    let json = serde_json::to_string(&CbcField::PlateletCount).unwrap();
    assert_eq!(json, "\"platelet_count\"");
}

#[test]
fn units_match_the_panel() {
    assert_eq!(CbcField::WbcCount.unit(), "10³/μL");
    assert_eq!(CbcField::RbcCount.unit(), "10⁶/μL");
    assert_eq!(CbcField::Basophils.unit(), "%");
    assert_eq!(CbcField::Mch.unit(), "pg");
}

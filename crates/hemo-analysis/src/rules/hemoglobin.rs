use hemo_core::{CbcField, Severity};

use super::RuleHit;
use crate::IndicatorRule;

/// Hemoglobin below 10 g/dL.
pub struct SevereAnemia;

impl IndicatorRule for SevereAnemia {
    fn id(&self) -> &str {
        "severe_anemia"
    }

    fn field(&self) -> CbcField {
        CbcField::Hemoglobin
    }

    fn evaluate(&self, value: f64) -> Option<RuleHit> {
        (value < 10.0).then(|| {
            RuleHit::new(
                "Severe Anemia",
                "Low hemoglobin may be associated with blood cancers affecting red blood cell production",
                Severity::Moderate,
                12.0,
            )
        })
    }
}

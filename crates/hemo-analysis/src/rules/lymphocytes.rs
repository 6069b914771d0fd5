use hemo_core::{CbcField, Severity};

use super::RuleHit;
use crate::IndicatorRule;

/// Lymphocyte percentage above 50, suggestive of CLL.
pub struct Lymphocytosis;

impl IndicatorRule for Lymphocytosis {
    fn id(&self) -> &str {
        "lymphocytosis"
    }

    fn field(&self) -> CbcField {
        CbcField::Lymphocytes
    }

    fn evaluate(&self, value: f64) -> Option<RuleHit> {
        (value > 50.0).then(|| {
            RuleHit::new(
                "Lymphocytic Leukemia",
                "Elevated lymphocyte percentage suggests possible chronic lymphocytic leukemia (CLL)",
                Severity::High,
                20.0,
            )
        })
    }
}

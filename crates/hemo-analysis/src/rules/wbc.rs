use hemo_core::{CbcField, Severity};

use super::RuleHit;
use crate::IndicatorRule;

/// Markedly raised white cell count. Leukemia above 30, leukocytosis above 20.
pub struct WbcElevation;

const LEUKEMIA_ABOVE: f64 = 30.0;
const LEUKOCYTOSIS_ABOVE: f64 = 20.0;

impl IndicatorRule for WbcElevation {
    fn id(&self) -> &str {
        "wbc_elevation"
    }

    fn field(&self) -> CbcField {
        CbcField::WbcCount
    }

    fn evaluate(&self, value: f64) -> Option<RuleHit> {
        if value > LEUKEMIA_ABOVE {
            Some(RuleHit::new(
                "Leukemia",
                "Extremely elevated WBC count suggests possible acute or chronic leukemia",
                Severity::High,
                25.0,
            ))
        } else if value > LEUKOCYTOSIS_ABOVE {
            Some(RuleHit::new(
                "Leukocytosis",
                "Significantly elevated WBC count may indicate leukemia or lymphoma",
                Severity::Moderate,
                15.0,
            ))
        } else {
            None
        }
    }
}


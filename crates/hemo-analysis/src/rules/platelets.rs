use hemo_core::{CbcField, Severity};

use super::RuleHit;
use crate::IndicatorRule;

/// Platelet count far outside range in either direction.
pub struct PlateletExtremes;

const THROMBOCYTOPENIA_BELOW: f64 = 50.0;
const THROMBOCYTOSIS_ABOVE: f64 = 600.0;

impl IndicatorRule for PlateletExtremes {
    fn id(&self) -> &str {
        "platelet_extremes"
    }

    fn field(&self) -> CbcField {
        CbcField::PlateletCount
    }

    fn evaluate(&self, value: f64) -> Option<RuleHit> {
        if value < THROMBOCYTOPENIA_BELOW {
            Some(RuleHit::new(
                "Thrombocytopenia",
                "Severe low platelet count may indicate bone marrow disorders or leukemia",
                Severity::High,
                18.0,
            ))
        } else if value > THROMBOCYTOSIS_ABOVE {
            Some(RuleHit::new(
                "Thrombocytosis",
                "Elevated platelet count could indicate myeloproliferative disorders",
                Severity::Moderate,
                12.0,
            ))
        } else {
            None
        }
    }
}


use hemo_core::{CbcField, Severity};

use super::RuleHit;
use crate::IndicatorRule;

/// Neutrophil percentage below 30.
pub struct Neutropenia;

impl IndicatorRule for Neutropenia {
    fn id(&self) -> &str {
        "neutropenia"
    }

    fn field(&self) -> CbcField {
        CbcField::Neutrophils
    }

    fn evaluate(&self, value: f64) -> Option<RuleHit> {
        (value < 30.0).then(|| {
            RuleHit::new(
                "Neutropenia",
                "Low neutrophil count may indicate bone marrow suppression from leukemia",
                Severity::Moderate,
                10.0,
            )
        })
    }
}

pub mod hemoglobin;
pub mod lymphocytes;
pub mod neutrophils;
pub mod platelets;
pub mod wbc;

use hemo_core::{CancerIndicator, Severity};

/// A fired rule: the indicator it produces and the score it adds.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleHit {
    pub indicator: CancerIndicator,
    pub score: f64,
}

impl RuleHit {
    pub(crate) fn new(
        indicator_type: &str,
        description: &str,
        severity: Severity,
        score: f64,
    ) -> Self {
        Self {
            indicator: CancerIndicator {
                indicator_type: indicator_type.to_string(),
                description: description.to_string(),
                severity,
            },
            score,
        }
    }
}

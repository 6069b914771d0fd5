//! Score weights, bounds and the level breakpoints.
//!
//! The weights are heuristic and kept exactly as calibrated.

use hemo_core::RiskLevel;

/// Multiplier applied to a field's percent deviation.
pub const DEVIATION_WEIGHT: f64 = 0.5;
/// Upper bound on what one out-of-range field can add.
pub const MAX_FIELD_CONTRIBUTION: f64 = 15.0;

/// Abnormality count at which the flat bonus applies.
pub const MULTIPLE_ABNORMALITIES_THRESHOLD: usize = 5;
pub const MULTIPLE_ABNORMALITIES_BONUS: f64 = 15.0;

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 100.0;

/// Lower bounds (inclusive) of the moderate, high and critical levels.
pub const MODERATE_FROM: f64 = 25.0;
pub const HIGH_FROM: f64 = 50.0;
pub const CRITICAL_FROM: f64 = 75.0;

/// Combine the range scan score, rule deltas and multi-abnormality bonus
/// into a score clamped to `[0, 100]`.
pub fn aggregate(range_score: f64, rule_score: f64, abnormality_count: usize) -> f64 {
    let mut total = range_score + rule_score;
    if abnormality_count >= MULTIPLE_ABNORMALITIES_THRESHOLD {
        total += MULTIPLE_ABNORMALITIES_BONUS;
    }
    total.clamp(MIN_SCORE, MAX_SCORE)
}

pub fn classify(score: f64) -> RiskLevel {
    if score < MODERATE_FROM {
        RiskLevel::Low
    } else if score < HIGH_FROM {
        RiskLevel::Moderate
    } else if score < CRITICAL_FROM {
        RiskLevel::High
    } else {
        RiskLevel::Critical
    }
}

/// Round to two decimal places for reporting.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}


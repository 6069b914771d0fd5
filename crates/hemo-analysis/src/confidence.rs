use hemo_core::{CbcField, Report};

const BASE: f64 = 70.0;
/// Weight of panel completeness; a full panel adds this much.
const COMPLETENESS_WEIGHT: f64 = 20.0;
const CLEAN_PANEL_BONUS: f64 = 10.0;
const MANY_FINDINGS_BONUS: f64 = 5.0;
const MANY_FINDINGS_ABOVE: usize = 5;
pub const MAX_CONFIDENCE: f64 = 99.0;

/// Heuristic confidence in the result, 0–99.
///
/// Rises with how much of the panel was supplied. A clean panel gets the
/// largest bonus; a panel with more than five abnormalities a smaller one.
pub fn estimate_confidence(report: &Report, abnormality_count: usize) -> f64 {
    let completeness = report.supplied_count() as f64 / CbcField::COUNT as f64;
    let mut confidence = BASE + completeness * COMPLETENESS_WEIGHT;

    if abnormality_count == 0 {
        confidence += CLEAN_PANEL_BONUS;
    } else if abnormality_count > MANY_FINDINGS_ABOVE {
        confidence += MANY_FINDINGS_BONUS;
    }

    confidence.clamp(0.0, MAX_CONFIDENCE)
}


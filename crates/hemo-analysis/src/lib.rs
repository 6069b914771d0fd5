//! hemo-analysis
//!
//! Deterministic CBC screening. Scores a [`Report`] against fixed normal
//! ranges and a fixed set of clinical threshold rules, and produces an
//! [`AnalysisResult`]. No I/O beyond reading the clock.

pub mod confidence;
pub mod error;
pub mod ranges;
pub mod recommendations;
pub mod rules;
pub mod scan;
pub mod scoring;
pub mod session;

use hemo_core::{AnalysisResult, CbcField, Report};
use uuid::Uuid;

pub use crate::error::AnalysisError;
pub use crate::rules::RuleHit;
pub use crate::session::AnalysisSession;

/// A named threshold check on a single CBC field.
///
/// Each rule family yields at most one indicator per report; the branches
/// inside [`evaluate`](IndicatorRule::evaluate) are mutually exclusive.
pub trait IndicatorRule: Send + Sync {
    /// Stable identifier (e.g. "wbc_elevation").
    fn id(&self) -> &str;

    /// The field this rule reads.
    fn field(&self) -> CbcField;

    /// Evaluate a measured value.
    fn evaluate(&self, value: f64) -> Option<RuleHit>;

    /// Evaluate against a report. Unmeasured fields never fire.
    fn check(&self, report: &Report) -> Option<RuleHit> {
        report.value(self.field()).and_then(|v| self.evaluate(v))
    }
}

/// All indicator rules, in evaluation order.
pub fn all_rules() -> Vec<Box<dyn IndicatorRule>> {
    vec![
        Box::new(rules::wbc::WbcElevation),
        Box::new(rules::lymphocytes::Lymphocytosis),
        Box::new(rules::platelets::PlateletExtremes),
        Box::new(rules::hemoglobin::SevereAnemia),
        Box::new(rules::neutrophils::Neutropenia),
    ]
}

/// Look up a rule by ID.
pub fn get_rule(id: &str) -> Option<Box<dyn IndicatorRule>> {
    all_rules().into_iter().find(|r| r.id() == id)
}

/// Analyse a report, minting a fresh result id and stamping the current time.
pub fn analyze(report: &Report) -> AnalysisResult {
    analyze_at(report, Uuid::new_v4(), jiff::Timestamp::now())
}

/// Analyse a report with a caller-supplied result id and timestamp.
pub fn analyze_at(report: &Report, id: Uuid, analyzed_at: jiff::Timestamp) -> AnalysisResult {
    let range_scan = scan::scan_ranges(report);

    let mut rule_score = 0.0;
    let mut cancer_indicators = Vec::new();
    for rule in all_rules() {
        if let Some(hit) = rule.check(report) {
            tracing::debug!(
                rule = rule.id(),
                indicator = %hit.indicator.indicator_type,
                severity = %hit.indicator.severity,
                score = hit.score,
                "indicator rule fired"
            );
            rule_score += hit.score;
            cancer_indicators.push(hit.indicator);
        }
    }

    let abnormality_count = range_scan.abnormalities.len();
    let score = scoring::aggregate(range_scan.score, rule_score, abnormality_count);
    let risk_level = scoring::classify(score);
    let recommendations =
        recommendations::build_recommendations(risk_level, &cancer_indicators, abnormality_count);
    let confidence = confidence::estimate_confidence(report, abnormality_count);

    tracing::info!(
        report_id = %report.id,
        risk_level = %risk_level,
        risk_score = score,
        abnormalities = abnormality_count,
        indicators = cancer_indicators.len(),
        "CBC report analysed"
    );

    AnalysisResult {
        id,
        report_id: report.id,
        risk_level,
        risk_score: scoring::round2(score),
        detected_abnormalities: range_scan.abnormalities,
        cancer_indicators,
        recommendations,
        confidence_score: scoring::round2(confidence),
        analyzed_at,
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Ordinal classification of the aggregate risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Critical,
}

impl RiskLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Moderate => "moderate",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity tier of a cancer indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    Low,
    Moderate,
    High,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Low => "low",
            Severity::Moderate => "moderate",
            Severity::High => "high",
        })
    }
}

/// A lab value outside its normal range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Abnormality {
    /// Display name, e.g. `"WBC COUNT"`.
    pub parameter: String,
    pub value: f64,
    /// e.g. `"4.5-11 10³/μL"`.
    pub normal_range: String,
    /// e.g. `"218.2% above normal"`.
    pub deviation: String,
}

/// A named clinical pattern matched by a fixed threshold rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CancerIndicator {
    #[serde(rename = "type")]
    pub indicator_type: String,
    pub description: String,
    pub severity: Severity,
}

/// The output of analysing one [`Report`](super::report::Report).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnalysisResult {
    pub id: Uuid,
    pub report_id: Uuid,
    pub risk_level: RiskLevel,
    /// 0–100, two decimal places.
    pub risk_score: f64,
    pub detected_abnormalities: Vec<Abnormality>,
    pub cancer_indicators: Vec<CancerIndicator>,
    pub recommendations: String,
    /// 0–99, two decimal places.
    pub confidence_score: f64,
    pub analyzed_at: jiff::Timestamp,
}

impl AnalysisResult {
    /// Short plain-text digest of the headline numbers.
    pub fn summary(&self) -> String {
        let mut out = format!(
            "{} RISK (score {}/100, confidence {}%)\n",
            self.risk_level.as_str().to_uppercase(),
            self.risk_score,
            self.confidence_score,
        );
        out.push_str(&format!(
            "Abnormal parameters: {}\n",
            self.detected_abnormalities.len()
        ));
        for abnormality in &self.detected_abnormalities {
            out.push_str(&format!(
                "- {}: {} (normal {}, {})\n",
                abnormality.parameter,
                abnormality.value,
                abnormality.normal_range,
                abnormality.deviation,
            ));
        }
        out.push_str(&format!(
            "Cancer indicators: {}\n",
            self.cancer_indicators.len()
        ));
        for indicator in &self.cancer_indicators {
            out.push_str(&format!(
                "- {} [{}]\n",
                indicator.indicator_type,
                indicator.severity.to_string().to_uppercase(),
            ));
        }
        out
    }
}

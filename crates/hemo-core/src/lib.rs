//! hemo-core
//!
//! Pure domain types for CBC screening: the submitted report, the lab field
//! vocabulary, the analysis result shape, and form-input parsing.
//! Scoring lives in `hemo-analysis`.

pub mod error;
pub mod field;
pub mod form;
pub mod models;

pub use crate::error::CoreError;
pub use crate::field::CbcField;
pub use crate::models::analysis::{
    Abnormality, AnalysisResult, CancerIndicator, RiskLevel, Severity,
};
pub use crate::models::report::Report;

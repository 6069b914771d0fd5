//! Conversion of raw form input into a [`Report`].
//!
//! Form fields arrive as text. A blank field means "not measured"; anything
//! else must be a finite number.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;
use crate::field::CbcField;
use crate::models::report::Report;

/// Unvalidated form submission, all values as entered.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReportForm {
    /// ISO `YYYY-MM-DD`. Blank or missing means today.
    #[serde(default)]
    pub test_date: Option<String>,

    /// Lab values keyed by field key (e.g. `"wbc_count"`).
    #[serde(default)]
    pub values: BTreeMap<String, String>,

    #[serde(default)]
    pub notes: String,
}

impl ReportForm {
    /// Validate the form and mint a new report with a fresh id.
    pub fn into_report(self, today: jiff::civil::Date) -> Result<Report, CoreError> {
        let test_date = match self.test_date.as_deref().map(str::trim) {
            None | Some("") => today,
            Some(raw) => raw.parse().map_err(|source| CoreError::InvalidDate {
                value: raw.to_string(),
                source,
            })?,
        };

        let mut report = Report::new(Uuid::new_v4(), test_date).with_notes(self.notes);
        for (key, raw) in &self.values {
            let field: CbcField = key.parse()?;
            report = report.with(field, parse_value(field, raw)?);
        }
        Ok(report)
    }
}

/// Parse one form value. Blank input is `None`.
pub fn parse_value(field: CbcField, raw: &str) -> Result<Option<f64>, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(CoreError::InvalidValue {
            field: field.key().to_string(),
            value: raw.to_string(),
        }),
    }
}


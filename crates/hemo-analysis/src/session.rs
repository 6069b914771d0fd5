use std::collections::HashSet;

use hemo_core::{AnalysisResult, Report};
use uuid::Uuid;

use crate::error::AnalysisError;

pub const DEFAULT_MAX_BATCH: usize = 500;

/// Running record of the reports analysed so far.
///
/// A report id may only be analysed once per session.
#[derive(Debug)]
pub struct AnalysisSession {
    max_batch: usize,
    seen: HashSet<Uuid>,
    results: Vec<AnalysisResult>,
}

impl Default for AnalysisSession {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_BATCH)
    }
}

impl AnalysisSession {
    pub fn new(max_batch: usize) -> Self {
        Self {
            max_batch,
            seen: HashSet::new(),
            results: Vec::new(),
        }
    }

    /// Analyse one report and record its result.
    pub fn submit(&mut self, report: &Report) -> Result<&AnalysisResult, AnalysisError> {
        if !self.seen.insert(report.id) {
            return Err(AnalysisError::DuplicateReport(report.id));
        }
        self.results.push(crate::analyze(report));
        Ok(&self.results[self.results.len() - 1])
    }

    /// Analyse a batch. The batch is checked up front, so on error nothing
    /// from it is recorded.
    pub fn analyze_all(&mut self, reports: &[Report]) -> Result<&[AnalysisResult], AnalysisError> {
        if reports.len() > self.max_batch {
            return Err(AnalysisError::BatchTooLarge {
                size: reports.len(),
                limit: self.max_batch,
            });
        }

        let mut batch_ids = HashSet::with_capacity(reports.len());
        for report in reports {
            if self.seen.contains(&report.id) || !batch_ids.insert(report.id) {
                return Err(AnalysisError::DuplicateReport(report.id));
            }
        }

        let start = self.results.len();
        for report in reports {
            self.submit(report)?;
        }
        tracing::info!(
            batch = reports.len(),
            total = self.reports_analyzed(),
            "batch analysed"
        );
        Ok(&self.results[start..])
    }

    pub fn reports_analyzed(&self) -> usize {
        self.results.len()
    }

    pub fn latest(&self) -> Option<&AnalysisResult> {
        self.results.last()
    }

    pub fn results(&self) -> &[AnalysisResult] {
        &self.results
    }

    pub fn into_results(self) -> Vec<AnalysisResult> {
        self.results
    }
}

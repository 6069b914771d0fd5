use std::io::Read;
use std::path::Path;

use eyre::WrapErr;
use hemo_analysis::AnalysisSession;
use hemo_analysis::ranges::{NORMAL_RANGES, NormalRange};
use hemo_core::form::ReportForm;
use hemo_core::{AnalysisResult, Report};

use crate::config::OutputFormat;

/// What a command produced, ready to render.
#[derive(Debug)]
pub enum Output {
    Analysis(Box<AnalysisResult>),
    Batch(Vec<AnalysisResult>),
    Ranges(&'static [NormalRange]),
}

impl Output {
    pub fn render(&self, format: OutputFormat) -> eyre::Result<String> {
        match format {
            OutputFormat::Json => self.render_json(),
            OutputFormat::Pretty => Ok(self.render_pretty()),
        }
    }

    fn render_json(&self) -> eyre::Result<String> {
        let json = match self {
            Output::Analysis(result) => serde_json::to_string_pretty(result)?,
            Output::Batch(results) => serde_json::to_string_pretty(results)?,
            Output::Ranges(ranges) => serde_json::to_string_pretty(ranges)?,
        };
        Ok(json)
    }

    fn render_pretty(&self) -> String {
        match self {
            Output::Analysis(result) => pretty_result(result),
            Output::Batch(results) => {
                let mut out = format!(
                    "{} report{} analysed\n",
                    results.len(),
                    if results.len() == 1 { "" } else { "s" }
                );
                for result in results {
                    out.push_str(&format!("\n=== report {} ===\n", result.report_id));
                    out.push_str(&pretty_result(result));
                }
                out
            }
            Output::Ranges(ranges) => {
                let mut out = String::new();
                for range in *ranges {
                    out.push_str(&format!(
                        "{:<16} {}\n",
                        range.field.label(),
                        range.display()
                    ));
                }
                out
            }
        }
    }
}

fn pretty_result(result: &AnalysisResult) -> String {
    format!("{}\n{}\n", result.summary(), result.recommendations)
}

/// Read the whole input from a file, or stdin when no path is given.
pub fn read_input(path: Option<&Path>) -> eyre::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .wrap_err("failed to read stdin")?;
            Ok(buf)
        }
    }
}

/// Analyse a single report given as JSON.
pub fn analyze(input: &str) -> eyre::Result<Output> {
    let report: Report = serde_json::from_str(input).wrap_err("invalid report JSON")?;
    Ok(Output::Analysis(Box::new(hemo_analysis::analyze(&report))))
}

/// Analyse a JSON array of reports in one session.
pub fn batch(input: &str, max_batch: usize) -> eyre::Result<Output> {
    let reports: Vec<Report> =
        serde_json::from_str(input).wrap_err("invalid report batch JSON")?;

    let mut session = AnalysisSession::new(max_batch);
    session.analyze_all(&reports)?;
    tracing::info!(reports = session.reports_analyzed(), "session complete");
    Ok(Output::Batch(session.into_results()))
}

/// Validate a raw form submission, then analyse it.
pub fn form(input: &str, today: jiff::civil::Date) -> eyre::Result<Output> {
    let form: ReportForm = serde_json::from_str(input).wrap_err("invalid form JSON")?;
    let report = form.into_report(today)?;
    tracing::debug!(report_id = %report.id, supplied = report.supplied_count(), "form accepted");
    Ok(Output::Analysis(Box::new(hemo_analysis::analyze(&report))))
}

pub fn ranges() -> Output {
    Output::Ranges(&NORMAL_RANGES)
}

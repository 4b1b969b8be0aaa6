//! JSON output renderer.
//!
//! Outputs `{"reports": [...], "summary": {...}}` format, one entry per
//! analyzed file with its own summary.

use schemars::JsonSchema;
use serde::Serialize;

use crate::models::{LexError, LexReport, Summary, Token};
use crate::output::OutputRenderer;

/// JSON output renderer.
pub struct JsonRenderer;

/// Serialized shape of one report.
#[derive(Debug, Serialize, JsonSchema)]
pub struct ReportView<'a> {
    pub source: &'a str,
    pub tokens: &'a [Token],
    pub errors: &'a [LexError],
    pub summary: Summary,
}

/// Totals across all reports.
#[derive(Debug, Default, Serialize, JsonSchema)]
pub struct TotalSummary {
    pub files: usize,
    pub tokens: usize,
    pub errors: usize,
}

/// Top-level JSON document.
#[derive(Debug, Serialize, JsonSchema)]
pub struct JsonDocument<'a> {
    pub reports: Vec<ReportView<'a>>,
    pub summary: TotalSummary,
}

impl<'a> JsonDocument<'a> {
    pub fn from_reports(reports: &'a [LexReport]) -> Self {
        let mut total = TotalSummary::default();
        let views = reports
            .iter()
            .map(|report| {
                let summary = report.summary();
                total.files += 1;
                total.tokens += summary.tokens;
                total.errors += summary.errors;
                ReportView {
                    source: &report.source,
                    tokens: &report.tokens,
                    errors: &report.errors,
                    summary,
                }
            })
            .collect();
        Self {
            reports: views,
            summary: total,
        }
    }
}

impl OutputRenderer for JsonRenderer {
    fn render(&self, reports: &[LexReport]) -> String {
        let document = JsonDocument::from_reports(reports);
        let mut out =
            serde_json::to_string_pretty(&document).unwrap_or_else(|_| "{}".to_string());
        out.push('\n');
        out
    }
}

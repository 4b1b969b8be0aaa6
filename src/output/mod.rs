//! Output renderers: terminal and JSON.

pub mod json;
pub mod terminal;

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::models::LexReport;

/// Trait for rendering analysis reports to an output format.
pub trait OutputRenderer {
    /// Render one report per analyzed file to a string.
    fn render(&self, reports: &[LexReport]) -> String;
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

impl OutputFormat {
    /// Render reports using the renderer for this format.
    pub fn render(&self, reports: &[LexReport]) -> String {
        match self {
            OutputFormat::Terminal => terminal::TerminalRenderer.render(reports),
            OutputFormat::Json => json::JsonRenderer.render(reports),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Terminal => write!(f, "terminal"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "terminal" => Ok(OutputFormat::Terminal),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("unknown output format: {s}")),
        }
    }
}

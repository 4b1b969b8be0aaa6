//! Analysis log files.
//!
//! Every `lex` run writes one plain-text log named
//! `lexico-<user>-<dd-mm-YYYY-HHhMM>.txt` containing the recognized tokens
//! and lexical errors of each analyzed file.

pub mod user;

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use thiserror::Error;
use tracing::info;

use crate::constants;
use crate::models::LexReport;
use crate::output::terminal::{RULE_WIDTH, format_token_line};

pub use user::{git_username, resolve_user, sanitize_user};

/// Errors while writing a log file.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("failed to create log directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write log file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Log file name for a user and a point in time.
pub fn log_file_name(user: &str, timestamp: NaiveDateTime) -> String {
    format!(
        "{}-{}-{}.txt",
        constants::LOG_FILE_PREFIX,
        user,
        timestamp.format("%d-%m-%Y-%Hh%M")
    )
}

/// Render the full log text.
pub fn render_log(reports: &[LexReport], user: &str, timestamp: NaiveDateTime) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let thin = "-".repeat(RULE_WIDTH);
    let mut out = String::new();

    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "LEXICAL ANALYSIS - GO LANGUAGE");
    let _ = writeln!(out, "{rule}");
    for report in reports {
        let _ = writeln!(out, "File analyzed: {}", report.source);
    }
    let _ = writeln!(out, "Date and time: {}", timestamp.format("%d/%m/%Y %H:%M:%S"));
    let _ = writeln!(out, "User: {user}");
    let _ = writeln!(out, "{rule}");

    let labeled = reports.len() > 1;
    for report in reports {
        let suffix = if labeled {
            format!(" - {}", report.source)
        } else {
            String::new()
        };

        let _ = writeln!(out);
        let _ = writeln!(out, "RECOGNIZED TOKENS ({}){suffix}", report.tokens.len());
        let _ = writeln!(out, "{thin}");
        for token in &report.tokens {
            let _ = writeln!(out, "{}", format_token_line(token));
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "{rule}");
        let _ = writeln!(out, "LEXICAL ERRORS ({}){suffix}", report.errors.len());
        let _ = writeln!(out, "{thin}");
        if report.errors.is_empty() {
            let _ = writeln!(out, "No lexical errors found.");
        }
        for error in &report.errors {
            let _ = writeln!(out, "{error}");
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "END OF ANALYSIS");
    let _ = writeln!(out, "{rule}");
    out
}

/// Write the log for `reports` into `dir`, creating it if needed.
///
/// Returns the path of the written file. A log written in the same minute
/// by the same user replaces the previous one.
pub async fn write_log(
    reports: &[LexReport],
    dir: &Path,
    user: &str,
    timestamp: NaiveDateTime,
) -> Result<PathBuf, ReportError> {
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| ReportError::CreateDir {
            path: dir.to_path_buf(),
            source: e,
        })?;

    let path = dir.join(log_file_name(user, timestamp));
    let content = render_log(reports, user, timestamp);
    tokio::fs::write(&path, content)
        .await
        .map_err(|e| ReportError::Write {
            path: path.clone(),
            source: e,
        })?;

    info!(path = %path.display(), "wrote analysis log");
    Ok(path)
}

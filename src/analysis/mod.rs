//! Source discovery and per-file analysis.
//!
//! A path is either a single file (analyzed whatever its extension) or a
//! directory, which is walked for `.go` files honoring `.gitignore`.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::constants;
use crate::lexer;
use crate::models::LexReport;

/// Errors while locating or reading source files.
#[derive(Error, Debug)]
pub enum AnalyzeError {
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Tokenize in-memory source under the given display name.
pub fn analyze_source(name: &str, source: &str) -> LexReport {
    LexReport::new(name, lexer::tokenize(source))
}

/// Read and tokenize a single file.
pub async fn analyze_file(path: &Path) -> Result<LexReport, AnalyzeError> {
    let content = tokio::fs::read_to_string(path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            AnalyzeError::NotFound(path.to_path_buf())
        } else {
            AnalyzeError::Read {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let report = analyze_source(&path.display().to_string(), &content);
    info!(
        file = %path.display(),
        tokens = report.tokens.len(),
        errors = report.errors.len(),
        "analyzed file"
    );
    Ok(report)
}

/// List the source files under `path`, sorted for stable output.
pub fn collect_sources(path: &Path) -> Result<Vec<PathBuf>, AnalyzeError> {
    if !path.exists() {
        return Err(AnalyzeError::NotFound(path.to_path_buf()));
    }
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    let walker = WalkBuilder::new(path).hidden(true).git_ignore(true).build();
    let mut files: Vec<PathBuf> = walker
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                warn!(dir = %path.display(), "skipping unreadable entry: {err}");
                None
            }
        })
        .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
        .map(|entry| entry.into_path())
        .filter(|p| p.extension().is_some_and(|ext| ext == constants::GO_EXTENSION))
        .collect();
    files.sort();
    debug!(dir = %path.display(), count = files.len(), "collected Go sources");
    Ok(files)
}

/// Analyze a file or every Go file below a directory.
pub async fn analyze_path(path: &Path) -> Result<Vec<LexReport>, AnalyzeError> {
    let mut reports = Vec::new();
    for file in collect_sources(path)? {
        reports.push(analyze_file(&file).await?);
    }
    Ok(reports)
}

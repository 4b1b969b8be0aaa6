//! Reporting user resolution.
//!
//! Order: configured user (`[log] user` or `GOLEX_USER`), then
//! `git config user.name`, then a fixed fallback.

use std::time::Duration;

use tracing::debug;

use crate::constants;

/// How long to wait for `git config` before giving up.
const GIT_TIMEOUT: Duration = Duration::from_secs(5);

/// Strip characters that don't belong in a file name component.
pub fn sanitize_user(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '/' | '\\' | ':'))
        .collect()
}

/// Read `git config user.name`, sanitized. `None` if git is missing,
/// unconfigured, slow, or returns nothing usable.
pub async fn git_username() -> Option<String> {
    let run = tokio::process::Command::new("git")
        .args(["config", "user.name"])
        .kill_on_drop(true)
        .output();

    let output = match tokio::time::timeout(GIT_TIMEOUT, run).await {
        Ok(Ok(output)) => output,
        Ok(Err(e)) => {
            debug!("failed to run git: {e}");
            return None;
        }
        Err(_) => {
            debug!("git config timed out");
            return None;
        }
    };

    if !output.status.success() {
        return None;
    }

    let name = sanitize_user(&String::from_utf8_lossy(&output.stdout));
    (!name.is_empty()).then_some(name)
}

/// Resolve the user recorded in log headers and file names.
pub async fn resolve_user(configured: Option<&str>) -> String {
    if let Some(user) = configured.map(sanitize_user).filter(|u| !u.is_empty()) {
        return user;
    }
    match git_username().await {
        Some(user) => user,
        None => constants::FALLBACK_USER.to_string(),
    }
}

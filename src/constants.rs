//! App-wide constants.
//!
//! Centralises the tool name, config paths, environment variable names,
//! and log file naming so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "golex";

/// Crate version, baked in at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Target triple the binary was built for (set by `build.rs`).
pub const TARGET: &str = env!("TARGET");

/// Local config filename (e.g. `.golex.toml` in the working directory).
pub const CONFIG_FILENAME: &str = ".golex.toml";

/// Directory name under `~/.config/` for global config.
pub const CONFIG_DIR: &str = "golex";

/// Default directory that analysis logs are written to.
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Prefix of every generated log file name.
pub const LOG_FILE_PREFIX: &str = "lexico";

/// Reporting user when neither the environment nor git supply one.
pub const FALLBACK_USER: &str = "user";

/// File extension picked up when a directory is analyzed.
pub const GO_EXTENSION: &str = "go";

// ── Environment variable names ──────────────────────────────────────

pub const ENV_LOG_DIR: &str = "GOLEX_LOG_DIR";
pub const ENV_NO_LOG: &str = "GOLEX_NO_LOG";
pub const ENV_USER: &str = "GOLEX_USER";
pub const ENV_FORMAT: &str = "GOLEX_FORMAT";

/// Tracing filter directive (same syntax as `RUST_LOG`).
pub const ENV_LOG_FILTER: &str = "GOLEX_LOG";

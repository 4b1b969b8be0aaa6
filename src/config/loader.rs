//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables
//! 3. `.golex.toml` in the working directory
//! 4. `~/.config/golex/config.toml` (global defaults)
//! 5. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use crate::constants;
use crate::env::Env;
use crate::output::OutputFormat;

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log: LogConfig,
    pub output: OutputConfig,
}

/// Analysis log file settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Write a log file for every analyzed source file.
    pub enabled: bool,
    /// Directory the log files are written to.
    pub dir: PathBuf,
    /// Reporting user; resolved from git when unset.
    pub user: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            dir: PathBuf::from(constants::DEFAULT_LOG_DIR),
            user: None,
        }
    }
}

/// Report rendering settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Exit non-zero when any lexical error is found.
    pub fail_on_error: bool,
}

/// A config file layer. Only keys present in the file are `Some`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PartialConfig {
    pub log: PartialLogConfig,
    pub output: PartialOutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PartialLogConfig {
    pub enabled: Option<bool>,
    pub dir: Option<PathBuf>,
    pub user: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PartialOutputConfig {
    pub format: Option<OutputFormat>,
    pub fail_on_error: Option<bool>,
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// Reads from global config, the working directory's config, then
    /// applies environment variable overrides.
    pub fn load(work_dir: Option<&Path>, env: &Env) -> Result<Self, ConfigError> {
        let global = Self::global_config_path();
        let local = work_dir.map(|dir| dir.join(constants::CONFIG_FILENAME));
        Self::load_layers(global.as_deref(), local.as_deref(), env)
    }

    /// Layer the given config files (missing files are skipped) and the
    /// environment over the built-in defaults.
    pub fn load_layers(
        global: Option<&Path>,
        local: Option<&Path>,
        env: &Env,
    ) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        // Layer 4: global config, then layer 3: local config
        for path in [global, local].into_iter().flatten() {
            if path.exists() {
                debug!(path = %path.display(), "loading config file");
                let layer = Self::load_file(path)?;
                config.merge(layer);
            }
        }

        // Layer 2: environment variables
        config.apply_env_vars(env);

        Ok(config)
    }

    /// Load a config layer from a specific file.
    pub fn load_file(path: &Path) -> Result<PartialConfig, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the global config file path.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(constants::CONFIG_DIR).join("config.toml"))
    }

    /// Merge a file layer into this config. Every key set in the layer wins.
    fn merge(&mut self, other: PartialConfig) {
        if let Some(enabled) = other.log.enabled {
            self.log.enabled = enabled;
        }
        if let Some(dir) = other.log.dir {
            self.log.dir = dir;
        }
        if other.log.user.is_some() {
            self.log.user = other.log.user;
        }

        if let Some(format) = other.output.format {
            self.output.format = format;
        }
        if let Some(fail_on_error) = other.output.fail_on_error {
            self.output.fail_on_error = fail_on_error;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_vars(&mut self, env: &Env) {
        if let Some(dir) = env.non_empty(constants::ENV_LOG_DIR) {
            self.log.dir = PathBuf::from(dir);
        }
        match env.flag(constants::ENV_NO_LOG) {
            Some(Ok(no_log)) => self.log.enabled = !no_log,
            Some(Err(val)) => warn!("ignoring invalid {} value: {val}", constants::ENV_NO_LOG),
            None => {}
        }
        if let Some(user) = env.non_empty(constants::ENV_USER) {
            self.log.user = Some(user);
        }
        if let Some(val) = env.non_empty(constants::ENV_FORMAT) {
            match val.parse::<OutputFormat>() {
                Ok(format) => self.output.format = format,
                Err(_) => warn!("ignoring invalid {} value: {val}", constants::ENV_FORMAT),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert!(config.log.enabled);
        assert_eq!(config.log.dir, PathBuf::from("logs"));
        assert_eq!(config.log.user, None);
        assert_eq!(config.output.format, OutputFormat::Terminal);
        assert!(!config.output.fail_on_error);
    }

    #[test]
    fn parse_toml_config() {
        let toml_str = r#"
[log]
enabled = false
dir = "build/lex-logs"
user = "ada"

[output]
format = "json"
fail_on_error = true
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert!(!config.log.enabled);
        assert_eq!(config.log.dir, PathBuf::from("build/lex-logs"));
        assert_eq!(config.log.user.as_deref(), Some("ada"));
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.fail_on_error);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: Config = toml::from_str("[output]\nformat = \"json\"\n").unwrap();
        assert!(config.log.enabled);
        assert_eq!(config.log.dir, PathBuf::from("logs"));
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn merge_applies_every_key_set_in_layer() {
        let mut base = Config::default();
        let layer: PartialConfig = toml::from_str(
            r#"
[log]
enabled = false
dir = "out"
user = "grace"

[output]
format = "json"
fail_on_error = true
"#,
        )
        .unwrap();

        base.merge(layer);

        assert!(!base.log.enabled);
        assert_eq!(base.log.dir, PathBuf::from("out"));
        assert_eq!(base.log.user.as_deref(), Some("grace"));
        assert_eq!(base.output.format, OutputFormat::Json);
        assert!(base.output.fail_on_error);
    }

    #[test]
    fn merge_keeps_base_when_layer_is_empty() {
        let mut base = Config::default();
        base.log.dir = PathBuf::from("custom");
        base.output.format = OutputFormat::Json;

        base.merge(PartialConfig::default());

        assert_eq!(base.log.dir, PathBuf::from("custom"));
        assert_eq!(base.output.format, OutputFormat::Json);
    }

    #[test]
    fn local_layer_can_restore_default_values() {
        let dir = tempfile::tempdir().unwrap();
        let global = dir.path().join("global.toml");
        let local = dir.path().join("local.toml");
        std::fs::write(
            &global,
            "[log]\nenabled = false\ndir = \"global-logs\"\n\n[output]\nformat = \"json\"\nfail_on_error = true\n",
        )
        .unwrap();
        std::fs::write(
            &local,
            "[log]\nenabled = true\ndir = \"logs\"\n\n[output]\nformat = \"terminal\"\nfail_on_error = false\n",
        )
        .unwrap();

        let env = Env::mock(Vec::<(&str, &str)>::new());
        let config = Config::load_layers(Some(&global), Some(&local), &env).unwrap();

        assert!(config.log.enabled);
        assert_eq!(config.log.dir, PathBuf::from("logs"));
        assert_eq!(config.output.format, OutputFormat::Terminal);
        assert!(!config.output.fail_on_error);
    }

    #[test]
    fn local_layer_only_overrides_keys_it_sets() {
        let dir = tempfile::tempdir().unwrap();
        let global = dir.path().join("global.toml");
        let local = dir.path().join("local.toml");
        std::fs::write(&global, "[log]\nuser = \"ada\"\n\n[output]\nformat = \"json\"\n").unwrap();
        std::fs::write(&local, "[log]\ndir = \"here\"\n").unwrap();

        let env = Env::mock(Vec::<(&str, &str)>::new());
        let config = Config::load_layers(Some(&global), Some(&local), &env).unwrap();

        assert_eq!(config.log.user.as_deref(), Some("ada"));
        assert_eq!(config.log.dir, PathBuf::from("here"));
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn missing_layer_files_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let env = Env::mock(Vec::<(&str, &str)>::new());
        let config = Config::load_layers(
            Some(&dir.path().join("absent.toml")),
            None,
            &env,
        )
        .unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_file_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "not valid {{ toml").unwrap();

        let result = Config::load_file(&path);
        assert!(result.unwrap_err().to_string().contains("parse"));
    }

    #[test]
    fn load_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load_file(&dir.path().join("missing.toml"));
        assert!(result.unwrap_err().to_string().contains("read"));
    }

    #[test]
    fn load_from_work_dir() {
        let env = Env::mock(Vec::<(&str, &str)>::new());
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(".golex.toml"),
            "[log]\ndir = \"lexer-logs\"\n",
        )
        .unwrap();

        let config = Config::load(Some(dir.path()), &env).unwrap();
        assert_eq!(config.log.dir, PathBuf::from("lexer-logs"));
    }

    #[test]
    fn env_vars_override_file_values() {
        let env = Env::mock([
            ("GOLEX_LOG_DIR", "/tmp/golex-logs"),
            ("GOLEX_NO_LOG", "yes"),
            ("GOLEX_USER", "linus"),
            ("GOLEX_FORMAT", "json"),
        ]);
        let mut config = Config::default();
        config.apply_env_vars(&env);
        assert_eq!(config.log.dir, PathBuf::from("/tmp/golex-logs"));
        assert!(!config.log.enabled);
        assert_eq!(config.log.user.as_deref(), Some("linus"));
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn invalid_env_values_are_ignored() {
        let env = Env::mock([("GOLEX_NO_LOG", "perhaps"), ("GOLEX_FORMAT", "xml")]);
        let mut config = Config::default();
        config.apply_env_vars(&env);
        assert!(config.log.enabled);
        assert_eq!(config.output.format, OutputFormat::Terminal);
    }

    #[test]
    fn blank_format_env_is_treated_as_unset() {
        let env = Env::mock([("GOLEX_FORMAT", "  ")]);
        let mut config = Config::default();
        config.output.format = OutputFormat::Json;
        config.apply_env_vars(&env);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn global_config_path_mentions_app_dir() {
        if let Some(p) = Config::global_config_path() {
            assert!(p.to_str().unwrap().contains("golex"));
        }
    }
}

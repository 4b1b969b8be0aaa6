//! Environment variable abstraction for testability.
//!
//! Production code uses [`Env::real()`] which delegates to [`std::env::var`].
//! Tests use [`Env::mock()`] backed by a `HashMap`, so config layering and
//! user resolution can be exercised without touching the process environment.

use std::collections::HashMap;

/// Environment variable reader.
#[derive(Clone, Debug)]
pub struct Env {
    overrides: Option<HashMap<String, String>>,
}

impl Env {
    /// Create an `Env` that reads from the real process environment.
    pub fn real() -> Self {
        Self { overrides: None }
    }

    /// Create an `Env` backed by explicit key-value pairs.
    pub fn mock(vars: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>) -> Self {
        Self {
            overrides: Some(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Look up an environment variable by name.
    pub fn var(&self, name: &str) -> Result<String, std::env::VarError> {
        match &self.overrides {
            Some(map) => map.get(name).cloned().ok_or(std::env::VarError::NotPresent),
            None => std::env::var(name),
        }
    }

    /// Look up a variable, treating blank values as unset.
    pub fn non_empty(&self, name: &str) -> Option<String> {
        self.var(name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    /// Parse a boolean-ish variable (`1/true/yes/on`, `0/false/no/off`).
    ///
    /// Returns `None` when unset, `Some(Err(raw))` for unrecognised values.
    pub fn flag(&self, name: &str) -> Option<Result<bool, String>> {
        let raw = self.var(name).ok()?;
        Some(match raw.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(raw),
        })
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::real()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn real_env_reads_cargo_manifest_dir() {
        let env = Env::real();
        assert!(env.var("CARGO_MANIFEST_DIR").is_ok());
    }

    #[test]
    fn mock_env_returns_not_present_for_missing() {
        let env = Env::mock(Vec::<(&str, &str)>::new());
        assert!(env.var("NONEXISTENT").is_err());
        assert_eq!(env.non_empty("NONEXISTENT"), None);
    }

    #[test]
    fn non_empty_trims_and_skips_blank() {
        let env = Env::mock([("BLANK", "   "), ("NAME", "  ada ")]);
        assert_eq!(env.non_empty("BLANK"), None);
        assert_eq!(env.non_empty("NAME").as_deref(), Some("ada"));
    }

    #[test]
    fn flag_parses_common_spellings() {
        let env = Env::mock([("A", "YES"), ("B", "off"), ("C", "maybe")]);
        assert_eq!(env.flag("A"), Some(Ok(true)));
        assert_eq!(env.flag("B"), Some(Ok(false)));
        assert_eq!(env.flag("C"), Some(Err("maybe".to_string())));
        assert_eq!(env.flag("D"), None);
    }
}

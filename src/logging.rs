//! Diagnostic logging setup.
//!
//! Events go to stderr so they never mix with rendered reports on stdout.
//! The filter comes from `GOLEX_LOG` (same syntax as `RUST_LOG`) and
//! defaults to `warn`; `--verbose` raises the default to `debug`.

use tracing_subscriber::EnvFilter;

use crate::constants;
use crate::env::Env;

/// Build the filter for the given environment and verbosity.
pub fn build_filter(env: &Env, verbose: bool) -> EnvFilter {
    let default = if verbose { "debug" } else { "warn" };
    match env.non_empty(constants::ENV_LOG_FILTER) {
        Some(directives) => EnvFilter::try_new(&directives).unwrap_or_else(|e| {
            eprintln!(
                "Warning: ignoring invalid {} value: {e}",
                constants::ENV_LOG_FILTER
            );
            EnvFilter::new(default)
        }),
        None => EnvFilter::new(default),
    }
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(env: &Env, verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(env, verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_is_warn() {
        let env = Env::mock(Vec::<(&str, &str)>::new());
        assert_eq!(build_filter(&env, false).to_string(), "warn");
        assert_eq!(build_filter(&env, true).to_string(), "debug");
    }

    #[test]
    fn env_directive_is_used() {
        let env = Env::mock([("GOLEX_LOG", "golex=trace")]);
        assert_eq!(build_filter(&env, false).to_string(), "golex=trace");
    }

    #[test]
    fn init_twice_does_not_panic() {
        let env = Env::mock(Vec::<(&str, &str)>::new());
        init(&env, false);
        init(&env, true);
    }
}

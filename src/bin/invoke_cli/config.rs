//! Environment-driven CLI defaults.
//!
//! | Variable | Effect |
//! |----------|--------|
//! | `TE_INVOKE_LOG` | tracing filter (falls back to `RUST_LOG`, then `warn`) |
//! | `TE_INVOKE_JSON` | `1`/`true`/`yes`/`on` turns on JSON output |

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "TE_INVOKE_LOG";
pub const JSON_ENV: &str = "TE_INVOKE_JSON";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub log_filter: String,
    pub json: bool,
}

impl CliConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let log_filter = lookup(LOG_ENV)
            .or_else(|| lookup("RUST_LOG"))
            .unwrap_or_else(|| "warn".to_string());
        let json = lookup(JSON_ENV).map(|v| is_truthy(&v)).unwrap_or(false);
        Self { log_filter, json }
    }

    /// Apply command-line flags on top of the environment.
    pub fn with_flags(mut self, json: bool, verbose: bool) -> Self {
        self.json |= json;
        if verbose {
            self.log_filter = "debug".to_string();
        }
        self
    }

    /// Install the global tracing subscriber, writing to stderr.
    pub fn init_logging(&self) {
        let filter =
            EnvFilter::try_new(&self.log_filter).unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> CliConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        CliConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        assert_eq!(
            config(&[]),
            CliConfig {
                log_filter: "warn".into(),
                json: false
            }
        );
    }

    #[test]
    fn test_log_filter_precedence() {
        assert_eq!(config(&[("RUST_LOG", "info")]).log_filter, "info");
        assert_eq!(
            config(&[("RUST_LOG", "info"), (LOG_ENV, "trace")]).log_filter,
            "trace"
        );
    }

    #[test]
    fn test_json_env_and_flags() {
        assert!(config(&[(JSON_ENV, "YES")]).json);
        assert!(!config(&[(JSON_ENV, "0")]).json);

        let cfg = config(&[]).with_flags(true, true);
        assert!(cfg.json);
        assert_eq!(cfg.log_filter, "debug");
    }
}

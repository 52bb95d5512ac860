//! CLI configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Filter used when neither `GOCHI_LOG` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "warn,gochi_barcode=info";

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Aligned columns for people.
    Text,
    /// Pretty-printed JSON for scripts.
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Text
    }
}

impl FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(()),
        }
    }
}

/// gochi-barcode configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Output format (GOCHI_OUTPUT)
    pub output: OutputFormat,

    /// Exit with status 1 when any checked code is invalid (GOCHI_FAIL_ON_INVALID)
    pub fail_on_invalid: bool,

    /// tracing filter directive (GOCHI_LOG, then RUST_LOG)
    pub log_filter: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            output: OutputFormat::Text,
            fail_on_invalid: true,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = CliConfig {
            output: lookup("GOCHI_OUTPUT")
                .unwrap_or_else(|| "text".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("GOCHI_OUTPUT".to_string()))?,

            fail_on_invalid: lookup("GOCHI_FAIL_ON_INVALID")
                .unwrap_or_else(|| "true".to_string())
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("GOCHI_FAIL_ON_INVALID".to_string()))?,

            log_filter: lookup("GOCHI_LOG")
                .or_else(|| lookup("RUST_LOG"))
                .filter(|filter| !filter.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        };

        Ok(config)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

//! Report runner configuration.
//!
//! Configuration is loaded from the command line and environment variables
//! with fallback to defaults.

use std::env;
use std::path::PathBuf;

/// Environment variable naming the dataset when no argument is given.
pub const DATA_PATH_VAR: &str = "SALESBOARD_DATA_PATH";

/// Environment variable toggling pretty-printed JSON output.
pub const PRETTY_VAR: &str = "SALESBOARD_PRETTY";

/// Environment variable toggling the report summary.
pub const SUMMARY_VAR: &str = "SALESBOARD_SUMMARY";

/// Report runner configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    /// JSON dataset with `sellers`, `products` and `purchase_records`
    pub data_path: PathBuf,

    /// Pretty-print the JSON report (default: true)
    pub pretty: bool,

    /// Wrap the report with a totals summary (default: false)
    pub include_summary: bool,
}

impl ReportConfig {
    /// Load configuration from the first argument and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_sources(env::args().nth(1), |key| env::var(key).ok())
    }

    /// Build configuration from an optional path argument and a variable lookup.
    ///
    /// The argument wins over [`DATA_PATH_VAR`].
    pub fn from_sources<F>(data_arg: Option<String>, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_path = data_arg
            .or_else(|| lookup(DATA_PATH_VAR))
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from)
            .ok_or_else(|| ConfigError::MissingRequired(DATA_PATH_VAR.to_string()))?;

        Ok(ReportConfig {
            data_path,
            pretty: parse_flag(PRETTY_VAR, lookup(PRETTY_VAR), true)?,
            include_summary: parse_flag(SUMMARY_VAR, lookup(SUMMARY_VAR), false)?,
        })
    }
}

fn parse_flag(key: &str, value: Option<String>, default: bool) -> Result<bool, ConfigError> {
    match value {
        None => Ok(default),
        Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::InvalidValue(key.to_string())),
        },
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0} (or pass the dataset path as the first argument)")]
    MissingRequired(String),
}

//! Configuration for the branch predictor evaluator.
//!
//! This module defines the configuration structures used to parameterize a run. It provides:
//! 1. **Defaults:** The canonical table geometry and report label.
//! 2. **Structures:** Predictor and report sections of the root `Config`.
//! 3. **Loading:** JSON parsing from strings or files, with validation.
//!
//! Every field is optional in JSON; omitted fields take the canonical defaults, so
//! `{}` is a valid configuration equivalent to `Config::default()`.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::bru::counter_table::check_table_size;
use crate::common::error::ConfigError;

/// Default configuration constants for the evaluator.
mod defaults {
    /// Canonical counter table size (64K entries).
    pub const TABLE_SIZE: usize = crate::common::constants::TABLE_SIZE;

    /// Label printed next to the accuracy percentage.
    pub const REPORT_LABEL: &str = "2-bit saturating counter";
}

/// Root configuration structure.
///
/// # Example
///
/// ```
/// use bpsim_core::config::Config;
///
/// let json = r#"{
///     "predictor": { "table_size": 1024 },
///     "report": { "detailed": true }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.predictor.table_size, 1024);
/// assert!(config.report.detailed);
/// assert_eq!(config.report.label, "2-bit saturating counter");
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Predictor geometry
    #[serde(default)]
    pub predictor: PredictorConfig,
    /// Report output options
    #[serde(default)]
    pub report: ReportConfig,
}

impl Config {
    /// Parses and validates a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::InvalidTableSize`] if validation fails.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise the
    /// same errors as [`Config::from_json`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Checks cross-field constraints that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTableSize`] if the table size is zero or
    /// not a power of two.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        check_table_size(self.predictor.table_size)
    }
}

/// Predictor geometry.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictorConfig {
    /// Number of 2-bit counters in the pattern history table (power of 2)
    #[serde(default = "PredictorConfig::default_table_size")]
    pub table_size: usize,
}

impl PredictorConfig {
    /// Returns the canonical table size.
    const fn default_table_size() -> usize {
        defaults::TABLE_SIZE
    }
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            table_size: defaults::TABLE_SIZE,
        }
    }
}

/// Report output options.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Also print the taken / not-taken accuracy breakdown
    #[serde(default)]
    pub detailed: bool,

    /// Label for the accuracy line
    #[serde(default = "ReportConfig::default_label")]
    pub label: String,
}

impl ReportConfig {
    /// Returns the default accuracy label.
    fn default_label() -> String {
        defaults::REPORT_LABEL.to_string()
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            detailed: false,
            label: Self::default_label(),
        }
    }
}

//! Error definitions.
//!
//! The predictor itself is infallible: every address hashes to a valid slot and
//! counters clamp at their bounds. Errors only arise at the edges:
//! 1. **Trace Errors:** Malformed tokens or I/O failures while reading a trace.
//! 2. **Config Errors:** Unreadable or invalid configuration files.
//! 3. **Simulation Errors:** The union of the above plus an empty trace.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure while reading a branch trace.
///
/// Line numbers are 1-based and refer to the line on which the offending
/// token starts.
#[derive(Debug, Error)]
pub enum TraceError {
    /// An address token was not a hexadecimal number.
    #[error("line {line}: invalid branch address '{token}'")]
    InvalidAddress {
        /// Line containing the token.
        line: usize,
        /// The token as read.
        token: String,
    },

    /// An outcome token was something other than `0` or `1`.
    #[error("line {line}: invalid branch outcome '{token}' (expected 0 or 1)")]
    InvalidOutcome {
        /// Line containing the token.
        line: usize,
        /// The token as read.
        token: String,
    },

    /// The trace ended after an address with no outcome.
    #[error("line {line}: address has no outcome before end of trace")]
    MissingOutcome {
        /// Line containing the dangling address.
        line: usize,
    },

    /// The underlying reader failed.
    #[error("failed to read trace: {0}")]
    Io(#[from] io::Error),
}

/// Failure while loading or validating the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config '{}': {source}", .path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The configuration text is not valid JSON for [`Config`](crate::config::Config).
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// The counter table size is zero or not a power of two.
    #[error("table size must be a non-zero power of two, got {0}")]
    InvalidTableSize(usize),
}

/// Top-level error for a full evaluation run.
#[derive(Debug, Error)]
pub enum SimError {
    /// The trace could not be read.
    #[error(transparent)]
    Trace(#[from] TraceError),

    /// The configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The trace contained no branches, so accuracy is undefined.
    #[error("no data: trace contained no branches")]
    EmptyTrace,
}

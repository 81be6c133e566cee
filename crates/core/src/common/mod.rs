//! Common types and constants shared across the evaluator.
//!
//! This module provides:
//! 1. **Constants:** Table geometry and counter limits of the 2-bit scheme.
//! 2. **Error Handling:** Trace, configuration and top-level simulation errors.

/// Predictor geometry and counter constants.
pub mod constants;

/// Error types for trace parsing, configuration and simulation.
pub mod error;

pub use constants::{COUNTER_MAX, TABLE_SIZE, TAKEN_THRESHOLD};
pub use error::{ConfigError, SimError, TraceError};

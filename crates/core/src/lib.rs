//! Trace-driven branch predictor evaluator.
//!
//! This crate replays recorded branch outcomes through a table of 2-bit saturating
//! counters and reports how often the predictor guessed right. It provides:
//! 1. **Prediction:** The `BranchPredictor` trait and the counter-table scheme behind it.
//! 2. **Traces:** A streaming reader for `<hex-address> <0|1>` trace text.
//! 3. **Simulation:** The predict-compare-update loop and its accuracy statistics.
//! 4. **Configuration:** JSON-backed settings for table size and report output.

/// Shared constants and error types.
pub mod common;
/// Evaluator configuration (defaults, JSON loading, validation).
pub mod config;
/// Branch prediction unit: counter table, predictor trait, 2-bit scheme.
pub mod bru;
/// Trace replay and the evaluation loop.
pub mod sim;
/// Accuracy statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or load from JSON.
pub use crate::config::Config;
/// Predictor interface implemented by every scheme.
pub use crate::bru::BranchPredictor;
/// The 2-bit saturating-counter predictor.
pub use crate::bru::two_bit::TwoBitPredictor;
/// Accuracy accumulator returned by the evaluator.
pub use crate::stats::EvalStats;

//! Trace replay.
//!
//! Provides the trace reader that turns `<hex-address> <0|1>` text into branch
//! events, and the simulator that drives a predictor through them.

/// Predict-compare-update loop and run orchestration.
pub mod simulator;

/// Branch trace events and the streaming trace reader.
pub mod trace;

pub use simulator::{Simulator, evaluate, evaluate_trace};
pub use trace::{TraceEvent, TraceReader, parse_trace};

//! Branch prediction unit (BRU).
//!
//! This module contains the predictor interface and the 2-bit saturating-counter
//! scheme built on a direct-mapped table of counters.

pub use self::branch_predictor::BranchPredictor;
pub use self::counter_table::{CounterTable, Direction};
pub use self::two_bit::{CounterState, TwoBitPredictor};

/// Branch predictor trait.
pub mod branch_predictor;

/// Direct-mapped table of 2-bit saturating counters.
pub mod counter_table;

/// 2-bit saturating-counter predictor.
pub mod two_bit;

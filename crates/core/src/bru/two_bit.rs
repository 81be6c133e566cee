//! 2-bit Saturating Counter Branch Predictor.
//!
//! Each table slot runs the classic four-state automaton:
//!
//! ```text
//!   StronglyNotTaken(0) <-> WeaklyNotTaken(1) <-> WeaklyTaken(2) <-> StronglyTaken(3)
//! ```
//!
//! A taken outcome moves one state right, a not-taken outcome one state left, and
//! both ends saturate. States 2 and 3 predict taken. All slots start at 0.
//!
//! # Performance
//!
//! - **Time Complexity:** O(1) for `predict()` and `update()`
//! - **Space Complexity:** O(N) in the table size (64K entries by default)
//! - **Best Case:** Strongly biased branches
//! - **Worst Case:** Alternating branches, or hot branches aliasing onto one slot

use super::{BranchPredictor, counter_table::CounterTable};
use crate::common::constants::TAKEN_THRESHOLD;
use crate::common::error::ConfigError;

/// State of a single 2-bit counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CounterState {
    /// Counter value 0; predicts not taken.
    StronglyNotTaken = 0,
    /// Counter value 1; predicts not taken.
    WeaklyNotTaken = 1,
    /// Counter value 2; predicts taken.
    WeaklyTaken = 2,
    /// Counter value 3; predicts taken.
    StronglyTaken = 3,
}

impl CounterState {
    /// Returns true for the two taken states.
    pub const fn predicts_taken(self) -> bool {
        self as u8 >= TAKEN_THRESHOLD
    }
}

impl From<u8> for CounterState {
    /// Decodes a raw counter value. Only the low two bits are significant.
    fn from(value: u8) -> Self {
        match value & 0b11 {
            0 => Self::StronglyNotTaken,
            1 => Self::WeaklyNotTaken,
            2 => Self::WeaklyTaken,
            _ => Self::StronglyTaken,
        }
    }
}

/// Predictor backed by a table of 2-bit saturating counters.
#[derive(Debug, Clone, Default)]
pub struct TwoBitPredictor {
    /// Pattern History Table indexed by `(address / 2) % size`.
    table: CounterTable,
}

impl TwoBitPredictor {
    /// Creates a predictor with the canonical 64K-entry table.
    pub fn new() -> Self {
        Self {
            table: CounterTable::new(),
        }
    }

    /// Creates a predictor with a table of `size` entries.
    ///
    /// # Arguments
    ///
    /// * `size` - Number of counters. Must be a non-zero power of 2.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTableSize`] for any other size.
    pub fn with_table_size(size: usize) -> Result<Self, ConfigError> {
        Ok(Self {
            table: CounterTable::with_size(size)?,
        })
    }

    /// Number of counters in the underlying table.
    pub fn table_size(&self) -> usize {
        self.table.len()
    }

    /// Current automaton state of the slot `address` maps to.
    pub fn state(&self, address: u64) -> CounterState {
        CounterState::from(self.table.get(self.table.index_for(address)))
    }

    /// Read-only access to the counter table.
    pub const fn table(&self) -> &CounterTable {
        &self.table
    }
}

impl BranchPredictor for TwoBitPredictor {
    fn name(&self) -> &'static str {
        "2-bit saturating counter"
    }

    /// Returns true if the counter at the hashed index is 2 or 3.
    #[inline]
    fn predict(&self, address: u64) -> bool {
        self.table.get(self.table.index_for(address)) >= TAKEN_THRESHOLD
    }

    /// Moves the counter at the hashed index one step toward the outcome.
    #[inline]
    fn update(&mut self, address: u64, taken: bool) {
        let idx = self.table.index_for(address);
        self.table.bump(idx, taken.into());
    }
}

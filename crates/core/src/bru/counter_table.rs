//! Pattern History Table of 2-bit saturating counters.
//!
//! The table is direct-mapped: an address is shifted right by one bit and folded
//! into the table with a modulo, so every address lands on a valid slot and distinct
//! addresses with the same folded value share a counter (aliasing).
//!
//! # Performance
//!
//! - **Time Complexity:** O(1) for `index_for`, `get` and `bump`
//! - **Space Complexity:** one byte per counter (64 KiB for the canonical table)

use crate::common::constants::{ADDRESS_SHIFT, COUNTER_MAX, TABLE_SIZE};
use crate::common::error::ConfigError;

/// Checks that `size` can back a counter table: non-zero and a power of 2.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidTableSize`] otherwise.
pub const fn check_table_size(size: usize) -> Result<(), ConfigError> {
    if size.is_power_of_two() {
        Ok(())
    } else {
        Err(ConfigError::InvalidTableSize(size))
    }
}

/// Direction in which a counter is nudged by an observed outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Move one step toward `StronglyTaken`.
    Increment,
    /// Move one step toward `StronglyNotTaken`.
    Decrement,
}

impl From<bool> for Direction {
    /// Maps a taken outcome to `Increment` and not-taken to `Decrement`.
    fn from(taken: bool) -> Self {
        if taken { Self::Increment } else { Self::Decrement }
    }
}

/// Fixed-size table of saturating counters.
///
/// Every entry stays within `0..=COUNTER_MAX` for the lifetime of the table.
#[derive(Debug, Clone)]
pub struct CounterTable {
    counters: Vec<u8>,
}

impl CounterTable {
    /// Creates the canonical 64K-entry table with every counter at 0.
    pub fn new() -> Self {
        Self {
            counters: vec![0; TABLE_SIZE],
        }
    }

    /// Creates a table with `size` counters, all at 0.
    ///
    /// # Arguments
    ///
    /// * `size` - Number of entries. Must be a non-zero power of 2.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTableSize`] for any other size, so that
    /// `index_for` never folds into an empty table.
    pub fn with_size(size: usize) -> Result<Self, ConfigError> {
        check_table_size(size)?;
        Ok(Self {
            counters: vec![0; size],
        })
    }

    /// Number of counters in the table.
    #[inline]
    pub fn len(&self) -> usize {
        self.counters.len()
    }

    /// Returns true if the table has no counters. Never true for a constructed table.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }

    /// Maps a branch address to its counter slot: `(address / 2) % len`.
    ///
    /// The result is always a valid index, so no bounds check is needed by callers.
    #[inline]
    pub fn index_for(&self, address: u64) -> usize {
        ((address >> ADDRESS_SHIFT) % self.counters.len() as u64) as usize
    }

    /// Returns the counter value at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range. Indices from [`Self::index_for`] never are.
    #[inline]
    pub fn get(&self, index: usize) -> u8 {
        self.counters[index]
    }

    /// Moves the counter at `index` one step in `direction`, saturating at 0 and 3.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range. Indices from [`Self::index_for`] never are.
    #[inline]
    pub fn bump(&mut self, index: usize, direction: Direction) {
        let counter = &mut self.counters[index];
        match direction {
            Direction::Increment if *counter < COUNTER_MAX => *counter += 1,
            Direction::Decrement if *counter > 0 => *counter -= 1,
            _ => {}
        }
    }
}

impl Default for CounterTable {
    fn default() -> Self {
        Self::new()
    }
}

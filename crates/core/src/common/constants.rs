//! Predictor geometry constants.
//!
//! The canonical table holds 64K two-bit counters, a 128 Kbit state budget.

/// Number of counters in the canonical pattern history table.
pub const TABLE_SIZE: usize = 64 * 1024;

/// Largest value a 2-bit counter can hold (`StronglyTaken`).
pub const COUNTER_MAX: u8 = 3;

/// Counter values at or above this threshold predict "taken".
pub const TAKEN_THRESHOLD: u8 = 2;

/// Right shift applied to an address before folding it into the table.
///
/// Branch addresses are at least halfword aligned, so bit 0 never
/// distinguishes two branches.
pub const ADDRESS_SHIFT: u32 = 1;

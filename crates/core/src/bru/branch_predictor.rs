//! Branch Predictor Interface.
//!
//! This module defines the `BranchPredictor` trait that prediction schemes
//! implement. Callers drive it one event at a time: `predict` first, then
//! `update` with the resolved outcome for the same address.

/// Trait for branch direction prediction algorithms.
pub trait BranchPredictor {
    /// Short human-readable name of the scheme, used in reports and logs.
    fn name(&self) -> &'static str;

    /// Predicts whether the branch at `address` will be taken.
    ///
    /// Must not change predictor state; repeated calls with no intervening
    /// `update` return the same answer.
    ///
    /// # Arguments
    ///
    /// * `address` - Instruction address of the branch
    fn predict(&self, address: u64) -> bool;

    /// Trains the predictor with the resolved outcome of a branch.
    ///
    /// # Arguments
    ///
    /// * `address` - Instruction address of the branch
    /// * `taken` - Whether the branch was actually taken
    fn update(&mut self, address: u64, taken: bool);
}

//! Prediction accuracy statistics.
//!
//! This module tracks the outcome of every prediction made during a run. It provides:
//! 1. **Totals:** Branches seen and predictions that matched the resolved outcome.
//! 2. **Breakdown:** Accuracy split by the actual direction of the branch.
//! 3. **Reporting:** The `Branch count` / accuracy lines printed at the end of a run.
//!
//! Accuracy over zero branches is undefined and is surfaced as `None` rather than NaN.

use std::io::{self, Write};

/// Accuracy accumulator for a single predictor run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvalStats {
    /// Number of branches evaluated.
    pub branches: u64,
    /// Number of branches whose prediction matched the outcome.
    pub correct: u64,
    /// Number of branches that were actually taken.
    pub taken_branches: u64,
    /// Number of actually-taken branches that were predicted taken.
    pub taken_correct: u64,
}

/// Percentage of `hits` over `total`, or `None` when `total` is zero.
fn percent(hits: u64, total: u64) -> Option<f64> {
    (total > 0).then(|| 100.0 * (hits as f64 / total as f64))
}

impl EvalStats {
    /// Records one prediction against its resolved outcome.
    #[inline]
    pub const fn record(&mut self, predicted: bool, taken: bool) {
        self.branches += 1;
        if taken {
            self.taken_branches += 1;
        }
        if predicted == taken {
            self.correct += 1;
            if taken {
                self.taken_correct += 1;
            }
        }
    }

    /// Returns true if no branches have been recorded.
    pub const fn is_empty(&self) -> bool {
        self.branches == 0
    }

    /// Number of wrong predictions.
    pub const fn mispredictions(&self) -> u64 {
        self.branches - self.correct
    }

    /// Number of branches that were actually not taken.
    pub const fn not_taken_branches(&self) -> u64 {
        self.branches - self.taken_branches
    }

    /// Overall accuracy as a percentage in `[0, 100]`, or `None` for an empty run.
    pub fn accuracy(&self) -> Option<f64> {
        percent(self.correct, self.branches)
    }

    /// Accuracy over actually-taken branches, or `None` if there were none.
    pub fn taken_accuracy(&self) -> Option<f64> {
        percent(self.taken_correct, self.taken_branches)
    }

    /// Accuracy over actually-not-taken branches, or `None` if there were none.
    pub fn not_taken_accuracy(&self) -> Option<f64> {
        percent(self.correct - self.taken_correct, self.not_taken_branches())
    }

    /// Writes the run summary.
    ///
    /// The first two lines are always `Branch count = N` and `<label> = XX.XX%`.
    /// With `detailed`, a per-direction breakdown follows.
    ///
    /// # Errors
    ///
    /// Propagates any error from `out`.
    pub fn write_report<W: Write>(&self, out: &mut W, label: &str, detailed: bool) -> io::Result<()> {
        let fmt_pct = |pct: Option<f64>| {
            pct.map_or_else(|| "n/a (no branches)".to_string(), |p| format!("{p:.2}%"))
        };

        writeln!(out, "Branch count = {}", self.branches)?;
        writeln!(out, "{label} = {}", fmt_pct(self.accuracy()))?;

        if detailed {
            writeln!(out, "----------------------------------------------------------")?;
            writeln!(out, "  bp.mispredicts         {}", self.mispredictions())?;
            writeln!(
                out,
                "  bp.taken               {} ({})",
                self.taken_branches,
                fmt_pct(self.taken_accuracy())
            )?;
            writeln!(
                out,
                "  bp.not_taken           {} ({})",
                self.not_taken_branches(),
                fmt_pct(self.not_taken_accuracy())
            )?;
        }
        Ok(())
    }

    /// Prints the run summary to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if stdout cannot be written.
    pub fn print(&self, label: &str, detailed: bool) -> io::Result<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.write_report(&mut lock, label, detailed)
    }
}

//! Simulator: owns a predictor and the statistics of its run.
//!
//! Every event goes through the same three steps, strictly in trace order:
//! 1. **Predict:** Ask the predictor for a guess using only state from earlier events.
//! 2. **Score:** Compare the guess with the resolved outcome.
//! 3. **Train:** Update the predictor with the resolved outcome.
//!
//! Predictions depend on all earlier events mapping to the same counter, so the
//! loop is sequential by construction.

use std::io::BufRead;

use tracing::{debug, trace};

use super::trace::{TraceEvent, TraceReader};
use crate::bru::{BranchPredictor, TwoBitPredictor};
use crate::common::error::{ConfigError, SimError, TraceError};
use crate::config::Config;
use crate::stats::EvalStats;

/// Runs one event through `predictor` and records the result in `stats`.
///
/// Returns the prediction made before training.
#[inline]
fn step<P: BranchPredictor + ?Sized>(
    predictor: &mut P,
    stats: &mut EvalStats,
    event: TraceEvent,
) -> bool {
    let predicted = predictor.predict(event.address);
    stats.record(predicted, event.taken);
    if predicted != event.taken {
        trace!("mispredict at {:#x} (taken={})", event.address, event.taken);
    }
    predictor.update(event.address, event.taken);
    predicted
}

/// Replays `events` through `predictor` and returns the accuracy statistics.
pub fn evaluate<P, I>(predictor: &mut P, events: I) -> EvalStats
where
    P: BranchPredictor + ?Sized,
    I: IntoIterator<Item = TraceEvent>,
{
    debug!(scheme = predictor.name(), "evaluating events");
    let mut stats = EvalStats::default();
    for event in events {
        let _ = step(predictor, &mut stats, event);
    }
    debug!(
        branches = stats.branches,
        correct = stats.correct,
        "evaluation complete"
    );
    stats
}

/// Replays a fallible event stream, stopping at the first error.
///
/// # Errors
///
/// Returns the first [`TraceError`] from `events`. Events before it have already
/// trained `predictor`, but no statistics are returned for a failed run.
pub fn evaluate_trace<P, I>(predictor: &mut P, events: I) -> Result<EvalStats, TraceError>
where
    P: BranchPredictor + ?Sized,
    I: IntoIterator<Item = Result<TraceEvent, TraceError>>,
{
    debug!(scheme = predictor.name(), "evaluating trace");
    let mut stats = EvalStats::default();
    for event in events {
        let _ = step(predictor, &mut stats, event?);
    }
    debug!(
        branches = stats.branches,
        correct = stats.correct,
        "evaluation complete"
    );
    Ok(stats)
}

/// Top-level simulator: a predictor plus the statistics of its run so far.
#[derive(Debug, Clone)]
pub struct Simulator<P = TwoBitPredictor> {
    /// Predictor under evaluation.
    pub predictor: P,
    /// Statistics accumulated over all events stepped so far.
    pub stats: EvalStats,
}

impl Simulator<TwoBitPredictor> {
    /// Builds a simulator around a 2-bit predictor sized from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTableSize`] if the configured size cannot
    /// back a counter table.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        debug!(table_size = config.predictor.table_size, "building 2-bit predictor");
        Ok(Self::new(TwoBitPredictor::with_table_size(
            config.predictor.table_size,
        )?))
    }
}

impl<P: BranchPredictor> Simulator<P> {
    /// Creates a simulator for `predictor` with empty statistics.
    pub fn new(predictor: P) -> Self {
        Self {
            predictor,
            stats: EvalStats::default(),
        }
    }

    /// Predicts, scores and trains on a single event. Returns the prediction.
    pub fn step(&mut self, event: TraceEvent) -> bool {
        step(&mut self.predictor, &mut self.stats, event)
    }

    /// Reads and replays an entire trace.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Trace`] on the first malformed token or read failure,
    /// and [`SimError::EmptyTrace`] if the run saw no branches at all.
    pub fn run<R: BufRead>(&mut self, reader: R) -> Result<EvalStats, SimError> {
        debug!(scheme = self.predictor.name(), "replaying trace");

        let mut events = TraceReader::new(reader);
        for event in events.by_ref() {
            let _ = self.step(event?);
        }

        debug!(
            lines = events.lines_read(),
            branches = self.stats.branches,
            correct = self.stats.correct,
            "trace complete"
        );

        if self.stats.is_empty() {
            return Err(SimError::EmptyTrace);
        }
        Ok(self.stats)
    }
}

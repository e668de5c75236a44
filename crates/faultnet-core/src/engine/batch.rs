//! Batch evaluation of independent vehicles.
//!
//! Every item gets its own [`SeededSource`] seeded with
//! `seed.wrapping_add(index)`, so results do not depend on scheduling.
//!
//! ## Feature gating
//!
//! With the `parallel` feature the batch runs on the rayon pool; otherwise it
//! runs sequentially. Output order always matches input order.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::engine::errors::FaultNetError;
use crate::engine::evaluate::FaultNetworkEvaluator;
use crate::engine::random::SeededSource;
use crate::report::{MarginalEntry, Outcome, ResultMapping};

/// Evaluates each observation with an independently seeded source.
pub fn evaluate_batch(
    evaluator: &FaultNetworkEvaluator,
    observations: &[bool],
    seed: u64,
) -> Result<Vec<ResultMapping>, FaultNetError> {
    #[cfg(feature = "tracing")]
    tracing::info!(
        runs = observations.len(),
        seed,
        parallel = cfg!(feature = "parallel"),
        "evaluating batch"
    );

    let run = |(index, &observation): (usize, &bool)| {
        let mut rng = SeededSource::from_seed(seed.wrapping_add(index as u64));
        evaluator.evaluate(observation, &mut rng)
    };

    #[cfg(feature = "parallel")]
    let results = observations.par_iter().enumerate().map(run).collect();
    #[cfg(not(feature = "parallel"))]
    let results = observations.iter().enumerate().map(run).collect();

    results
}

/// Mean marginals across a batch.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatchSummary {
    pub runs: usize,
    pub mean: ResultMapping,
}

impl BatchSummary {
    /// Returns `None` for an empty batch.
    pub fn from_results(results: &[ResultMapping]) -> Option<Self> {
        if results.is_empty() {
            return None;
        }
        let n = results.len() as f64;
        let entries = Outcome::ALL
            .iter()
            .map(|&outcome| MarginalEntry {
                outcome,
                probability: results
                    .iter()
                    .map(|r| r.get(outcome).unwrap_or(0.0))
                    .sum::<f64>()
                    / n,
            })
            .collect();
        Some(Self {
            runs: results.len(),
            mean: ResultMapping::from_entries(entries),
        })
    }
}

//! Grid scoring, sequential or Rayon-parallel.
//!
//! Scoring one candidate is independent of every other candidate, so the
//! grid is embarrassingly parallel. Results are recombined in candidate
//! order — the downstream smoothing pass is order-sensitive.

use crate::error::Error;
use crate::score::fold_score;
use crate::series::SampleSeries;
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Controls whether grid scoring runs sequentially or with Rayon.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallelScoreOptions {
    enabled: bool,
    min_candidates_for_parallel: usize,
}

impl ParallelScoreOptions {
    /// Construct explicit options.
    pub fn new(enabled: bool, min_candidates_for_parallel: usize) -> Self {
        Self {
            enabled,
            min_candidates_for_parallel: min_candidates_for_parallel.max(1),
        }
    }

    /// Disable parallel scoring regardless of grid size.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            min_candidates_for_parallel: usize::MAX,
        }
    }

    /// Returns true when parallel scoring should be used for `candidate_count`.
    pub fn should_parallelize(&self, candidate_count: usize) -> bool {
        self.enabled && candidate_count >= self.min_candidates_for_parallel
    }

    /// Update the minimum candidate threshold for parallel scoring.
    pub fn with_min_candidates(mut self, min_candidates: usize) -> Self {
        self.min_candidates_for_parallel = min_candidates.max(1);
        self
    }
}

impl Default for ParallelScoreOptions {
    fn default() -> Self {
        Self {
            enabled: cfg!(feature = "parallel"),
            min_candidates_for_parallel: 256,
        }
    }
}

/// Score every candidate period, in candidate order.
pub fn score_grid(
    series: &SampleSeries,
    candidates: &[f64],
    options: &ParallelScoreOptions,
) -> Result<Vec<f64>, Error> {
    #[cfg(feature = "parallel")]
    if options.should_parallelize(candidates.len()) {
        return candidates
            .par_iter()
            .map(|&period| fold_score(series, period))
            .collect();
    }
    #[cfg(not(feature = "parallel"))]
    let _ = options;

    candidates
        .iter()
        .map(|&period| fold_score(series, period))
        .collect()
}

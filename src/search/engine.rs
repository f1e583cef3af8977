//! The multi-round search engine.

use crate::diagnostics::{RoundDiagnostics, SearchDiagnostics, SearchReport};
use crate::error::Error;
use crate::search::params::grid_len;
use crate::search::{score_grid, SearchParams};
use crate::series::SampleSeries;
use crate::smooth::forward_moving_average;
use crate::types::{Periodogram, SearchOutcome};
use log::debug;
use std::time::Instant;

/// Smoothing window bounds for the adaptive per-round choice.
const MIN_WINDOW: usize = 5;
const MAX_WINDOW: usize = 20;

/// Base half-width of the next round's interval, in units of the current
/// resolution. The asymmetric smoothing lag is added on top of the upper
/// half.
const SHRINK_HALF_WIDTH: f64 = 4.5;

/// Period searcher orchestrating grid generation, scoring, smoothing,
/// minimum selection and interval narrowing across a fixed number of rounds.
pub struct PeriodSearcher {
    params: SearchParams,
}

impl PeriodSearcher {
    /// Create a searcher with the supplied parameters.
    pub fn new(params: SearchParams) -> Self {
        Self { params }
    }

    /// The parameters this searcher was built with.
    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    /// Run the search, returning the compact outcome and the final-round
    /// periodogram.
    pub fn search(&self, series: &SampleSeries) -> Result<(SearchOutcome, Periodogram), Error> {
        self.search_with_diagnostics(series)
            .map(|report| (report.outcome, report.periodogram))
    }

    /// Run the search and return the outcome together with per-round
    /// diagnostics and a timing breakdown.
    pub fn search_with_diagnostics(&self, series: &SampleSeries) -> Result<SearchReport, Error> {
        self.params.validate()?;

        let (bound_low, bound_high) = self.params.bounds;
        let total_start = Instant::now();
        debug!(
            "PeriodSearcher::search start bounds=[{}, {}] rounds={} resolution={}",
            bound_low,
            bound_high,
            self.params.max_rounds,
            self.params.initial_resolution()
        );

        let mut low = bound_low;
        let mut high = bound_high;
        let mut resolution = self.params.initial_resolution();

        // Champion: best (period, smoothed score) across all rounds.
        let mut champion_period = f64::NAN;
        let mut champion_score = f64::INFINITY;

        let mut rounds = Vec::with_capacity(self.params.max_rounds);
        let mut score_ms = 0.0f64;
        let mut smooth_ms = 0.0f64;
        let mut final_grid: Vec<f64> = Vec::new();
        let mut final_scores: Vec<f64> = Vec::new();
        let mut final_resolution = resolution;

        for round in 0..self.params.max_rounds {
            let round_start = Instant::now();
            let candidates = period_grid(low, high, resolution);

            let score_start = Instant::now();
            let scores = score_grid(series, &candidates, &self.params.parallel)?;
            score_ms += score_start.elapsed().as_secs_f64() * 1000.0;

            let window = adaptive_window(candidates.len());
            let smooth_start = Instant::now();
            let smoothed = forward_moving_average(&scores, window)?;
            smooth_ms += smooth_start.elapsed().as_secs_f64() * 1000.0;

            let (min_index, min_score) = argmin(&smoothed);
            let round_best = candidates[min_index];
            if min_score < champion_score {
                champion_score = min_score;
                champion_period = round_best;
            }

            let elapsed_ms = round_start.elapsed().as_secs_f64() * 1000.0;
            debug!(
                "PeriodSearcher::round {} interval=[{:.6}, {:.6}] res={:.2e} grid={} window={} best={:.6} score={:.3e}",
                round,
                low,
                high,
                resolution,
                candidates.len(),
                window,
                round_best,
                min_score
            );
            rounds.push(RoundDiagnostics {
                round,
                interval_low: low,
                interval_high: high,
                resolution,
                candidates: candidates.len(),
                window,
                best_period: round_best,
                best_score: min_score,
                elapsed_ms,
            });

            if round + 1 == self.params.max_rounds {
                final_grid = candidates;
                final_scores = smoothed;
                final_resolution = resolution;
            } else {
                // The forward-looking smoother places its minimum up to
                // `window` positions before the true one, so the interval
                // extends that far upward on top of the base half-width.
                let half = SHRINK_HALF_WIDTH * resolution;
                let lag = window as f64 * resolution;
                low = (round_best - half).max(bound_low);
                high = (round_best + half + lag).min(bound_high);
                resolution /= 10.0;
            }
        }

        let latency_ms = total_start.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "PeriodSearcher::search done best={:.8} score={:.3e} latency_ms={:.3}",
            champion_period, champion_score, latency_ms
        );

        let outcome = SearchOutcome {
            best_period: champion_period,
            best_score: champion_score,
            final_resolution,
            rounds: rounds.len(),
            latency_ms,
        };
        let periodogram = Periodogram {
            periods: final_grid,
            scores: final_scores,
            best_period: champion_period,
        };
        let diagnostics = SearchDiagnostics {
            input_samples: series.len(),
            time_span: series.time_span(),
            rounds,
            score_ms,
            smooth_ms,
            total_latency_ms: latency_ms,
        };

        Ok(SearchReport {
            outcome,
            periodogram,
            diagnostics,
        })
    }
}

/// Inclusive arithmetic sequence from `low` to `high` stepped by `step`.
fn period_grid(low: f64, high: f64, step: f64) -> Vec<f64> {
    let count = grid_len(low, high, step);
    (0..count).map(|i| low + i as f64 * step).collect()
}

/// Smoothing window scaled to the grid density: 10% of the candidate count,
/// clamped to `[5, 20]`.
fn adaptive_window(candidates: usize) -> usize {
    ((candidates as f64 * 0.1).round() as usize).clamp(MIN_WINDOW, MAX_WINDOW)
}

fn argmin(values: &[f64]) -> (usize, f64) {
    let mut best_index = 0;
    let mut best = values[0];
    for (i, &v) in values.iter().enumerate().skip(1) {
        if v < best {
            best = v;
            best_index = i;
        }
    }
    (best_index, best)
}

use serde::{Deserialize, Serialize};

/// Compact result of one search invocation.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct SearchOutcome {
    /// Champion period: lowest smoothed score seen across all rounds.
    pub best_period: f64,
    /// The champion's smoothed score.
    pub best_score: f64,
    /// Grid step of the final round.
    pub final_resolution: f64,
    /// Number of rounds executed.
    pub rounds: usize,
    pub latency_ms: f64,
}

/// Scored candidate grid from the final search round. Write-once: produced by
/// the engine, treated as immutable downstream.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Periodogram {
    /// Candidate periods, ascending.
    pub periods: Vec<f64>,
    /// Smoothed dispersion score per candidate.
    pub scores: Vec<f64>,
    /// Champion period for the invocation that produced this grid.
    pub best_period: f64,
}

impl Periodogram {
    /// Number of grid points.
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// Iterate `(period, score)` pairs in grid order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.periods.iter().copied().zip(self.scores.iter().copied())
    }
}

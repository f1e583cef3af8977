use crate::types::{Periodogram, SearchOutcome};
use serde::Serialize;

/// Per-round search diagnostics.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct RoundDiagnostics {
    /// Zero-based round index.
    pub round: usize,
    pub interval_low: f64,
    pub interval_high: f64,
    /// Grid step used this round.
    pub resolution: f64,
    /// Number of candidate periods scored.
    pub candidates: usize,
    /// Smoothing window chosen for this grid density.
    pub window: usize,
    /// Minimum of the smoothed scores this round.
    pub best_period: f64,
    pub best_score: f64,
    pub elapsed_ms: f64,
}

/// Full breakdown of one search invocation.
#[derive(Clone, Debug, Serialize)]
pub struct SearchDiagnostics {
    /// Samples in the input series.
    pub input_samples: usize,
    /// Span between the earliest and latest observation.
    pub time_span: f64,
    pub rounds: Vec<RoundDiagnostics>,
    /// Total time spent scoring candidate grids.
    pub score_ms: f64,
    /// Total time spent smoothing scored grids.
    pub smooth_ms: f64,
    pub total_latency_ms: f64,
}

/// Compact outcome, final periodogram, and diagnostics in one report.
#[derive(Clone, Debug, Serialize)]
pub struct SearchReport {
    pub outcome: SearchOutcome,
    pub periodogram: Periodogram,
    pub diagnostics: SearchDiagnostics,
}

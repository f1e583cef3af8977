#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod search;
pub mod series;
pub mod store;
pub mod synth;
pub mod types;

// Algorithm building blocks – public for tools and advanced callers.
pub mod score;
pub mod smooth;

// --- High-level re-exports -------------------------------------------------

// Main entry points: searcher + results.
pub use crate::search::{PeriodSearcher, SearchParams};
pub use crate::types::{Periodogram, SearchOutcome};

// Error taxonomy.
pub use crate::error::{ComputationError, DataError, Error, ValidationError};

// The shared data contract.
pub use crate::series::SampleSeries;

// High-level diagnostics returned by the searcher.
pub use crate::diagnostics::{SearchDiagnostics, SearchReport};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use period_detector::prelude::*;
///
/// # fn main() -> Result<(), period_detector::Error> {
/// let series = generate_base(&BaseCurve::default())?;
/// let searcher = PeriodSearcher::new(SearchParams {
///     bounds: (8.0, 12.0),
///     ..Default::default()
/// });
/// let (outcome, _periodogram) = searcher.search(&series)?;
/// println!("best period {:.6} in {:.1} ms", outcome.best_period, outcome.latency_ms);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::series::SampleSeries;
    pub use crate::synth::{combine, generate_base, BaseCurve, CombineSpec};
    pub use crate::{PeriodSearcher, Periodogram, SearchOutcome, SearchParams};
}

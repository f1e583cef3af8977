//! Multi-round period search.
//!
//! Overview
//! - Each round lays an inclusive arithmetic grid of candidate periods over
//!   the current interval, scores every candidate with the phase-fold
//!   dispersion statistic, smooths the scores with a forward moving average
//!   whose window adapts to the grid density, and locks onto the minimum.
//! - The next round's interval spans `4.5 × resolution` below the round best
//!   and `(4.5 + window) × resolution` above it, clipped to the original
//!   bounds, and the resolution sharpens by an order of magnitude. The upper
//!   slack absorbs the forward-looking smoother's lag: its minimum sits up
//!   to `window` positions before the true one. Termination is a fixed round
//!   count.
//! - The champion — the lowest smoothed score seen across all rounds — never
//!   regresses; a later, coarser round cannot displace an earlier, better
//!   one.
//!
//! Modules
//! - [`params`] – search configuration and eager validation.
//! - `engine` – the [`PeriodSearcher`] implementation.
//! - `parallel` – feature-gated Rayon scoring of the candidate grid.

mod engine;
pub mod parallel;
pub mod params;

pub use engine::PeriodSearcher;
pub use params::SearchParams;
pub use parallel::{score_grid, ParallelScoreOptions};

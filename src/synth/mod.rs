//! Synthetic transit signal generator.
//!
//! Overview
//! - [`generate_base`] produces a deterministic box-transit light curve from
//!   closed-form parameters: flux drops to `1 - depth` whenever the phase
//!   falls inside the transit window, baseline `1.0` otherwise.
//! - Three perturbation models exercise the search engine against known
//!   truth: [`apply_timing_variation`] shifts the effective transit centre,
//!   [`apply_duration_variation`] resizes detected windows around their
//!   midpoints, and [`apply_depth_variation`] modulates the transit depth
//!   with summed sinusoids.
//! - [`combine`] chains the three in a fixed order (timing → duration →
//!   depth), each independently optional, and reports which were applied.
//!
//! Every entry point validates its parameters eagerly and returns no partial
//! output on failure. Generation is pure: identical inputs always yield
//! identical series.

mod base;
mod combine;
mod depth;
mod duration;
mod timing;

pub use base::{generate_base, BaseCurve};
pub use combine::{combine, CombineSpec, VariationKind};
pub use depth::{apply_depth_variation, DepthComponent, DepthMode, DepthVariation};
pub use duration::{apply_duration_variation, DurationVariation};
pub use timing::{apply_timing_variation, TimingVariation};

/// Depth values are clipped to this closed range after modulation.
pub const DEPTH_CLIP: (f64, f64) = (0.001, 0.5);

/// Transit durations are floored here after modulation.
pub const MIN_DURATION: f64 = 0.1;

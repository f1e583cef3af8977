//! Transit depth variation.

use crate::error::{ensure_non_negative, ensure_open_unit, Error, ValidationError};
use crate::series::{SampleSeries, TRANSIT_EPS};
use crate::synth::DEPTH_CLIP;
use log::debug;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// One sinusoidal component of the depth modulation.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct DepthComponent {
    pub frequency: f64,
    pub amplitude: f64,
}

/// Which samples the modulated depth is written to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DepthMode {
    /// Every sample of the curve.
    All,
    /// Only samples inside detected transit windows.
    Transit,
}

/// Additive multi-sinusoid depth model:
/// `depth(t) = clip(base_depth + Σ amplitude_i * sin(2π * frequency_i * t), 0.001, 0.5)`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DepthVariation {
    /// Unmodulated depth, in (0, 1).
    pub base_depth: f64,
    /// Summed sinusoid components.
    pub components: Vec<DepthComponent>,
    pub mode: DepthMode,
}

impl DepthVariation {
    pub fn validate(&self) -> Result<(), ValidationError> {
        ensure_open_unit("base_depth", self.base_depth)?;
        for component in &self.components {
            ensure_non_negative("amplitude", component.amplitude)?;
            ensure_non_negative("frequency", component.frequency)?;
        }
        Ok(())
    }

    fn depth_at(&self, t: f64) -> f64 {
        let modulation: f64 = self
            .components
            .iter()
            .map(|c| c.amplitude * (TAU * c.frequency * t).sin())
            .sum();
        let (floor, ceil) = DEPTH_CLIP;
        (self.base_depth + modulation).clamp(floor, ceil)
    }
}

/// Rewrite flux with the modulated depth.
///
/// Mode [`DepthMode::Transit`] touches only samples inside windows detected
/// on the input; [`DepthMode::All`] rewrites the whole curve. The clip to
/// `[0.001, 0.5]` keeps every written value a valid depth no matter how large
/// the component amplitudes are.
pub fn apply_depth_variation(
    series: &SampleSeries,
    spec: &DepthVariation,
) -> Result<SampleSeries, Error> {
    spec.validate()?;

    let time = series.time();
    let mut flux = series.flux().to_vec();
    match spec.mode {
        DepthMode::All => {
            for (f, &t) in flux.iter_mut().zip(time) {
                *f = 1.0 - spec.depth_at(t);
            }
        }
        DepthMode::Transit => {
            for window in series.transit_windows(TRANSIT_EPS) {
                for i in window.start..=window.end {
                    flux[i] = 1.0 - spec.depth_at(time[i]);
                }
            }
        }
    }
    debug!(
        "apply_depth_variation: base_depth={} components={} mode={:?}",
        spec.base_depth,
        spec.components.len(),
        spec.mode
    );

    SampleSeries::new(time.to_vec(), flux).map_err(Error::from)
}

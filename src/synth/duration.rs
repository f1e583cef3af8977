//! Transit duration variation.

use crate::error::{ensure_non_negative, ensure_positive, Error, ValidationError};
use crate::series::{SampleSeries, TRANSIT_EPS};
use crate::synth::MIN_DURATION;
use log::debug;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Sinusoidal resize of each detected transit window:
/// `new_duration = max(0.1, base_duration + amplitude * sin(2π * frequency * t_center))`,
/// re-centred on the window's original midpoint.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct DurationVariation {
    /// Transit duration of the unperturbed model, positive.
    pub base_duration: f64,
    /// Resize amplitude, non-negative.
    pub amplitude: f64,
    /// Resize frequency, non-negative.
    pub frequency: f64,
}

impl DurationVariation {
    pub fn validate(&self) -> Result<(), ValidationError> {
        ensure_positive("base_duration", self.base_duration)?;
        ensure_non_negative("amplitude", self.amplitude)?;
        ensure_non_negative("frequency", self.frequency)?;
        Ok(())
    }
}

/// Resize every transit window detected on the input.
///
/// Windows come from the `flux < 1 - eps` mask. Each keeps its own depth (one
/// minus the window's mean flux) and is stretched or shrunk in sample-index
/// units by `new_duration / base_duration` around its original centre index,
/// clipped to the array bounds. Samples outside every resized window return
/// to baseline. A curve with no detectable transit is an error.
pub fn apply_duration_variation(
    series: &SampleSeries,
    spec: &DurationVariation,
) -> Result<SampleSeries, Error> {
    spec.validate()?;

    let windows = series.transit_windows(TRANSIT_EPS);
    if windows.is_empty() {
        return Err(crate::error::ComputationError::NoTransitDetected.into());
    }

    let time = series.time();
    let flux = series.flux();
    let n = time.len();
    let mut out = vec![1.0; n];

    for window in &windows {
        let center = window.center_index();
        let center_time = time[center];
        let window_flux = &flux[window.start..=window.end];
        let depth = 1.0 - window_flux.iter().sum::<f64>() / window_flux.len() as f64;

        let variation = spec.amplitude * (TAU * spec.frequency * center_time).sin();
        let new_duration = (spec.base_duration + variation).max(MIN_DURATION);
        let ratio = new_duration / spec.base_duration;

        let new_len = ((window.len() as f64 * ratio) as usize).max(1);
        let new_start = center.saturating_sub(new_len / 2);
        let new_end = (new_start + new_len - 1).min(n - 1);
        for f in &mut out[new_start..=new_end] {
            *f = 1.0 - depth;
        }
    }
    debug!(
        "apply_duration_variation: {} windows, amplitude={} frequency={}",
        windows.len(),
        spec.amplitude,
        spec.frequency
    );

    SampleSeries::new(time.to_vec(), out).map_err(Error::from)
}

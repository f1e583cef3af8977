//! Transit timing variation.

use crate::error::{ensure_non_negative, ensure_positive, Error, ValidationError};
use crate::series::SampleSeries;
use log::debug;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Sinusoidal shift of the effective transit centre:
/// the phase of each sample is recomputed from `t + amplitude * sin(2π * frequency * t)`
/// against the base period and duration.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct TimingVariation {
    /// Period of the unperturbed model.
    pub base_period: f64,
    /// Transit duration of the unperturbed model.
    pub base_duration: f64,
    /// Shift amplitude, non-negative.
    pub amplitude: f64,
    /// Shift frequency, non-negative.
    pub frequency: f64,
}

impl TimingVariation {
    pub fn validate(&self) -> Result<(), ValidationError> {
        ensure_positive("base_period", self.base_period)?;
        ensure_positive("base_duration", self.base_duration)?;
        ensure_non_negative("amplitude", self.amplitude)?;
        ensure_non_negative("frequency", self.frequency)?;
        Ok(())
    }
}

/// Rebuild the curve with the timing shift applied.
///
/// The variation acts on the time axis, not on the input flux values: each
/// sample is re-evaluated against the base box model at its shifted time, so
/// in-window samples take the series' base depth (hard on/off at the window
/// edge) and all others return to baseline. The input series should be the
/// unperturbed base curve; the base depth is read off its deepest sample.
pub fn apply_timing_variation(
    series: &SampleSeries,
    spec: &TimingVariation,
) -> Result<SampleSeries, Error> {
    spec.validate()?;

    let depth = 1.0 - series.flux().iter().copied().fold(f64::INFINITY, f64::min);
    let in_transit_flux = 1.0 - depth;

    let flux = series
        .time()
        .iter()
        .map(|&t| {
            let shifted = t + spec.amplitude * (TAU * spec.frequency * t).sin();
            let in_transit = shifted.rem_euclid(spec.base_period) < spec.base_duration;
            if in_transit {
                in_transit_flux
            } else {
                1.0
            }
        })
        .collect();
    debug!(
        "apply_timing_variation: amplitude={} frequency={} depth={:.4}",
        spec.amplitude, spec.frequency, depth
    );

    SampleSeries::new(series.time().to_vec(), flux).map_err(Error::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synth::{generate_base, BaseCurve};

    fn base() -> (BaseCurve, SampleSeries) {
        let params = BaseCurve {
            duration: 40.0,
            dt: 0.05,
            period: 4.0,
            depth: 0.03,
            transit_duration: 0.6,
        };
        let series = generate_base(&params).unwrap();
        (params, series)
    }

    #[test]
    fn zero_amplitude_reproduces_the_base_curve() {
        let (params, series) = base();
        let spec = TimingVariation {
            base_period: params.period,
            base_duration: params.transit_duration,
            amplitude: 0.0,
            frequency: 0.05,
        };
        let shifted = apply_timing_variation(&series, &spec).unwrap();
        assert_eq!(shifted.flux(), series.flux());
    }

    #[test]
    fn shift_moves_window_edges_but_keeps_depth() {
        let (params, series) = base();
        let spec = TimingVariation {
            base_period: params.period,
            base_duration: params.transit_duration,
            amplitude: 0.3,
            frequency: 0.02,
        };
        let shifted = apply_timing_variation(&series, &spec).unwrap();
        assert_ne!(shifted.flux(), series.flux());
        // Hard on/off: only two flux levels ever appear.
        for &f in shifted.flux() {
            assert!(
                (f - 1.0).abs() < 1e-12 || (f - 0.97).abs() < 1e-12,
                "unexpected flux level {f}"
            );
        }
    }

    #[test]
    fn negative_amplitude_rejected() {
        let (params, series) = base();
        let spec = TimingVariation {
            base_period: params.period,
            base_duration: params.transit_duration,
            amplitude: -0.1,
            frequency: 0.02,
        };
        assert!(apply_timing_variation(&series, &spec).is_err());
    }
}

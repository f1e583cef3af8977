//! Base box-transit light curve.

use crate::error::{ensure_open_unit, ensure_positive, Error, ValidationError};
use crate::series::SampleSeries;
use log::debug;
use serde::{Deserialize, Serialize};

/// Closed-form parameters of an unperturbed transit curve.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct BaseCurve {
    /// Total observation span.
    pub duration: f64,
    /// Sampling step.
    pub dt: f64,
    /// Orbital period.
    pub period: f64,
    /// Transit depth, in (0, 1).
    pub depth: f64,
    /// Transit length per cycle; strictly shorter than the period.
    pub transit_duration: f64,
}

impl Default for BaseCurve {
    fn default() -> Self {
        Self {
            duration: 100.0,
            dt: 0.1,
            period: 10.0,
            depth: 0.02,
            transit_duration: 1.0,
        }
    }
}

impl BaseCurve {
    /// Check the parameter domain without generating anything.
    pub fn validate(&self) -> Result<(), ValidationError> {
        ensure_positive("duration", self.duration)?;
        ensure_positive("dt", self.dt)?;
        ensure_positive("period", self.period)?;
        ensure_positive("transit_duration", self.transit_duration)?;
        ensure_open_unit("depth", self.depth)?;
        if self.transit_duration >= self.period {
            return Err(ValidationError::DurationExceedsPeriod {
                transit_duration: self.transit_duration,
                period: self.period,
            });
        }
        Ok(())
    }
}

/// Generate the base curve: `time[i] = i * dt` for `i = 0..ceil(duration/dt)`,
/// flux `1 - depth` whenever `time[i] mod period < transit_duration`.
pub fn generate_base(params: &BaseCurve) -> Result<SampleSeries, Error> {
    params.validate()?;

    let count = (params.duration / params.dt).ceil() as usize;
    let mut time = Vec::with_capacity(count);
    let mut flux = Vec::with_capacity(count);
    for i in 0..count {
        let t = i as f64 * params.dt;
        time.push(t);
        let in_transit = t.rem_euclid(params.period) < params.transit_duration;
        flux.push(if in_transit { 1.0 - params.depth } else { 1.0 });
    }
    debug!(
        "generate_base: {} samples, period={} depth={} transit_duration={}",
        count, params.period, params.depth, params.transit_duration
    );

    SampleSeries::new(time, flux).map_err(Error::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::TRANSIT_EPS;

    #[test]
    fn sample_count_and_values() {
        let series = generate_base(&BaseCurve {
            duration: 10.0,
            dt: 0.1,
            period: 2.0,
            depth: 0.02,
            transit_duration: 0.5,
        })
        .unwrap();
        assert_eq!(series.len(), 100);
        assert!((series.time()[1] - 0.1).abs() < 1e-12);
        // t = 0 is in-transit, t = 1.0 is baseline.
        assert!((series.flux()[0] - 0.98).abs() < 1e-12);
        assert!((series.flux()[10] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn deterministic() {
        let params = BaseCurve::default();
        let a = generate_base(&params).unwrap();
        let b = generate_base(&params).unwrap();
        assert_eq!(a.time(), b.time());
        assert_eq!(a.flux(), b.flux());
    }

    #[test]
    fn rejects_out_of_domain_parameters() {
        let mut p = BaseCurve::default();
        p.dt = 0.0;
        assert!(generate_base(&p).is_err());

        let mut p = BaseCurve::default();
        p.depth = 1.0;
        assert!(generate_base(&p).is_err());

        let mut p = BaseCurve::default();
        p.depth = 0.0;
        assert!(generate_base(&p).is_err());

        let mut p = BaseCurve::default();
        p.transit_duration = -1.0;
        assert!(generate_base(&p).is_err());
    }

    #[test]
    fn transit_filling_the_period_is_rejected() {
        let mut p = BaseCurve::default();
        p.transit_duration = p.period;
        assert!(matches!(
            generate_base(&p),
            Err(Error::Validation(
                ValidationError::DurationExceedsPeriod { .. }
            ))
        ));
    }

    #[test]
    fn near_full_transit_keeps_baseline_samples() {
        // Infinitesimally shorter than the period: every cycle must still
        // contain at least one baseline sample.
        let p = BaseCurve {
            duration: 10.0,
            dt: 0.1,
            period: 2.0,
            depth: 0.02,
            transit_duration: 1.85,
        };
        let series = generate_base(&p).unwrap();
        let windows = series.transit_windows(TRANSIT_EPS);
        assert!(!windows.is_empty());
        let baseline = series.flux().iter().filter(|&&f| f >= 1.0 - TRANSIT_EPS).count();
        assert!(baseline >= 5, "one baseline sample per cycle, got {baseline}");
    }
}

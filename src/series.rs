//! Sample series: paired, validated time/flux columns.
//!
//! The foundational data type shared by the generator and the search engine.
//! A [`SampleSeries`] is immutable after construction; every operation that
//! perturbs a curve returns a new series. Transit windows are derived freshly
//! from the flux mask each time they are needed, never cached.

use crate::error::{DataError, Error, ValidationError};
use serde::Serialize;

/// Flux threshold below baseline that marks a sample as in-transit.
pub const TRANSIT_EPS: f64 = 0.01;

/// Minimum number of samples a series must carry.
pub const MIN_SAMPLES: usize = 2;

/// Paired time/flux columns of equal length with finite values.
///
/// Flux is normalized brightness: `1.0` is the out-of-transit baseline. Time
/// values need not be uniformly spaced or sorted.
#[derive(Clone, Debug, Serialize)]
pub struct SampleSeries {
    time: Vec<f64>,
    flux: Vec<f64>,
}

impl SampleSeries {
    /// Build a series, checking the structural invariants: equal column
    /// lengths, at least [`MIN_SAMPLES`] samples, all values finite.
    pub fn new(time: Vec<f64>, flux: Vec<f64>) -> Result<Self, DataError> {
        if time.len() != flux.len() {
            return Err(DataError::LengthMismatch {
                time: time.len(),
                flux: flux.len(),
            });
        }
        if time.len() < MIN_SAMPLES {
            return Err(DataError::TooShort {
                found: time.len(),
                minimum: MIN_SAMPLES,
            });
        }
        for (index, &t) in time.iter().enumerate() {
            if !t.is_finite() {
                return Err(DataError::NonFinite {
                    column: "time",
                    index,
                });
            }
        }
        for (index, &f) in flux.iter().enumerate() {
            if !f.is_finite() {
                return Err(DataError::NonFinite {
                    column: "flux",
                    index,
                });
            }
        }
        Ok(Self { time, flux })
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// A validated series is never empty; provided for completeness.
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Observation times.
    pub fn time(&self) -> &[f64] {
        &self.time
    }

    /// Normalized flux values.
    pub fn flux(&self) -> &[f64] {
        &self.flux
    }

    /// Span between the earliest and latest observation.
    pub fn time_span(&self) -> f64 {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &t in &self.time {
            min = min.min(t);
            max = max.max(t);
        }
        max - min
    }

    /// Consume the series into its columns.
    pub fn into_columns(self) -> (Vec<f64>, Vec<f64>) {
        (self.time, self.flux)
    }

    /// Maximal contiguous index ranges where `flux < 1 - eps`.
    ///
    /// Windows are recomputed from the mask on every call; the canonical
    /// threshold is [`TRANSIT_EPS`].
    pub fn transit_windows(&self, eps: f64) -> Vec<TransitWindow> {
        let threshold = 1.0 - eps;
        let mut windows = Vec::new();
        let mut start: Option<usize> = None;
        for (i, &f) in self.flux.iter().enumerate() {
            let in_transit = f < threshold;
            match (in_transit, start) {
                (true, None) => start = Some(i),
                (false, Some(s)) => {
                    windows.push(TransitWindow { start: s, end: i - 1 });
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(s) = start {
            windows.push(TransitWindow {
                start: s,
                end: self.flux.len() - 1,
            });
        }
        windows
    }
}

/// Contiguous inclusive index range of in-transit samples.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TransitWindow {
    pub start: usize,
    pub end: usize,
}

impl TransitWindow {
    /// Number of samples the window spans.
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// A window always contains at least one sample.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Index of the middle sample.
    pub fn center_index(&self) -> usize {
        (self.start + self.end) / 2
    }
}

/// Fold a series at `period`, returning phases in `[0, 1)` and the flux
/// reordered by phase. The sort is stable, so samples sharing a phase keep
/// their observation order.
pub fn phase_fold(series: &SampleSeries, period: f64) -> Result<(Vec<f64>, Vec<f64>), Error> {
    if !(period > 0.0) || !period.is_finite() {
        return Err(ValidationError::NonPositive {
            parameter: "period",
            value: period,
        }
        .into());
    }
    let time = series.time();
    let flux = series.flux();
    let mut order: Vec<usize> = (0..time.len()).collect();
    let folded: Vec<f64> = time.iter().map(|&t| t.rem_euclid(period)).collect();
    order.sort_by(|&a, &b| folded[a].total_cmp(&folded[b]));

    let phase = order.iter().map(|&i| folded[i] / period).collect();
    let sorted_flux = order.iter().map(|&i| flux[i]).collect();
    Ok((phase, sorted_flux))
}

/// Level several observation segments onto a common flux baseline and merge
/// them into one time-sorted series.
///
/// Each segment is shifted by the difference between its flux median and the
/// mean of all segment medians, which flattens per-segment offsets before the
/// curves are concatenated.
pub fn level_flux(segments: &[SampleSeries]) -> Result<SampleSeries, Error> {
    if segments.is_empty() {
        return Err(ValidationError::TooFewSamples {
            found: 0,
            minimum: 1,
        }
        .into());
    }

    let medians: Vec<f64> = segments.iter().map(|s| median(s.flux())).collect();
    let grand = medians.iter().sum::<f64>() / medians.len() as f64;

    let mut time = Vec::new();
    let mut flux = Vec::new();
    for (segment, &m) in segments.iter().zip(&medians) {
        let offset = m - grand;
        time.extend_from_slice(segment.time());
        flux.extend(segment.flux().iter().map(|&f| f - offset));
    }

    let mut order: Vec<usize> = (0..time.len()).collect();
    order.sort_by(|&a, &b| time[a].total_cmp(&time[b]));
    let time_sorted = order.iter().map(|&i| time[i]).collect();
    let flux_sorted = order.iter().map(|&i| flux[i]).collect();

    SampleSeries::new(time_sorted, flux_sorted).map_err(Error::from)
}

fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        0.5 * (sorted[n / 2 - 1] + sorted[n / 2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(time: Vec<f64>, flux: Vec<f64>) -> SampleSeries {
        SampleSeries::new(time, flux).expect("valid series")
    }

    #[test]
    fn rejects_structural_violations() {
        assert!(matches!(
            SampleSeries::new(vec![0.0, 1.0], vec![1.0]),
            Err(DataError::LengthMismatch { .. })
        ));
        assert!(matches!(
            SampleSeries::new(vec![0.0], vec![1.0]),
            Err(DataError::TooShort { .. })
        ));
        assert!(matches!(
            SampleSeries::new(vec![0.0, f64::NAN], vec![1.0, 1.0]),
            Err(DataError::NonFinite { column: "time", .. })
        ));
        assert!(matches!(
            SampleSeries::new(vec![0.0, 1.0], vec![1.0, f64::INFINITY]),
            Err(DataError::NonFinite { column: "flux", .. })
        ));
    }

    #[test]
    fn transit_windows_are_maximal_ranges() {
        let flux = vec![1.0, 0.98, 0.98, 1.0, 1.0, 0.97, 1.0, 0.95];
        let time = (0..flux.len()).map(|i| i as f64).collect();
        let s = series(time, flux);

        let windows = s.transit_windows(TRANSIT_EPS);
        assert_eq!(
            windows,
            vec![
                TransitWindow { start: 1, end: 2 },
                TransitWindow { start: 5, end: 5 },
                TransitWindow { start: 7, end: 7 },
            ]
        );
        assert_eq!(windows[0].len(), 2);
        assert_eq!(windows[0].center_index(), 1);
    }

    #[test]
    fn no_windows_on_flat_baseline() {
        let s = series(vec![0.0, 1.0, 2.0], vec![1.0, 1.0, 0.995]);
        assert!(s.transit_windows(TRANSIT_EPS).is_empty());
    }

    #[test]
    fn phase_fold_orders_by_phase() {
        let s = series(vec![0.0, 1.5, 2.0, 3.5], vec![1.0, 0.9, 1.0, 0.9]);
        let (phase, flux) = phase_fold(&s, 2.0).unwrap();
        assert_eq!(phase, vec![0.0, 0.0, 0.75, 0.75]);
        // Stable: t=0.0 precedes t=2.0, t=1.5 precedes t=3.5.
        assert_eq!(flux, vec![1.0, 1.0, 0.9, 0.9]);
    }

    #[test]
    fn phase_fold_rejects_bad_period() {
        let s = series(vec![0.0, 1.0], vec![1.0, 1.0]);
        assert!(phase_fold(&s, 0.0).is_err());
        assert!(phase_fold(&s, f64::NAN).is_err());
    }

    #[test]
    fn level_flux_aligns_segment_medians() {
        let a = series(vec![0.0, 1.0, 2.0], vec![10.0, 10.0, 10.0]);
        let b = series(vec![3.0, 4.0, 5.0], vec![20.0, 20.0, 20.0]);
        let merged = level_flux(&[a, b]).unwrap();
        // Grand level is 15: both segments land on it.
        assert!(merged.flux().iter().all(|&f| (f - 15.0).abs() < 1e-12));
        assert_eq!(merged.time(), &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn level_flux_sorts_interleaved_times() {
        let a = series(vec![0.0, 2.0], vec![1.0, 1.0]);
        let b = series(vec![1.0, 3.0], vec![1.0, 1.0]);
        let merged = level_flux(&[a, b]).unwrap();
        assert_eq!(merged.time(), &[0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn level_flux_rejects_empty_input() {
        assert!(level_flux(&[]).is_err());
    }
}

//! Phase-fold dispersion scorer.
//!
//! At the true period, phase-folded flux is locally smooth: neighbours in
//! phase are also neighbours in brightness, so successive differences stay
//! small. A wrong or aliased period scrambles the fold and the differences
//! jump. The statistic is the population variance of the successive
//! differences of the phase-sorted flux; lower is better.

use crate::error::{Error, ValidationError};
use crate::series::SampleSeries;

/// Score a candidate period against a series. Lower scores indicate a cleaner
/// fold.
///
/// Folds `time mod period`, stable-sorts the samples by folded time, and
/// returns the population variance of the successive differences of the
/// sorted flux. `period` must be positive and finite.
pub fn fold_score(series: &SampleSeries, period: f64) -> Result<f64, Error> {
    if !(period > 0.0) || !period.is_finite() {
        return Err(ValidationError::NonPositive {
            parameter: "period",
            value: period,
        }
        .into());
    }
    let time = series.time();
    let flux = series.flux();
    if time.len() < 2 {
        return Err(ValidationError::TooFewSamples {
            found: time.len(),
            minimum: 2,
        }
        .into());
    }

    let folded: Vec<f64> = time.iter().map(|&t| t.rem_euclid(period)).collect();
    let mut order: Vec<usize> = (0..folded.len()).collect();
    order.sort_by(|&a, &b| folded[a].total_cmp(&folded[b]));

    let diffs: Vec<f64> = order
        .windows(2)
        .map(|pair| flux[pair[1]] - flux[pair[0]])
        .collect();
    Ok(population_variance(&diffs))
}

fn population_variance(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n
}

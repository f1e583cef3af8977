//! Score smoothing.
//!
//! Two denoisers, both stateless:
//!
//! - [`forward_moving_average`]: the scan-noise suppressor applied to scored
//!   period grids before minimum selection. The window looks forward, not
//!   centred, so the smoothed minimum never lags the true minimum by more
//!   than the window length. The interval-narrowing logic relies on that.
//! - [`gaussian_smooth`]: a same-length Gaussian convolution for denoising
//!   raw flux ahead of a search.

use crate::error::{Error, ValidationError};

/// Mean of `scores[i .. min(i + window, n)]` at every position.
///
/// `window` must be at least 1; a window of 1 returns the input unchanged.
pub fn forward_moving_average(scores: &[f64], window: usize) -> Result<Vec<f64>, Error> {
    if window < 1 {
        return Err(ValidationError::NonPositive {
            parameter: "window",
            value: window as f64,
        }
        .into());
    }
    let n = scores.len();
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let end = (i + window).min(n);
        let slice = &scores[i..end];
        out.push(slice.iter().sum::<f64>() / slice.len() as f64);
    }
    Ok(out)
}

/// Same-length convolution with a normalized Gaussian kernel.
///
/// Inputs shorter than the kernel are returned unchanged. Edges are
/// zero-padded, matching a `same`-mode convolution.
pub fn gaussian_smooth(flux: &[f64], window: usize, sigma: f64) -> Result<Vec<f64>, Error> {
    if window < 1 {
        return Err(ValidationError::NonPositive {
            parameter: "window",
            value: window as f64,
        }
        .into());
    }
    if !(sigma > 0.0) || !sigma.is_finite() {
        return Err(ValidationError::NonPositive {
            parameter: "sigma",
            value: sigma,
        }
        .into());
    }
    let n = flux.len();
    if n < window {
        return Ok(flux.to_vec());
    }

    let half = (window / 2) as isize;
    let mut kernel: Vec<f64> = (0..window)
        .map(|i| {
            let x = i as isize - half;
            (-((x * x) as f64) / (2.0 * sigma * sigma)).exp()
        })
        .collect();
    let sum: f64 = kernel.iter().sum();
    for k in &mut kernel {
        *k /= sum;
    }

    // out[i] = sum_m kernel[m] * flux[i + offset - m], zero outside bounds.
    let offset = (window as isize - 1) / 2;
    let mut out = Vec::with_capacity(n);
    for i in 0..n as isize {
        let mut acc = 0.0;
        for (m, &k) in kernel.iter().enumerate() {
            let j = i + offset - m as isize;
            if j >= 0 && j < n as isize {
                acc += k * flux[j as usize];
            }
        }
        out.push(acc);
    }
    Ok(out)
}

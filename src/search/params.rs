//! Search configuration.

use crate::error::ValidationError;
use crate::search::ParallelScoreOptions;
use serde::{Deserialize, Serialize};

/// Parameters of one search invocation.
///
/// Defaults mirror the reference configuration: five rounds starting at a
/// resolution of `10^-2`. The round-1 grid length `(hi - lo) / resolution`
/// is capped by `max_grid_len`; wide bounds with a fine initial resolution
/// are rejected up front rather than silently exploding.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    /// Inclusive period interval to search, `0 < low < high`.
    pub bounds: (f64, f64),
    /// Number of refinement rounds; at least 1.
    pub max_rounds: usize,
    /// Round-1 resolution is `10^-exponent`.
    pub initial_resolution_exponent: u32,
    /// Upper bound on the round-1 candidate count.
    pub max_grid_len: usize,
    /// Parallel scoring toggle and threshold.
    pub parallel: ParallelScoreOptions,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            bounds: (2.0, 3.0),
            max_rounds: 5,
            initial_resolution_exponent: 2,
            max_grid_len: 1_000_000,
            parallel: ParallelScoreOptions::default(),
        }
    }
}

impl SearchParams {
    /// Resolution of the first round's grid.
    pub fn initial_resolution(&self) -> f64 {
        10f64.powi(-(self.initial_resolution_exponent as i32))
    }

    /// Reject malformed parameters before any scoring work begins.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let (low, high) = self.bounds;
        if !(low > 0.0) || !low.is_finite() {
            return Err(ValidationError::NonPositive {
                parameter: "bounds.low",
                value: low,
            });
        }
        if !high.is_finite() || high <= low {
            return Err(ValidationError::EmptyInterval { low, high });
        }
        if self.max_rounds < 1 {
            return Err(ValidationError::NonPositive {
                parameter: "max_rounds",
                value: self.max_rounds as f64,
            });
        }
        if self.max_grid_len < 1 {
            return Err(ValidationError::NonPositive {
                parameter: "max_grid_len",
                value: self.max_grid_len as f64,
            });
        }
        let candidates = grid_len(low, high, self.initial_resolution());
        if candidates > self.max_grid_len {
            return Err(ValidationError::GridTooLarge {
                candidates,
                maximum: self.max_grid_len,
            });
        }
        Ok(())
    }
}

/// Length of the inclusive arithmetic grid over `[low, high]` at `step`.
pub(crate) fn grid_len(low: f64, high: f64, step: f64) -> usize {
    ((high - low) / step + 1e-9).floor() as usize + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(SearchParams::default().validate().is_ok());
        assert!((SearchParams::default().initial_resolution() - 0.01).abs() < 1e-15);
    }

    #[test]
    fn rejects_malformed_bounds() {
        let mut p = SearchParams::default();
        p.bounds = (3.0, 2.0);
        assert!(matches!(
            p.validate(),
            Err(ValidationError::EmptyInterval { .. })
        ));
        p.bounds = (2.0, 2.0);
        assert!(p.validate().is_err());
        p.bounds = (0.0, 2.0);
        assert!(p.validate().is_err());
        p.bounds = (-1.0, 2.0);
        assert!(p.validate().is_err());
    }

    #[test]
    fn rejects_zero_rounds() {
        let mut p = SearchParams::default();
        p.max_rounds = 0;
        assert!(p.validate().is_err());
    }

    #[test]
    fn grid_cap_is_enforced() {
        let mut p = SearchParams::default();
        p.bounds = (1.0, 100.0);
        p.initial_resolution_exponent = 6;
        p.max_grid_len = 1_000_000;
        assert!(matches!(
            p.validate(),
            Err(ValidationError::GridTooLarge { .. })
        ));
    }

    #[test]
    fn grid_len_is_inclusive() {
        assert_eq!(grid_len(2.0, 3.0, 0.01), 101);
        assert_eq!(grid_len(1.0, 2.0, 0.5), 3);
        assert_eq!(grid_len(2.0, 3.0, 0.1), 11);
    }
}

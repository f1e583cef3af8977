//! Error taxonomy for the period-search core.
//!
//! Three local failure kinds, all synchronous and detected before partial
//! work: [`ValidationError`] for out-of-domain parameters, [`DataError`] for
//! series that break structural invariants, and [`ComputationError`] for
//! degenerate numeric cases. [`Error`] unifies them for the public entry
//! points.

use std::fmt;

/// Malformed or out-of-domain parameters. Always caller-fixable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ValidationError {
    /// A parameter that must be strictly positive is not.
    NonPositive { parameter: &'static str, value: f64 },
    /// A parameter that must be non-negative is negative.
    Negative { parameter: &'static str, value: f64 },
    /// A parameter constrained to the open interval (0, 1) lies outside it.
    NotInOpenUnit { parameter: &'static str, value: f64 },
    /// The transit occupies the whole cycle or more.
    DurationExceedsPeriod { transit_duration: f64, period: f64 },
    /// Search bounds with `high <= low`.
    EmptyInterval { low: f64, high: f64 },
    /// The round-1 candidate grid would exceed the configured cap.
    GridTooLarge { candidates: usize, maximum: usize },
    /// Not enough samples to evaluate the statistic.
    TooFewSamples { found: usize, minimum: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NonPositive { parameter, value } => {
                write!(f, "{parameter} must be positive (got {value})")
            }
            ValidationError::Negative { parameter, value } => {
                write!(f, "{parameter} must be non-negative (got {value})")
            }
            ValidationError::NotInOpenUnit { parameter, value } => {
                write!(f, "{parameter} must lie in (0, 1) (got {value})")
            }
            ValidationError::DurationExceedsPeriod {
                transit_duration,
                period,
            } => write!(
                f,
                "transit duration {transit_duration} must be shorter than the period {period}"
            ),
            ValidationError::EmptyInterval { low, high } => {
                write!(f, "search interval is empty ({low} >= {high})")
            }
            ValidationError::GridTooLarge {
                candidates,
                maximum,
            } => write!(
                f,
                "candidate grid of {candidates} exceeds the cap of {maximum}; widen the \
                 initial resolution or narrow the bounds"
            ),
            ValidationError::TooFewSamples { found, minimum } => {
                write!(f, "too few samples ({found} < {minimum})")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// An input series fails a structural invariant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DataError {
    /// Time and flux columns differ in length.
    LengthMismatch { time: usize, flux: usize },
    /// Fewer samples than the series invariant allows.
    TooShort { found: usize, minimum: usize },
    /// A NaN or infinity in one of the columns.
    NonFinite { column: &'static str, index: usize },
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::LengthMismatch { time, flux } => {
                write!(f, "column length mismatch (time={time}, flux={flux})")
            }
            DataError::TooShort { found, minimum } => {
                write!(f, "series too short ({found} < {minimum})")
            }
            DataError::NonFinite { column, index } => {
                write!(f, "non-finite {column} value at index {index}")
            }
        }
    }
}

impl std::error::Error for DataError {}

/// Degenerate numeric cases that prevent a meaningful result.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ComputationError {
    /// No sample dips below the transit threshold.
    NoTransitDetected,
    /// The successive-difference sequence is empty.
    DegenerateDiff { samples: usize },
}

impl fmt::Display for ComputationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComputationError::NoTransitDetected => {
                write!(f, "no transit detected in the input light curve")
            }
            ComputationError::DegenerateDiff { samples } => {
                write!(f, "difference sequence is empty ({samples} samples)")
            }
        }
    }
}

impl std::error::Error for ComputationError {}

/// Unified error for the public operations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Error {
    Validation(ValidationError),
    Data(DataError),
    Computation(ComputationError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Validation(e) => write!(f, "validation: {e}"),
            Error::Data(e) => write!(f, "data: {e}"),
            Error::Computation(e) => write!(f, "computation: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Validation(e) => Some(e),
            Error::Data(e) => Some(e),
            Error::Computation(e) => Some(e),
        }
    }
}

impl From<ValidationError> for Error {
    fn from(e: ValidationError) -> Self {
        Error::Validation(e)
    }
}

impl From<DataError> for Error {
    fn from(e: DataError) -> Self {
        Error::Data(e)
    }
}

impl From<ComputationError> for Error {
    fn from(e: ComputationError) -> Self {
        Error::Computation(e)
    }
}

/// Require `value > 0`, naming the parameter on failure.
pub(crate) fn ensure_positive(parameter: &'static str, value: f64) -> Result<(), ValidationError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NonPositive { parameter, value })
    }
}

/// Require `value >= 0`, naming the parameter on failure.
pub(crate) fn ensure_non_negative(
    parameter: &'static str,
    value: f64,
) -> Result<(), ValidationError> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::Negative { parameter, value })
    }
}

/// Require `0 < value < 1`, naming the parameter on failure.
pub(crate) fn ensure_open_unit(
    parameter: &'static str,
    value: f64,
) -> Result<(), ValidationError> {
    if value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(ValidationError::NotInOpenUnit { parameter, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_parameter() {
        let err = ValidationError::NonPositive {
            parameter: "dt",
            value: -0.5,
        };
        assert!(err.to_string().contains("dt"));

        let err = Error::from(DataError::LengthMismatch { time: 3, flux: 4 });
        assert!(err.to_string().contains("mismatch"));
    }

    #[test]
    fn nan_rejected_by_positivity_check() {
        assert!(ensure_positive("period", f64::NAN).is_err());
        assert!(ensure_positive("period", f64::INFINITY).is_err());
        assert!(ensure_positive("period", 1.0).is_ok());
        assert!(ensure_non_negative("amplitude", 0.0).is_ok());
        assert!(ensure_non_negative("amplitude", -1e-9).is_err());
        assert!(ensure_open_unit("depth", 0.5).is_ok());
        assert!(ensure_open_unit("depth", 1.0).is_err());
    }
}

//! Error types for structured error handling.
//!
//! This module provides:
//! - `RandomVariableError`: Errors from elementwise random-variable arithmetic
//! - `CalculationError`: Errors raised by a simulation model that cannot
//!   evaluate a requested quantity

use thiserror::Error;

/// Random-variable arithmetic errors.
///
/// Two populations can only be combined path-for-path when they hold the
/// same number of paths. Mixing sizes is a programming or configuration
/// error and aborts the computation that triggered it.
///
/// # Variants
/// - `DimensionMismatch`: Binary operation on populations of different size
///
/// # Examples
/// ```
/// use pricer_core::types::RandomVariableError;
///
/// let err = RandomVariableError::DimensionMismatch { left: 1000, right: 500 };
/// assert_eq!(
///     format!("{}", err),
///     "Dimension mismatch: left operand has 1000 paths, right operand has 500"
/// );
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RandomVariableError {
    /// Binary operation on two populations with different path counts.
    #[error("Dimension mismatch: left operand has {left} paths, right operand has {right}")]
    DimensionMismatch {
        /// Path count of the left-hand operand
        left: usize,
        /// Path count of the right-hand operand
        right: usize,
    },
}

/// Errors raised by a simulation model that cannot produce a requested value.
///
/// Products never recover from these; they are passed through to the caller
/// of the valuation unchanged.
///
/// # Variants
/// - `TimeOutOfRange`: Requested time lies outside the simulated horizon
/// - `TimeNotOnGrid`: Requested time lies inside the horizon but is not a simulation time
/// - `UnknownAsset`: Asset index not simulated by the model
/// - `ModelFailure`: Any other failure to evaluate the model
///
/// # Examples
/// ```
/// use pricer_core::types::CalculationError;
///
/// let err = CalculationError::UnknownAsset { index: 3, count: 1 };
/// assert_eq!(format!("{}", err), "Unknown asset index 3: model simulates 1 asset(s)");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculationError {
    /// Requested time is outside the simulated horizon.
    #[error("Time {time} outside simulated horizon [{start}, {end}]")]
    TimeOutOfRange {
        /// The requested time
        time: f64,
        /// First simulated time
        start: f64,
        /// Last simulated time
        end: f64,
    },

    /// Requested time is inside the horizon but not a simulation time.
    #[error("Time {time} is not a simulation time of the model")]
    TimeNotOnGrid {
        /// The requested time
        time: f64,
    },

    /// Asset index is not simulated by the model.
    #[error("Unknown asset index {index}: model simulates {count} asset(s)")]
    UnknownAsset {
        /// The requested asset index
        index: usize,
        /// Number of assets the model simulates
        count: usize,
    },

    /// The model failed to produce a value for another reason.
    #[error("Model failure: {0}")]
    ModelFailure(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_display() {
        let err = RandomVariableError::DimensionMismatch {
            left: 10,
            right: 20,
        };
        let msg = err.to_string();
        assert!(msg.contains("10 paths"));
        assert!(msg.contains("has 20"));
    }

    #[test]
    fn test_calculation_error_display() {
        let err = CalculationError::TimeOutOfRange {
            time: 2.5,
            start: 0.0,
            end: 1.0,
        };
        assert_eq!(
            err.to_string(),
            "Time 2.5 outside simulated horizon [0, 1]"
        );

        let err = CalculationError::TimeNotOnGrid { time: 0.3 };
        assert!(err.to_string().contains("0.3"));

        let err = CalculationError::ModelFailure("diverged".to_string());
        assert_eq!(err.to_string(), "Model failure: diverged");
    }

    #[test]
    fn test_errors_are_std_errors() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<RandomVariableError>();
        assert_error::<CalculationError>();
    }
}

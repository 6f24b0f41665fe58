//! Valuation error types.
//!
//! [`ValuationError`] is the single error a product's `value` can return.
//! It carries the two failure kinds of a valuation:
//! - the model could not produce an asset value or numéraire
//! - two random variables with different path counts were combined

use pricer_core::types::{CalculationError, RandomVariableError};
use thiserror::Error;

/// Error returned by Monte Carlo product valuation.
///
/// # Examples
/// ```
/// use pricer_core::types::{CalculationError, RandomVariableError};
/// use pricer_pricing::ValuationError;
///
/// let err: ValuationError = CalculationError::TimeNotOnGrid { time: 0.5 }.into();
/// assert!(matches!(err, ValuationError::Calculation(_)));
///
/// let err: ValuationError = RandomVariableError::DimensionMismatch { left: 1000, right: 500 }.into();
/// assert_eq!(err, ValuationError::DimensionMismatch { left: 1000, right: 500 });
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValuationError {
    /// The model failed to provide a requested quantity.
    #[error("Calculation failed: {0}")]
    Calculation(#[from] CalculationError),

    /// Random variables of different path counts were combined.
    #[error("Dimension mismatch: {left} paths against {right} paths")]
    DimensionMismatch {
        /// Path count of the left operand
        left: usize,
        /// Path count of the right operand
        right: usize,
    },
}

impl From<RandomVariableError> for ValuationError {
    fn from(err: RandomVariableError) -> Self {
        match err {
            RandomVariableError::DimensionMismatch { left, right } => {
                ValuationError::DimensionMismatch { left, right }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculation_error_is_wrapped_unchanged() {
        let cause = CalculationError::UnknownAsset { index: 3, count: 1 };
        let err = ValuationError::from(cause.clone());
        assert_eq!(err, ValuationError::Calculation(cause));
        assert!(err.to_string().contains("Unknown asset index 3"));
    }

    #[test]
    fn test_dimension_mismatch_conversion() {
        let err: ValuationError = RandomVariableError::DimensionMismatch {
            left: 1000,
            right: 500,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Dimension mismatch: 1000 paths against 500 paths"
        );
    }

    #[test]
    fn test_source_chain() {
        use std::error::Error;

        let err = ValuationError::Calculation(CalculationError::ModelFailure("boom".into()));
        assert!(err.source().is_some());
    }
}

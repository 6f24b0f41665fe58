//! Error types for simulation model construction.
//!
//! This module defines structured error types for configuration validation
//! of Monte Carlo simulations and table-driven scenario models. Runtime query
//! failures use [`CalculationError`](pricer_core::types::CalculationError).

use thiserror::Error;

/// Configuration error for simulation models.
///
/// These errors occur during construction when invalid parameters are provided.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Path count outside valid range [1, 10_000_000].
    #[error("Invalid path count {0}: must be in range [1, 10_000_000]")]
    InvalidPathCount(usize),

    /// Step count outside valid range [1, 10_000].
    #[error("Invalid step count {0}: must be in range [1, 10_000]")]
    InvalidStepCount(usize),

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },

    /// Simulation times are empty, non-finite, or not strictly increasing.
    #[error("Invalid time grid: {0}")]
    InvalidTimeGrid(String),

    /// Random variable registered with the wrong number of paths.
    #[error("Path count mismatch: model has {expected} paths, value has {actual}")]
    PathCountMismatch {
        /// Path count of the model.
        expected: usize,
        /// Path count of the supplied value.
        actual: usize,
    },
}

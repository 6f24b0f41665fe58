//! Core value and error types.
//!
//! This module provides:
//! - `random_variable`: The path-indexed [`RandomVariable`] and its [`Operand`] conversions
//! - `error`: Structured error types for random-variable arithmetic and model queries
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`RandomVariable`], [`Operand`], [`PARALLEL_THRESHOLD`] from `random_variable`
//! - [`RandomVariableError`], [`CalculationError`] from `error`

pub mod error;
pub mod random_variable;

// Re-export commonly used types at module level
pub use error::{CalculationError, RandomVariableError};
pub use random_variable::{Operand, RandomVariable, PARALLEL_THRESHOLD};

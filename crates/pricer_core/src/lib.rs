//! # pricer_core: Path-wise Random Variables for Monte Carlo Valuation
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core serves as the bottom layer of the pricing workspace, providing:
//! - The [`RandomVariable`](types::RandomVariable) value type: a whole simulated
//!   population of paths (or a deterministic constant) as one immutable value
//!   with elementwise arithmetic (`types::random_variable`)
//! - Operand conversions so scalars and random variables mix freely (`types::Operand`)
//! - Error types: `RandomVariableError`, `CalculationError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - thiserror: Error derivation
//! - rayon: Data parallelism over large path populations
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::types::RandomVariable;
//!
//! // Terminal asset values on four paths
//! let underlying = RandomVariable::from_values(vec![90.0, 100.0, 110.0, 120.0]);
//!
//! // Call payoff max(S - K, 0) without a per-path loop
//! let payoff = underlying.subtract(100.0).unwrap().floor(0.0);
//! assert_eq!(payoff.to_vec(), vec![0.0, 0.0, 10.0, 20.0]);
//! assert_eq!(payoff.average(), 7.5);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod types;

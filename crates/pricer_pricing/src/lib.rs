//! # Pricer Pricing (Layer 3: Valuation)
//!
//! ## Layer 3 Role
//!
//! pricer_pricing values products against the simulation models of
//! Layer 2:
//! - Products express their payoff with random-variable arithmetic
//! - Results stay per path until a caller asks for a [`ValuationResult`]
//! - Model failures and size mismatches surface as [`ValuationError`]
//!
//! ## Valuation
//!
//! For a European call with maturity `T` and strike `K`, the value at
//! evaluation time `t` on each path is
//! ```text
//! V(t) = max(S(T) - K, 0) / N(T) * N(t)
//! ```
//! where `S` is the simulated asset and `N` the model's numéraire.
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_core::types::RandomVariable;
//! use pricer_models::models::ScenarioModel;
//! use pricer_pricing::products::{AssetMonteCarloProduct, EuropeanCall};
//!
//! let model = ScenarioModel::new(1)
//!     .unwrap()
//!     .with_asset_value(1.0, 0, RandomVariable::constant(110.0))
//!     .unwrap()
//!     .with_numeraire(1.0, RandomVariable::constant(1.05))
//!     .unwrap()
//!     .with_numeraire(0.0, RandomVariable::constant(1.0))
//!     .unwrap();
//!
//! let result = EuropeanCall::new(1.0, 100.0).price(&model).unwrap();
//! assert!((result.value - 9.523_809_523_809_524).abs() < 1e-12);
//! assert_eq!(result.std_error, 0.0);
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`ValuationResult`] and products

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod error;
pub mod products;
pub mod valuation;

pub use error::ValuationError;
pub use valuation::ValuationResult;

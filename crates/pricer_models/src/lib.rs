//! # Pricer Models (L2: Business Logic)
//!
//! Simulation models and analytical reference prices.
//!
//! This crate provides:
//! - The [`AssetModelSimulation`](models::AssetModelSimulation) contract that
//!   Monte Carlo products query for asset values and numéraires
//! - A Monte Carlo Black-Scholes model simulated on a uniform time grid
//! - A table-driven scenario model for explicit path sets
//! - Seeded random number generation ([`rng::PricerRng`])
//! - Black-Scholes closed-form prices for validation
//!
//! ## Design Principles
//!
//! - **Simulate once, query many**: paths are generated at construction and
//!   handed out as shared random variables
//! - **Builder pattern** for validated configuration
//! - **Reproducibility**: equal seeds give identical paths
//!
//! ## Example
//!
//! ```
//! use pricer_models::analytical::BlackScholes;
//! use pricer_models::models::{
//!     AssetModelSimulation, BlackScholesParams, MonteCarloBlackScholesModel, MonteCarloConfig,
//! };
//!
//! let config = MonteCarloConfig::builder()
//!     .n_paths(20_000)
//!     .n_steps(1)
//!     .horizon(1.0)
//!     .seed(7)
//!     .build()
//!     .unwrap();
//! let model = MonteCarloBlackScholesModel::new(BlackScholesParams::default(), config).unwrap();
//!
//! let payoff = model.asset_value(1.0, 0).unwrap().subtract(100.0).unwrap().floor(0.0);
//! let mc = payoff.divide(&model.numeraire(1.0).unwrap()).unwrap().average();
//! let exact = BlackScholes::new(100.0, 0.05, 0.2).unwrap().price_call(100.0, 1.0).unwrap();
//! assert!((mc - exact).abs() < 0.5);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod models;
pub mod rng;

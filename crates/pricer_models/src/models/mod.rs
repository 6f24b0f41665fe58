//! Simulation models consumed by Monte Carlo products.
//!
//! This module provides:
//! - [`AssetModelSimulation`]: the model contract (asset values and numéraire)
//! - [`TimeDiscretization`]: simulation time grids with tolerant lookup
//! - [`MonteCarloConfig`]: builder-validated path and grid configuration
//! - [`MonteCarloBlackScholesModel`]: simulated geometric Brownian motion
//! - [`ScenarioModel`]: explicit table-driven scenarios
//!
//! ## Example
//!
//! ```
//! use pricer_models::models::{
//!     AssetModelSimulation, BlackScholesParams, MonteCarloBlackScholesModel, MonteCarloConfig,
//! };
//!
//! let config = MonteCarloConfig::builder()
//!     .n_paths(100)
//!     .n_steps(12)
//!     .horizon(1.0)
//!     .build()
//!     .unwrap();
//! let model = MonteCarloBlackScholesModel::new(BlackScholesParams::default(), config).unwrap();
//! assert_eq!(model.time_discretization().number_of_times(), 13);
//! ```

pub mod black_scholes;
pub mod config;
pub mod error;
pub mod scenario;
pub mod simulation;
pub mod time_discretization;

pub use black_scholes::{BlackScholesParams, MonteCarloBlackScholesModel};
pub use config::{MonteCarloConfig, MonteCarloConfigBuilder, DEFAULT_SEED, MAX_PATHS, MAX_STEPS};
pub use error::ConfigError;
pub use scenario::ScenarioModel;
pub use simulation::AssetModelSimulation;
pub use time_discretization::{TimeDiscretization, TIME_TOLERANCE};

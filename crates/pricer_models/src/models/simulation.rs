//! Asset model contract consumed by Monte Carlo products.
//!
//! This module defines [`AssetModelSimulation`], the minimal interface a
//! simulation model must expose for a product to value itself: simulated
//! asset values and the numéraire at a given time, both as
//! [`RandomVariable`]s over the same path population.
//!
//! ## Design Philosophy
//!
//! - **Model/product separation**: products never see paths or grids
//!   directly, only the two queries below
//! - **Fallible queries**: times off the simulated grid or unknown assets
//!   produce a [`CalculationError`] rather than a panic
//! - **Generic consumers**: products take `M: AssetModelSimulation + ?Sized`,
//!   so concrete models use static dispatch and trait objects still work
//!
//! ## Example
//!
//! ```
//! use pricer_core::types::{CalculationError, RandomVariable};
//! use pricer_models::models::AssetModelSimulation;
//!
//! struct Frozen;
//!
//! impl AssetModelSimulation for Frozen {
//!     fn asset_value(&self, _time: f64, _asset_index: usize)
//!         -> Result<RandomVariable, CalculationError> {
//!         Ok(RandomVariable::constant(100.0))
//!     }
//!     fn numeraire(&self, _time: f64) -> Result<RandomVariable, CalculationError> {
//!         Ok(RandomVariable::constant(1.0))
//!     }
//!     fn number_of_paths(&self) -> usize {
//!         1
//!     }
//!     fn model_name(&self) -> &'static str {
//!         "Frozen"
//!     }
//! }
//!
//! let s = Frozen.asset_value(1.0, 0).unwrap();
//! assert_eq!(s.average(), 100.0);
//! ```

use pricer_core::types::{CalculationError, RandomVariable};

/// Simulation model supplying asset values and numéraire per path.
///
/// Implementations must return random variables whose size is either 1
/// (deterministic) or [`number_of_paths`](Self::number_of_paths).
pub trait AssetModelSimulation {
    /// Simulated value of asset `asset_index` at `time`.
    ///
    /// # Errors
    ///
    /// Returns `CalculationError` if `time` is not a simulated time or
    /// `asset_index` is not simulated by the model.
    fn asset_value(&self, time: f64, asset_index: usize)
        -> Result<RandomVariable, CalculationError>;

    /// Numéraire at `time`.
    ///
    /// # Errors
    ///
    /// Returns `CalculationError` if the numéraire is unavailable at `time`.
    fn numeraire(&self, time: f64) -> Result<RandomVariable, CalculationError>;

    /// Number of simulated paths.
    fn number_of_paths(&self) -> usize;

    /// Number of simulated assets.
    fn number_of_assets(&self) -> usize {
        1
    }

    /// Human-readable model name for logging.
    fn model_name(&self) -> &'static str;
}

impl<M: AssetModelSimulation + ?Sized> AssetModelSimulation for &M {
    fn asset_value(
        &self,
        time: f64,
        asset_index: usize,
    ) -> Result<RandomVariable, CalculationError> {
        (**self).asset_value(time, asset_index)
    }

    fn numeraire(&self, time: f64) -> Result<RandomVariable, CalculationError> {
        (**self).numeraire(time)
    }

    fn number_of_paths(&self) -> usize {
        (**self).number_of_paths()
    }

    fn number_of_assets(&self) -> usize {
        (**self).number_of_assets()
    }

    fn model_name(&self) -> &'static str {
        (**self).model_name()
    }
}

//! Monte Carlo Black-Scholes asset model.
//!
//! The asset follows geometric Brownian motion under the bank-account
//! measure:
//! ```text
//! dS = r * S * dt + sigma * S * dW
//! ```
//! Paths are generated once, at construction, with the exact log-space step
//! ```text
//! S(t+dt) = S(t) * exp((r - 0.5*sigma^2)*dt + sigma*sqrt(dt)*Z)
//! ```
//! and stored as one random variable per grid time. The numéraire is the
//! deterministic bank account `exp(r * t)`.
//!
//! ## Example
//!
//! ```
//! use pricer_models::models::{
//!     AssetModelSimulation, BlackScholesParams, MonteCarloBlackScholesModel, MonteCarloConfig,
//! };
//!
//! let params = BlackScholesParams::new(100.0, 0.05, 0.2).unwrap();
//! let config = MonteCarloConfig::builder()
//!     .n_paths(1_000)
//!     .n_steps(4)
//!     .horizon(1.0)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//! let model = MonteCarloBlackScholesModel::new(params, config).unwrap();
//!
//! let s_t = model.asset_value(1.0, 0).unwrap();
//! assert_eq!(s_t.size(), 1_000);
//! assert!(model.asset_value(0.6, 0).is_err());
//! ```

use pricer_core::types::{CalculationError, RandomVariable};
use tracing::debug;

use super::config::MonteCarloConfig;
use super::error::ConfigError;
use super::simulation::AssetModelSimulation;
use super::time_discretization::TimeDiscretization;
use crate::rng::PricerRng;

/// Black-Scholes model parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlackScholesParams {
    /// Initial spot price
    pub spot: f64,
    /// Risk-free rate (annualised, continuously compounded)
    pub rate: f64,
    /// Volatility (annualised)
    pub volatility: f64,
}

impl BlackScholesParams {
    /// Create new parameters with validation.
    ///
    /// # Arguments
    /// * `spot` - Initial spot price (must be positive)
    /// * `rate` - Risk-free rate (must be finite)
    /// * `volatility` - Volatility (must be non-negative)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidParameter` naming the offending value.
    pub fn new(spot: f64, rate: f64, volatility: f64) -> Result<Self, ConfigError> {
        if !(spot > 0.0 && spot.is_finite()) {
            return Err(ConfigError::InvalidParameter {
                name: "spot",
                value: format!("{} must be positive and finite", spot),
            });
        }
        if !rate.is_finite() {
            return Err(ConfigError::InvalidParameter {
                name: "rate",
                value: format!("{} must be finite", rate),
            });
        }
        if !(volatility >= 0.0 && volatility.is_finite()) {
            return Err(ConfigError::InvalidParameter {
                name: "volatility",
                value: format!("{} must be non-negative and finite", volatility),
            });
        }
        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }
}

impl Default for BlackScholesParams {
    fn default() -> Self {
        Self {
            spot: 100.0,
            rate: 0.05,
            volatility: 0.2,
        }
    }
}

/// Single-asset Black-Scholes model with simulated paths.
///
/// The value at time 0 is stored as a constant (every path starts at spot);
/// every later grid time holds a population of `n_paths` values.
#[derive(Clone, Debug)]
pub struct MonteCarloBlackScholesModel {
    params: BlackScholesParams,
    config: MonteCarloConfig,
    grid: TimeDiscretization,
    asset_values: Vec<RandomVariable>,
}

impl MonteCarloBlackScholesModel {
    /// Simulates all paths for `params` on the grid described by `config`.
    ///
    /// Normals are drawn path by path from a [`PricerRng`] seeded with
    /// [`MonteCarloConfig::effective_seed`], so equal inputs give equal paths.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parameters or configuration are invalid.
    pub fn new(params: BlackScholesParams, config: MonteCarloConfig) -> Result<Self, ConfigError> {
        let params = BlackScholesParams::new(params.spot, params.rate, params.volatility)?;
        config.validate()?;
        let grid = config.time_discretization()?;

        let n_paths = config.n_paths();
        let n_steps = config.n_steps();
        let dt = config.dt();
        let seed = config.effective_seed();

        debug!(
            spot = params.spot,
            rate = params.rate,
            volatility = params.volatility,
            n_paths,
            n_steps,
            horizon = config.horizon(),
            seed,
            "Simulating Black-Scholes paths"
        );

        let drift = (params.rate - 0.5 * params.volatility * params.volatility) * dt;
        let diffusion = params.volatility * dt.sqrt();
        let log_spot = params.spot.ln();

        let mut columns = vec![vec![0.0; n_paths]; n_steps];
        let mut normals = vec![0.0; n_steps];
        let mut rng = PricerRng::from_seed(seed);

        for path in 0..n_paths {
            rng.fill_normal(&mut normals);
            let mut log_s = log_spot;
            for (column, z) in columns.iter_mut().zip(normals.iter()) {
                log_s += drift + diffusion * z;
                column[path] = log_s.exp();
            }
        }

        let mut asset_values = Vec::with_capacity(n_steps + 1);
        asset_values.push(RandomVariable::constant(params.spot));
        asset_values.extend(columns.into_iter().map(RandomVariable::from_values));

        Ok(Self {
            params,
            config,
            grid,
            asset_values,
        })
    }

    /// Model parameters.
    #[inline]
    pub fn params(&self) -> &BlackScholesParams {
        &self.params
    }

    /// Simulation configuration.
    #[inline]
    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    /// Simulation grid.
    #[inline]
    pub fn time_discretization(&self) -> &TimeDiscretization {
        &self.grid
    }

    fn out_of_range(&self, time: f64) -> CalculationError {
        CalculationError::TimeOutOfRange {
            time,
            start: self.grid.first(),
            end: self.grid.last(),
        }
    }
}

impl AssetModelSimulation for MonteCarloBlackScholesModel {
    fn asset_value(
        &self,
        time: f64,
        asset_index: usize,
    ) -> Result<RandomVariable, CalculationError> {
        if asset_index != 0 {
            return Err(CalculationError::UnknownAsset {
                index: asset_index,
                count: 1,
            });
        }
        if !self.grid.covers(time) {
            return Err(self.out_of_range(time));
        }
        self.grid
            .time_index(time)
            .and_then(|i| self.asset_values.get(i))
            .cloned()
            .ok_or(CalculationError::TimeNotOnGrid { time })
    }

    fn numeraire(&self, time: f64) -> Result<RandomVariable, CalculationError> {
        if !self.grid.covers(time) {
            return Err(self.out_of_range(time));
        }
        Ok(RandomVariable::constant((self.params.rate * time).exp()))
    }

    fn number_of_paths(&self) -> usize {
        self.config.n_paths()
    }

    fn model_name(&self) -> &'static str {
        "MonteCarloBlackScholes"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn model(n_paths: usize, n_steps: usize, seed: u64) -> MonteCarloBlackScholesModel {
        let config = MonteCarloConfig::builder()
            .n_paths(n_paths)
            .n_steps(n_steps)
            .horizon(1.0)
            .seed(seed)
            .build()
            .unwrap();
        MonteCarloBlackScholesModel::new(BlackScholesParams::default(), config).unwrap()
    }

    #[test]
    fn test_params_validation() {
        assert!(BlackScholesParams::new(100.0, 0.05, 0.2).is_ok());
        assert!(BlackScholesParams::new(100.0, -0.01, 0.0).is_ok());
        assert!(matches!(
            BlackScholesParams::new(0.0, 0.05, 0.2),
            Err(ConfigError::InvalidParameter { name: "spot", .. })
        ));
        assert!(matches!(
            BlackScholesParams::new(100.0, f64::NAN, 0.2),
            Err(ConfigError::InvalidParameter { name: "rate", .. })
        ));
        assert!(matches!(
            BlackScholesParams::new(100.0, 0.05, -0.2),
            Err(ConfigError::InvalidParameter {
                name: "volatility",
                ..
            })
        ));
    }

    #[test]
    fn test_new_rejects_invalid_public_params() {
        let params = BlackScholesParams {
            spot: -1.0,
            ..Default::default()
        };
        let config = MonteCarloConfig::builder()
            .n_paths(10)
            .n_steps(1)
            .horizon(1.0)
            .build()
            .unwrap();
        assert!(MonteCarloBlackScholesModel::new(params, config).is_err());
    }

    #[test]
    fn test_asset_value_shapes() {
        let m = model(500, 4, 1);
        let s0 = m.asset_value(0.0, 0).unwrap();
        assert!(s0.is_deterministic());
        assert_eq!(s0.average(), 100.0);

        for t in [0.25, 0.5, 0.75, 1.0] {
            let s = m.asset_value(t, 0).unwrap();
            assert_eq!(s.size(), 500);
            assert!(s.min() > 0.0);
        }
        assert_eq!(m.number_of_paths(), 500);
        assert_eq!(m.number_of_assets(), 1);
    }

    #[test]
    fn test_asset_value_errors() {
        let m = model(10, 4, 1);
        assert_eq!(
            m.asset_value(0.3, 0).unwrap_err(),
            CalculationError::TimeNotOnGrid { time: 0.3 }
        );
        assert!(matches!(
            m.asset_value(1.5, 0),
            Err(CalculationError::TimeOutOfRange { .. })
        ));
        assert!(matches!(
            m.asset_value(-0.25, 0),
            Err(CalculationError::TimeOutOfRange { .. })
        ));
        assert_eq!(
            m.asset_value(1.0, 1).unwrap_err(),
            CalculationError::UnknownAsset { index: 1, count: 1 }
        );
    }

    #[test]
    fn test_numeraire_is_bank_account() {
        let m = model(10, 4, 1);
        let n = m.numeraire(0.6).unwrap();
        assert!(n.is_deterministic());
        assert_relative_eq!(n.average(), (0.05_f64 * 0.6).exp(), epsilon = 1e-15);
        assert_eq!(m.numeraire(0.0).unwrap().average(), 1.0);
        assert!(m.numeraire(2.0).is_err());
    }

    #[test]
    fn test_same_seed_same_paths() {
        let a = model(100, 3, 17);
        let b = model(100, 3, 17);
        let c = model(100, 3, 18);
        let ta = a.time_discretization().last();
        assert_eq!(
            a.asset_value(ta, 0).unwrap().to_vec(),
            b.asset_value(ta, 0).unwrap().to_vec()
        );
        assert_ne!(
            a.asset_value(ta, 0).unwrap().to_vec(),
            c.asset_value(ta, 0).unwrap().to_vec()
        );
    }

    #[test]
    fn test_zero_volatility_is_deterministic_growth() {
        let params = BlackScholesParams::new(100.0, 0.03, 0.0).unwrap();
        let config = MonteCarloConfig::builder()
            .n_paths(8)
            .n_steps(10)
            .horizon(2.0)
            .build()
            .unwrap();
        let m = MonteCarloBlackScholesModel::new(params, config).unwrap();
        let s = m.asset_value(2.0, 0).unwrap();
        for v in s.to_vec() {
            assert_relative_eq!(v, 100.0 * (0.06_f64).exp(), max_relative = 1e-12);
        }
    }

    #[test]
    fn test_discounted_asset_mean() {
        let m = model(200_000, 1, 2024);
        let discounted = m
            .asset_value(1.0, 0)
            .unwrap()
            .divide(&m.numeraire(1.0).unwrap())
            .unwrap();
        let tolerance = 4.0 * discounted.standard_error();
        assert!(
            (discounted.average() - 100.0).abs() < tolerance,
            "mean {} outside {} of spot",
            discounted.average(),
            tolerance
        );
    }

    #[test]
    fn test_model_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MonteCarloBlackScholesModel>();
    }
}

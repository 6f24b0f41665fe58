//! European call and put on a single simulated asset.
//!
//! Both read asset 0 at maturity, clamp the intrinsic value at zero, and
//! discount with [`discount_payoff`]:
//! ```text
//! V(t) = max(S(T) - K, 0) / N(T) * N(t)     (call)
//! V(t) = max(K - S(T), 0) / N(T) * N(t)     (put)
//! ```

use pricer_core::types::RandomVariable;
use pricer_models::models::AssetModelSimulation;
use tracing::debug;

use super::traits::{discount_payoff, AssetMonteCarloProduct};
use crate::error::ValuationError;

/// European call option.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::RandomVariable;
/// use pricer_models::models::ScenarioModel;
/// use pricer_pricing::products::{AssetMonteCarloProduct, EuropeanCall};
///
/// let model = ScenarioModel::new(1).unwrap()
///     .with_asset_value(1.0, 0, RandomVariable::constant(110.0)).unwrap()
///     .with_numeraire(1.0, RandomVariable::constant(1.05)).unwrap()
///     .with_numeraire(0.0, RandomVariable::constant(1.0)).unwrap();
///
/// let call = EuropeanCall::new(1.0, 100.0);
/// let value = call.value(0.0, &model).unwrap();
/// assert!((value.average() - 10.0 / 1.05).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EuropeanCall {
    maturity: f64,
    strike: f64,
}

impl EuropeanCall {
    /// Creates a call paying `max(S(maturity) - strike, 0)` at `maturity`.
    #[inline]
    pub fn new(maturity: f64, strike: f64) -> Self {
        Self { maturity, strike }
    }

    /// Strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }
}

impl AssetMonteCarloProduct for EuropeanCall {
    fn value<M: AssetModelSimulation + ?Sized>(
        &self,
        evaluation_time: f64,
        model: &M,
    ) -> Result<RandomVariable, ValuationError> {
        debug!(
            product = self.type_name(),
            model = model.model_name(),
            maturity = self.maturity,
            strike = self.strike,
            evaluation_time,
            "Valuing product"
        );
        let underlying = model.asset_value(self.maturity, 0)?;
        let payoff = underlying.subtract(self.strike)?.floor(0.0);
        discount_payoff(&payoff, self.maturity, evaluation_time, model)
    }

    #[inline]
    fn maturity(&self) -> f64 {
        self.maturity
    }

    #[inline]
    fn type_name(&self) -> &'static str {
        "EuropeanCall"
    }
}

/// European put option.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EuropeanPut {
    maturity: f64,
    strike: f64,
}

impl EuropeanPut {
    /// Creates a put paying `max(strike - S(maturity), 0)` at `maturity`.
    #[inline]
    pub fn new(maturity: f64, strike: f64) -> Self {
        Self { maturity, strike }
    }

    /// Strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }
}

impl AssetMonteCarloProduct for EuropeanPut {
    fn value<M: AssetModelSimulation + ?Sized>(
        &self,
        evaluation_time: f64,
        model: &M,
    ) -> Result<RandomVariable, ValuationError> {
        debug!(
            product = self.type_name(),
            model = model.model_name(),
            maturity = self.maturity,
            strike = self.strike,
            evaluation_time,
            "Valuing product"
        );
        let underlying = model.asset_value(self.maturity, 0)?;
        let payoff = underlying.subtract(self.strike)?.negate().floor(0.0);
        discount_payoff(&payoff, self.maturity, evaluation_time, model)
    }

    #[inline]
    fn maturity(&self) -> f64 {
        self.maturity
    }

    #[inline]
    fn type_name(&self) -> &'static str {
        "EuropeanPut"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_core::types::CalculationError;
    use pricer_models::models::ScenarioModel;

    fn one_path(asset: f64) -> ScenarioModel {
        ScenarioModel::new(1)
            .unwrap()
            .with_asset_value(1.0, 0, RandomVariable::constant(asset))
            .unwrap()
            .with_numeraire(1.0, RandomVariable::constant(1.05))
            .unwrap()
            .with_numeraire(0.0, RandomVariable::constant(1.0))
            .unwrap()
    }

    #[test]
    fn test_call_in_the_money() {
        let value = EuropeanCall::new(1.0, 100.0)
            .value(0.0, &one_path(110.0))
            .unwrap();
        assert_relative_eq!(value.average(), 9.523_809_523_809_524, epsilon = 1e-12);
    }

    #[test]
    fn test_call_out_of_the_money() {
        let value = EuropeanCall::new(1.0, 150.0)
            .value(0.0, &one_path(110.0))
            .unwrap();
        assert_eq!(value.average(), 0.0);
    }

    #[test]
    fn test_put_values() {
        let put = EuropeanPut::new(1.0, 150.0);
        let value = put.value(0.0, &one_path(110.0)).unwrap();
        assert_relative_eq!(value.average(), 40.0 / 1.05, epsilon = 1e-12);

        let value = EuropeanPut::new(1.0, 100.0)
            .value(0.0, &one_path(110.0))
            .unwrap();
        assert_eq!(value.average(), 0.0);
    }

    #[test]
    fn test_call_population() {
        let model = ScenarioModel::new(4)
            .unwrap()
            .with_asset_value(
                2.0,
                0,
                RandomVariable::from_values(vec![80.0, 100.0, 120.0, 140.0]),
            )
            .unwrap()
            .with_numeraire(2.0, RandomVariable::constant(2.0))
            .unwrap()
            .with_numeraire(0.0, RandomVariable::constant(1.0))
            .unwrap();
        let value = EuropeanCall::new(2.0, 100.0).value(0.0, &model).unwrap();
        assert_eq!(value.to_vec(), vec![0.0, 0.0, 10.0, 20.0]);
    }

    #[test]
    fn test_missing_asset_propagates() {
        let err = EuropeanCall::new(2.0, 100.0)
            .value(0.0, &one_path(110.0))
            .unwrap_err();
        assert_eq!(
            err,
            ValuationError::Calculation(CalculationError::TimeNotOnGrid { time: 2.0 })
        );
    }

    #[test]
    fn test_accessors() {
        let call = EuropeanCall::new(0.5, 95.0);
        assert_eq!(call.maturity(), 0.5);
        assert_eq!(call.strike(), 95.0);
        assert_eq!(call.type_name(), "EuropeanCall");
        assert_eq!(EuropeanPut::new(0.5, 95.0).type_name(), "EuropeanPut");
    }
}

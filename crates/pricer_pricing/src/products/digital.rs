//! Cash-or-nothing digital call.
//!
//! Pays one unit of currency at maturity on every path where the asset
//! finishes at or above the strike.

use pricer_core::types::RandomVariable;
use pricer_models::models::AssetModelSimulation;
use tracing::debug;

use super::traits::{discount_payoff, AssetMonteCarloProduct};
use crate::error::ValuationError;

/// Digital call paying 1 when `S(maturity) >= strike`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DigitalCall {
    maturity: f64,
    strike: f64,
}

impl DigitalCall {
    /// Creates a digital call on asset 0.
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

impl AssetMonteCarloProduct for DigitalCall {
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
        let payoff = underlying.subtract(self.strike)?.choose(1.0, 0.0)?;
        discount_payoff(&payoff, self.maturity, evaluation_time, model)
    }

    #[inline]
    fn maturity(&self) -> f64 {
        self.maturity
    }

    #[inline]
    fn type_name(&self) -> &'static str {
        "DigitalCall"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_models::models::ScenarioModel;

    #[test]
    fn test_digital_pays_at_and_above_strike() {
        let model = ScenarioModel::new(3)
            .unwrap()
            .with_asset_value(1.0, 0, RandomVariable::from_values(vec![99.0, 100.0, 101.0]))
            .unwrap()
            .with_numeraire(1.0, RandomVariable::constant(2.0))
            .unwrap()
            .with_numeraire(0.0, RandomVariable::constant(1.0))
            .unwrap();
        let value = DigitalCall::new(1.0, 100.0).value(0.0, &model).unwrap();
        assert_eq!(value.to_vec(), vec![0.0, 0.5, 0.5]);

        let price = DigitalCall::new(1.0, 100.0).price(&model).unwrap();
        assert!((price.value - 1.0 / 3.0).abs() < 1e-15);
    }

    #[test]
    fn test_deterministic_inputs_stay_constant() {
        let model = ScenarioModel::new(10)
            .unwrap()
            .with_asset_value(1.0, 0, RandomVariable::constant(120.0))
            .unwrap()
            .with_numeraire(1.0, RandomVariable::constant(1.0))
            .unwrap()
            .with_numeraire(0.0, RandomVariable::constant(1.0))
            .unwrap();
        let value = DigitalCall::new(1.0, 100.0).value(0.0, &model).unwrap();
        assert!(value.is_deterministic());
        assert_eq!(value.average(), 1.0);
    }
}

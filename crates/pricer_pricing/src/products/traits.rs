//! Monte Carlo product capability.
//!
//! A product values itself against any [`AssetModelSimulation`]: it reads
//! the asset at its maturity, builds the per-path payoff, and re-expresses
//! that payoff in units of the numéraire at the evaluation time.
//!
//! # Layer Boundaries
//!
//! Products live in L3 and see models only through the L2 contract. They
//! hold no simulation state and can be reused across models and calls.

use pricer_core::types::RandomVariable;
use pricer_models::models::AssetModelSimulation;

use crate::error::ValuationError;
use crate::valuation::ValuationResult;

/// Product valued path by path on a simulation model.
///
/// # Required Methods
///
/// - [`value`](AssetMonteCarloProduct::value) - per-path value at an evaluation time
/// - [`maturity`](AssetMonteCarloProduct::maturity) - payment time in years
/// - [`type_name`](AssetMonteCarloProduct::type_name) - product label for logs and output
///
/// # Provided Methods
///
/// - [`price`](AssetMonteCarloProduct::price) - mean and standard error of the value at time 0
pub trait AssetMonteCarloProduct {
    /// Per-path value of the product at `evaluation_time`, in units of
    /// currency at that time.
    ///
    /// No expectation is taken: the result holds one value per path, or a
    /// constant when every input was deterministic.
    ///
    /// # Errors
    ///
    /// - `ValuationError::Calculation` if the model cannot supply a quantity
    /// - `ValuationError::DimensionMismatch` if model outputs disagree in size
    fn value<M: AssetModelSimulation + ?Sized>(
        &self,
        evaluation_time: f64,
        model: &M,
    ) -> Result<RandomVariable, ValuationError>;

    /// Payment time in years from the model's time origin.
    fn maturity(&self) -> f64;

    /// Product label.
    fn type_name(&self) -> &'static str;

    /// Monte Carlo estimate of the value at time 0.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`value`](AssetMonteCarloProduct::value).
    fn price<M: AssetModelSimulation + ?Sized>(
        &self,
        model: &M,
    ) -> Result<ValuationResult, ValuationError> {
        let values = self.value(0.0, model)?;
        Ok(ValuationResult::from_model_values(
            &values,
            model.number_of_paths(),
        ))
    }
}

/// Converts a payoff paid at `maturity` into its value at `evaluation_time`.
///
/// Computes `payoff / N(maturity) * N(evaluation_time)`, dividing before
/// multiplying.
///
/// # Errors
///
/// Propagates numéraire failures and size mismatches.
pub fn discount_payoff<M: AssetModelSimulation + ?Sized>(
    payoff: &RandomVariable,
    maturity: f64,
    evaluation_time: f64,
    model: &M,
) -> Result<RandomVariable, ValuationError> {
    let numeraire_at_maturity = model.numeraire(maturity)?;
    let normalised = payoff.divide(&numeraire_at_maturity)?;
    let numeraire_at_evaluation = model.numeraire(evaluation_time)?;
    Ok(normalised.multiply(&numeraire_at_evaluation)?)
}

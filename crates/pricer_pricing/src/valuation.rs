//! Monte Carlo valuation summary.
//!
//! [`ValuationResult`] reduces the per-path values returned by a product to
//! the estimate a caller reports: the sample mean, its standard error, and
//! the path count.

use pricer_core::types::RandomVariable;

/// Summary statistics of a Monte Carlo valuation.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::RandomVariable;
/// use pricer_pricing::ValuationResult;
///
/// let values = RandomVariable::from_values(vec![0.0, 10.0, 20.0, 10.0]);
/// let result = ValuationResult::from_random_variable(&values);
///
/// assert_eq!(result.value, 10.0);
/// assert_eq!(result.n_paths, 4);
/// println!("Value: {} +/- {}", result.value, result.confidence_95());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValuationResult {
    /// Sample mean over paths.
    pub value: f64,
    /// Standard error of the mean (zero for deterministic values).
    pub std_error: f64,
    /// Number of simulated paths the estimate stands for.
    pub n_paths: usize,
}

impl ValuationResult {
    /// Summarises a random variable of per-path values.
    ///
    /// `n_paths` counts realisations, so a constant reports one path. Use
    /// [`from_model_values`](Self::from_model_values) when the model's path
    /// count is known.
    pub fn from_random_variable(values: &RandomVariable) -> Self {
        Self {
            value: values.average(),
            std_error: values.standard_error(),
            n_paths: values.size(),
        }
    }

    /// Summarises values produced on a model with `model_paths` paths.
    ///
    /// A constant stands for the same value on every path and reports
    /// `model_paths`; a population reports its own size.
    pub fn from_model_values(values: &RandomVariable, model_paths: usize) -> Self {
        let mut result = Self::from_random_variable(values);
        if values.is_deterministic() {
            result.n_paths = model_paths;
        }
        result
    }

    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }

    /// Returns the 99% confidence interval half-width.
    #[inline]
    pub fn confidence_99(&self) -> f64 {
        2.576 * self.std_error
    }

    /// Whether `reference` lies within `k` standard errors of the estimate.
    #[inline]
    pub fn is_within(&self, reference: f64, k: f64) -> bool {
        (self.value - reference).abs() <= k * self.std_error
    }
}

impl From<&RandomVariable> for ValuationResult {
    fn from(values: &RandomVariable) -> Self {
        Self::from_random_variable(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_population() {
        let values = RandomVariable::from_values(vec![1.0, 2.0, 3.0, 4.0]);
        let result = ValuationResult::from_random_variable(&values);
        assert_eq!(result.value, 2.5);
        assert_eq!(result.n_paths, 4);
        // sample variance 5/3, standard error sqrt(5/12)
        assert_relative_eq!(result.std_error, (5.0_f64 / 12.0).sqrt(), epsilon = 1e-15);
    }

    #[test]
    fn test_from_constant() {
        let result: ValuationResult = (&RandomVariable::constant(9.5)).into();
        assert_eq!(result.value, 9.5);
        assert_eq!(result.std_error, 0.0);
        assert_eq!(result.n_paths, 1);
        assert!(result.is_within(9.5, 0.0));
    }

    #[test]
    fn test_from_model_values() {
        let constant = ValuationResult::from_model_values(&RandomVariable::constant(9.5), 10);
        assert_eq!(constant.n_paths, 10);
        assert_eq!(constant.std_error, 0.0);

        let values = RandomVariable::from_values(vec![1.0, 3.0]);
        let population = ValuationResult::from_model_values(&values, 10);
        assert_eq!(population.n_paths, 2);
        assert_eq!(population.value, 2.0);
    }

    #[test]
    fn test_confidence_intervals() {
        let result = ValuationResult {
            value: 10.0,
            std_error: 0.1,
            n_paths: 100,
        };
        assert_relative_eq!(result.confidence_95(), 0.196, epsilon = 1e-15);
        assert_relative_eq!(result.confidence_99(), 0.2576, epsilon = 1e-15);
        assert!(result.is_within(10.25, 3.0));
        assert!(!result.is_within(10.35, 3.0));
    }
}

//! Table-driven scenario model.
//!
//! [`ScenarioModel`] returns explicitly registered random variables instead
//! of simulating them. It is used to value products on hand-picked
//! scenarios and to exercise products against exact expectations.

use pricer_core::types::{CalculationError, RandomVariable};

use super::error::ConfigError;
use super::simulation::AssetModelSimulation;
use super::time_discretization::TIME_TOLERANCE;

type Entries = Vec<(f64, RandomVariable)>;

/// Deterministic model backed by `(time, asset) -> value` tables.
///
/// Registered populations must have exactly `number_of_paths` entries;
/// constants are always accepted. Registering a second value at the same
/// time replaces the first.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::RandomVariable;
/// use pricer_models::models::{AssetModelSimulation, ScenarioModel};
///
/// let model = ScenarioModel::new(1)
///     .unwrap()
///     .with_asset_value(1.0, 0, RandomVariable::constant(110.0))
///     .unwrap()
///     .with_numeraire(1.0, RandomVariable::constant(1.05))
///     .unwrap()
///     .with_numeraire(0.0, RandomVariable::constant(1.0))
///     .unwrap();
///
/// assert_eq!(model.asset_value(1.0, 0).unwrap().average(), 110.0);
/// assert!(model.asset_value(0.5, 0).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScenarioModel {
    n_paths: usize,
    assets: Vec<Entries>,
    numeraires: Entries,
}

fn lookup(entries: &Entries, time: f64) -> Option<&RandomVariable> {
    entries
        .iter()
        .find(|(t, _)| (t - time).abs() <= TIME_TOLERANCE)
        .map(|(_, value)| value)
}

fn insert(entries: &mut Entries, time: f64, value: RandomVariable) {
    match entries
        .iter_mut()
        .find(|(t, _)| (*t - time).abs() <= TIME_TOLERANCE)
    {
        Some(entry) => entry.1 = value,
        None => entries.push((time, value)),
    }
}

impl ScenarioModel {
    /// Creates an empty scenario over `n_paths` paths.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidPathCount` if `n_paths` is zero.
    pub fn new(n_paths: usize) -> Result<Self, ConfigError> {
        if n_paths == 0 {
            return Err(ConfigError::InvalidPathCount(n_paths));
        }
        Ok(Self {
            n_paths,
            assets: Vec::new(),
            numeraires: Vec::new(),
        })
    }

    fn check(&self, time: f64, value: &RandomVariable) -> Result<(), ConfigError> {
        if !time.is_finite() {
            return Err(ConfigError::InvalidTimeGrid(format!(
                "time {} is not finite",
                time
            )));
        }
        if !value.is_deterministic() && value.size() != self.n_paths {
            return Err(ConfigError::PathCountMismatch {
                expected: self.n_paths,
                actual: value.size(),
            });
        }
        Ok(())
    }

    /// Registers the value of asset `asset_index` at `time`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `time` is not finite or the population size
    /// differs from the model's path count.
    pub fn with_asset_value(
        mut self,
        time: f64,
        asset_index: usize,
        value: RandomVariable,
    ) -> Result<Self, ConfigError> {
        self.check(time, &value)?;
        if self.assets.len() <= asset_index {
            self.assets.resize_with(asset_index + 1, Vec::new);
        }
        insert(&mut self.assets[asset_index], time, value);
        Ok(self)
    }

    /// Registers the numéraire at `time`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `time` is not finite or the population size
    /// differs from the model's path count.
    pub fn with_numeraire(mut self, time: f64, value: RandomVariable) -> Result<Self, ConfigError> {
        self.check(time, &value)?;
        insert(&mut self.numeraires, time, value);
        Ok(self)
    }
}

impl AssetModelSimulation for ScenarioModel {
    fn asset_value(
        &self,
        time: f64,
        asset_index: usize,
    ) -> Result<RandomVariable, CalculationError> {
        let entries = self
            .assets
            .get(asset_index)
            .ok_or(CalculationError::UnknownAsset {
                index: asset_index,
                count: self.assets.len(),
            })?;
        lookup(entries, time)
            .cloned()
            .ok_or(CalculationError::TimeNotOnGrid { time })
    }

    fn numeraire(&self, time: f64) -> Result<RandomVariable, CalculationError> {
        lookup(&self.numeraires, time)
            .cloned()
            .ok_or(CalculationError::TimeNotOnGrid { time })
    }

    fn number_of_paths(&self) -> usize {
        self.n_paths
    }

    fn number_of_assets(&self) -> usize {
        self.assets.len()
    }

    fn model_name(&self) -> &'static str {
        "Scenario"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_with_tolerance() {
        let model = ScenarioModel::new(2)
            .unwrap()
            .with_asset_value(0.3, 0, RandomVariable::from_values(vec![1.0, 2.0]))
            .unwrap();
        let value = model.asset_value(0.1 + 0.2, 0).unwrap();
        assert_eq!(value.to_vec(), vec![1.0, 2.0]);
    }

    #[test]
    fn test_missing_entries() {
        let model = ScenarioModel::new(1)
            .unwrap()
            .with_asset_value(1.0, 0, RandomVariable::constant(1.0))
            .unwrap();
        assert_eq!(
            model.asset_value(2.0, 0).unwrap_err(),
            CalculationError::TimeNotOnGrid { time: 2.0 }
        );
        assert_eq!(
            model.asset_value(1.0, 1).unwrap_err(),
            CalculationError::UnknownAsset { index: 1, count: 1 }
        );
        assert_eq!(
            model.numeraire(1.0).unwrap_err(),
            CalculationError::TimeNotOnGrid { time: 1.0 }
        );
    }

    #[test]
    fn test_path_count_validation() {
        let result = ScenarioModel::new(3)
            .unwrap()
            .with_numeraire(1.0, RandomVariable::from_values(vec![1.0, 1.0]));
        assert_eq!(
            result.unwrap_err(),
            ConfigError::PathCountMismatch {
                expected: 3,
                actual: 2
            }
        );

        let ok = ScenarioModel::new(3)
            .unwrap()
            .with_numeraire(1.0, RandomVariable::constant(1.0));
        assert!(ok.is_ok());
    }

    #[test]
    fn test_invalid_construction() {
        assert_eq!(
            ScenarioModel::new(0).unwrap_err(),
            ConfigError::InvalidPathCount(0)
        );
        let result = ScenarioModel::new(1)
            .unwrap()
            .with_asset_value(f64::NAN, 0, RandomVariable::constant(1.0));
        assert!(matches!(result, Err(ConfigError::InvalidTimeGrid(_))));
    }

    #[test]
    fn test_replacement_and_multiple_assets() {
        let model = ScenarioModel::new(1)
            .unwrap()
            .with_asset_value(1.0, 0, RandomVariable::constant(1.0))
            .unwrap()
            .with_asset_value(1.0, 0, RandomVariable::constant(2.0))
            .unwrap()
            .with_asset_value(1.0, 2, RandomVariable::constant(5.0))
            .unwrap();
        assert_eq!(model.number_of_assets(), 3);
        assert_eq!(model.asset_value(1.0, 0).unwrap().average(), 2.0);
        assert_eq!(model.asset_value(1.0, 2).unwrap().average(), 5.0);
        assert!(matches!(
            model.asset_value(1.0, 1),
            Err(CalculationError::TimeNotOnGrid { .. })
        ));
    }
}

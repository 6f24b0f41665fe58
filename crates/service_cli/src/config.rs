//! Valuation configuration management
//!
//! Handles loading configuration from TOML files, environment variables, and
//! CLI arguments.
//!
//! Priority (highest to lowest):
//! 1. CLI arguments
//! 2. Environment variables (`PRICER_*`)
//! 3. Config file
//! 4. Default values

use std::path::Path;
use std::str::FromStr;

use clap::Args;
use pricer_models::models::{
    BlackScholesParams, ConfigError as ModelConfigError, MonteCarloConfig,
};
use pricer_pricing::products::{AssetProduct, ProductKind};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable error: {0}")]
    EnvError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error(transparent)]
    Model(#[from] ModelConfigError),
}

/// `[model]` section: Black-Scholes parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModelSection {
    pub spot: f64,
    pub rate: f64,
    pub volatility: f64,
}

impl Default for ModelSection {
    fn default() -> Self {
        let params = BlackScholesParams::default();
        Self {
            spot: params.spot,
            rate: params.rate,
            volatility: params.volatility,
        }
    }
}

/// `[simulation]` section: path count, grid and seed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationSection {
    pub paths: usize,
    pub steps: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for SimulationSection {
    fn default() -> Self {
        Self {
            paths: 10_000,
            steps: 1,
            seed: None,
        }
    }
}

/// `[product]` section: payoff and dates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProductSection {
    pub kind: ProductKind,
    pub strike: f64,
    pub maturity: f64,
    pub evaluation_time: f64,
}

impl Default for ProductSection {
    fn default() -> Self {
        Self {
            kind: ProductKind::Call,
            strike: 100.0,
            maturity: 1.0,
            evaluation_time: 0.0,
        }
    }
}

/// Full valuation configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValuationConfig {
    pub model: ModelSection,
    pub simulation: SimulationSection,
    pub product: ProductSection,
}

/// CLI overrides shared by `value` and `check`
#[derive(Debug, Clone, Default, Args)]
pub struct ConfigOverrides {
    /// Product type (call, put, digital)
    #[arg(long)]
    pub product: Option<ProductKind>,

    /// Strike price
    #[arg(long)]
    pub strike: Option<f64>,

    /// Maturity in years
    #[arg(long)]
    pub maturity: Option<f64>,

    /// Evaluation time in years
    #[arg(long)]
    pub evaluation_time: Option<f64>,

    /// Initial spot price
    #[arg(long)]
    pub spot: Option<f64>,

    /// Risk-free rate (continuously compounded)
    #[arg(long)]
    pub rate: Option<f64>,

    /// Volatility
    #[arg(long)]
    pub volatility: Option<f64>,

    /// Number of Monte Carlo paths
    #[arg(long)]
    pub paths: Option<usize>,

    /// Number of time steps up to maturity
    #[arg(long)]
    pub steps: Option<usize>,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,
}

fn parse_env<T: FromStr>(key: &str, raw: &str) -> Result<T, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::EnvError(format!("{}={} could not be parsed", key, raw)))
}

impl ValuationConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Render configuration as TOML
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::FileError(format!("Failed to render TOML: {}", e)))
    }

    /// Apply `PRICER_*` environment variables
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("PRICER_PRODUCT") {
            self.product.kind = ProductKind::from_str(&v).map_err(ConfigError::EnvError)?;
        }
        if let Some(v) = lookup("PRICER_STRIKE") {
            self.product.strike = parse_env("PRICER_STRIKE", &v)?;
        }
        if let Some(v) = lookup("PRICER_MATURITY") {
            self.product.maturity = parse_env("PRICER_MATURITY", &v)?;
        }
        if let Some(v) = lookup("PRICER_EVALUATION_TIME") {
            self.product.evaluation_time = parse_env("PRICER_EVALUATION_TIME", &v)?;
        }
        if let Some(v) = lookup("PRICER_SPOT") {
            self.model.spot = parse_env("PRICER_SPOT", &v)?;
        }
        if let Some(v) = lookup("PRICER_RATE") {
            self.model.rate = parse_env("PRICER_RATE", &v)?;
        }
        if let Some(v) = lookup("PRICER_VOLATILITY") {
            self.model.volatility = parse_env("PRICER_VOLATILITY", &v)?;
        }
        if let Some(v) = lookup("PRICER_PATHS") {
            self.simulation.paths = parse_env("PRICER_PATHS", &v)?;
        }
        if let Some(v) = lookup("PRICER_STEPS") {
            self.simulation.steps = parse_env("PRICER_STEPS", &v)?;
        }
        if let Some(v) = lookup("PRICER_SEED") {
            self.simulation.seed = Some(parse_env("PRICER_SEED", &v)?);
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &ConfigOverrides) {
        if let Some(kind) = cli.product {
            self.product.kind = kind;
        }
        if let Some(strike) = cli.strike {
            self.product.strike = strike;
        }
        if let Some(maturity) = cli.maturity {
            self.product.maturity = maturity;
        }
        if let Some(t) = cli.evaluation_time {
            self.product.evaluation_time = t;
        }
        if let Some(spot) = cli.spot {
            self.model.spot = spot;
        }
        if let Some(rate) = cli.rate {
            self.model.rate = rate;
        }
        if let Some(vol) = cli.volatility {
            self.model.volatility = vol;
        }
        if let Some(paths) = cli.paths {
            self.simulation.paths = paths;
        }
        if let Some(steps) = cli.steps {
            self.simulation.steps = steps;
        }
        if let Some(seed) = cli.seed {
            self.simulation.seed = Some(seed);
        }
    }

    /// Validate the configuration
    ///
    /// The simulation horizon is the product maturity, so the evaluation
    /// time must lie in `[0, maturity]`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let product = &self.product;
        if !product.strike.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "strike {} must be finite",
                product.strike
            )));
        }
        if !(product.evaluation_time >= 0.0 && product.evaluation_time <= product.maturity) {
            return Err(ConfigError::Invalid(format!(
                "evaluation time {} must lie in [0, maturity {}]",
                product.evaluation_time, product.maturity
            )));
        }
        self.black_scholes_params()?;
        self.monte_carlo_config()?;
        Ok(())
    }

    /// Model parameters
    pub fn black_scholes_params(&self) -> Result<BlackScholesParams, ModelConfigError> {
        BlackScholesParams::new(self.model.spot, self.model.rate, self.model.volatility)
    }

    /// Simulation configuration with the horizon set to the product maturity
    pub fn monte_carlo_config(&self) -> Result<MonteCarloConfig, ModelConfigError> {
        let builder = MonteCarloConfig::builder()
            .n_paths(self.simulation.paths)
            .n_steps(self.simulation.steps)
            .horizon(self.product.maturity);
        match self.simulation.seed {
            Some(seed) => builder.seed(seed).build(),
            None => builder.build(),
        }
    }

    /// Product described by the `[product]` section
    pub fn product(&self) -> AssetProduct {
        AssetProduct::new(
            self.product.kind,
            self.product.maturity,
            self.product.strike,
        )
    }
}

/// Build configuration from all sources
pub fn build_config(
    config_file: Option<&Path>,
    cli: &ConfigOverrides,
) -> Result<ValuationConfig, ConfigError> {
    let mut config = match config_file {
        Some(path) => ValuationConfig::from_file(path)?,
        None => ValuationConfig::default(),
    };
    config.apply_env()?;
    config.merge_with_cli(cli);
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = ValuationConfig::default();
        assert_eq!(config.model.spot, 100.0);
        assert_eq!(config.model.rate, 0.05);
        assert_eq!(config.model.volatility, 0.2);
        assert_eq!(config.simulation.paths, 10_000);
        assert_eq!(config.simulation.steps, 1);
        assert_eq!(config.simulation.seed, None);
        assert_eq!(config.product.kind, ProductKind::Call);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_toml() {
        let config = ValuationConfig::from_toml_str(
            r#"
            [model]
            volatility = 0.35

            [simulation]
            paths = 50000
            seed = 7

            [product]
            kind = "digital"
            strike = 95.0
            "#,
        )
        .unwrap();
        assert_eq!(config.model.volatility, 0.35);
        assert_eq!(config.model.spot, 100.0);
        assert_eq!(config.simulation.paths, 50_000);
        assert_eq!(config.simulation.seed, Some(7));
        assert_eq!(config.product.kind, ProductKind::Digital);
        assert_eq!(config.product.strike, 95.0);
        assert_eq!(config.product.maturity, 1.0);
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result = ValuationConfig::from_toml_str("[model]\nspt = 100.0\n");
        assert!(matches!(result, Err(ConfigError::FileError(_))));
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = ValuationConfig::default();
        config.simulation.seed = Some(11);
        config.product.kind = ProductKind::Put;
        let rendered = config.to_toml_string().unwrap();
        assert_eq!(ValuationConfig::from_toml_str(&rendered).unwrap(), config);
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("PRICER_PRODUCT", "put"),
            ("PRICER_STRIKE", "90"),
            ("PRICER_PATHS", "2000"),
            ("PRICER_SEED", "5"),
        ]
        .into_iter()
        .collect();

        let mut config = ValuationConfig::default();
        config
            .apply_env_with(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.product.kind, ProductKind::Put);
        assert_eq!(config.product.strike, 90.0);
        assert_eq!(config.simulation.paths, 2000);
        assert_eq!(config.simulation.seed, Some(5));
    }

    #[test]
    fn test_env_parse_error() {
        let mut config = ValuationConfig::default();
        let result = config.apply_env_with(|key| {
            (key == "PRICER_PATHS").then(|| "many".to_string())
        });
        assert!(matches!(result, Err(ConfigError::EnvError(_))));
    }

    #[test]
    fn test_cli_takes_precedence() {
        let vars: HashMap<&str, &str> = [("PRICER_STRIKE", "90")].into_iter().collect();
        let mut config = ValuationConfig::default();
        config
            .apply_env_with(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();
        config.merge_with_cli(&ConfigOverrides {
            strike: Some(120.0),
            steps: Some(12),
            ..Default::default()
        });
        assert_eq!(config.product.strike, 120.0);
        assert_eq!(config.simulation.steps, 12);
    }

    #[test]
    fn test_validation_failures() {
        let mut config = ValuationConfig::default();
        config.simulation.paths = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Model(ModelConfigError::InvalidPathCount(0)))
        ));

        let mut config = ValuationConfig::default();
        config.model.spot = -5.0;
        assert!(matches!(config.validate(), Err(ConfigError::Model(_))));

        let mut config = ValuationConfig::default();
        config.product.evaluation_time = 2.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = ValuationConfig::default();
        config.product.maturity = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_derived_objects() {
        let mut config = ValuationConfig::default();
        config.product.maturity = 2.0;
        config.simulation.steps = 8;
        config.simulation.seed = Some(3);

        let mc = config.monte_carlo_config().unwrap();
        assert_eq!(mc.horizon(), 2.0);
        assert_eq!(mc.n_steps(), 8);
        assert_eq!(mc.seed(), Some(3));
        assert_eq!(config.product().strike(), 100.0);
        assert_eq!(config.product().kind(), ProductKind::Call);
    }

    #[test]
    fn test_build_config_from_file() {
        let path = std::env::temp_dir().join(format!("pricer-config-{}.toml", std::process::id()));
        std::fs::write(&path, "[product]\nstrike = 105.0\n").unwrap();
        let config = build_config(
            Some(&path),
            &ConfigOverrides {
                paths: Some(1234),
                ..Default::default()
            },
        )
        .unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(config.product.strike, 105.0);
        assert_eq!(config.simulation.paths, 1234);
    }

    #[test]
    fn test_missing_file() {
        let result = ValuationConfig::from_file(Path::new("/nonexistent/pricer.toml"));
        assert!(matches!(result, Err(ConfigError::FileError(_))));
    }
}

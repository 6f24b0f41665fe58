//! CLI error types

use pricer_models::models::ConfigError as ModelConfigError;
use pricer_pricing::ValuationError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by `pricer` commands
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Model construction failed: {0}")]
    Model(#[from] ModelConfigError),

    #[error("Valuation failed: {0}")]
    Valuation(#[from] ValuationError),

    #[error("Output serialisation failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result alias for CLI commands
pub type Result<T> = std::result::Result<T, CliError>;

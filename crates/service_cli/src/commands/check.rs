//! Check command implementation
//!
//! Validates the merged configuration and prints it as TOML.

use tracing::info;

use crate::config::ValuationConfig;
use crate::Result;

/// Render the effective configuration
pub fn render(config: &ValuationConfig) -> Result<String> {
    config.validate()?;
    Ok(config.to_toml_string()?)
}

/// Run the check command
pub fn run(config: &ValuationConfig) -> Result<()> {
    info!("Checking configuration...");
    let rendered = render(config)?;
    println!("{}", rendered);
    info!(
        "Configuration valid: {} on {} paths",
        config.product().kind(),
        config.simulation.paths
    );
    Ok(())
}

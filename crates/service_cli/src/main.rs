//! Pricer CLI - Monte Carlo valuation of European asset derivatives
//!
//! # Commands
//!
//! - `pricer value` - Simulate Black-Scholes paths and value a call, put or digital
//! - `pricer check` - Validate and print the effective configuration
//!
//! # Configuration
//!
//! Settings come from an optional TOML file (`--config`), `PRICER_*`
//! environment variables and command-line flags, in increasing priority.
//! Logging honours `RUST_LOG`; `--verbose` switches to debug output.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use commands::value::OutputFormat;
use config::ConfigOverrides;

/// Monte Carlo asset derivative pricer
#[derive(Parser)]
#[command(name = "pricer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Value a product on simulated Black-Scholes paths
    Value {
        #[command(flatten)]
        overrides: ConfigOverrides,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Validate and print the effective configuration
    Check {
        #[command(flatten)]
        overrides: ConfigOverrides,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialise tracing
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Value { overrides, format } => {
            let config = config::build_config(cli.config.as_deref(), &overrides)?;
            commands::value::run(&config, format)
        }
        Commands::Check { overrides } => {
            let config = config::build_config(cli.config.as_deref(), &overrides)?;
            commands::check::run(&config)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pricer_pricing::products::ProductKind;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_value_command() {
        let cli = Cli::parse_from([
            "pricer",
            "value",
            "--product",
            "digital",
            "--strike",
            "95",
            "--paths",
            "2000",
            "--format",
            "json",
            "-v",
        ]);
        assert!(cli.verbose);
        match cli.command {
            Commands::Value { overrides, format } => {
                assert_eq!(overrides.product, Some(ProductKind::Digital));
                assert_eq!(overrides.strike, Some(95.0));
                assert_eq!(overrides.paths, Some(2000));
                assert_eq!(overrides.seed, None);
                assert_eq!(format, OutputFormat::Json);
            }
            Commands::Check { .. } => panic!("expected value command"),
        }
    }

    #[test]
    fn test_parse_check_with_config() {
        let cli = Cli::parse_from(["pricer", "--config", "pricer.toml", "check"]);
        assert_eq!(cli.config, Some(PathBuf::from("pricer.toml")));
        assert!(matches!(cli.command, Commands::Check { .. }));
    }

    #[test]
    fn test_rejects_unknown_product() {
        assert!(Cli::try_parse_from(["pricer", "value", "--product", "barrier"]).is_err());
    }
}

//! Value command implementation
//!
//! Simulates the Black-Scholes model, values the configured product and
//! prints the estimate next to the closed-form reference.

use clap::ValueEnum;
use pricer_models::analytical::BlackScholes;
use pricer_models::models::{AssetModelSimulation, MonteCarloBlackScholesModel};
use pricer_pricing::products::{AssetMonteCarloProduct, ProductKind};
use pricer_pricing::ValuationResult;
use serde::Serialize;
use tracing::{info, warn};

use crate::config::ValuationConfig;
use crate::Result;

/// Output format of the value command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Valuation outcome as printed or serialised
#[derive(Debug, Clone, Serialize)]
pub struct ValuationReport {
    pub product: &'static str,
    pub model: &'static str,
    pub strike: f64,
    pub maturity: f64,
    pub evaluation_time: f64,
    pub n_steps: usize,
    pub seed: u64,
    #[serde(flatten)]
    pub result: ValuationResult,
    pub confidence_95: f64,
    pub analytical: Option<f64>,
}

/// Closed-form value at the evaluation time, if the parameters admit one
fn analytical_reference(config: &ValuationConfig) -> Option<f64> {
    let model = &config.model;
    let product = &config.product;
    let bs = match BlackScholes::new(model.spot, model.rate, model.volatility) {
        Ok(bs) => bs,
        Err(e) => {
            warn!(error = %e, "Analytical reference unavailable");
            return None;
        }
    };
    let price = match product.kind {
        ProductKind::Call => bs.price_call(product.strike, product.maturity),
        ProductKind::Put => bs.price_put(product.strike, product.maturity),
        ProductKind::Digital => bs.price_digital_call(product.strike, product.maturity),
    };
    match price {
        Ok(p) => Some(p * (model.rate * product.evaluation_time).exp()),
        Err(e) => {
            warn!(error = %e, "Analytical reference unavailable");
            None
        }
    }
}

/// Simulate, value and summarise
pub fn evaluate(config: &ValuationConfig) -> Result<ValuationReport> {
    let mc_config = config.monte_carlo_config()?;
    let model = MonteCarloBlackScholesModel::new(config.black_scholes_params()?, mc_config)?;
    let product = config.product();

    let values = product.value(config.product.evaluation_time, &model)?;
    let result = ValuationResult::from_model_values(&values, model.number_of_paths());

    Ok(ValuationReport {
        product: product.type_name(),
        model: model.model_name(),
        strike: product.strike(),
        maturity: product.maturity(),
        evaluation_time: config.product.evaluation_time,
        n_steps: model.config().n_steps(),
        seed: model.config().effective_seed(),
        result,
        confidence_95: result.confidence_95(),
        analytical: analytical_reference(config),
    })
}

fn print_table(report: &ValuationReport) {
    let analytical = report
        .analytical
        .map(|v| format!("{:.6}", v))
        .unwrap_or_else(|| "n/a".to_string());

    println!("\n┌──────────────────┬──────────────────┐");
    println!("│ {:<16} │ {:>16} │", "Product", report.product);
    println!("│ {:<16} │ {:>16} │", "Model", report.model);
    println!("│ {:<16} │ {:>16} │", "Strike", report.strike);
    println!("│ {:<16} │ {:>16} │", "Maturity", report.maturity);
    println!("│ {:<16} │ {:>16} │", "Evaluation time", report.evaluation_time);
    println!("│ {:<16} │ {:>16} │", "Paths", report.result.n_paths);
    println!("│ {:<16} │ {:>16} │", "Steps", report.n_steps);
    println!("│ {:<16} │ {:>16} │", "Seed", report.seed);
    println!("├──────────────────┼──────────────────┤");
    println!("│ {:<16} │ {:>16.6} │", "Value", report.result.value);
    println!("│ {:<16} │ {:>16.6} │", "Std error", report.result.std_error);
    println!("│ {:<16} │ {:>16.6} │", "95% half-width", report.confidence_95);
    println!("│ {:<16} │ {:>16} │", "Analytical", analytical);
    println!("└──────────────────┴──────────────────┘");
}

/// Run the value command
pub fn run(config: &ValuationConfig, format: OutputFormat) -> Result<()> {
    info!("Starting valuation...");
    info!(
        "  Product: {} (K = {}, T = {})",
        config.product.kind, config.product.strike, config.product.maturity
    );
    info!(
        "  Model: S = {}, r = {}, σ = {}",
        config.model.spot, config.model.rate, config.model.volatility
    );
    info!(
        "  Monte Carlo paths: {}, steps: {}",
        config.simulation.paths, config.simulation.steps
    );

    let report = evaluate(config)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Table => print_table(&report),
    }

    info!("Valuation complete");
    Ok(())
}

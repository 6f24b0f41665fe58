//! Monte Carlo products on a single simulated asset.
//!
//! This module provides:
//! - [`AssetMonteCarloProduct`]: the valuation capability
//! - [`EuropeanCall`], [`EuropeanPut`], [`DigitalCall`]: concrete payoffs
//! - [`AssetProduct`]: enum dispatch over the payoffs
//! - [`discount_payoff`]: the shared numéraire re-basing step
//!
//! ## Design Philosophy
//!
//! - **Capability, not hierarchy**: each payoff implements the trait
//!   independently; polymorphism is a `match`
//! - **Per-path results**: `value` never averages, `price` does

pub mod digital;
pub mod european;
pub mod product_enum;
pub mod traits;

pub use digital::DigitalCall;
pub use european::{EuropeanCall, EuropeanPut};
pub use product_enum::{AssetProduct, ProductKind};
pub use traits::{discount_payoff, AssetMonteCarloProduct};

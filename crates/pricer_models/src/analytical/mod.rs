//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form Black-Scholes prices used as reference
//! values for Monte Carlo valuation:
//! - European call and put
//! - Cash-or-nothing digital call
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`**: one implementation for `f64` and `f32`
//! - **No panics**: invalid inputs surface as [`AnalyticalError`]

pub mod black_scholes;
pub mod distributions;
pub mod error;

pub use black_scholes::BlackScholes;
pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;

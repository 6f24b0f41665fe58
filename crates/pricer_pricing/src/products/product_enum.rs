//! Static dispatch enum over the asset products.
//!
//! [`AssetProduct`] lets callers pick a payoff at run time (for example
//! from configuration) while every call still resolves to a concrete
//! product through a `match`.
//!
//! ## Example
//!
//! ```
//! use pricer_pricing::products::{AssetMonteCarloProduct, AssetProduct, ProductKind};
//!
//! let product = AssetProduct::new(ProductKind::Put, 1.0, 100.0);
//! assert_eq!(product.type_name(), "EuropeanPut");
//! assert_eq!(product.strike(), 100.0);
//! ```

use std::fmt;
use std::str::FromStr;

use pricer_core::types::RandomVariable;
use pricer_models::models::AssetModelSimulation;

use super::digital::DigitalCall;
use super::european::{EuropeanCall, EuropeanPut};
use super::traits::AssetMonteCarloProduct;
use crate::error::ValuationError;

/// Payoff selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ProductKind {
    /// European call
    #[default]
    Call,
    /// European put
    Put,
    /// Cash-or-nothing digital call
    Digital,
}

impl ProductKind {
    /// Lowercase identifier used in configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductKind::Call => "call",
            ProductKind::Put => "put",
            ProductKind::Digital => "digital",
        }
    }
}

impl fmt::Display for ProductKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "call" => Ok(ProductKind::Call),
            "put" => Ok(ProductKind::Put),
            "digital" => Ok(ProductKind::Digital),
            other => Err(format!(
                "unknown product '{}': expected call, put or digital",
                other
            )),
        }
    }
}

/// Any supported asset product.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AssetProduct {
    /// European call
    Call(EuropeanCall),
    /// European put
    Put(EuropeanPut),
    /// Digital call
    Digital(DigitalCall),
}

impl AssetProduct {
    /// Builds the product of the given kind.
    pub fn new(kind: ProductKind, maturity: f64, strike: f64) -> Self {
        match kind {
            ProductKind::Call => AssetProduct::Call(EuropeanCall::new(maturity, strike)),
            ProductKind::Put => AssetProduct::Put(EuropeanPut::new(maturity, strike)),
            ProductKind::Digital => AssetProduct::Digital(DigitalCall::new(maturity, strike)),
        }
    }

    /// Kind of the wrapped product.
    pub fn kind(&self) -> ProductKind {
        match self {
            AssetProduct::Call(_) => ProductKind::Call,
            AssetProduct::Put(_) => ProductKind::Put,
            AssetProduct::Digital(_) => ProductKind::Digital,
        }
    }

    /// Strike of the wrapped product.
    pub fn strike(&self) -> f64 {
        match self {
            AssetProduct::Call(p) => p.strike(),
            AssetProduct::Put(p) => p.strike(),
            AssetProduct::Digital(p) => p.strike(),
        }
    }
}

impl AssetMonteCarloProduct for AssetProduct {
    fn value<M: AssetModelSimulation + ?Sized>(
        &self,
        evaluation_time: f64,
        model: &M,
    ) -> Result<RandomVariable, ValuationError> {
        match self {
            AssetProduct::Call(p) => p.value(evaluation_time, model),
            AssetProduct::Put(p) => p.value(evaluation_time, model),
            AssetProduct::Digital(p) => p.value(evaluation_time, model),
        }
    }

    fn maturity(&self) -> f64 {
        match self {
            AssetProduct::Call(p) => p.maturity(),
            AssetProduct::Put(p) => p.maturity(),
            AssetProduct::Digital(p) => p.maturity(),
        }
    }

    fn type_name(&self) -> &'static str {
        match self {
            AssetProduct::Call(p) => p.type_name(),
            AssetProduct::Put(p) => p.type_name(),
            AssetProduct::Digital(p) => p.type_name(),
        }
    }
}

impl From<EuropeanCall> for AssetProduct {
    fn from(p: EuropeanCall) -> Self {
        AssetProduct::Call(p)
    }
}

impl From<EuropeanPut> for AssetProduct {
    fn from(p: EuropeanPut) -> Self {
        AssetProduct::Put(p)
    }
}

impl From<DigitalCall> for AssetProduct {
    fn from(p: DigitalCall) -> Self {
        AssetProduct::Digital(p)
    }
}

//! Black-Scholes closed-form prices.
//!
//! Reference values for the Monte Carlo products:
//!
//! **Call**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//! **Digital call** (cash-or-nothing, pays 1): D = e^(-rT)·N(d₂)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! Non-positive strikes are accepted: the call is then always exercised,
//! the put never, and the digital always pays.

use num_traits::Float;

use super::distributions::{lit, norm_cdf};
use super::error::AnalyticalError;

/// Black-Scholes model for European option pricing.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float`
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
/// let call = bs.price_call(100.0, 1.0).unwrap();
/// let put = bs.price_put(100.0, 1.0).unwrap();
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call - put - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes<T: Float> {
    spot: T,
    rate: T,
    volatility: T,
}

impl<T: Float> BlackScholes<T> {
    /// Creates a new Black-Scholes model.
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidSpot` if spot <= 0 or not finite
    /// - `AnalyticalError::InvalidVolatility` if volatility <= 0 or not finite
    pub fn new(spot: T, rate: T, volatility: T) -> Result<Self, AnalyticalError> {
        if !(spot > T::zero() && spot.is_finite()) {
            return Err(AnalyticalError::InvalidSpot {
                spot: spot.to_f64().unwrap_or(f64::NAN),
            });
        }
        if !(volatility > T::zero() && volatility.is_finite()) {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: volatility.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Discount factor e^(-rT).
    #[inline]
    pub fn discount_factor(&self, expiry: T) -> T {
        (-self.rate * expiry).exp()
    }

    /// d₁ for a positive strike and positive expiry.
    #[inline]
    pub fn d1(&self, strike: T, expiry: T) -> T {
        let half_variance = self.volatility * self.volatility * lit(0.5);
        ((self.spot / strike).ln() + (self.rate + half_variance) * expiry)
            / (self.volatility * expiry.sqrt())
    }

    /// d₂ = d₁ - σ√T.
    #[inline]
    pub fn d2(&self, strike: T, expiry: T) -> T {
        self.d1(strike, expiry) - self.volatility * expiry.sqrt()
    }

    fn check_expiry(expiry: T) -> Result<(), AnalyticalError> {
        if expiry >= T::zero() && expiry.is_finite() {
            Ok(())
        } else {
            Err(AnalyticalError::InvalidExpiry {
                expiry: expiry.to_f64().unwrap_or(f64::NAN),
            })
        }
    }

    /// European call price.
    ///
    /// At zero expiry the intrinsic value `max(S - K, 0)` is returned.
    ///
    /// # Errors
    /// `AnalyticalError::InvalidExpiry` if expiry is negative or not finite.
    pub fn price_call(&self, strike: T, expiry: T) -> Result<T, AnalyticalError> {
        Self::check_expiry(expiry)?;
        let df = self.discount_factor(expiry);
        if strike <= T::zero() {
            return Ok(self.spot - strike * df);
        }
        if expiry == T::zero() {
            return Ok((self.spot - strike).max(T::zero()));
        }
        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        Ok(self.spot * norm_cdf(d1) - strike * df * norm_cdf(d2))
    }

    /// European put price.
    ///
    /// At zero expiry the intrinsic value `max(K - S, 0)` is returned.
    ///
    /// # Errors
    /// `AnalyticalError::InvalidExpiry` if expiry is negative or not finite.
    pub fn price_put(&self, strike: T, expiry: T) -> Result<T, AnalyticalError> {
        Self::check_expiry(expiry)?;
        if strike <= T::zero() {
            return Ok(T::zero());
        }
        if expiry == T::zero() {
            return Ok((strike - self.spot).max(T::zero()));
        }
        let df = self.discount_factor(expiry);
        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        Ok(strike * df * norm_cdf(-d2) - self.spot * norm_cdf(-d1))
    }

    /// Cash-or-nothing digital call paying one unit when `S_T >= K`.
    ///
    /// # Errors
    /// `AnalyticalError::InvalidExpiry` if expiry is negative or not finite.
    pub fn price_digital_call(&self, strike: T, expiry: T) -> Result<T, AnalyticalError> {
        Self::check_expiry(expiry)?;
        let df = self.discount_factor(expiry);
        if strike <= T::zero() {
            return Ok(df);
        }
        if expiry == T::zero() {
            return Ok(if self.spot >= strike { T::one() } else { T::zero() });
        }
        Ok(df * norm_cdf(self.d2(strike, expiry)))
    }
}

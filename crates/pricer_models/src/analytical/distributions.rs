//! Standard normal distribution functions.
//!
//! Generic over `T: Float` so the analytical formulas share one code path
//! for every floating-point type.

use num_traits::Float;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Zelen and Severo coefficients (Abramowitz and Stegun 26.2.17).
const P: f64 = 0.231_641_9;
const B: [f64; 5] = [
    0.319_381_530,
    -0.356_563_782,
    1.781_477_937,
    -1.821_255_978,
    1.330_274_429,
];

/// Converts an `f64` literal into `T`.
#[inline]
pub(crate) fn lit<T: Float>(x: f64) -> T {
    T::from(x).unwrap_or_else(T::nan)
}

/// Standard normal probability density function.
///
/// φ(x) = exp(-x² / 2) / sqrt(2π)
///
/// # Examples
/// ```
/// use pricer_models::analytical::norm_pdf;
///
/// assert!((norm_pdf(0.0_f64) - 0.3989422804).abs() < 1e-10);
/// assert_eq!(norm_pdf(1.5_f64), norm_pdf(-1.5_f64));
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    lit::<T>(FRAC_1_SQRT_2PI) * (-(x * x) * lit(0.5)).exp()
}

/// Standard normal cumulative distribution function.
///
/// Polynomial approximation with absolute error below 7.5e-8. The upper
/// tail is evaluated directly and the lower tail by symmetry, so
/// `norm_cdf(x) + norm_cdf(-x) == 1` up to rounding.
///
/// # Examples
/// ```
/// use pricer_models::analytical::norm_cdf;
///
/// assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-7);
/// assert!((norm_cdf(1.96_f64) - 0.9750021).abs() < 1e-6);
/// ```
pub fn norm_cdf<T: Float>(x: T) -> T {
    if x.is_nan() {
        return x;
    }
    let abs_x = x.abs();
    let t = T::one() / (T::one() + lit::<T>(P) * abs_x);
    let poly = B
        .iter()
        .rev()
        .fold(T::zero(), |acc, &b| (acc + lit(b)) * t);
    let upper_tail = norm_pdf(abs_x) * poly;
    if x >= T::zero() {
        T::one() - upper_tail
    } else {
        upper_tail
    }
}

//! Path-indexed random variables.
//!
//! A [`RandomVariable`] represents the realisations of one real-valued quantity
//! across every simulated path of a Monte Carlo run, or a deterministic scalar
//! that broadcasts across any population. Products are written entirely in
//! terms of its elementwise operations, so no per-path loop appears in payoff
//! code.
//!
//! # Representation
//!
//! ```text
//! RandomVariable
//! ├── Constant(f64)          (deterministic, never materialised to N copies)
//! └── Population(Arc<[f64]>) (index = path id, contiguous, shared by refcount)
//! ```
//!
//! Populations are reference counted, so a simulation model can hand the same
//! stored column to many valuation calls without copying it.
//!
//! # Case Analysis
//!
//! | left | right | result |
//! |------|-------|--------|
//! | Constant | Constant | Constant |
//! | Constant | Population(N) | Population(N) |
//! | Population(N) | Constant | Population(N) |
//! | Population(N) | Population(N) | Population(N) |
//! | Population(N) | Population(M ≠ N) | `DimensionMismatch` |
//!
//! # Parallelism
//!
//! Elementwise maps over populations of at least [`PARALLEL_THRESHOLD`] paths
//! run on the rayon thread pool. Reductions (`average`, `variance`, ...) are
//! sequential so their results are reproducible bit for bit.

use std::sync::Arc;

use rayon::prelude::*;

use super::error::RandomVariableError;

/// Population size from which elementwise maps run in parallel.
pub const PARALLEL_THRESHOLD: usize = 16_384;

/// Immutable path-indexed value.
///
/// Every operation returns a new value; operands are never modified.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::RandomVariable;
///
/// let asset = RandomVariable::from_values(vec![95.0, 105.0, 130.0]);
/// let numeraire = RandomVariable::constant(1.05);
///
/// let payoff = asset.subtract(100.0).unwrap().floor(0.0);
/// let discounted = payoff.divide(&numeraire).unwrap();
///
/// assert_eq!(discounted.size(), 3);
/// assert!((discounted.get(2).unwrap() - 30.0 / 1.05).abs() < 1e-12);
/// // `asset` is untouched
/// assert_eq!(asset.get(0), Some(95.0));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum RandomVariable {
    /// Deterministic value broadcast across every path.
    Constant(f64),
    /// One realisation per simulated path.
    Population(Arc<[f64]>),
}

/// Right-hand side of a binary [`RandomVariable`] operation.
///
/// Built implicitly from `f64` or `&RandomVariable`, so call sites read
/// `s.subtract(strike)` or `payoff.divide(&numeraire)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Operand<'a> {
    /// Deterministic scalar.
    Scalar(f64),
    /// Borrowed random variable.
    Variable(&'a RandomVariable),
}

impl From<f64> for Operand<'_> {
    #[inline]
    fn from(value: f64) -> Self {
        Operand::Scalar(value)
    }
}

impl<'a> From<&'a RandomVariable> for Operand<'a> {
    #[inline]
    fn from(value: &'a RandomVariable) -> Self {
        Operand::Variable(value)
    }
}

/// Operand view after folding constants into scalars.
#[derive(Clone, Copy)]
enum Resolved<'a> {
    Scalar(f64),
    Values(&'a [f64]),
}

impl Resolved<'_> {
    #[inline]
    fn len(&self) -> Option<usize> {
        match self {
            Resolved::Scalar(_) => None,
            Resolved::Values(values) => Some(values.len()),
        }
    }

    #[inline]
    fn at(&self, path: usize) -> f64 {
        match self {
            Resolved::Scalar(value) => *value,
            Resolved::Values(values) => values[path],
        }
    }
}

impl<'a> Operand<'a> {
    #[inline]
    fn resolve(self) -> Resolved<'a> {
        match self {
            Operand::Scalar(value) => Resolved::Scalar(value),
            Operand::Variable(variable) => variable.resolved(),
        }
    }
}

fn map_values<F>(values: &[f64], f: F) -> Arc<[f64]>
where
    F: Fn(f64) -> f64 + Sync + Send,
{
    if values.len() >= PARALLEL_THRESHOLD {
        values.par_iter().map(|&x| f(x)).collect::<Vec<f64>>().into()
    } else {
        values.iter().map(|&x| f(x)).collect()
    }
}

fn zip_values<F>(left: &[f64], right: &[f64], f: F) -> Arc<[f64]>
where
    F: Fn(f64, f64) -> f64 + Sync + Send,
{
    debug_assert_eq!(left.len(), right.len());
    if left.len() >= PARALLEL_THRESHOLD {
        left.par_iter()
            .zip(right.par_iter())
            .map(|(&a, &b)| f(a, b))
            .collect::<Vec<f64>>()
            .into()
    } else {
        left.iter().zip(right).map(|(&a, &b)| f(a, b)).collect()
    }
}

impl RandomVariable {
    /// Creates a deterministic random variable.
    #[inline]
    pub fn constant(value: f64) -> Self {
        RandomVariable::Constant(value)
    }

    /// Creates a population from one value per path.
    ///
    /// Populations are expected to be non-empty; statistics of an empty
    /// population are `NaN`.
    #[inline]
    pub fn from_values(values: Vec<f64>) -> Self {
        RandomVariable::Population(values.into())
    }

    #[inline]
    fn resolved(&self) -> Resolved<'_> {
        match self {
            RandomVariable::Constant(value) => Resolved::Scalar(*value),
            RandomVariable::Population(values) => Resolved::Values(&values[..]),
        }
    }

    /// Number of realisations (1 for a constant).
    #[inline]
    pub fn size(&self) -> usize {
        match self {
            RandomVariable::Constant(_) => 1,
            RandomVariable::Population(values) => values.len(),
        }
    }

    /// Returns `true` for a deterministic value.
    #[inline]
    pub fn is_deterministic(&self) -> bool {
        matches!(self, RandomVariable::Constant(_))
    }

    /// Realisation on the given path.
    ///
    /// A constant returns its value for every path; a population returns
    /// `None` when `path` is out of range.
    #[inline]
    pub fn get(&self, path: usize) -> Option<f64> {
        match self {
            RandomVariable::Constant(value) => Some(*value),
            RandomVariable::Population(values) => values.get(path).copied(),
        }
    }

    /// Borrowed population values, `None` for a constant.
    #[inline]
    pub fn values(&self) -> Option<&[f64]> {
        match self {
            RandomVariable::Constant(_) => None,
            RandomVariable::Population(values) => Some(&values[..]),
        }
    }

    /// Copies the realisations into a vector (length 1 for a constant).
    pub fn to_vec(&self) -> Vec<f64> {
        match self {
            RandomVariable::Constant(value) => vec![*value],
            RandomVariable::Population(values) => values.to_vec(),
        }
    }

    // ------------------------------------------------------------------
    // Elementwise operations
    // ------------------------------------------------------------------

    /// Applies `f` to every realisation.
    pub fn apply<F>(&self, f: F) -> Self
    where
        F: Fn(f64) -> f64 + Sync + Send,
    {
        match self {
            RandomVariable::Constant(value) => RandomVariable::Constant(f(*value)),
            RandomVariable::Population(values) => {
                RandomVariable::Population(map_values(values, f))
            }
        }
    }

    fn combine<'a, F>(&self, rhs: Operand<'a>, op: F) -> Result<Self, RandomVariableError>
    where
        F: Fn(f64, f64) -> f64 + Sync + Send,
    {
        let result = match (self.resolved(), rhs.resolve()) {
            (Resolved::Scalar(a), Resolved::Scalar(b)) => RandomVariable::Constant(op(a, b)),
            (Resolved::Scalar(a), Resolved::Values(right)) => {
                RandomVariable::Population(map_values(right, |x| op(a, x)))
            }
            (Resolved::Values(left), Resolved::Scalar(b)) => {
                RandomVariable::Population(map_values(left, |x| op(x, b)))
            }
            (Resolved::Values(left), Resolved::Values(right)) => {
                if left.len() != right.len() {
                    return Err(RandomVariableError::DimensionMismatch {
                        left: left.len(),
                        right: right.len(),
                    });
                }
                RandomVariable::Population(zip_values(left, right, op))
            }
        };
        Ok(result)
    }

    /// Elementwise sum `self[i] + rhs[i]`.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` when both sides are populations of different size.
    pub fn add<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Self, RandomVariableError> {
        self.combine(rhs.into(), |a, b| a + b)
    }

    /// Elementwise difference `self[i] - rhs[i]`.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` when both sides are populations of different size.
    pub fn subtract<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Self, RandomVariableError> {
        self.combine(rhs.into(), |a, b| a - b)
    }

    /// Elementwise product `self[i] * rhs[i]`.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` when both sides are populations of different size.
    pub fn multiply<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Self, RandomVariableError> {
        self.combine(rhs.into(), |a, b| a * b)
    }

    /// Elementwise quotient `self[i] / rhs[i]`.
    ///
    /// Zero divisors are not guarded: they produce IEEE infinities or `NaN`.
    /// Numeraires are strictly positive by model contract.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` when both sides are populations of different size.
    pub fn divide<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Self, RandomVariableError> {
        self.combine(rhs.into(), |a, b| a / b)
    }

    /// Lower-bound clamp `max(self[i], level)`.
    ///
    /// This is the payoff-clamping primitive, not rounding towards negative
    /// infinity: `2.7.floor(0.0)` stays `2.7`. A `NaN` realisation stays
    /// `NaN` instead of being clamped to `level`.
    ///
    /// ```rust
    /// use pricer_core::types::RandomVariable;
    ///
    /// let x = RandomVariable::from_values(vec![-3.5, 2.7]);
    /// assert_eq!(x.floor(0.0).to_vec(), vec![0.0, 2.7]);
    /// ```
    #[inline]
    pub fn floor(&self, level: f64) -> Self {
        self.apply(|x| if x.is_nan() { x } else { x.max(level) })
    }

    /// Upper-bound clamp `min(self[i], level)`. `NaN` realisations pass through.
    #[inline]
    pub fn cap(&self, level: f64) -> Self {
        self.apply(|x| if x.is_nan() { x } else { x.min(level) })
    }

    /// Elementwise selection `self[i] >= 0 ? if_non_negative[i] : if_negative[i]`.
    ///
    /// `self` acts as the trigger; used for digital and barrier style payoffs.
    /// A `NaN` trigger selects `NaN`.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` when any two populations involved differ in size.
    pub fn choose<'a, 'b>(
        &self,
        if_non_negative: impl Into<Operand<'a>>,
        if_negative: impl Into<Operand<'b>>,
    ) -> Result<Self, RandomVariableError> {
        let trigger = self.resolved();
        let upper = if_non_negative.into().resolve();
        let lower = if_negative.into().resolve();

        let mut size: Option<usize> = None;
        for len in [trigger.len(), upper.len(), lower.len()].into_iter().flatten() {
            match size {
                None => size = Some(len),
                Some(n) if n != len => {
                    return Err(RandomVariableError::DimensionMismatch {
                        left: n,
                        right: len,
                    })
                }
                Some(_) => {}
            }
        }

        let select = |path: usize| {
            let t = trigger.at(path);
            if t.is_nan() {
                t
            } else if t >= 0.0 {
                upper.at(path)
            } else {
                lower.at(path)
            }
        };

        let result = match size {
            None => RandomVariable::Constant(select(0)),
            Some(n) if n >= PARALLEL_THRESHOLD => RandomVariable::Population(
                (0..n)
                    .into_par_iter()
                    .map(select)
                    .collect::<Vec<f64>>()
                    .into(),
            ),
            Some(n) => RandomVariable::Population((0..n).map(select).collect()),
        };
        Ok(result)
    }

    /// Elementwise negation.
    #[inline]
    pub fn negate(&self) -> Self {
        self.apply(|x| -x)
    }

    /// Elementwise absolute value.
    #[inline]
    pub fn abs(&self) -> Self {
        self.apply(f64::abs)
    }

    /// Elementwise square.
    #[inline]
    pub fn squared(&self) -> Self {
        self.apply(|x| x * x)
    }

    /// Elementwise square root.
    #[inline]
    pub fn sqrt(&self) -> Self {
        self.apply(f64::sqrt)
    }

    /// Elementwise exponential.
    #[inline]
    pub fn exp(&self) -> Self {
        self.apply(f64::exp)
    }

    /// Elementwise natural logarithm.
    #[inline]
    pub fn log(&self) -> Self {
        self.apply(f64::ln)
    }

    // ------------------------------------------------------------------
    // Statistics
    // ------------------------------------------------------------------

    /// Sample mean over paths.
    pub fn average(&self) -> f64 {
        match self {
            RandomVariable::Constant(value) => *value,
            RandomVariable::Population(values) => {
                values.iter().sum::<f64>() / values.len() as f64
            }
        }
    }

    fn sum_squared_deviations(values: &[f64]) -> f64 {
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        values.iter().map(|&x| (x - mean) * (x - mean)).sum()
    }

    /// Population variance (divides by N).
    pub fn variance(&self) -> f64 {
        match self {
            RandomVariable::Constant(_) => 0.0,
            RandomVariable::Population(values) => {
                Self::sum_squared_deviations(values) / values.len() as f64
            }
        }
    }

    /// Unbiased sample variance (divides by N - 1), zero below two paths.
    pub fn sample_variance(&self) -> f64 {
        match self {
            RandomVariable::Population(values) if values.len() >= 2 => {
                Self::sum_squared_deviations(values) / (values.len() - 1) as f64
            }
            _ => 0.0,
        }
    }

    /// Population standard deviation.
    #[inline]
    pub fn standard_deviation(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Standard error of [`average`](Self::average) as a Monte Carlo estimate.
    ///
    /// Sample standard deviation over `sqrt(N)`; zero for constants and
    /// single-path populations.
    pub fn standard_error(&self) -> f64 {
        (self.sample_variance() / self.size() as f64).sqrt()
    }

    /// Smallest realisation, or `NaN` if any realisation is `NaN`.
    pub fn min(&self) -> f64 {
        match self {
            RandomVariable::Constant(value) => *value,
            RandomVariable::Population(values) => {
                values
                    .iter()
                    .copied()
                    .fold(f64::INFINITY, |acc, x| {
                        if x.is_nan() || x < acc {
                            x
                        } else {
                            acc
                        }
                    })
            }
        }
    }

    /// Largest realisation, or `NaN` if any realisation is `NaN`.
    pub fn max(&self) -> f64 {
        match self {
            RandomVariable::Constant(value) => *value,
            RandomVariable::Population(values) => {
                values
                    .iter()
                    .copied()
                    .fold(f64::NEG_INFINITY, |acc, x| {
                        if x.is_nan() || x > acc {
                            x
                        } else {
                            acc
                        }
                    })
            }
        }
    }
}

impl From<f64> for RandomVariable {
    #[inline]
    fn from(value: f64) -> Self {
        RandomVariable::Constant(value)
    }
}

impl From<Vec<f64>> for RandomVariable {
    #[inline]
    fn from(values: Vec<f64>) -> Self {
        RandomVariable::from_values(values)
    }
}

impl FromIterator<f64> for RandomVariable {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        RandomVariable::Population(iter.into_iter().collect())
    }
}

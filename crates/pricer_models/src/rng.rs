//! Seeded random number generation for path simulation.
//!
//! [`PricerRng`] wraps [`StdRng`] and remembers its seed, so a simulation
//! can be reproduced from its configuration alone.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, StandardNormal};

/// Reproducible generator of standard normal variates.
///
/// # Examples
///
/// ```rust
/// use pricer_models::rng::PricerRng;
///
/// let mut a = PricerRng::from_seed(12345);
/// let mut b = PricerRng::from_seed(12345);
/// assert_eq!(a.gen_normal(), b.gen_normal());
///
/// let mut increments = vec![0.0; 64];
/// a.fill_normal(&mut increments);
/// ```
#[derive(Clone, Debug)]
pub struct PricerRng {
    inner: StdRng,
    seed: u64,
}

impl PricerRng {
    /// Creates a generator initialised with `seed`.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed this generator was initialised with.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Standard normal variate.
    #[inline]
    pub fn gen_normal(&mut self) -> f64 {
        StandardNormal.sample(&mut self.inner)
    }

    /// Fills `buffer` with standard normal variates without allocating.
    #[inline]
    pub fn fill_normal(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = StandardNormal.sample(&mut self.inner);
        }
    }
}

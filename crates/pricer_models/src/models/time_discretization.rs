//! Simulation time grids.
//!
//! A [`TimeDiscretization`] is the ordered set of times at which a model
//! holds simulated values. Lookups tolerate floating-point noise up to
//! [`TIME_TOLERANCE`], so `0.1 + 0.2` finds the grid point `0.3`.

use super::error::ConfigError;

/// Absolute tolerance used when matching a query time to a grid time.
pub const TIME_TOLERANCE: f64 = 1e-10;

/// Strictly increasing, finite sequence of simulation times.
///
/// # Examples
///
/// ```rust
/// use pricer_models::models::TimeDiscretization;
///
/// let grid = TimeDiscretization::uniform(0.0, 4, 0.25).unwrap();
/// assert_eq!(grid.number_of_times(), 5);
/// assert_eq!(grid.time_index(0.5), Some(2));
/// assert_eq!(grid.time_index(0.6), None);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct TimeDiscretization {
    times: Vec<f64>,
}

impl TimeDiscretization {
    /// Creates a grid from explicit times.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidTimeGrid` if `times` is empty, contains
    /// a non-finite value, or is not strictly increasing.
    pub fn new(times: Vec<f64>) -> Result<Self, ConfigError> {
        if times.is_empty() {
            return Err(ConfigError::InvalidTimeGrid(
                "at least one time is required".to_string(),
            ));
        }
        if let Some(t) = times.iter().find(|t| !t.is_finite()) {
            return Err(ConfigError::InvalidTimeGrid(format!(
                "time {} is not finite",
                t
            )));
        }
        if let Some(w) = times.windows(2).find(|w| w[1] <= w[0]) {
            return Err(ConfigError::InvalidTimeGrid(format!(
                "times must be strictly increasing, got {} after {}",
                w[1], w[0]
            )));
        }
        Ok(Self { times })
    }

    /// Creates the uniform grid `start, start + dt, ..., start + n_steps * dt`.
    ///
    /// Each time is computed as `start + i * dt` rather than by repeated
    /// addition, so the last point carries no accumulated drift.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `n_steps` is zero or `dt` is not positive.
    pub fn uniform(start: f64, n_steps: usize, dt: f64) -> Result<Self, ConfigError> {
        if n_steps == 0 {
            return Err(ConfigError::InvalidStepCount(n_steps));
        }
        if !(dt > 0.0 && dt.is_finite()) {
            return Err(ConfigError::InvalidParameter {
                name: "dt",
                value: format!("{} must be positive and finite", dt),
            });
        }
        Self::new((0..=n_steps).map(|i| start + i as f64 * dt).collect())
    }

    /// Number of times on the grid (steps + 1).
    #[inline]
    pub fn number_of_times(&self) -> usize {
        self.times.len()
    }

    /// Number of steps between consecutive times.
    #[inline]
    pub fn number_of_steps(&self) -> usize {
        self.times.len() - 1
    }

    /// Returns the time at `index`, if any.
    #[inline]
    pub fn time(&self, index: usize) -> Option<f64> {
        self.times.get(index).copied()
    }

    /// First grid time.
    #[inline]
    pub fn first(&self) -> f64 {
        self.times[0]
    }

    /// Last grid time.
    #[inline]
    pub fn last(&self) -> f64 {
        self.times[self.times.len() - 1]
    }

    /// All grid times.
    #[inline]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Index of the grid time within [`TIME_TOLERANCE`] of `time`.
    pub fn time_index(&self, time: f64) -> Option<usize> {
        if !time.is_finite() {
            return None;
        }
        let idx = self.times.partition_point(|&t| t < time - TIME_TOLERANCE);
        match self.times.get(idx) {
            Some(&t) if (t - time).abs() <= TIME_TOLERANCE => Some(idx),
            _ => None,
        }
    }

    /// Whether `time` lies in `[first, last]`, up to [`TIME_TOLERANCE`].
    #[inline]
    pub fn covers(&self, time: f64) -> bool {
        time >= self.first() - TIME_TOLERANCE && time <= self.last() + TIME_TOLERANCE
    }

    /// Whether `time` is a grid time.
    #[inline]
    pub fn contains_time(&self, time: f64) -> bool {
        self.time_index(time).is_some()
    }
}

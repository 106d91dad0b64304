//! Runtime configuration for real-domain bisection.

use crate::error::{Result, SearchError};

/// Default convergence width.
pub const DEFAULT_EPSILON: f64 = 1e-6;
/// Default iteration cap. Bisection of any finite `f64` interval reaches
/// adjacent floats well within this many halvings.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Convergence settings for [`crate::real::bisect`].
///
/// The loop stops when `hi - lo <= epsilon` or after `max_iterations`
/// halvings, whichever comes first.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RealSearchConfig {
    pub epsilon: f64,
    pub max_iterations: u32,
}

impl RealSearchConfig {
    pub const fn new(epsilon: f64, max_iterations: u32) -> Self {
        Self {
            epsilon,
            max_iterations,
        }
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// # Errors
    /// - [`SearchError::InvalidTolerance`] for a non-finite or non-positive epsilon
    /// - [`SearchError::ZeroIterations`] for `max_iterations == 0`
    pub fn validate(&self) -> Result<()> {
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(SearchError::InvalidTolerance {
                epsilon: self.epsilon,
            });
        }
        if self.max_iterations == 0 {
            return Err(SearchError::ZeroIterations);
        }
        Ok(())
    }
}

impl Default for RealSearchConfig {
    fn default() -> Self {
        Self::new(DEFAULT_EPSILON, DEFAULT_MAX_ITERATIONS)
    }
}

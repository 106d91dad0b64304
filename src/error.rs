//! Error type shared by every fallible search in the crate.

use thiserror::Error;

/// Failure of a search call.
///
/// Monotonicity violations are not errors: a non-monotonic predicate yields
/// an unspecified (but deterministic) value instead.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SearchError {
    /// `lo > hi`, or a real bound is NaN.
    #[error("invalid search range: lower bound exceeds upper bound")]
    InvalidRange,
    /// Real-domain epsilon must be finite and strictly positive.
    #[error("invalid tolerance {epsilon}: epsilon must be finite and > 0")]
    InvalidTolerance { epsilon: f64 },
    /// Real-domain iteration cap of zero.
    #[error("max_iterations must be at least 1")]
    ZeroIterations,
    /// The problem has no answer for the given inputs (checked before searching).
    #[error("no feasible answer exists for the given inputs")]
    Infeasible,
}

/// Result alias for search operations.
pub type Result<T> = core::result::Result<T, SearchError>;

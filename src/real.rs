//! Bisection over real (`f64`) domains.
//!
//! Integer convergence (`lo < hi`) becomes width convergence
//! (`hi - lo > epsilon`), and the loop is additionally capped by
//! `max_iterations`: floating-point subtraction is not guaranteed to ever
//! reach the requested width.
//!
//! The returned value is always the *feasible* side of the final bracket
//! (`hi` for [`Direction::Lower`], `lo` for [`Direction::Upper`]).

use crate::answer::Direction;
use crate::config::RealSearchConfig;
use crate::error::{Result, SearchError};
use crate::observer::{NoopObserver, Observer, Probe};

/// Boundary of a monotonic predicate over `[lo, hi]` in `f64`.
///
/// # Errors
/// - [`SearchError::InvalidRange`] if `lo > hi` or a bound is not finite
/// - config errors from [`RealSearchConfig::validate`]
///
/// # Example
/// ```
/// use boundary_search::answer::Direction;
/// use boundary_search::real::bisect;
/// use boundary_search::RealSearchConfig;
///
/// let cfg = RealSearchConfig::default();
/// let root2 = bisect(0.0, 2.0, Direction::Lower, &cfg, |x| x * x >= 2.0).unwrap();
/// assert!((root2 - 2f64.sqrt()).abs() <= 1e-6);
/// ```
pub fn bisect<P>(
    lo: f64,
    hi: f64,
    direction: Direction,
    config: &RealSearchConfig,
    predicate: P,
) -> Result<f64>
where
    P: FnMut(f64) -> bool,
{
    run(lo, hi, direction, config, predicate, &mut NoopObserver)
}

/// [`bisect`] with every probe reported to `observer`.
pub fn bisect_observed<P, O>(
    lo: f64,
    hi: f64,
    direction: Direction,
    config: &RealSearchConfig,
    predicate: P,
    mut observer: O,
) -> Result<f64>
where
    P: FnMut(f64) -> bool,
    O: Observer<f64>,
{
    run(lo, hi, direction, config, predicate, &mut observer)
}

fn run<P, O>(
    mut lo: f64,
    mut hi: f64,
    direction: Direction,
    config: &RealSearchConfig,
    mut predicate: P,
    observer: &mut O,
) -> Result<f64>
where
    P: FnMut(f64) -> bool,
    O: Observer<f64>,
{
    config.validate()?;
    if !lo.is_finite() || !hi.is_finite() || lo > hi {
        return Err(SearchError::InvalidRange);
    }

    let mut iterations = 0u32;
    while hi - lo > config.epsilon && iterations < config.max_iterations {
        // Halves first: `hi - lo` may overflow for bounds near f64::MAX.
        let mid = 0.5 * lo + 0.5 * hi;
        if mid <= lo || mid >= hi {
            // Adjacent floats: no representable midpoint left.
            break;
        }

        let feasible = predicate(mid);
        observer.observe(&Probe {
            candidate: mid,
            feasible,
            lo,
            hi,
        });

        match (direction, feasible) {
            (Direction::Lower, true) | (Direction::Upper, false) => hi = mid,
            (Direction::Lower, false) | (Direction::Upper, true) => lo = mid,
        }
        iterations += 1;
    }

    let value = match direction {
        Direction::Lower => hi,
        Direction::Upper => lo,
    };
    log::trace!(
        "real {:?} boundary at {} after {} iterations (width {})",
        direction,
        value,
        iterations,
        hi - lo
    );
    Ok(value)
}

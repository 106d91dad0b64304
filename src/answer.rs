//! Binary Search on the Answer
//!
//! **Problem shape**: find the extremal `v` in `[lo, hi]` for which a monotonic
//! predicate holds, without scanning the domain.
//!
//! Two canonical forms, one per [`Direction`]:
//!
//! | Direction | Predicate shape | Midpoint | On `true` | On `false` |
//! |-----------|-----------------|----------|-----------|------------|
//! | `Lower` | `F..F T..T` | floor | `hi = mid` | `lo = mid + 1` |
//! | `Upper` | `T..T F..F` | ceil | `lo = mid` | `hi = mid - 1` |
//!
//! The side that keeps `mid` in range is always paired with the rounding that
//! moves `mid` away from it, so `lo == mid` can never stall the loop. Both
//! forms stop at `lo == hi` after at most `ceil(log2(hi - lo + 1))` probes.
//!
//! **Infeasible domains**: the engine does not spend a probe verifying the
//! converged value. If the predicate holds nowhere, [`Direction::Lower`]
//! returns `hi` and [`Direction::Upper`] returns `lo`, and the value means
//! nothing. Pre-validate, or use [`search_checked`] which spends one extra
//! probe and answers `None`.

use core::fmt::Debug;

use crate::error::{Result, SearchError};
use crate::observer::{NoopObserver, Observer, Probe};

/// Which boundary of a monotonic predicate to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Smallest value where the predicate becomes true.
    Lower,
    /// Largest value where the predicate is still true.
    Upper,
}

/// Integer types usable as a search domain.
///
/// Midpoints are computed in `i128`, so the full range of every implementor
/// (e.g. `i64::MIN..=i64::MAX`) is searchable without overflow.
pub trait Candidate: Copy + Ord + Debug {
    /// `floor((lo + hi) / 2)`
    fn midpoint_floor(lo: Self, hi: Self) -> Self;
    /// `ceil((lo + hi) / 2)`
    fn midpoint_ceil(lo: Self, hi: Self) -> Self;
    /// `self + 1`. Only called on values strictly below the domain maximum.
    fn successor(self) -> Self;
    /// `self - 1`. Only called on values strictly above the domain minimum.
    fn predecessor(self) -> Self;
    /// Number of candidates in `[lo, hi]` (requires `lo <= hi`).
    fn span(lo: Self, hi: Self) -> u128;
}

macro_rules! impl_candidate {
    ($($t:ty),* $(,)?) => {
        $(
            impl Candidate for $t {
                #[inline(always)]
                fn midpoint_floor(lo: Self, hi: Self) -> Self {
                    ((lo as i128 + hi as i128) >> 1) as $t
                }

                #[inline(always)]
                fn midpoint_ceil(lo: Self, hi: Self) -> Self {
                    ((lo as i128 + hi as i128 + 1) >> 1) as $t
                }

                #[inline(always)]
                fn successor(self) -> Self {
                    self + 1
                }

                #[inline(always)]
                fn predecessor(self) -> Self {
                    self - 1
                }

                #[inline]
                fn span(lo: Self, hi: Self) -> u128 {
                    (hi as i128 - lo as i128) as u128 + 1
                }
            }
        )*
    };
}

impl_candidate!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Converged value plus the number of predicate evaluations spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchReport<T> {
    pub value: T,
    pub probes: u32,
}

/// Smallest `v` in `[lo, hi]` with `predicate(v)` true (predicate `F..F T..T`).
///
/// # Example
/// ```
/// use boundary_search::find_lower_boundary;
///
/// assert_eq!(find_lower_boundary(3, 11, |v| v >= 7), Ok(7));
/// ```
#[inline]
pub fn find_lower_boundary<T, P>(lo: T, hi: T, predicate: P) -> Result<T>
where
    T: Candidate,
    P: FnMut(T) -> bool,
{
    search(lo, hi, Direction::Lower, predicate)
}

/// Largest `v` in `[lo, hi]` with `predicate(v)` true (predicate `T..T F..F`).
///
/// # Example
/// ```
/// use boundary_search::find_upper_boundary;
///
/// // floor(sqrt(50))
/// assert_eq!(find_upper_boundary(0u64, 50, |v| v * v <= 50), Ok(7));
/// ```
#[inline]
pub fn find_upper_boundary<T, P>(lo: T, hi: T, predicate: P) -> Result<T>
where
    T: Candidate,
    P: FnMut(T) -> bool,
{
    search(lo, hi, Direction::Upper, predicate)
}

/// Boundary search in the given direction.
///
/// # Errors
/// [`SearchError::InvalidRange`] if `lo > hi`.
#[inline]
pub fn search<T, P>(lo: T, hi: T, direction: Direction, predicate: P) -> Result<T>
where
    T: Candidate,
    P: FnMut(T) -> bool,
{
    Ok(run(lo, hi, direction, predicate, &mut NoopObserver)?.value)
}

/// [`search`] with every probe reported to `observer`.
pub fn search_observed<T, P, O>(
    lo: T,
    hi: T,
    direction: Direction,
    predicate: P,
    mut observer: O,
) -> Result<T>
where
    T: Candidate,
    P: FnMut(T) -> bool,
    O: Observer<T>,
{
    Ok(run(lo, hi, direction, predicate, &mut observer)?.value)
}

/// [`search`] returning the probe count alongside the value.
pub fn search_report<T, P>(
    lo: T,
    hi: T,
    direction: Direction,
    predicate: P,
) -> Result<SearchReport<T>>
where
    T: Candidate,
    P: FnMut(T) -> bool,
{
    run(lo, hi, direction, predicate, &mut NoopObserver)
}

/// [`search`] that verifies the converged value with one extra probe.
///
/// Returns `Ok(None)` when the predicate is false everywhere in `[lo, hi]`
/// (assuming monotonicity).
pub fn search_checked<T, P>(
    lo: T,
    hi: T,
    direction: Direction,
    mut predicate: P,
) -> Result<Option<T>>
where
    T: Candidate,
    P: FnMut(T) -> bool,
{
    let report = run(lo, hi, direction, &mut predicate, &mut NoopObserver)?;
    if predicate(report.value) {
        Ok(Some(report.value))
    } else {
        Ok(None)
    }
}

fn run<T, P, O>(
    mut lo: T,
    mut hi: T,
    direction: Direction,
    mut predicate: P,
    observer: &mut O,
) -> Result<SearchReport<T>>
where
    T: Candidate,
    P: FnMut(T) -> bool,
    O: Observer<T>,
{
    if lo > hi {
        return Err(SearchError::InvalidRange);
    }

    let mut probes = 0u32;
    while lo < hi {
        let (before_lo, before_hi) = (lo, hi);

        let (candidate, feasible) = match direction {
            Direction::Lower => {
                let mid = T::midpoint_floor(lo, hi);
                let ok = predicate(mid);
                if ok {
                    hi = mid;
                } else {
                    lo = mid.successor();
                }
                (mid, ok)
            }
            Direction::Upper => {
                let mid = T::midpoint_ceil(lo, hi);
                let ok = predicate(mid);
                if ok {
                    lo = mid;
                } else {
                    hi = mid.predecessor();
                }
                (mid, ok)
            }
        };

        probes += 1;
        observer.observe(&Probe {
            candidate,
            feasible,
            lo: before_lo,
            hi: before_hi,
        });
    }

    log::trace!(
        "{:?} boundary converged at {:?} after {} probes",
        direction,
        lo,
        probes
    );

    Ok(SearchReport { value: lo, probes })
}

/// `ceil(log2(span))`: the probe budget for a domain of `span` candidates.
pub fn probe_bound(span: u128) -> u32 {
    if span <= 1 {
        0
    } else {
        128 - (span - 1).leading_zeros()
    }
}

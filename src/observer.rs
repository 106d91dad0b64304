//! Probe observation for boundary searches.
//!
//! Searches never print. Callers that want to trace a search pass an
//! [`Observer`]; a plain closure works:
//!
//! ```
//! use boundary_search::answer::{search_observed, Direction};
//! use boundary_search::Probe;
//!
//! let mut trail = Vec::new();
//! let v = search_observed(0u32, 100, Direction::Lower, |v| v >= 42, |p: &Probe<u32>| {
//!     trail.push(p.candidate)
//! })
//! .unwrap();
//! assert_eq!(v, 42);
//! assert_eq!(trail.first(), Some(&50));
//! ```

/// One predicate evaluation.
///
/// `lo` and `hi` are the bounds *before* the probe narrowed them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Probe<T> {
    pub candidate: T,
    pub feasible: bool,
    pub lo: T,
    pub hi: T,
}

/// Receives every [`Probe`] of a search, in evaluation order.
pub trait Observer<T> {
    fn observe(&mut self, probe: &Probe<T>);
}

/// Observer that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl<T> Observer<T> for NoopObserver {
    #[inline(always)]
    fn observe(&mut self, _probe: &Probe<T>) {}
}

impl<T, F> Observer<T> for F
where
    F: FnMut(&Probe<T>),
{
    #[inline]
    fn observe(&mut self, probe: &Probe<T>) {
        self(probe)
    }
}

//! Greedy Partition Feasibility
//!
//! The predicate behind most allocation-style answer searches: *can the
//! items, kept in order, be cut into at most `K` contiguous bins whose totals
//! never exceed `capacity`?*
//!
//! Greedy filling is optimal here: a bin is closed only when the next item
//! would overflow it, so no other cut can use fewer bins. One pass, O(n).

/// Number of contiguous bins of `capacity` needed to hold `items` in order.
///
/// Returns `None` when a single item is larger than `capacity` (no bin can
/// ever hold it). Empty input needs zero bins.
pub fn bins_needed(items: &[u64], capacity: u64) -> Option<usize> {
    let mut bins = 0usize;
    let mut load = 0u64;

    for &item in items {
        if item > capacity {
            return None;
        }
        // `load <= capacity` and `item <= capacity`, so this only overflows
        // when the bin would overflow anyway.
        match load.checked_add(item) {
            Some(next) if next <= capacity && bins > 0 => load = next,
            _ => {
                bins += 1;
                load = item;
            }
        }
    }
    Some(bins)
}

/// `true` if `items` fit into at most `max_bins` bins of `capacity`.
///
/// Fails fast: stops scanning as soon as the bin count exceeds `max_bins` or
/// an item alone exceeds `capacity`.
///
/// # Example
/// ```
/// use boundary_search::partition::fits_in_bins;
///
/// let weights = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
/// assert!(fits_in_bins(&weights, 15, 5));
/// assert!(!fits_in_bins(&weights, 14, 5));
/// ```
pub fn fits_in_bins(items: &[u64], capacity: u64, max_bins: usize) -> bool {
    let mut bins = 0usize;
    let mut load = 0u64;

    for &item in items {
        if item > capacity {
            return false;
        }
        match load.checked_add(item) {
            Some(next) if next <= capacity && bins > 0 => load = next,
            _ => {
                bins += 1;
                if bins > max_bins {
                    return false;
                }
                load = item;
            }
        }
    }
    true
}

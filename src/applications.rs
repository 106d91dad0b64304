//! Classic answer-search problems built on the engine.
//!
//! Each function checks that an answer exists *before* searching (the engine
//! itself cannot tell an infeasible domain from a feasible one) and reports
//! [`SearchError::Infeasible`] otherwise. The boundary form used is noted on
//! each function.

extern crate alloc;
use alloc::vec::Vec;

use crate::answer::{find_lower_boundary, find_upper_boundary, Direction};
use crate::config::RealSearchConfig;
use crate::error::{Result, SearchError};
use crate::partition::fits_in_bins;
use crate::real::bisect;

fn reject(problem: &'static str) -> SearchError {
    log::debug!("{problem}: no feasible answer for the given inputs");
    SearchError::Infeasible
}

fn max_of(items: &[u64]) -> u64 {
    items.iter().copied().max().unwrap_or(0)
}

fn saturating_sum(items: &[u64]) -> u64 {
    items.iter().fold(0u64, |acc, &x| acc.saturating_add(x))
}

/// Smallest bin capacity that packs `items`, in order, into `bins` bins.
///
/// When the total overflows `u64`, the clamped upper bound `u64::MAX` is not
/// guaranteed to be feasible, so it is checked before searching.
fn min_largest_bin(problem: &'static str, items: &[u64], bins: usize) -> Result<u64> {
    let hi = saturating_sum(items);
    if !fits_in_bins(items, hi, bins) {
        return Err(reject(problem));
    }
    find_lower_boundary(max_of(items), hi, |capacity| {
        fits_in_bins(items, capacity, bins)
    })
}

/// Minimum ship capacity that moves every package, in order, within `days`.
///
/// Lower boundary over `[max(weight), sum(weights)]` with the greedy bin
/// predicate.
///
/// # Example
/// ```
/// use boundary_search::applications::ship_within_days;
///
/// assert_eq!(ship_within_days(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10], 5), Ok(15));
/// ```
pub fn ship_within_days(weights: &[u64], days: usize) -> Result<u64> {
    if weights.is_empty() {
        return Ok(0);
    }
    if days == 0 {
        return Err(reject("ship_within_days"));
    }
    min_largest_bin("ship_within_days", weights, days)
}

/// Smallest possible maximum load when `pages` are split, in order, among
/// `students` readers who each get at least one book.
///
/// Also answers painter's partition and split-array-largest-sum. Requires
/// `1 <= students <= pages.len()`.
pub fn allocate_books(pages: &[u64], students: usize) -> Result<u64> {
    if students == 0 || students > pages.len() {
        return Err(reject("allocate_books"));
    }
    // Fewer greedy bins can always be split further, since students <= books.
    min_largest_bin("allocate_books", pages, students)
}

/// Slowest eating speed that finishes every pile within `hours`.
///
/// One pile per hour at most, so `piles.len() <= hours` is required. Lower
/// boundary over `[1, max(pile)]`.
pub fn min_eating_speed(piles: &[u64], hours: u64) -> Result<u64> {
    if piles.len() as u64 > hours {
        return Err(reject("min_eating_speed"));
    }
    find_lower_boundary(1, max_of(piles).max(1), |speed| {
        let mut spent = 0u64;
        for &pile in piles {
            spent = spent.saturating_add(pile.div_ceil(speed));
            if spent > hours {
                return false;
            }
        }
        true
    })
}

/// Smallest divisor such that `sum(ceil(n / d)) <= threshold`.
///
/// Each term is at least 1, so `nums.len() <= threshold` is required.
pub fn smallest_divisor(nums: &[u64], threshold: u64) -> Result<u64> {
    if nums.len() as u64 > threshold {
        return Err(reject("smallest_divisor"));
    }
    find_lower_boundary(1, max_of(nums).max(1), |divisor| {
        let mut total = 0u64;
        for &n in nums {
            total = total.saturating_add(n.div_ceil(divisor));
            if total > threshold {
                return false;
            }
        }
        true
    })
}

/// Earliest day on which `bouquets` bouquets of `flowers_per_bouquet`
/// *adjacent* bloomed flowers can be made.
///
/// Requires `bouquets * flowers_per_bouquet <= bloom_days.len()`.
pub fn min_days_for_bouquets(
    bloom_days: &[u64],
    bouquets: usize,
    flowers_per_bouquet: usize,
) -> Result<u64> {
    let needed = bouquets
        .checked_mul(flowers_per_bouquet)
        .ok_or_else(|| reject("min_days_for_bouquets"))?;
    if needed > bloom_days.len() {
        return Err(reject("min_days_for_bouquets"));
    }
    if needed == 0 {
        return Ok(0);
    }

    let first = bloom_days.iter().copied().min().unwrap_or(0);
    find_lower_boundary(first, max_of(bloom_days), |day| {
        let mut made = 0usize;
        let mut run = 0usize;
        for &bloom in bloom_days {
            if bloom <= day {
                run += 1;
                if run == flowers_per_bouquet {
                    made += 1;
                    run = 0;
                    if made >= bouquets {
                        return true;
                    }
                }
            } else {
                run = 0;
            }
        }
        false
    })
}

/// Largest minimum distance achievable when placing `cows` in `stalls`.
///
/// Upper boundary over `[0, max - min]`: "a gap of `d` is achievable" is
/// true for small `d` and false past the answer. Requires
/// `2 <= cows <= stalls.len()`.
///
/// ```
/// use boundary_search::applications::aggressive_cows;
///
/// assert_eq!(aggressive_cows(&[1, 2, 8, 4, 9], 3), Ok(3));
/// ```
pub fn aggressive_cows(stalls: &[u64], cows: usize) -> Result<u64> {
    if cows < 2 || cows > stalls.len() {
        return Err(reject("aggressive_cows"));
    }

    let mut sorted: Vec<u64> = stalls.to_vec();
    sorted.sort_unstable();
    let span = sorted[sorted.len() - 1] - sorted[0];

    find_upper_boundary(0, span, |gap| {
        let mut placed = 1usize;
        let mut last = sorted[0];
        for &stall in &sorted[1..] {
            if stall - last >= gap {
                placed += 1;
                last = stall;
                if placed >= cows {
                    return true;
                }
            }
        }
        false
    })
}

/// `floor(sqrt(n))`.
pub fn floor_sqrt(n: u64) -> u64 {
    let hi = n.min(u64::from(u32::MAX));
    find_upper_boundary(0, hi, |v| v.checked_mul(v).is_some_and(|sq| sq <= n)).unwrap_or(0)
}

/// Exact integer `root`-th root of `n`, or `None` if `n` is not a perfect power.
///
/// ```
/// use boundary_search::applications::nth_root;
///
/// assert_eq!(nth_root(27, 3), Some(3));
/// assert_eq!(nth_root(69, 4), None);
/// ```
pub fn nth_root(n: u64, root: u32) -> Option<u64> {
    if root == 0 {
        return None;
    }
    let candidate =
        find_upper_boundary(0, n, |v| v.checked_pow(root).is_some_and(|p| p <= n)).ok()?;
    (candidate.checked_pow(root) == Some(n)).then_some(candidate)
}

/// The `k`-th positive integer missing from a strictly increasing slice of
/// positive integers.
///
/// `sorted[i] - (i + 1)` counts the values missing before index `i` and never
/// decreases, so the first index where it reaches `k` is a lower boundary
/// over `[0, len]`.
pub fn kth_missing_positive(sorted: &[u64], k: u64) -> Result<u64> {
    if k == 0 {
        return Err(reject("kth_missing_positive"));
    }
    let len = sorted.len();
    let idx = find_lower_boundary(0, len, |i| {
        i == len || sorted[i].saturating_sub(i as u64 + 1) >= k
    })?;
    (idx as u64)
        .checked_add(k)
        .ok_or_else(|| reject("kth_missing_positive"))
}

/// Median of the union of two ascending slices, in O(log(min(m, n))).
///
/// Searches the cut `i` in the shorter slice (the longer one is cut at
/// `half - i`). "`b[j - 1] <= a[i]`" is false for too-small cuts and true
/// from the balanced cut on, so the balanced cut is a lower boundary.
pub fn median_of_sorted(a: &[i64], b: &[i64]) -> Result<f64> {
    let (a, b) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let (m, n) = (a.len(), b.len());
    if m + n == 0 {
        return Err(reject("median_of_sorted"));
    }

    let half = (m + n + 1) / 2;
    let i = find_lower_boundary(0, m, |i| {
        let j = half - i;
        i == m || j == 0 || b[j - 1] <= a[i]
    })?;
    let j = half - i;

    let left_max = match (i.checked_sub(1).map(|k| a[k]), j.checked_sub(1).map(|k| b[k])) {
        (Some(x), Some(y)) => x.max(y),
        (Some(x), None) | (None, Some(x)) => x,
        // i + j == half >= 1, so at least one left part is non-empty.
        (None, None) => unreachable!("balanced cut with empty left side"),
    };
    if (m + n) % 2 == 1 {
        return Ok(left_max as f64);
    }

    let right_min = match (a.get(i), b.get(j)) {
        (Some(&x), Some(&y)) => x.min(y),
        (Some(&x), None) | (None, Some(&x)) => x,
        // Even total >= 2 leaves (m + n) / 2 >= 1 elements right of the cut.
        (None, None) => unreachable!("balanced cut with empty right side"),
    };
    Ok((left_max as f64 + right_min as f64) / 2.0)
}

/// Smallest achievable maximum gap between adjacent gas stations after
/// adding `added` new stations anywhere.
///
/// Real-domain lower boundary over `(0, max_gap]`: a gap `d` is achievable
/// when `sum(ceil(gap / d) - 1) <= added`. `stations` must be finite and
/// ascending.
pub fn minimize_max_gas_distance(
    stations: &[f64],
    added: usize,
    config: &RealSearchConfig,
) -> Result<f64> {
    if stations.iter().any(|s| !s.is_finite()) || stations.windows(2).any(|w| w[0] > w[1]) {
        return Err(SearchError::InvalidRange);
    }

    let max_gap = stations
        .windows(2)
        .map(|w| w[1] - w[0])
        .fold(0.0f64, f64::max);
    if max_gap == 0.0 {
        return Ok(0.0);
    }

    let budget = added as f64;
    bisect(0.0, max_gap, Direction::Lower, config, |d| {
        let mut needed = 0.0;
        for w in stations.windows(2) {
            let gap = w[1] - w[0];
            if gap > 0.0 {
                needed += (gap / d).ceil() - 1.0;
                if needed > budget {
                    return false;
                }
            }
        }
        true
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_ship_within_days() {
        assert_eq!(ship_within_days(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10], 5), Ok(15));
        assert_eq!(ship_within_days(&[3, 2, 2, 4, 1, 4], 3), Ok(6));
        assert_eq!(ship_within_days(&[1, 2, 3, 1, 1], 4), Ok(3));
        assert_eq!(ship_within_days(&[5, 5], 10), Ok(5));
        assert_eq!(ship_within_days(&[], 0), Ok(0));
        assert_eq!(ship_within_days(&[1], 0), Err(SearchError::Infeasible));
    }

    #[test]
    fn test_partition_total_overflows_u64() {
        assert_eq!(ship_within_days(&[u64::MAX, 1], 1), Err(SearchError::Infeasible));
        assert_eq!(allocate_books(&[u64::MAX, 1], 1), Err(SearchError::Infeasible));
        assert_eq!(ship_within_days(&[u64::MAX, 1], 2), Ok(u64::MAX));
        assert_eq!(allocate_books(&[u64::MAX, 1], 2), Ok(u64::MAX));
    }

    #[test]
    fn test_allocate_books() {
        assert_eq!(allocate_books(&[12, 34, 67, 90], 2), Ok(113));
        assert_eq!(allocate_books(&[25, 46, 28, 49, 24], 4), Ok(71));
        assert_eq!(allocate_books(&[7, 2, 5, 10, 8], 2), Ok(18));
        assert_eq!(allocate_books(&[10, 20, 30, 40], 4), Ok(40));
        assert_eq!(allocate_books(&[10, 20], 3), Err(SearchError::Infeasible));
        assert_eq!(allocate_books(&[10, 20], 0), Err(SearchError::Infeasible));
    }

    #[test]
    fn test_min_eating_speed() {
        assert_eq!(min_eating_speed(&[3, 6, 7, 11], 8), Ok(4));
        assert_eq!(min_eating_speed(&[30, 11, 23, 4, 20], 5), Ok(30));
        assert_eq!(min_eating_speed(&[30, 11, 23, 4, 20], 6), Ok(23));
        assert_eq!(min_eating_speed(&[1, 1], 1), Err(SearchError::Infeasible));
    }

    #[test]
    fn test_smallest_divisor() {
        assert_eq!(smallest_divisor(&[1, 2, 5, 9], 6), Ok(5));
        assert_eq!(smallest_divisor(&[44, 22, 33, 11, 1], 5), Ok(44));
        assert_eq!(smallest_divisor(&[1, 2, 3], 2), Err(SearchError::Infeasible));
    }

    #[test]
    fn test_min_days_for_bouquets() {
        assert_eq!(min_days_for_bouquets(&[1, 10, 3, 10, 2], 3, 1), Ok(3));
        assert_eq!(
            min_days_for_bouquets(&[1, 10, 3, 10, 2], 3, 2),
            Err(SearchError::Infeasible)
        );
        assert_eq!(min_days_for_bouquets(&[7, 7, 7, 7, 12, 7, 7], 2, 3), Ok(12));
        assert_eq!(
            min_days_for_bouquets(&[1, 2], usize::MAX, 2),
            Err(SearchError::Infeasible)
        );
        assert_eq!(min_days_for_bouquets(&[5], 0, 3), Ok(0));
    }

    #[test]
    fn test_aggressive_cows() {
        assert_eq!(aggressive_cows(&[1, 2, 4, 8, 9], 3), Ok(3));
        assert_eq!(aggressive_cows(&[0, 3, 4, 7, 10, 9], 4), Ok(3));
        assert_eq!(aggressive_cows(&[5, 5, 5], 3), Ok(0));
        assert_eq!(aggressive_cows(&[1, 100], 2), Ok(99));
        assert_eq!(aggressive_cows(&[1, 2], 3), Err(SearchError::Infeasible));
        assert_eq!(aggressive_cows(&[1, 2], 1), Err(SearchError::Infeasible));
    }

    #[test]
    fn test_roots() {
        assert_eq!(floor_sqrt(0), 0);
        assert_eq!(floor_sqrt(1), 1);
        assert_eq!(floor_sqrt(15), 3);
        assert_eq!(floor_sqrt(16), 4);
        assert_eq!(floor_sqrt(u64::MAX), u64::from(u32::MAX));
        assert_eq!(nth_root(27, 3), Some(3));
        assert_eq!(nth_root(69, 4), None);
        assert_eq!(nth_root(0, 5), Some(0));
        assert_eq!(nth_root(1, 7), Some(1));
        assert_eq!(nth_root(u64::MAX, 1), Some(u64::MAX));
        assert_eq!(nth_root(1 << 60, 60), Some(2));
        assert_eq!(nth_root(8, 0), None);
    }

    #[test]
    fn test_kth_missing_positive() {
        assert_eq!(kth_missing_positive(&[2, 3, 4, 7, 11], 5), Ok(9));
        assert_eq!(kth_missing_positive(&[1, 2, 3, 4], 2), Ok(6));
        assert_eq!(kth_missing_positive(&[], 3), Ok(3));
        assert_eq!(kth_missing_positive(&[5], 1), Ok(1));
        assert_eq!(kth_missing_positive(&[1], 0), Err(SearchError::Infeasible));
        assert_eq!(kth_missing_positive(&[1], u64::MAX), Err(SearchError::Infeasible));
        assert_eq!(kth_missing_positive(&[], u64::MAX), Ok(u64::MAX));
    }

    #[test]
    fn test_median_of_sorted() {
        assert_eq!(median_of_sorted(&[1, 3], &[2]), Ok(2.0));
        assert_eq!(median_of_sorted(&[1, 2], &[3, 4]), Ok(2.5));
        assert_eq!(median_of_sorted(&[], &[1]), Ok(1.0));
        assert_eq!(median_of_sorted(&[0, 0], &[0, 0]), Ok(0.0));
        assert_eq!(
            median_of_sorted(&[1, 2, 3, 4, 5], &[6, 7, 8, 9, 10, 11]),
            Ok(6.0)
        );
        assert_eq!(median_of_sorted(&[], &[]), Err(SearchError::Infeasible));
        assert_eq!(median_of_sorted(&[5], &[]), Ok(5.0));
        assert_eq!(median_of_sorted(&[], &[-3, 4]), Ok(0.5));
    }

    #[test]
    fn test_gas_stations() {
        let cfg = RealSearchConfig::default();
        let stations: Vec<f64> = (1..=10).map(f64::from).collect();
        let d = minimize_max_gas_distance(&stations, 9, &cfg).unwrap();
        assert!((d - 0.5).abs() <= 1e-6);

        let stations = [23.0, 24.0, 36.0, 39.0, 46.0, 56.0, 57.0, 65.0, 84.0, 98.0];
        let d = minimize_max_gas_distance(&stations, 1, &cfg).unwrap();
        assert!((d - 14.0).abs() <= 1e-6);

        assert_eq!(minimize_max_gas_distance(&[3.0], 4, &cfg), Ok(0.0));
        assert_eq!(
            minimize_max_gas_distance(&[3.0, 1.0], 4, &cfg),
            Err(SearchError::InvalidRange)
        );
    }

    fn brute_min_max_partition(items: &[u64], parts: usize) -> u64 {
        let lo = max_of(items);
        let hi = saturating_sum(items);
        (lo..=hi)
            .find(|&c| fits_in_bins(items, c, parts))
            .unwrap_or(hi)
    }

    proptest! {
        #[test]
        fn prop_allocate_matches_linear_scan(
            items in proptest::collection::vec(1u64..20, 1..12),
            parts in 1usize..12,
        ) {
            let parts = parts.min(items.len());
            prop_assert_eq!(allocate_books(&items, parts), Ok(brute_min_max_partition(&items, parts)));
        }

        #[test]
        fn prop_median_matches_merge(
            mut a in proptest::collection::vec(-100i64..100, 0..15),
            mut b in proptest::collection::vec(-100i64..100, 0..15),
        ) {
            prop_assume!(!a.is_empty() || !b.is_empty());
            a.sort();
            b.sort();
            let mut all: Vec<i64> = a.iter().chain(b.iter()).copied().collect();
            all.sort();
            let n = all.len();
            let expected = if n % 2 == 1 {
                all[n / 2] as f64
            } else {
                (all[n / 2 - 1] as f64 + all[n / 2] as f64) / 2.0
            };
            prop_assert_eq!(median_of_sorted(&a, &b), Ok(expected));
        }

        #[test]
        fn prop_floor_sqrt(n in any::<u64>()) {
            let r = floor_sqrt(n) as u128;
            prop_assert!(r * r <= n as u128);
            prop_assert!((r + 1) * (r + 1) > n as u128);
        }
    }
}

//! Sorted-slice boundaries, expressed as answer searches.
//!
//! Every search runs over the index domain `[0, len]`. Index `len` is a real
//! candidate whose predicate value is fixed to `true`, so "no such element"
//! comes back as `len` instead of needing a separate check.

use crate::answer::find_lower_boundary;

/// First index whose element is `>= target` (`len` if none).
///
/// # Example
/// ```
/// use boundary_search::bounds::lower_bound;
///
/// assert_eq!(lower_bound(&[1, 2, 4, 4, 7], &4), 2);
/// assert_eq!(lower_bound(&[1, 2, 4, 4, 7], &8), 5);
/// ```
pub fn lower_bound<T: Ord>(sorted: &[T], target: &T) -> usize {
    partition_point(sorted, |x| x < target)
}

/// First index whose element is `> target` (`len` if none).
pub fn upper_bound<T: Ord>(sorted: &[T], target: &T) -> usize {
    partition_point(sorted, |x| x <= target)
}

/// First index where `before` stops holding. `before` must be `T..T F..F`
/// over the slice.
pub fn partition_point<T, F>(sorted: &[T], mut before: F) -> usize
where
    F: FnMut(&T) -> bool,
{
    let len = sorted.len();
    // [0, len] with lo <= hi always holds, so the range error is unreachable.
    find_lower_boundary(0, len, |i| i == len || !before(&sorted[i])).unwrap_or(len)
}

/// Index of the first element equal to `target`.
pub fn first_occurrence<T: Ord>(sorted: &[T], target: &T) -> Option<usize> {
    let idx = lower_bound(sorted, target);
    match sorted.get(idx) {
        Some(x) if x == target => Some(idx),
        _ => None,
    }
}

/// Index of the last element equal to `target`.
pub fn last_occurrence<T: Ord>(sorted: &[T], target: &T) -> Option<usize> {
    let idx = upper_bound(sorted, target);
    match idx.checked_sub(1).and_then(|i| sorted.get(i).map(|x| (i, x))) {
        Some((i, x)) if x == target => Some(i),
        _ => None,
    }
}

/// Number of elements equal to `target`. Two searches, O(log n).
pub fn count_occurrences<T: Ord>(sorted: &[T], target: &T) -> usize {
    upper_bound(sorted, target) - lower_bound(sorted, target)
}

/// Position of `target` if present, else where it would be inserted.
///
/// Same as [`lower_bound`]; kept under the name callers search for.
#[inline]
pub fn search_insert<T: Ord>(sorted: &[T], target: &T) -> usize {
    lower_bound(sorted, target)
}

/// Index of the smallest element of a rotated ascending slice of distinct
/// values (`0` when not rotated, `None` when empty).
///
/// `x <= last` is false on the upper run and true from the rotation point
/// onwards, which is exactly the lower-boundary shape.
///
/// ```
/// use boundary_search::bounds::rotation_point;
///
/// assert_eq!(rotation_point(&[4, 5, 6, 7, 0, 1, 2]), Some(4));
/// assert_eq!(rotation_point(&[1, 2, 3]), Some(0));
/// ```
pub fn rotation_point<T: Ord>(rotated: &[T]) -> Option<usize> {
    let last = rotated.last()?;
    let hi = rotated.len() - 1;
    find_lower_boundary(0, hi, |i| &rotated[i] <= last).ok()
}

/// Index of `target` in a rotated ascending slice of distinct values.
pub fn search_rotated<T: Ord>(rotated: &[T], target: &T) -> Option<usize> {
    let pivot = rotation_point(rotated)?;
    let (upper_run, lower_run) = rotated.split_at(pivot);
    if let Some(i) = first_occurrence(lower_run, target) {
        return Some(pivot + i);
    }
    first_occurrence(upper_run, target)
}

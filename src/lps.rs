//! KMP Failure Function (LPS table)
//!
//! `lps[i]` = length of the longest proper border of `pattern[0..=i]`, i.e.
//! the longest proper prefix that is also a suffix.
//!
//! **Construction**: amortized O(m). On mismatch the candidate border shrinks
//! to `lps[len - 1]` while `i` stays put; `len` can only fall as often as it
//! has risen, so the loop runs at most `2m` times.

extern crate alloc;
use alloc::vec;
use alloc::vec::Vec;

/// Build the LPS table for `pattern`.
///
/// # Example
/// ```
/// use boundary_search::lps::compute_lps;
///
/// assert_eq!(compute_lps(b"ABABCABAB"), vec![0, 0, 1, 2, 0, 1, 2, 3, 4]);
/// ```
pub fn compute_lps<T: PartialEq>(pattern: &[T]) -> Vec<usize> {
    let m = pattern.len();
    let mut lps = vec![0usize; m];

    let mut len = 0;
    let mut i = 1;
    while i < m {
        if pattern[i] == pattern[len] {
            len += 1;
            lps[i] = len;
            i += 1;
        } else if len != 0 {
            len = lps[len - 1];
        } else {
            lps[i] = 0;
            i += 1;
        }
    }

    lps
}

/// Longest proper border of the whole pattern (`0` for an empty pattern).
#[inline]
pub fn longest_border(lps: &[usize]) -> usize {
    lps.last().copied().unwrap_or(0)
}

/// Smallest period of the pattern: `m - longest_border`.
///
/// `"abcabcab"` has period 3; a pattern with no border is its own period.
#[inline]
pub fn period(lps: &[usize]) -> usize {
    lps.len() - longest_border(lps)
}

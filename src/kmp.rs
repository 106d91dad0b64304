//! Knuth–Morris–Pratt Exact Matching
//!
//! **Architecture**:
//! - [`KmpMatcher`]: pattern + LPS table, compiled once, reusable across texts
//! - [`Matches`]: lazy iterator over (overlapping) match positions
//!
//! **Scanning invariant**: the text cursor never moves backwards. Every
//! symbol comparison either advances the text cursor or shrinks the pattern
//! cursor, and the pattern cursor cannot shrink more than it has grown, so a
//! full scan costs at most `2n` comparisons for any pattern.
//!
//! **Edge policy**:
//! - empty pattern matches at `0` (and, through [`KmpMatcher::find_iter`], at every `0..=n`)
//! - non-empty pattern never matches an empty text

extern crate alloc;
use alloc::vec::Vec;
use core::iter::FusedIterator;

use crate::lps::compute_lps;

/// Compiled KMP pattern.
///
/// # Example
/// ```
/// use boundary_search::KmpMatcher;
///
/// let matcher = KmpMatcher::new(b"ABABC");
/// assert_eq!(matcher.find(b"ABABDABACDABABCABAB"), Some(10));
/// assert_eq!(matcher.find(b"ABAB"), None);
/// ```
#[derive(Debug, Clone)]
pub struct KmpMatcher<'p, T> {
    pattern: &'p [T],
    lps: Vec<usize>,
}

impl<'p, T: PartialEq> KmpMatcher<'p, T> {
    /// Compile `pattern`. O(m) time, one allocation of `m` words.
    pub fn new(pattern: &'p [T]) -> Self {
        Self {
            pattern,
            lps: compute_lps(pattern),
        }
    }

    #[inline]
    pub fn pattern(&self) -> &'p [T] {
        self.pattern
    }

    /// The failure function of the compiled pattern.
    #[inline]
    pub fn lps(&self) -> &[usize] {
        &self.lps
    }

    /// Index of the first occurrence in `text`.
    #[inline]
    pub fn find(&self, text: &[T]) -> Option<usize> {
        self.find_iter(text).next()
    }

    /// All occurrences in `text`, overlapping ones included, in order.
    ///
    /// ```
    /// use boundary_search::KmpMatcher;
    ///
    /// let positions: Vec<_> = KmpMatcher::new(b"aa").find_iter(b"aaaa").collect();
    /// assert_eq!(positions, vec![0, 1, 2]);
    /// ```
    #[inline]
    pub fn find_iter<'a>(&'a self, text: &'a [T]) -> Matches<'a, T> {
        Matches {
            pattern: self.pattern,
            lps: &self.lps,
            text,
            i: 0,
            j: 0,
            comparisons: 0,
        }
    }

    #[inline]
    pub fn contains(&self, text: &[T]) -> bool {
        self.find(text).is_some()
    }

    /// Number of (overlapping) occurrences.
    pub fn count(&self, text: &[T]) -> usize {
        self.find_iter(text).count()
    }
}

/// Lazy iterator over match start positions.
///
/// Holds the `(text, pattern)` cursor pair between calls; resuming after a
/// match continues from the longest border of the pattern, so overlapping
/// matches are reported.
#[derive(Debug, Clone)]
pub struct Matches<'a, T> {
    pattern: &'a [T],
    lps: &'a [usize],
    text: &'a [T],
    /// Text cursor. For an empty pattern, the next position to yield.
    i: usize,
    /// Pattern cursor, always in `0..pattern.len()` between calls.
    j: usize,
    comparisons: usize,
}

impl<'a, T> Matches<'a, T> {
    /// Symbol comparisons performed so far. Never exceeds `2 * text.len()`.
    #[inline]
    pub fn comparisons(&self) -> usize {
        self.comparisons
    }
}

impl<'a, T: PartialEq> Iterator for Matches<'a, T> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let m = self.pattern.len();
        let n = self.text.len();

        if m == 0 {
            if self.i > n {
                return None;
            }
            let pos = self.i;
            self.i += 1;
            return Some(pos);
        }

        while self.i < n {
            self.comparisons += 1;
            if self.text[self.i] == self.pattern[self.j] {
                self.i += 1;
                self.j += 1;
                if self.j == m {
                    self.j = self.lps[m - 1];
                    return Some(self.i - m);
                }
            } else if self.j != 0 {
                // Fall back in the pattern; the text cursor stays.
                self.j = self.lps[self.j - 1];
            } else {
                self.i += 1;
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.pattern.is_empty() {
            let left = (self.text.len() + 1).saturating_sub(self.i);
            (left, Some(left))
        } else {
            // Every match advances the text cursor at least once.
            (0, Some(self.text.len().saturating_sub(self.i)))
        }
    }
}

impl<'a, T: PartialEq> FusedIterator for Matches<'a, T> {}

/// First index of `pattern` in `text`, in O(n + m).
///
/// # Example
/// ```
/// use boundary_search::kmp_search;
///
/// assert_eq!(kmp_search(b"ABABDABACDABABCABAB", b"ABABC"), Some(10));
/// assert_eq!(kmp_search(b"", b""), Some(0));
/// assert_eq!(kmp_search(b"", b"a"), None);
/// ```
pub fn kmp_search<T: PartialEq>(text: &[T], pattern: &[T]) -> Option<usize> {
    if pattern.is_empty() {
        return Some(0);
    }
    if text.len() < pattern.len() {
        return None;
    }
    KmpMatcher::new(pattern).find(text)
}

/// Every (overlapping) occurrence of `pattern` in `text`.
pub fn kmp_search_all<T: PartialEq>(text: &[T], pattern: &[T]) -> Vec<usize> {
    KmpMatcher::new(pattern).find_iter(text).collect()
}

/// Byte offset of the first occurrence of `pattern` in `text`.
#[inline]
pub fn find_str(text: &str, pattern: &str) -> Option<usize> {
    kmp_search(text.as_bytes(), pattern.as_bytes())
}

/// Reference O(n·m) scan. Same edge policy as [`kmp_search`].
pub fn naive_search<T: PartialEq>(text: &[T], pattern: &[T]) -> Option<usize> {
    if pattern.is_empty() {
        return Some(0);
    }
    if text.len() < pattern.len() {
        return None;
    }
    (0..=text.len() - pattern.len()).find(|&start| &text[start..start + pattern.len()] == pattern)
}

/// `true` if `goal` is a rotation of `s`.
///
/// Every rotation of `s` is a contiguous window of `s + s`, so this is one
/// KMP scan of the doubled text.
pub fn is_rotation_of<T: PartialEq + Clone>(s: &[T], goal: &[T]) -> bool {
    if s.len() != goal.len() {
        return false;
    }
    if s.is_empty() {
        return true;
    }

    let mut doubled = Vec::with_capacity(s.len() * 2);
    doubled.extend_from_slice(s);
    doubled.extend_from_slice(s);
    KmpMatcher::new(goal).contains(&doubled)
}

/// `true` if `goal` is a rotation of `s`.
///
/// Works on UTF-8 bytes; a match of one valid UTF-8 string inside another
/// always starts on a character boundary, so byte rotations coincide with
/// character rotations.
///
/// # Example
/// ```
/// use boundary_search::is_rotation;
///
/// assert!(is_rotation("abcde", "cdeab"));
/// assert!(!is_rotation("abcde", "abced"));
/// ```
#[inline]
pub fn is_rotation(s: &str, goal: &str) -> bool {
    is_rotation_of(s.as_bytes(), goal.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;
    use proptest::prelude::*;

    #[test]
    fn test_first_match() {
        assert_eq!(kmp_search(b"ABABDABACDABABCABAB", b"ABABC"), Some(10));
        assert_eq!(kmp_search(b"hello world", b"world"), Some(6));
        assert_eq!(kmp_search(b"hello world", b"hello"), Some(0));
        assert_eq!(kmp_search(b"hello world", b"worlds"), None);
    }

    #[test]
    fn test_empty_edges() {
        assert_eq!(kmp_search(b"abc", b""), Some(0));
        assert_eq!(kmp_search(b"", b""), Some(0));
        assert_eq!(kmp_search(b"", b"a"), None);
        assert_eq!(naive_search(b"", b"a"), None);
        assert_eq!(naive_search(b"abc", b""), Some(0));
    }

    #[test]
    fn test_pattern_longer_than_text() {
        assert_eq!(kmp_search(b"ab", b"abc"), None);
        assert_eq!(KmpMatcher::new(b"abc").find(b"ab"), None);
    }

    #[test]
    fn test_find_iter_overlapping() {
        assert_eq!(kmp_search_all(b"aaaa", b"aa"), vec![0, 1, 2]);
        assert_eq!(kmp_search_all(b"abababab", b"abab"), vec![0, 2, 4]);
        assert_eq!(kmp_search_all(b"abc", b"d"), Vec::<usize>::new());
    }

    #[test]
    fn test_size_hint_bounded_by_unread_text() {
        let matcher = KmpMatcher::new(b"aa");
        let mut it = matcher.find_iter(b"aaab");
        assert_eq!(it.size_hint(), (0, Some(4)));
        assert_eq!(it.next(), Some(0));
        // Cursor at 2 with one symbol of the pattern pending.
        assert_eq!(it.size_hint(), (0, Some(2)));
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.size_hint(), (0, Some(1)));
        assert_eq!(it.next(), None);
        assert_eq!(it.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_empty_pattern_matches_everywhere() {
        let matcher = KmpMatcher::new(b"");
        let positions: Vec<_> = matcher.find_iter(b"abc").collect();
        assert_eq!(positions, vec![0, 1, 2, 3]);
        assert_eq!(matcher.find_iter(b"abc").size_hint(), (4, Some(4)));
        assert_eq!(matcher.count(b""), 1);
    }

    #[test]
    fn test_matcher_reuse() {
        let matcher = KmpMatcher::new(b"needle");
        assert!(matcher.contains(b"haystack with a needle in it"));
        assert!(!matcher.contains(b"haystack"));
        assert_eq!(matcher.count(b"needleneedle needle"), 3);
        assert_eq!(matcher.lps(), &[0, 0, 0, 0, 0, 1]);
        assert_eq!(matcher.pattern(), b"needle");
    }

    #[test]
    fn test_iterator_is_fused() {
        let matcher = KmpMatcher::new(b"ab");
        let mut it = matcher.find_iter(b"xab");
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_comparisons_repetitive_worst_case() {
        let text = [b'a'; 1000];
        let mut pattern = [b'a'; 50];
        pattern[49] = b'b';
        let matcher = KmpMatcher::new(&pattern);
        let mut it = matcher.find_iter(&text);
        assert_eq!(it.next(), None);
        assert!(it.comparisons() <= 2 * text.len());
    }

    #[test]
    fn test_generic_symbols() {
        let text = ["GET", "/", "HTTP", "GET", "/index", "HTTP"];
        assert_eq!(kmp_search(&text, &["GET", "/index"]), Some(3));
        let chars: Vec<char> = "naïve café".chars().collect();
        let pattern: Vec<char> = "café".chars().collect();
        assert_eq!(kmp_search(&chars, &pattern), Some(6));
    }

    #[test]
    fn test_find_str_byte_offset() {
        assert_eq!(find_str("naïve café", "café"), Some(7));
        assert_eq!(find_str("abc", "abd"), None);
    }

    #[test]
    fn test_rotation() {
        assert!(is_rotation("abcde", "cdeab"));
        assert!(!is_rotation("abcde", "abced"));
        assert!(is_rotation("", ""));
        assert!(!is_rotation("a", ""));
        assert!(!is_rotation("abc", "abcd"));
        assert!(is_rotation("aa", "aa"));
        assert!(is_rotation("héllo", "llohé"));
        assert!(is_rotation_of(&[1, 2, 3], &[3, 1, 2]));
        assert!(!is_rotation_of(&[1, 2, 3], &[3, 2, 1]));
    }

    fn rotate(s: &str, k: usize) -> String {
        let chars: Vec<char> = s.chars().collect();
        if chars.is_empty() {
            return String::new();
        }
        let k = k % chars.len();
        chars[k..].iter().chain(chars[..k].iter()).collect()
    }

    proptest! {
        #[test]
        fn prop_agrees_with_naive(
            text in proptest::collection::vec(0u8..3, 0..80),
            pattern in proptest::collection::vec(0u8..3, 0..6),
        ) {
            prop_assert_eq!(kmp_search(&text, &pattern), naive_search(&text, &pattern));
        }

        #[test]
        fn prop_match_is_first_and_exact(
            text in proptest::collection::vec(0u8..2, 0..80),
            pattern in proptest::collection::vec(0u8..2, 1..5),
        ) {
            if let Some(idx) = kmp_search(&text, &pattern) {
                prop_assert_eq!(&text[idx..idx + pattern.len()], &pattern[..]);
                for earlier in 0..idx {
                    prop_assert_ne!(&text[earlier..earlier + pattern.len()], &pattern[..]);
                }
            }
        }

        #[test]
        fn prop_find_iter_matches_every_window(
            text in proptest::collection::vec(0u8..2, 0..60),
            pattern in proptest::collection::vec(0u8..2, 1..4),
        ) {
            let expected: Vec<usize> = (0..text.len().saturating_sub(pattern.len() - 1))
                .filter(|&s| text[s..s + pattern.len()] == pattern[..])
                .collect();
            let matcher = KmpMatcher::new(&pattern);
            let mut it = matcher.find_iter(&text);
            let found: Vec<usize> = it.by_ref().collect();
            prop_assert_eq!(found, expected);
            prop_assert!(it.comparisons() <= 2 * text.len());
        }

        #[test]
        fn prop_rotation_round_trip(s in "[a-c]{0,12}", k in 0usize..16) {
            prop_assert!(is_rotation(&s, &s));
            let goal = rotate(&s, k);
            prop_assert!(is_rotation(&s, &goal));
            prop_assert!(is_rotation(&goal, &s));
        }

        #[test]
        fn prop_rotation_symmetric(s in "[ab]{0,6}", goal in "[ab]{0,6}") {
            prop_assert_eq!(is_rotation(&s, &goal), is_rotation(&goal, &s));
        }
    }
}

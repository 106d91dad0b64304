//! # boundary-search
//!
//! **Binary search on the answer + KMP exact matching**
//!
//! > "Don't scan the domain. Find the edge."
//!
//! ## Components
//!
//! - **Answer engine** ([`answer`]): extremal value of a monotonic predicate
//!   over an integer interval, in both canonical forms
//!   ([`find_lower_boundary`], [`find_upper_boundary`])
//! - **Real bisection** ([`real`]): the same contract over `f64`, epsilon and
//!   iteration-capped
//! - **Partition feasibility** ([`partition`]): the greedy "fits in K bins"
//!   predicate most allocation searches use
//! - **KMP** ([`kmp`], [`lps`]): linear-time exact matching and rotation checks
//!
//! ## Complexity
//!
//! | Operation | Time | Space |
//! |-----------|------|-------|
//! | Boundary search | **O(log(hi - lo))** probes | O(1) |
//! | Real bisection | O(min(log2(width / eps), cap)) probes | O(1) |
//! | LPS build | **O(m)** | O(m) |
//! | KMP scan | **O(n)**, ≤ 2n comparisons | O(1) |
//!
//! ## Example
//!
//! ```
//! use boundary_search::{find_lower_boundary, is_rotation, kmp_search};
//! use boundary_search::partition::fits_in_bins;
//!
//! // Minimum ship capacity for 10 packages in 5 days.
//! let weights = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
//! let capacity = find_lower_boundary(10u64, 55, |c| fits_in_bins(&weights, c, 5)).unwrap();
//! assert_eq!(capacity, 15);
//!
//! assert_eq!(kmp_search(b"ABABDABACDABABCABAB", b"ABABC"), Some(10));
//! assert!(is_rotation("abcde", "cdeab"));
//! ```
//!
//! ## Logging
//!
//! Searches emit `trace`-level records through the [`log`] facade and never
//! print. Install any `log` backend to see them.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod answer;
pub mod applications;
pub mod bounds;
pub mod config;
pub mod error;
pub mod kmp;
pub mod lps;
pub mod observer;
pub mod partition;
pub mod real;

pub use answer::{find_lower_boundary, find_upper_boundary, Direction, SearchReport};
pub use config::RealSearchConfig;
pub use error::SearchError;
pub use kmp::{is_rotation, kmp_search, KmpMatcher};
pub use lps::compute_lps;
pub use observer::{NoopObserver, Observer, Probe};

/// Version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Boundary Search Demo
//!
//! Answer searches and KMP matching on small inputs, with every probe traced.
//!
//! ```bash
//! cargo run --example boundary_demo
//! ```

use boundary_search::answer::{search_observed, Direction};
use boundary_search::applications::{aggressive_cows, min_eating_speed, ship_within_days};
use boundary_search::partition::fits_in_bins;
use boundary_search::{is_rotation, KmpMatcher, Probe};

fn main() -> Result<(), boundary_search::SearchError> {
    println!("=== Binary Search on the Answer ===\n");

    let weights = [1u64, 2, 3, 4, 5, 6, 7, 8, 9, 10];
    println!("Weights: {:?}, days = 5", weights);

    let capacity = search_observed(
        10u64,
        55,
        Direction::Lower,
        |c| fits_in_bins(&weights, c, 5),
        |p: &Probe<u64>| {
            println!(
                "  probe {:>2} in [{:>2}, {:>2}] -> {}",
                p.candidate,
                p.lo,
                p.hi,
                if p.feasible { "fits" } else { "too small" }
            )
        },
    )?;
    println!("  minimum capacity = {}", capacity);
    assert_eq!(capacity, ship_within_days(&weights, 5)?);

    println!("\n--- More answer searches ---\n");
    println!("  koko [3, 6, 7, 11] in 8h  -> speed {}", min_eating_speed(&[3, 6, 7, 11], 8)?);
    println!("  cows [1, 2, 4, 8, 9] x 3  -> gap {}", aggressive_cows(&[1, 2, 4, 8, 9], 3)?);

    println!("\n=== KMP ===\n");

    let matcher = KmpMatcher::new(b"ABABC");
    let text = b"ABABDABACDABABCABAB";
    println!("  lps(ABABC)       = {:?}", matcher.lps());
    println!("  find in {:?} = {:?}", std::str::from_utf8(text).unwrap_or("?"), matcher.find(text));

    let all: Vec<_> = KmpMatcher::new(b"aa").find_iter(b"aaaa").collect();
    println!("  \"aa\" in \"aaaa\"   = {:?} (overlapping)", all);

    println!("\n--- Rotation ---\n");
    for (s, goal) in [("abcde", "cdeab"), ("abcde", "abced")] {
        println!("  is_rotation({s:?}, {goal:?}) = {}", is_rotation(s, goal));
    }

    Ok(())
}

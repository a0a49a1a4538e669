//! Single-threaded array-sort benchmark.
//!
//! Generates a large random `i32` array, sorts it in place, verifies the
//! result is non-decreasing, and reports wall-clock time for each phase.

use crate::timer::SteadyTimer;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;
use std::time::Duration;

/// Generated values are uniform in [-1_000_000, 1_000_000).
const VALUE_RANGE: std::ops::Range<i32> = -1_000_000..1_000_000;

/// Per-phase timings for one sort-benchmark run.
#[derive(Debug, Clone, Copy)]
pub struct SortReport {
    pub len: usize,
    pub generate: Duration,
    pub sort: Duration,
    pub verify: Duration,
    pub sorted: bool,
}

/// Fill a vector with `len` seeded random values.
pub fn generate_random_values(len: usize, seed: u64) -> Vec<i32> {
    let mut rng = Pcg64Mcg::seed_from_u64(seed);
    let mut values = Vec::with_capacity(len);
    for _ in 0..len {
        values.push(rng.gen_range(VALUE_RANGE));
    }
    values
}

/// True when every adjacent pair is non-decreasing.
pub fn is_sorted(values: &[i32]) -> bool {
    values.windows(2).all(|pair| pair[0] <= pair[1])
}

/// Generate, sort, and verify `len` values, timing each phase.
pub fn run(len: usize, seed: u64) -> SortReport {
    let mut timer = SteadyTimer::start();
    let mut values = generate_random_values(len, seed);
    let generate = timer.elapsed();

    timer.reset();
    values.sort_unstable();
    let sort = timer.elapsed();

    timer.reset();
    let sorted = is_sorted(&values);
    let verify = timer.elapsed();

    SortReport {
        len: values.len(),
        generate,
        sort,
        verify,
        sorted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_is_seeded_and_in_range() {
        let a = generate_random_values(10_000, 42);
        let b = generate_random_values(10_000, 42);
        let c = generate_random_values(10_000, 43);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.iter().all(|&v| VALUE_RANGE.contains(&v)));
    }

    #[test]
    fn test_is_sorted() {
        assert!(is_sorted(&[]));
        assert!(is_sorted(&[1]));
        assert!(is_sorted(&[1, 1, 2, 3]));
        assert!(!is_sorted(&[2, 1]));
    }

    #[test]
    fn test_run_sorts_and_verifies() {
        let report = run(50_000, 7);
        assert_eq!(report.len, 50_000);
        assert!(report.sorted);
    }

    #[test]
    fn test_sort_preserves_multiset() {
        use std::collections::HashMap;

        fn counts(values: &[i32]) -> HashMap<i32, usize> {
            let mut map = HashMap::new();
            for &v in values {
                *map.entry(v).or_insert(0) += 1;
            }
            map
        }

        let input = generate_random_values(20_000, 99);
        let mut sorted = input.clone();
        sorted.sort_unstable();

        assert!(is_sorted(&sorted));
        assert_eq!(sorted.len(), input.len());
        assert_eq!(counts(&sorted), counts(&input));
    }
}

//! Benchmark E: generate, sort, and verify a large random array.

use spindle::sort_bench;
use spindle::timer::format_ms;
use std::time::{SystemTime, UNIX_EPOCH};

const ARRAY_SIZE: usize = 100_000_000;

fn main() {
    println!();
    println!("<<< RUST >>>");
    println!("Size: {}", ARRAY_SIZE);

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let report = sort_bench::run(ARRAY_SIZE, seed);

    println!("Random array generated in {}", format_ms(report.generate));
    println!("Array sorted in {}", format_ms(report.sort));
    println!("sorted: {}", report.sorted);
    println!(
        "Sort correctness is checked in {}",
        format_ms(report.verify)
    );
}

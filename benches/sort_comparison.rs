//! Benchmarks comparing stable and unstable sort on random data.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use spindle::sort_bench::generate_random_values;

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");

    for size in [10_000, 100_000, 1_000_000].iter() {
        let input = generate_random_values(*size, 42);

        group.bench_with_input(BenchmarkId::new("unstable", size), size, |b, _| {
            b.iter(|| {
                let mut values = input.clone();
                values.sort_unstable();
                black_box(values.len())
            });
        });

        group.bench_with_input(BenchmarkId::new("stable", size), size, |b, _| {
            b.iter(|| {
                let mut values = input.clone();
                values.sort();
                black_box(values.len())
            });
        });
    }

    group.finish();
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for size in [100_000, 1_000_000].iter() {
        group.bench_with_input(BenchmarkId::new("seeded", size), size, |b, &size| {
            b.iter(|| black_box(generate_random_values(size, 42)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sort, bench_generate);
criterion_main!(benches);

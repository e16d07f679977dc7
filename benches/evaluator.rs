//! Performance benchmarks for goldbach

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use goldbach::{goldbach_combinations, is_prime, prime_gaps, range_counts, verify_goldbach};

fn benchmark_is_prime(c: &mut Criterion) {
    c.bench_function("is_prime_1000003", |b| {
        b.iter(|| is_prime(black_box(1_000_003)))
    });
}

fn benchmark_combinations(c: &mut Criterion) {
    let mut group = c.benchmark_group("goldbach_combinations");

    for n in [100i64, 1_000, 10_000].iter() {
        group.bench_with_input(BenchmarkId::new("n", n), n, |b, &n| {
            b.iter(|| goldbach_combinations(black_box(n)));
        });
    }

    group.finish();
}

fn benchmark_verify(c: &mut Criterion) {
    c.bench_function("verify_goldbach_10000", |b| {
        b.iter(|| verify_goldbach(black_box(10_000)))
    });
}

fn benchmark_range(c: &mut Criterion) {
    c.bench_function("range_counts_2000", |b| {
        b.iter(|| range_counts(black_box(2000)))
    });
}

fn benchmark_prime_gaps(c: &mut Criterion) {
    let mut group = c.benchmark_group("prime_gaps");

    for max_n in [1_000i64, 10_000].iter() {
        group.bench_with_input(BenchmarkId::new("max_n", max_n), max_n, |b, &max_n| {
            b.iter(|| prime_gaps(black_box(max_n)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_is_prime,
    benchmark_combinations,
    benchmark_verify,
    benchmark_range,
    benchmark_prime_gaps
);
criterion_main!(benches);

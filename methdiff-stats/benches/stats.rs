use criterion::{black_box, criterion_group, criterion_main, Criterion};
use methdiff_stats::normalization::quantile_normalize;
use methdiff_stats::signrank::SignedRankDistribution;
use methdiff_stats::testing::{signed_rank_test, signed_rank_test_with};

fn random_f64(n: usize, seed: u64) -> Vec<f64> {
    let mut state = seed;
    (0..n)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            (state >> 11) as f64 / (1u64 << 53) as f64 - 0.5
        })
        .collect()
}

fn bench_table_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_build");

    for n in [20usize, 100, 500] {
        group.bench_function(format!("n{n}"), |b| {
            b.iter(|| {
                let mut dist = SignedRankDistribution::new();
                dist.coefficient(black_box(0), black_box(n))
            })
        });
    }

    group.finish();
}

fn bench_signed_rank_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("signed_rank_test");

    let diffs = random_f64(30, 42);
    group.bench_function("cold_n30", |b| {
        b.iter(|| signed_rank_test(black_box(&diffs)))
    });

    // Table reuse across a record stream with fixed n.
    let records: Vec<Vec<f64>> = (0..100).map(|i| random_f64(30, 42 + i)).collect();
    group.bench_function("warm_100_records_n30", |b| {
        b.iter(|| {
            let mut dist = SignedRankDistribution::new();
            for r in &records {
                let _ = signed_rank_test_with(&mut dist, black_box(r));
            }
        })
    });

    group.finish();
}

fn bench_quantile_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("quantile_normalize");

    let values = random_f64(10_000 * 8, 7);
    group.bench_function("10k_x8", |b| {
        b.iter(|| quantile_normalize(black_box(&values), 10_000, 8))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_table_build,
    bench_signed_rank_test,
    bench_quantile_normalize
);
criterion_main!(benches);

use criterion::{criterion_group, criterion_main, Criterion};

use aoc2025::{default_input, ranges, ALL_SOLUTIONS};

pub fn criterion_benchmark(c: &mut Criterion) {
    for (n, day) in ALL_SOLUTIONS {
        let input = default_input(n).unwrap();
        c.bench_function(&format!("day{}", n), |b| b.iter(|| day(input)));
    }

    // Staggered overlapping ranges force several fusion passes.
    let staggered: Vec<_> = (0..500u64)
        .map(|i| ranges::Interval::new(i * 7, i * 7 + 10).unwrap())
        .collect();
    c.bench_function("fuse_all", |b| {
        b.iter(|| ranges::fuse_all(staggered.clone()))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

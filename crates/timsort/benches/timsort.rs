use std::hint::black_box;
use std::time::{Duration, Instant};

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use seq::Sequence;

const SIZES: [usize; 3] = [1024, 8192, 65536];
const SAWTOOTH_RUN: usize = 256;

#[derive(Clone, Copy)]
enum Shape {
    RandomUniform,
    NearlySorted1pctSwaps,
    SawtoothRuns,
    ReverseSorted,
}

impl Shape {
    fn label(self) -> &'static str {
        match self {
            Self::RandomUniform => "random_uniform",
            Self::NearlySorted1pctSwaps => "nearly_sorted_1pct_swaps",
            Self::SawtoothRuns => "sawtooth_runs",
            Self::ReverseSorted => "reverse_sorted",
        }
    }
}

const SHAPES: [Shape; 4] = [
    Shape::RandomUniform,
    Shape::NearlySorted1pctSwaps,
    Shape::SawtoothRuns,
    Shape::ReverseSorted,
];

fn dataset(shape: Shape, size: usize) -> Vec<i64> {
    let mut rng = bench::default_rng();
    match shape {
        Shape::RandomUniform => bench::random_values(&mut rng, size),
        Shape::NearlySorted1pctSwaps => bench::nearly_sorted_values(&mut rng, size),
        Shape::SawtoothRuns => bench::sawtooth_values(size, SAWTOOTH_RUN),
        Shape::ReverseSorted => bench::reverse_sorted_values(size),
    }
}

fn bench_timsort(c: &mut Criterion) {
    for &shape in &SHAPES {
        let mut group = c.benchmark_group(format!("timsort/{}", shape.label()));

        for &size in &SIZES {
            if size <= 8192 {
                bench::apply_small_runtime_config(&mut group);
            } else {
                bench::apply_medium_runtime_config(&mut group);
            }

            let base = dataset(shape, size);
            let base_seq = Sequence::from_slice(&base);

            group.bench_function(BenchmarkId::new("linked_timsort", size), |bencher| {
                bencher.iter_custom(|iters| {
                    let mut total = Duration::ZERO;
                    for _ in 0..iters {
                        let mut data = base_seq.clone();
                        let start = Instant::now();
                        timsort::sort(&mut data);
                        total += start.elapsed();
                        black_box(data.len());
                    }
                    total
                });
            });

            group.bench_function(BenchmarkId::new("std_stable_vec", size), |bencher| {
                bencher.iter_custom(|iters| {
                    let mut total = Duration::ZERO;
                    for _ in 0..iters {
                        let mut data = base.clone();
                        let start = Instant::now();
                        data.sort();
                        total += start.elapsed();
                        black_box(&data);
                    }
                    total
                });
            });
        }

        group.finish();
    }
}

criterion_group!(benches, bench_timsort);
criterion_main!(benches);

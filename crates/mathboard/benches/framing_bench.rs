//! Criterion benchmarks for viewport framing over growing datasets.
//! Sizes: n in {10, 1_000, 100_000}.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use mathboard::framing::{box_summary, frame, PlotData};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn samples(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(-50.0..50.0)).collect()
}

fn bench_framing(c: &mut Criterion) {
    let mut group = c.benchmark_group("framing");
    for &n in &[10usize, 1_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("histogram", n), &n, |b, &n| {
            b.iter_batched(
                || samples(n, 7),
                |data| {
                    let _ = frame(&PlotData::Histogram {
                        data: &data,
                        bins: Some(10),
                    });
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("scatter", n), &n, |b, &n| {
            b.iter_batched(
                || {
                    let xs = samples(n, 8);
                    let ys = samples(n, 9);
                    xs.into_iter().zip(ys).map(|(x, y)| [x, y]).collect::<Vec<_>>()
                },
                |pairs| {
                    let _ = frame(&PlotData::Scatter(&pairs));
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("box_summary", n), &n, |b, &n| {
            b.iter_batched(
                || samples(n, 10),
                |data| {
                    let _ = box_summary(&data);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_framing);
criterion_main!(benches);

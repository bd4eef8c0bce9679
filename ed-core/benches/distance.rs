use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use ed_core::{DistanceParams, Evaluator};
use ed_types::generate::{random_pair, LOWERCASE};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Table and recursive evaluators side by side on short inputs.
fn short(c: &mut Criterion) {
    let mut group = c.benchmark_group("short");
    let rng = &mut ChaCha8Rng::seed_from_u64(31415);
    for n in [2, 4, 6, 8] {
        let (a, b) = random_pair(n, LOWERCASE, rng);
        for params in DistanceParams::all() {
            group.bench_with_input(BenchmarkId::new(params.name(), n), &n, |bb, _| {
                bb.iter(|| params.evaluate(&a, &b, false).unwrap().distance)
            });
        }
    }
    group.finish();
}

/// Only the table evaluators scale beyond a handful of symbols.
fn long(c: &mut Criterion) {
    let mut group = c.benchmark_group("long");
    group.sample_size(20);
    let rng = &mut ChaCha8Rng::seed_from_u64(27182);
    for n in [100, 500, 2_000] {
        let (a, b) = random_pair(n, LOWERCASE, rng);
        for params in DistanceParams::all() {
            if params.evaluator == Evaluator::Recursive {
                continue;
            }
            group.bench_with_input(BenchmarkId::new(params.name(), n), &n, |bb, _| {
                bb.iter(|| params.evaluate(&a, &b, false).unwrap().distance)
            });
        }
    }
    group.finish();
}

criterion_group!(benches, short, long);
criterion_main!(benches);

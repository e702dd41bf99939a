//! Criterion benchmarks for decomposition + recomposition.
//! Inputs: catalog examples and seeded random descriptions (5–9 curves).

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use eulerplan::catalog::EXAMPLES;
use eulerplan::decomposition::{Decomposer, StrategyType};
use eulerplan::description::Description;
use eulerplan::random::{draw_description, RandomDescriptionCfg, ReplayToken};
use eulerplan::recomposition::recompose;

fn bench_catalog(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan_catalog");
    for (name, text) in EXAMPLES {
        let d = Description::from_informal(text);
        for strategy in [StrategyType::Innermost, StrategyType::PiercedFirst] {
            let decomposer = Decomposer::new(strategy).unwrap();
            group.bench_with_input(
                BenchmarkId::new(format!("{strategy}"), name),
                &d,
                |b, d| {
                    b.iter(|| {
                        let steps = decomposer.decompose(d).unwrap();
                        recompose(&steps).unwrap()
                    })
                },
            );
        }
    }
    group.finish();
}

fn bench_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan_random");
    for &curves in &[5usize, 7, 9] {
        let cfg = RandomDescriptionCfg {
            curves,
            zone_density: 0.3,
        };
        let decomposer = Decomposer::new(StrategyType::PiercedFirst).unwrap();
        group.bench_with_input(BenchmarkId::new("piercing", curves), &cfg, |b, &cfg| {
            b.iter_batched(
                || draw_description(cfg, ReplayToken { seed: 42, index: 0 }).unwrap(),
                |d| {
                    let steps = decomposer.decompose(&d).unwrap();
                    recompose(&steps).unwrap()
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_catalog, bench_random);
criterion_main!(benches);

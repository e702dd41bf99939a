//! Criterion benchmarks for elementary-cycle enumeration.
//! Focus: random sparse graphs with n in {8, 12, 16} and the Venn-3 dual.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use eulerplan::cycles::CycleFinder;
use eulerplan::description::Description;
use eulerplan::dual::EulerDual;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_graph(n: usize, p: f64, seed: u64) -> CycleFinder<usize, (usize, usize)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut g = CycleFinder::new();
    for v in 0..n {
        g.add_vertex(v);
    }
    for i in 0..n {
        for j in (i + 1)..n {
            if rng.gen_bool(p) {
                g.add_edge(&i, &j, (i, j)).unwrap();
            }
        }
    }
    g
}

fn bench_cycles(c: &mut Criterion) {
    let mut group = c.benchmark_group("cycles");
    for &n in &[8usize, 12, 16] {
        group.bench_with_input(BenchmarkId::new("random_sparse", n), &n, |b, &n| {
            b.iter_batched(
                || random_graph(n, 0.25, 43),
                |g| g.compute_cycles(),
                BatchSize::SmallInput,
            )
        });
    }
    let venn3 = Description::from_informal("a b c ab ac bc abc");
    group.bench_function(BenchmarkId::new("dual", "venn3"), |b| {
        b.iter(|| EulerDual::new(&venn3).cycles())
    });
    group.finish();
}

criterion_group!(benches, bench_cycles);
criterion_main!(benches);

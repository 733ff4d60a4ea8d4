use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use k_shortest_paths::graph::generators::{generate_grid, generate_random};
use k_shortest_paths::KShortestPaths;

fn bench_grid_prefixes(c: &mut Criterion) {
    let graph = generate_grid(100, 100);
    let engine = KShortestPaths::new();
    let target = 100 * 100 - 1;

    let mut group = c.benchmark_group("grid_100x100");
    for k in [1usize, 10, 100, 1_000] {
        group.bench_with_input(BenchmarkId::from_parameter(k), &k, |b, &k| {
            b.iter(|| engine.find(black_box(&graph), 0, target, k))
        });
    }
    group.finish();
}

fn bench_random_graph(c: &mut Criterion) {
    let graph = generate_random(20_000, 3.0, 7);
    let engine = KShortestPaths::new();

    c.bench_function("random_20k_k3", |b| {
        b.iter(|| engine.find(black_box(&graph), 0, 19_999, 3))
    });
}

criterion_group!(benches, bench_grid_prefixes, bench_random_graph);
criterion_main!(benches);

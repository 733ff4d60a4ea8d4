use std::time::{Duration, Instant};
use ordered_float::OrderedFloat;
use k_shortest_paths::algorithm::dag::restrict;
use k_shortest_paths::algorithm::dijkstra::Dijkstra;
use k_shortest_paths::algorithm::enumerator::enumerate;
use k_shortest_paths::algorithm::ShortestPathSolver;
use k_shortest_paths::graph::generators::generate_grid;
use k_shortest_paths::graph::{DirectedGraph, Graph};
use k_shortest_paths::KShortestPaths;

// Run every phase by hand so the traversal counters can be reported
fn benchmark_phases(
    graph: &DirectedGraph<usize, OrderedFloat<f64>>,
    source: usize,
    target: usize,
    k: usize,
) -> k_shortest_paths::Result<(Duration, usize, usize)> {
    let start = Instant::now();
    let tree = Dijkstra::new().solve(graph, source)?;
    let dag = restrict(&tree.predecessors, source, target)?;
    let mut paths = enumerate(&dag, source, target, k)?;
    let found = paths.by_ref().count();
    Ok((start.elapsed(), found, paths.stats().frames_pushed))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Grid sides; corner-to-corner tie counts grow as C(2n - 2, n - 1)
    let grid_sizes = vec![10, 50, 100, 250, 500];
    let ks = vec![1, 10, 100, 1_000];

    println!("=====================================================");
    println!("Benchmark: tied shortest paths on unit grids");
    println!("=====================================================");

    let mut results = Vec::new();
    for &size in &grid_sizes {
        let graph = generate_grid(size, size);
        let source = 0;
        let target = size * size - 1;
        println!(
            "\nGrid {}x{}: {} nodes, {} edges",
            size,
            size,
            graph.node_count(),
            graph.edge_count()
        );

        for &k in &ks {
            let (elapsed, found, frames) = benchmark_phases(&graph, source, target, k)?;
            println!(
                "  k = {:<5} -> {:<5} paths, {:<8} frames pushed, {:?}",
                k, found, frames, elapsed
            );
            results.push((size, k, found, frames, elapsed));
        }
    }

    // Independent queries sharing one read-only graph
    let graph = generate_grid(200, 200);
    let last = 200 * 200 - 1;
    let queries = vec![(0, last), (0, last - 1), (200, last), (0, 100 * 200 + 100)];
    let start = Instant::now();
    let batch = KShortestPaths::new().find_many(&graph, &queries, 100);
    let ok = batch.iter().filter(|r| r.is_ok()).count();
    println!("\nParallel batch: {}/{} queries answered in {:?}", ok, queries.len(), start.elapsed());

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<8} | {:<6} | {:<8} | {:<12} | {:<12}", "Side", "k", "Paths", "Frames", "Time (ms)");
    println!("-----------------------------------------------------");
    for (size, k, found, frames, elapsed) in &results {
        println!(
            "{:<8} | {:<6} | {:<8} | {:<12} | {:<12.3}",
            size,
            k,
            found,
            frames,
            elapsed.as_secs_f64() * 1000.0
        );
    }

    Ok(())
}

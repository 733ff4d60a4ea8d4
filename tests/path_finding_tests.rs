use k_shortest_paths::graph::generators::{generate_grid, generate_random};
use k_shortest_paths::graph::{DirectedGraph, Graph, MutableGraph};
use k_shortest_paths::{Error, KShortestPaths};
use ordered_float::OrderedFloat;
use std::collections::HashSet;

type CharGraph = DirectedGraph<char, OrderedFloat<f64>>;

// Test helper building a graph from named nodes and weighted directed edges
fn build(nodes: &[char], edges: &[(char, char, f64)]) -> CharGraph {
    let mut graph = DirectedGraph::new();
    for &node in nodes {
        graph.add_node(node);
    }
    for &(from, to, weight) in edges {
        graph.add_edge(from, to, OrderedFloat(weight)).unwrap();
    }
    graph
}

fn diamond() -> CharGraph {
    build(
        &['S', 'A', 'B', 'T'],
        &[('S', 'A', 1.0), ('S', 'B', 1.0), ('A', 'T', 1.0), ('B', 'T', 1.0)],
    )
}

// Every simple path from source to target with its total weight, cheapest parallel edge per hop
fn all_simple_paths(graph: &DirectedGraph<usize, OrderedFloat<f64>>, source: usize, target: usize) -> Vec<(Vec<usize>, f64)> {
    fn walk(
        graph: &DirectedGraph<usize, OrderedFloat<f64>>,
        path: &mut Vec<usize>,
        target: usize,
        out: &mut Vec<(Vec<usize>, f64)>,
    ) {
        let node = *path.last().unwrap();
        if node == target {
            out.push((path.clone(), graph.path_weight(path).unwrap().into_inner()));
            return;
        }
        let next: HashSet<usize> = graph.outgoing_edges(node).map(|(v, _)| v).collect();
        for v in next {
            if !path.contains(&v) {
                path.push(v);
                walk(graph, path, target, out);
                path.pop();
            }
        }
    }

    let mut out = Vec::new();
    walk(graph, &mut vec![source], target, &mut out);
    out
}

#[test]
fn test_diamond_returns_both_tied_paths_in_order() {
    let graph = diamond();
    let result = KShortestPaths::new().find(&graph, 'S', 'T', 3).unwrap();

    assert_eq!(result.len(), 2);
    assert_eq!(result.distance, OrderedFloat(2.0));
    assert_eq!(result.paths[0].nodes, vec!['S', 'A', 'T']);
    assert_eq!(result.paths[1].nodes, vec!['S', 'B', 'T']);
    for (expected_rank, path) in result.iter().enumerate() {
        assert_eq!(path.rank, expected_rank);
        assert_eq!(path.weight, OrderedFloat(2.0));
    }
}

#[test]
fn test_unique_path() {
    let graph = build(&['S', 'M', 'T'], &[('S', 'M', 2.0), ('M', 'T', 3.0)]);
    let result = KShortestPaths::new().find(&graph, 'S', 'T', 5).unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result.paths[0].nodes, vec!['S', 'M', 'T']);
    assert_eq!(result.paths[0].weight, OrderedFloat(5.0));
}

#[test]
fn test_k_truncates_tied_paths() {
    let graph = diamond();
    let result = KShortestPaths::new().find(&graph, 'S', 'T', 1).unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result.paths[0].nodes, vec!['S', 'A', 'T']);
    assert_eq!(result.paths[0].rank, 0);
}

#[test]
fn test_negative_weight_is_rejected() {
    let graph = build(
        &['S', 'A', 'T'],
        &[('S', 'A', 1.0), ('A', 'T', -1.0), ('S', 'T', 5.0)],
    );
    assert!(!graph.validate_non_negative());
    assert!(diamond().validate_non_negative());

    let err = KShortestPaths::new().find(&graph, 'S', 'T', 3).unwrap_err();
    assert!(matches!(err, Error::InvalidWeight { weight, .. } if weight == -1.0));
}

#[test]
fn test_nan_weight_is_rejected() {
    let graph = build(&['S', 'T'], &[('S', 'T', f64::NAN)]);
    assert!(!graph.validate_non_negative());

    let err = KShortestPaths::new().find(&graph, 'S', 'T', 1).unwrap_err();
    assert!(matches!(err, Error::InvalidWeight { weight, .. } if weight.is_nan()));
}

#[test]
fn test_hop_ties_do_not_drift_past_tolerance() {
    // Every hop ties locally, but S -> P -> M -> T sums to 2.0000000009 while
    // the minimum is 1.9999999985
    let graph = build(
        &['S', 'P', 'M', 'T'],
        &[
            ('S', 'T', 2.0 - 1.5e-9),
            ('S', 'M', 1.0),
            ('S', 'P', 0.5),
            ('P', 'M', 0.5 + 0.9e-9),
            ('M', 'T', 1.0),
        ],
    );
    let result = KShortestPaths::new().find(&graph, 'S', 'T', 10).unwrap();

    let nodes: Vec<Vec<char>> = result.iter().map(|p| p.nodes.clone()).collect();
    assert_eq!(nodes, vec![vec!['S', 'M', 'T'], vec!['S', 'T']]);
    assert_eq!(result.distance, OrderedFloat(2.0 - 1.5e-9));
    assert_eq!(result.paths[0].weight, OrderedFloat(2.0));
    assert_eq!(result.paths[1].weight, result.distance);
    for path in &result {
        assert_eq!(graph.path_weight(&path.nodes), Some(path.weight));
        assert!((path.weight.into_inner() - result.distance.into_inner()).abs() <= 2e-9);
    }
}

#[test]
fn test_source_equals_target() {
    let graph = diamond();
    for k in [1, 2, 10] {
        let result = KShortestPaths::new().find(&graph, 'A', 'A', k).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result.paths[0].nodes, vec!['A']);
        assert_eq!(result.distance, OrderedFloat(0.0));
    }
}

#[test]
fn test_unreachable_target_is_an_error() {
    let mut graph = diamond();
    graph.add_node('X');
    let err = KShortestPaths::new().find(&graph, 'S', 'X', 3).unwrap_err();
    assert!(matches!(err, Error::NoPath { .. }));

    // Edges are directed: T cannot reach S
    let err = KShortestPaths::new().find(&graph, 'T', 'S', 3).unwrap_err();
    assert!(matches!(err, Error::NoPath { .. }));
}

#[test]
fn test_unknown_nodes_and_zero_k() {
    let graph = diamond();
    let engine = KShortestPaths::new();

    assert!(matches!(engine.find(&graph, 'Z', 'T', 1), Err(Error::UnknownNode(_))));
    assert!(matches!(engine.find(&graph, 'S', 'Z', 1), Err(Error::UnknownNode(_))));
    assert!(matches!(engine.find(&graph, 'S', 'T', 0), Err(Error::InvalidArgument(_))));
    // k is checked before the endpoints
    assert!(matches!(engine.find(&graph, 'Z', 'Z', 0), Err(Error::InvalidArgument(_))));
}

#[test]
fn test_invalid_epsilon_is_rejected() {
    let graph = diamond();
    let err = KShortestPaths::new()
        .with_epsilon(f64::NAN)
        .find(&graph, 'S', 'T', 1)
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
}

#[test]
fn test_floating_point_sums_tie_within_tolerance() {
    // 0.1 + 0.2 is not bitwise equal to 0.3
    let graph = build(
        &['S', 'A', 'T'],
        &[('S', 'A', 0.1), ('A', 'T', 0.2), ('S', 'T', 0.3)],
    );

    let tolerant = KShortestPaths::new().find(&graph, 'S', 'T', 5).unwrap();
    assert_eq!(tolerant.len(), 2);
    assert_eq!(tolerant.paths[0].nodes, vec!['S', 'A', 'T']);
    assert_eq!(tolerant.paths[1].nodes, vec!['S', 'T']);

    let exact = KShortestPaths::new().with_epsilon(0.0).find(&graph, 'S', 'T', 5).unwrap();
    assert_eq!(exact.len(), 1);
    assert_eq!(exact.paths[0].nodes, vec!['S', 'T']);
}

#[test]
fn test_distinct_costs_are_not_merged() {
    let graph = build(
        &['S', 'A', 'T'],
        &[('S', 'A', 1.0), ('A', 'T', 1.000001), ('S', 'T', 2.0)],
    );
    let result = KShortestPaths::new().find(&graph, 'S', 'T', 5).unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(result.paths[0].nodes, vec!['S', 'T']);
}

#[test]
fn test_parallel_edges_do_not_duplicate_paths() {
    let graph = build(
        &['S', 'A', 'T'],
        &[('S', 'A', 1.0), ('S', 'A', 1.0), ('S', 'A', 4.0), ('A', 'T', 1.0)],
    );
    assert_eq!(graph.edge_count(), 4);

    let result = KShortestPaths::new().find(&graph, 'S', 'T', 5).unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(result.paths[0].nodes, vec!['S', 'A', 'T']);
}

#[test]
fn test_zero_weight_cycle_yields_simple_paths_only() {
    let graph = build(
        &['S', 'A', 'B', 'T'],
        &[
            ('S', 'A', 1.0),
            ('S', 'B', 1.0),
            ('A', 'B', 0.0),
            ('B', 'A', 0.0),
            ('A', 'T', 1.0),
            ('B', 'T', 1.0),
        ],
    );
    let result = KShortestPaths::new().find(&graph, 'S', 'T', 10).unwrap();

    let paths: Vec<Vec<char>> = result.iter().map(|p| p.nodes.clone()).collect();
    assert_eq!(
        paths,
        vec![
            vec!['S', 'B', 'A', 'T'],
            vec!['S', 'A', 'T'],
            vec!['S', 'A', 'B', 'T'],
            vec!['S', 'B', 'T'],
        ]
    );
}

#[test]
fn test_undirected_edges() {
    let mut graph = build(&['S', 'A', 'B', 'T'], &[]);
    graph.add_undirected_edge('S', 'A', OrderedFloat(1.0)).unwrap();
    graph.add_undirected_edge('A', 'T', OrderedFloat(1.0)).unwrap();
    graph.add_undirected_edge('S', 'B', OrderedFloat(1.0)).unwrap();
    graph.add_undirected_edge('B', 'T', OrderedFloat(1.0)).unwrap();

    let forward = KShortestPaths::new().find(&graph, 'S', 'T', 5).unwrap();
    let backward = KShortestPaths::new().find(&graph, 'T', 'S', 5).unwrap();
    assert_eq!(forward.len(), 2);
    assert_eq!(backward.len(), 2);
    assert_eq!(backward.paths[0].nodes, vec!['T', 'A', 'S']);
}

#[test]
fn test_grid_paths_follow_ascending_predecessor_order() {
    let graph = generate_grid(3, 3);
    let result = KShortestPaths::new().find(&graph, 0, 8, 10).unwrap();

    let paths: Vec<Vec<usize>> = result.iter().map(|p| p.nodes.clone()).collect();
    assert_eq!(
        paths,
        vec![
            vec![0, 1, 2, 5, 8],
            vec![0, 1, 4, 5, 8],
            vec![0, 3, 4, 5, 8],
            vec![0, 1, 4, 7, 8],
            vec![0, 3, 4, 7, 8],
            vec![0, 3, 6, 7, 8],
        ]
    );
}

#[test]
fn test_generators_add_every_edge() {
    // 3x2 lattice: two right edges per row, one down edge per column
    let grid = generate_grid(3, 2);
    assert_eq!(grid.node_count(), 6);
    assert_eq!(grid.edge_count(), 7);
    assert!(grid.has_edge(0, 1) && grid.has_edge(2, 5) && !grid.has_edge(5, 2));

    let random = generate_random(50, 3.0, 7);
    assert_eq!(random.node_count(), 50);
    assert!(random.edge_count() > 0 && random.edge_count() <= 150);
    assert!(random.validate_non_negative());
}

#[test]
fn test_grid_tie_count_and_weights() {
    // C(8, 4) = 70 monotone routes across a 5x5 lattice
    let graph = generate_grid(5, 5);
    let engine = KShortestPaths::new();

    let all = engine.find(&graph, 0, 24, 1_000).unwrap();
    assert_eq!(all.len(), 70);
    let distinct: HashSet<Vec<usize>> = all.iter().map(|p| p.nodes.clone()).collect();
    assert_eq!(distinct.len(), 70);

    for path in &all {
        assert_eq!(path.nodes.first(), Some(&0));
        assert_eq!(path.nodes.last(), Some(&24));
        assert_eq!(graph.path_weight(&path.nodes), Some(all.distance));
    }

    let prefix = engine.find(&graph, 0, 24, 7).unwrap();
    assert_eq!(prefix.len(), 7);
    assert_eq!(prefix.paths[..], all.paths[..7]);
}

#[test]
fn test_large_grid_with_small_k_is_fast() {
    // Roughly 10^58 tied routes; only the requested prefix is walked
    let graph = generate_grid(100, 100);
    let result = KShortestPaths::new().find(&graph, 0, 100 * 100 - 1, 5).unwrap();
    assert_eq!(result.len(), 5);
    assert_eq!(result.distance, OrderedFloat(198.0));
}

#[test]
fn test_repeated_queries_are_identical() {
    let graph = generate_grid(6, 4);
    let engine = KShortestPaths::new();
    let first = engine.find(&graph, 0, 23, 12).unwrap();
    let second = engine.find(&graph, 0, 23, 12).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_find_many_matches_sequential_queries() {
    let graph = generate_grid(6, 6);
    let engine = KShortestPaths::new();
    let queries = vec![(0, 35), (1, 35), (7, 28), (35, 0), (4, 4)];

    let batch = engine.find_many(&graph, &queries, 4);
    assert_eq!(batch.len(), queries.len());
    for (result, &(source, target)) in batch.iter().zip(&queries) {
        assert_eq!(result, &engine.find(&graph, source, target, 4));
    }
    assert!(matches!(batch[3], Err(Error::NoPath { .. })));
}

#[test]
fn test_random_graphs_against_brute_force() {
    for seed in 0..40 {
        let graph = generate_random(8, 2.5, seed);
        let engine = KShortestPaths::new();

        for target in 1..8 {
            let candidates = all_simple_paths(&graph, 0, target);
            match engine.find(&graph, 0, target, 1_000) {
                Err(Error::NoPath { .. }) => assert!(candidates.is_empty(), "seed {}", seed),
                Err(other) => panic!("seed {}: unexpected error {:?}", seed, other),
                Ok(result) => {
                    let best = candidates.iter().map(|(_, w)| *w).fold(f64::INFINITY, f64::min);
                    let expected: HashSet<Vec<usize>> = candidates
                        .iter()
                        .filter(|(_, w)| *w == best)
                        .map(|(p, _)| p.clone())
                        .collect();
                    let found: HashSet<Vec<usize>> = result.iter().map(|p| p.nodes.clone()).collect();

                    assert_eq!(result.distance.into_inner(), best, "seed {}", seed);
                    assert_eq!(found, expected, "seed {} target {}", seed, target);
                    assert_eq!(result.len(), expected.len());

                    let truncated = engine.find(&graph, 0, target, 2).unwrap();
                    assert_eq!(truncated.len(), expected.len().min(2));
                }
            }
        }
    }
}

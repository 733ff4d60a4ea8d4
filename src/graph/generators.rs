use crate::graph::{Coordinate, DirectedGraph, MutableGraph, NodeId};
use log::debug;
use ordered_float::OrderedFloat;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Spacing between neighbouring grid nodes, in degrees
const GRID_SPACING: f64 = 0.001;

fn connect<N: NodeId>(graph: &mut DirectedGraph<N, OrderedFloat<f64>>, from: N, to: N, weight: OrderedFloat<f64>) {
    if let Err(err) = graph.add_edge(from, to, weight) {
        debug!("skipped generated edge {:?} -> {:?}: {}", from, to, err);
    }
}

/// Generates a `width` x `height` street lattice with unit-weight edges pointing
/// right and down.
///
/// Node `y * width + x` sits at row `y`, column `x`. Every monotone route from
/// the top-left to the bottom-right corner has the same length, so the number
/// of tied shortest paths between them is `C(width + height - 2, width - 1)`.
pub fn generate_grid(width: usize, height: usize) -> DirectedGraph<usize, OrderedFloat<f64>> {
    let mut graph = DirectedGraph::with_capacity(width * height);

    for y in 0..height {
        for x in 0..width {
            let coordinate = Coordinate::new(-(y as f64) * GRID_SPACING, x as f64 * GRID_SPACING);
            graph.add_node_with_coordinate(y * width + x, coordinate);
        }
    }

    for y in 0..height {
        for x in 0..width {
            let node = y * width + x;
            if x + 1 < width {
                connect(&mut graph, node, node + 1, OrderedFloat(1.0));
            }
            if y + 1 < height {
                connect(&mut graph, node, node + width, OrderedFloat(1.0));
            }
        }
    }

    graph
}

/// Generates a random directed graph with `n` nodes and roughly
/// `edge_factor * n` edges, reproducible from `seed`.
///
/// Weights are small integers so that ties between distinct routes are common.
pub fn generate_random(n: usize, edge_factor: f64, seed: u64) -> DirectedGraph<usize, OrderedFloat<f64>> {
    let mut graph = DirectedGraph::with_capacity(n);
    let mut rng = StdRng::seed_from_u64(seed);

    for v in 0..n {
        graph.add_node(v);
    }
    if n < 2 {
        return graph;
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let weight = OrderedFloat(rng.gen_range(1..=4) as f64);
            connect(&mut graph, u, v, weight);
        }
    }

    graph
}

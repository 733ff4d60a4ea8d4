use std::fmt::Debug;
use std::hash::Hash;
use num_traits::{Float, Zero};

use crate::graph::Coordinate;
use crate::Result;

/// Identifier of a node in a road network.
///
/// Anything small, hashable and totally ordered qualifies; the total order is
/// what makes path enumeration deterministic.
pub trait NodeId: Copy + Eq + Hash + Ord + Debug {}

impl<T> NodeId for T where T: Copy + Eq + Hash + Ord + Debug {}

/// Trait representing a weighted directed graph
pub trait Graph<N, W>: Debug
where
    N: NodeId,
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of nodes in the graph
    fn node_count(&self) -> usize;

    /// Returns the number of edges in the graph, parallel edges counted separately
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a node, in insertion order
    fn outgoing_edges(&self, node: N) -> Box<dyn Iterator<Item = (N, W)> + '_>;

    /// Returns true if the node exists in the graph
    fn has_node(&self, node: N) -> bool;

    /// Returns true if there's at least one edge between the two nodes
    fn has_edge(&self, from: N, to: N) -> bool {
        self.outgoing_edges(from).any(|(target, _)| target == to)
    }

    /// Gets the smallest weight among the edges from `from` to `to`
    fn edge_weight(&self, from: N, to: N) -> Option<W> {
        self.outgoing_edges(from)
            .filter(|(target, _)| *target == to)
            .map(|(_, weight)| weight)
            .fold(None, |best, weight| match best {
                Some(current) if current <= weight => Some(current),
                _ => Some(weight),
            })
    }

    /// Returns all node identifiers in ascending order
    fn nodes(&self) -> Vec<N>;

    /// Geographic position of a node, if the network supplied one
    fn coordinate(&self, node: N) -> Option<Coordinate>;

    /// Total weight of a node sequence, taking the cheapest parallel edge for each hop.
    ///
    /// Returns `None` when two consecutive nodes are not connected.
    fn path_weight(&self, path: &[N]) -> Option<W> {
        path.windows(2)
            .try_fold(W::zero(), |total, hop| {
                self.edge_weight(hop[0], hop[1]).map(|weight| total + weight)
            })
    }
}

/// Trait for mutable graph operations
pub trait MutableGraph<N, W>: Graph<N, W>
where
    N: NodeId,
    W: Float + Zero + Debug + Copy,
{
    /// Adds a node; returns false if it was already present
    fn add_node(&mut self, node: N) -> bool;

    /// Adds a node carrying a coordinate, or updates the coordinate of an existing one
    fn add_node_with_coordinate(&mut self, node: N, coordinate: Coordinate) -> bool;

    /// Adds a directed edge. Parallel edges are kept side by side.
    ///
    /// Fails with [`crate::Error::UnknownNode`] if either endpoint is missing.
    fn add_edge(&mut self, from: N, to: N, weight: W) -> Result<()>;

    /// Adds a pair of opposite directed edges with the same weight
    fn add_undirected_edge(&mut self, a: N, b: N, weight: W) -> Result<()> {
        self.add_edge(a, b, weight)?;
        self.add_edge(b, a, weight)
    }
}

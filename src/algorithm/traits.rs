use std::collections::HashMap;
use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::graph::{Graph, NodeId};
use crate::Result;

/// Immediate predecessors of each node on some minimum-weight path
pub type PredecessorMap<N> = HashMap<N, Vec<N>>;

/// Distances and tied predecessors produced by a single-source solve.
///
/// Only reached nodes have entries. The source maps to distance zero and an
/// empty predecessor list.
#[derive(Debug, Clone)]
pub struct ShortestPathTree<N, W>
where
    N: NodeId,
    W: Float + Zero + Debug + Copy,
{
    /// Source node ID
    pub source: N,

    /// Minimum distance from the source to each reached node
    pub distances: HashMap<N, W>,

    /// Every predecessor `u` with `distance[u] + weight(u, v) == distance[v]`
    pub predecessors: PredecessorMap<N>,
}

impl<N, W> ShortestPathTree<N, W>
where
    N: NodeId,
    W: Float + Zero + Debug + Copy,
{
    pub fn distance(&self, node: N) -> Option<W> {
        self.distances.get(&node).copied()
    }

    /// Tied predecessors of `node`, in discovery order
    pub fn predecessors(&self, node: N) -> &[N] {
        self.predecessors
            .get(&node)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_reachable(&self, node: N) -> bool {
        self.distances.contains_key(&node)
    }

    /// Number of nodes reached from the source, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.len()
    }
}

/// Trait for single-source solvers that keep every tied predecessor
pub trait ShortestPathSolver<N, W, G>
where
    N: NodeId,
    W: Float + Zero + Debug + Copy,
    G: Graph<N, W>,
{
    /// Compute minimum distances and tied predecessors from a source node
    fn solve(&self, graph: &G, source: N) -> Result<ShortestPathTree<N, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}

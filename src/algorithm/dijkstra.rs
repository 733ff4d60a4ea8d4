use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use log::trace;
use num_traits::{Float, ToPrimitive, Zero};

use crate::algorithm::{ShortestPathSolver, ShortestPathTree, Tolerance};
use crate::data_structures::MinPriorityQueue;
use crate::graph::{Graph, NodeId};
use crate::{Error, Result};

/// Dijkstra's algorithm that records every tied predecessor instead of a single parent
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra {
    tolerance: Tolerance,
}

impl Dijkstra {
    /// Creates a new Dijkstra solver with the default tie tolerance
    pub fn new() -> Self {
        Dijkstra::default()
    }

    pub fn with_tolerance(tolerance: Tolerance) -> Self {
        Dijkstra { tolerance }
    }
}

impl<N, W, G> ShortestPathSolver<N, W, G> for Dijkstra
where
    N: NodeId,
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<N, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn solve(&self, graph: &G, source: N) -> Result<ShortestPathTree<N, W>> {
        if !graph.has_node(source) {
            return Err(Error::unknown_node(source));
        }

        let mut distances: HashMap<N, W> = HashMap::new();
        let mut predecessors: HashMap<N, Vec<N>> = HashMap::new();
        let mut settled: HashSet<N> = HashSet::new();

        distances.insert(source, W::zero());
        predecessors.insert(source, Vec::new());

        let mut queue = MinPriorityQueue::new();
        queue.push(source, W::zero());

        while let Some((u, dist_u)) = queue.pop() {
            // The first pop of a node carries its final distance
            if !settled.insert(u) {
                continue;
            }
            trace!("settled {:?} at {:?}", u, dist_u);

            for (v, weight) in graph.outgoing_edges(u) {
                if weight.is_nan() || weight < W::zero() {
                    return Err(Error::InvalidWeight {
                        from: format!("{:?}", u),
                        to: format!("{:?}", v),
                        weight: weight.to_f64().unwrap_or(f64::NAN),
                    });
                }

                // Self-loops never sit on a simple path, and the source stays a root
                if v == u || v == source {
                    continue;
                }

                let candidate = dist_u + weight;
                match distances.get(&v).copied() {
                    Some(current) if self.tolerance.ties(candidate, current) => {
                        let preds = predecessors.entry(v).or_default();
                        if !preds.contains(&u) {
                            preds.push(u);
                        }
                    }
                    Some(current) if !self.tolerance.is_strictly_less(candidate, current) => {}
                    _ => {
                        distances.insert(v, candidate);
                        predecessors.insert(v, vec![u]);
                        queue.push(v, candidate);
                    }
                }
            }
        }

        Ok(ShortestPathTree {
            source,
            distances,
            predecessors,
        })
    }
}

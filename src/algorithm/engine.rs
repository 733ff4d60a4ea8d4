use std::fmt::Debug;
use std::time::Instant;
use log::debug;
use num_traits::{Float, Zero};
use rayon::prelude::*;

use crate::algorithm::dag::restrict;
use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::enumerator::{enumerate_bounded, TiedWeight};
use crate::algorithm::result::{assemble, ResultSet};
use crate::algorithm::{ShortestPathSolver, Tolerance};
use crate::graph::{Graph, NodeId};
use crate::{Error, Result};

pub use crate::algorithm::tolerance::DEFAULT_TIE_EPSILON;

/// Tunables for [`KShortestPaths`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Relative tolerance for treating two path weights as equal
    pub epsilon: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            epsilon: DEFAULT_TIE_EPSILON,
        }
    }
}

/// Finds up to `k` paths that all share the minimum source-to-target weight.
///
/// The engine holds no state between queries; a single instance can serve
/// any number of graphs and threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct KShortestPaths {
    config: EngineConfig,
}

impl KShortestPaths {
    pub fn new() -> Self {
        KShortestPaths::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        KShortestPaths { config }
    }

    /// Set the tie tolerance. Invalid values are reported by [`KShortestPaths::find`].
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.config.epsilon = epsilon;
        self
    }

    pub fn config(&self) -> EngineConfig {
        self.config
    }

    /// Returns up to `k` minimum-weight paths from `source` to `target`, ranked
    /// in a deterministic order.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidArgument`] if `k` is zero or the tolerance is invalid
    /// * [`Error::UnknownNode`] if either endpoint is absent from `graph`
    /// * [`Error::InvalidWeight`] if a reachable edge has a negative weight
    /// * [`Error::NoPath`] if `target` is unreachable from `source`
    /// * [`Error::EmptyResult`] if enumeration yields nothing for a reachable target
    pub fn find<N, W, G>(&self, graph: &G, source: N, target: N, k: usize) -> Result<ResultSet<N, W>>
    where
        N: NodeId,
        W: Float + Zero + Debug + Copy + Ord,
        G: Graph<N, W>,
    {
        if k == 0 {
            return Err(Error::InvalidArgument(
                "k must be a positive integer".to_string(),
            ));
        }
        let tolerance = Tolerance::new(self.config.epsilon)?;

        if !graph.has_node(source) {
            return Err(Error::unknown_node(source));
        }
        if !graph.has_node(target) {
            return Err(Error::unknown_node(target));
        }

        let start = Instant::now();
        let solver = Dijkstra::with_tolerance(tolerance);
        let tree = solver.solve(graph, source)?;
        debug!(
            "{} reached {} of {} nodes from {:?} in {:?}",
            <Dijkstra as ShortestPathSolver<N, W, G>>::name(&solver),
            tree.reachable_count(),
            graph.node_count(),
            source,
            start.elapsed()
        );

        let dag = restrict(&tree.predecessors, source, target)?;
        let distance = tree.distance(target).ok_or_else(|| Error::NoPath {
            origin: format!("{:?}", source),
            destination: format!("{:?}", target),
        })?;

        let bound = TiedWeight::new(graph, &tree.distances, source, distance, tolerance);
        let mut paths = enumerate_bounded(&dag, bound, source, target, k)?;
        let collected: Vec<(Vec<N>, W)> = std::iter::from_fn(|| paths.next_weighted()).collect();
        debug!(
            "enumerated {} path(s) from {:?} to {:?} with {:?}",
            collected.len(),
            source,
            target,
            paths.stats()
        );

        assemble(source, target, distance, collected)
    }

    /// Answers independent queries in parallel against the same read-only graph.
    ///
    /// Results come back in query order; each query fails or succeeds on its own.
    pub fn find_many<N, W, G>(
        &self,
        graph: &G,
        queries: &[(N, N)],
        k: usize,
    ) -> Vec<Result<ResultSet<N, W>>>
    where
        N: NodeId + Send + Sync,
        W: Float + Zero + Debug + Copy + Ord + Send + Sync,
        G: Graph<N, W> + Sync,
    {
        queries
            .par_iter()
            .map(|&(source, target)| self.find(graph, source, target, k))
            .collect()
    }
}

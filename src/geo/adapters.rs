use std::fmt::Debug;
use std::sync::Arc;
use num_traits::{Float, Zero};

use crate::geo::{BoundingBox, GeometryProjector, NearestNodeResolver, RoadNetworkProvider};
use crate::graph::{Coordinate, DirectedGraph, Graph, NodeId};
use crate::{Error, Result};

/// Serves one pre-built network for every region that overlaps it
#[derive(Debug, Clone)]
pub struct StaticNetwork<G> {
    graph: Arc<G>,
}

impl<G> StaticNetwork<G> {
    pub fn new(graph: G) -> Self {
        StaticNetwork {
            graph: Arc::new(graph),
        }
    }

    pub fn from_shared(graph: Arc<G>) -> Self {
        StaticNetwork { graph }
    }
}

impl<N, W> RoadNetworkProvider for StaticNetwork<DirectedGraph<N, W>>
where
    N: NodeId,
    W: Float + Zero + Debug + Copy + Ord,
{
    type Node = N;
    type Weight = W;
    type Graph = DirectedGraph<N, W>;

    fn fetch(&self, region: &BoundingBox) -> Result<Arc<DirectedGraph<N, W>>> {
        let covered = self
            .graph
            .nodes()
            .into_iter()
            .filter_map(|node| self.graph.coordinate(node))
            .any(|point| region.contains(point));

        if !covered {
            return Err(Error::Provider(format!(
                "no road network node inside {:?}",
                region
            )));
        }
        Ok(Arc::clone(&self.graph))
    }
}

/// Brute-force nearest node over every node with a coordinate.
///
/// Equidistant candidates resolve to the smallest node id.
#[derive(Debug, Default, Clone, Copy)]
pub struct LinearScanResolver;

impl NearestNodeResolver for LinearScanResolver {
    fn nearest<N, W, G>(&self, graph: &G, point: Coordinate) -> Result<N>
    where
        N: NodeId,
        W: Float + Zero + Debug + Copy,
        G: Graph<N, W>,
    {
        let mut best: Option<(N, f64)> = None;
        for node in graph.nodes() {
            if let Some(position) = graph.coordinate(node) {
                let distance = position.squared_distance(&point);
                match best {
                    Some((_, best_distance)) if best_distance <= distance => {}
                    _ => best = Some((node, distance)),
                }
            }
        }

        best.map(|(node, _)| node)
            .ok_or_else(|| Error::Provider("network has no node coordinates".to_string()))
    }
}

/// Projects a path through the coordinates stored on the graph's nodes
#[derive(Debug, Default, Clone, Copy)]
pub struct NodeCoordinates;

impl GeometryProjector for NodeCoordinates {
    fn project<N, W, G>(&self, graph: &G, path: &[N]) -> Result<Vec<Coordinate>>
    where
        N: NodeId,
        W: Float + Zero + Debug + Copy,
        G: Graph<N, W>,
    {
        path.iter()
            .map(|&node| {
                graph
                    .coordinate(node)
                    .ok_or_else(|| Error::Provider(format!("node {:?} has no coordinate", node)))
            })
            .collect()
    }
}

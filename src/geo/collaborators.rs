use std::fmt::Debug;
use std::sync::Arc;
use num_traits::{Float, Zero};

use crate::geo::BoundingBox;
use crate::graph::{Coordinate, Graph, NodeId};
use crate::Result;

/// Supplies the road network covering a region
pub trait RoadNetworkProvider {
    type Node: NodeId;
    type Weight: Float + Zero + Debug + Copy + Ord;
    type Graph: Graph<Self::Node, Self::Weight>;

    /// Returns a graph whose nodes carry coordinates and whose edges carry
    /// non-negative lengths
    fn fetch(&self, region: &BoundingBox) -> Result<Arc<Self::Graph>>;
}

/// Snaps a coordinate to the closest node of a graph
pub trait NearestNodeResolver {
    fn nearest<N, W, G>(&self, graph: &G, point: Coordinate) -> Result<N>
    where
        N: NodeId,
        W: Float + Zero + Debug + Copy,
        G: Graph<N, W>;
}

/// Turns a node path into an ordered polyline
pub trait GeometryProjector {
    fn project<N, W, G>(&self, graph: &G, path: &[N]) -> Result<Vec<Coordinate>>
    where
        N: NodeId,
        W: Float + Zero + Debug + Copy,
        G: Graph<N, W>;
}

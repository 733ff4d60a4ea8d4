use crate::graph::traits::{Graph, MutableGraph, NodeId};
use crate::graph::Coordinate;
use crate::{Error, Result};
use num_traits::{Float, Zero};
use std::collections::HashMap;
use std::fmt::Debug;

/// A directed graph implementation using adjacency lists
#[derive(Debug, Clone)]
pub struct DirectedGraph<N, W>
where
    N: NodeId,
    W: Float + Zero + Debug + Copy,
{
    /// Outgoing edges for each node: node_id -> [(target_node, weight)]
    outgoing_edges: HashMap<N, Vec<(N, W)>>,

    /// Optional geographic position of each node
    coordinates: HashMap<N, Coordinate>,

    /// Number of edges, parallel edges included
    edge_count: usize,
}

impl<N, W> Default for DirectedGraph<N, W>
where
    N: NodeId,
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, W> DirectedGraph<N, W>
where
    N: NodeId,
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            outgoing_edges: HashMap::new(),
            coordinates: HashMap::new(),
            edge_count: 0,
        }
    }

    /// Creates a new directed graph with room for the specified number of nodes
    pub fn with_capacity(nodes: usize) -> Self {
        DirectedGraph {
            outgoing_edges: HashMap::with_capacity(nodes),
            coordinates: HashMap::with_capacity(nodes),
            edge_count: 0,
        }
    }

    /// Validate that the graph has no negative or NaN weights
    pub fn validate_non_negative(&self) -> bool {
        self.outgoing_edges
            .values()
            .flat_map(|edges| edges.iter())
            .all(|(_, weight)| !weight.is_nan() && *weight >= W::zero())
    }
}

impl<N, W> Graph<N, W> for DirectedGraph<N, W>
where
    N: NodeId,
    W: Float + Zero + Debug + Copy,
{
    fn node_count(&self) -> usize {
        self.outgoing_edges.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn outgoing_edges(&self, node: N) -> Box<dyn Iterator<Item = (N, W)> + '_> {
        if let Some(edges) = self.outgoing_edges.get(&node) {
            Box::new(edges.iter().cloned())
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_node(&self, node: N) -> bool {
        self.outgoing_edges.contains_key(&node)
    }

    fn nodes(&self) -> Vec<N> {
        let mut nodes: Vec<N> = self.outgoing_edges.keys().copied().collect();
        nodes.sort_unstable();
        nodes
    }

    fn coordinate(&self, node: N) -> Option<Coordinate> {
        self.coordinates.get(&node).copied()
    }
}

impl<N, W> MutableGraph<N, W> for DirectedGraph<N, W>
where
    N: NodeId,
    W: Float + Zero + Debug + Copy,
{
    fn add_node(&mut self, node: N) -> bool {
        if self.outgoing_edges.contains_key(&node) {
            return false;
        }
        self.outgoing_edges.insert(node, Vec::new());
        true
    }

    fn add_node_with_coordinate(&mut self, node: N, coordinate: Coordinate) -> bool {
        self.coordinates.insert(node, coordinate);
        self.add_node(node)
    }

    fn add_edge(&mut self, from: N, to: N, weight: W) -> Result<()> {
        if !self.has_node(from) {
            return Err(Error::unknown_node(from));
        }
        if !self.has_node(to) {
            return Err(Error::unknown_node(to));
        }

        if let Some(outgoing) = self.outgoing_edges.get_mut(&from) {
            outgoing.push((to, weight));
        }
        self.edge_count += 1;
        Ok(())
    }
}

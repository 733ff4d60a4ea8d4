//! K Shortest Paths - deterministic enumeration of tied minimum-cost routes
//!
//! Given a weighted road network and two nodes, this library computes every
//! route that achieves the global minimum source-to-target distance and returns
//! up to `k` of them in a stable order.
//!
//! The computation runs in two phases: a Dijkstra pass that records, for each
//! node, all predecessors lying on some minimum path, followed by an
//! early-terminating depth-first walk over the predecessor DAG restricted to
//! the target.

pub mod algorithm;
pub mod data_structures;
pub mod geo;
pub mod graph;
pub mod web;

pub use algorithm::{
    engine::{EngineConfig, KShortestPaths, DEFAULT_TIE_EPSILON},
    RankedPath, ResultSet,
};
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;
pub use graph::Coordinate;

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Unknown node: {0}")]
    UnknownNode(String),

    #[error("Negative edge weight {weight} on edge {from} -> {to}")]
    InvalidWeight { from: String, to: String, weight: f64 },

    #[error("No path from {origin} to {destination}")]
    NoPath { origin: String, destination: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Enumeration produced no paths for reachable target {0}")]
    EmptyResult(String),

    #[error("External collaborator failed: {0}")]
    Provider(String),
}

impl Error {
    pub(crate) fn unknown_node<N: std::fmt::Debug>(node: N) -> Self {
        Error::UnknownNode(format!("{:?}", node))
    }
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;

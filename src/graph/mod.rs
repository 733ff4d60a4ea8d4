pub mod traits;
pub mod directed;
pub mod generators;

use serde::{Deserialize, Serialize};

pub use traits::{Graph, MutableGraph, NodeId};
pub use directed::DirectedGraph;

/// A geographic position in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Coordinate { lat, lon }
    }

    /// Squared planar distance in degrees, good enough for ranking nearby nodes
    pub fn squared_distance(&self, other: &Coordinate) -> f64 {
        let dlat = self.lat - other.lat;
        let dlon = self.lon - other.lon;
        dlat * dlat + dlon * dlon
    }
}

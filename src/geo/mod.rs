//! Geographic seams around the path engine.
//!
//! The engine itself only sees node identifiers. Fetching a road network,
//! snapping coordinates to nodes and turning paths back into polylines are
//! collaborator traits, with small in-memory adapters for graphs that already
//! carry node coordinates.

pub mod adapters;
pub mod collaborators;
pub mod planner;

pub use adapters::{LinearScanResolver, NodeCoordinates, StaticNetwork};
pub use collaborators::{GeometryProjector, NearestNodeResolver, RoadNetworkProvider};
pub use planner::{PlannerConfig, ProjectedRoute, RoutePlanner};

use serde::{Deserialize, Serialize};

use crate::graph::Coordinate;

/// Axis-aligned region in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl BoundingBox {
    /// Smallest box spanning both points, grown by `perimeter` degrees on every side
    pub fn around(origin: Coordinate, target: Coordinate, perimeter: f64) -> Self {
        BoundingBox {
            north: origin.lat.max(target.lat) + perimeter,
            south: origin.lat.min(target.lat) - perimeter,
            east: origin.lon.max(target.lon) + perimeter,
            west: origin.lon.min(target.lon) - perimeter,
        }
    }

    pub fn contains(&self, point: Coordinate) -> bool {
        point.lat <= self.north
            && point.lat >= self.south
            && point.lon <= self.east
            && point.lon >= self.west
    }

    pub fn center(&self) -> Coordinate {
        Coordinate::new((self.north + self.south) / 2.0, (self.east + self.west) / 2.0)
    }
}

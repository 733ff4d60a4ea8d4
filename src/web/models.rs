use chrono::{DateTime, Utc};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::graph::{Coordinate, DirectedGraph, Graph};

/// Graph type hosted by the web API: road-network style `u64` ids, metric weights
pub type RoadGraph = DirectedGraph<u64, OrderedFloat<f64>>;

/// A node as uploaded by a client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebNode {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
}

/// An edge as uploaded by a client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebEdge {
    pub source: u64,
    pub target: u64,
    pub weight: f64,
    /// Adds the reverse edge as well
    #[serde(default)]
    pub bidirectional: bool,
}

/// Represents a complete graph upload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebGraph {
    pub nodes: Vec<WebNode>,
    pub links: Vec<WebEdge>,
}

/// Route query between two known node ids
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    pub source: u64,
    pub target: u64,
    #[serde(default)]
    pub k: Option<usize>,
}

/// Route query between two coordinates, snapped to the nearest nodes
#[derive(Debug, Deserialize)]
pub struct NearestRouteRequest {
    pub origin: Coordinate,
    pub target: Coordinate,
    #[serde(default)]
    pub k: Option<usize>,
    #[serde(default)]
    pub perimeter: Option<f64>,
}

/// One ranked route in a response
#[derive(Debug, Clone, Serialize)]
pub struct WebPath {
    pub rank: usize,
    pub nodes: Vec<u64>,
    pub weight: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Vec<Coordinate>>,
}

/// Response containing the tied shortest routes
#[derive(Debug, Clone, Serialize)]
pub struct RouteResponse {
    pub execution_id: Uuid,
    pub source: u64,
    pub target: u64,
    pub k: usize,
    pub distance: f64,
    pub execution_time_ms: f64,
    pub paths: Vec<WebPath>,
}

/// Error response for API
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

/// Session holding an uploaded graph and its last query result
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub id: Uuid,
    pub graph: WebGraph,
    pub node_count: usize,
    pub edge_count: usize,
    pub last_result: Option<RouteResponse>,
    pub created_at: DateTime<Utc>,
    #[serde(skip)]
    pub network: Arc<RoadGraph>,
}

impl Session {
    pub fn new(graph: WebGraph, network: RoadGraph) -> Self {
        Self {
            id: Uuid::new_v4(),
            node_count: network.node_count(),
            edge_count: network.edge_count(),
            graph,
            last_result: None,
            created_at: Utc::now(),
            network: Arc::new(network),
        }
    }
}

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use log::{info, warn};
use ordered_float::OrderedFloat;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;
use uuid::Uuid;

use crate::algorithm::engine::KShortestPaths;
use crate::geo::{LinearScanResolver, NodeCoordinates, PlannerConfig, RoutePlanner, StaticNetwork};
use crate::graph::{Coordinate, MutableGraph};
use crate::web::models::*;
use crate::Error;

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
    pub engine: KShortestPaths,
    pub default_k: usize,
}

impl AppState {
    pub fn new(engine: KShortestPaths, default_k: usize) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            engine,
            default_k,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(KShortestPaths::new(), PlannerConfig::default().k)
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/graphs", post(upload_graph))
        .route("/api/graphs/:session_id", get(get_graph))
        .route("/api/routes/:session_id", post(find_routes))
        .route("/api/routes/:session_id/nearest", post(find_routes_near))
        .route("/api/sessions", get(list_sessions))
        .route("/api/sessions/:session_id", get(get_session))
        .route("/api/health", get(health_check))
}

/// Upload a road network and open a session for it
pub async fn upload_graph(
    State(state): State<AppState>,
    Json(request): Json<WebGraph>,
) -> Result<Json<Session>, ApiError> {
    let network = convert_web_graph_to_rust(&request).map_err(|err| error_response(&err))?;
    let session = Session::new(request, network);
    info!(
        "opened session {} with {} nodes and {} edges",
        session.id, session.node_count, session.edge_count
    );

    lock_sessions(&state)?.insert(session.id, session.clone());
    Ok(Json(session))
}

/// Get graph data for a session
pub async fn get_graph(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<WebGraph>, ApiError> {
    let sessions = lock_sessions(&state)?;
    match sessions.get(&session_id) {
        Some(session) => Ok(Json(session.graph.clone())),
        None => Err(session_not_found()),
    }
}

/// Find up to `k` tied shortest routes between two node ids
pub async fn find_routes(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<RouteRequest>,
) -> Result<Json<RouteResponse>, ApiError> {
    let network = session_network(&state, session_id)?;
    let k = request.k.unwrap_or(state.default_k);
    let engine = state.engine;

    let start_time = Instant::now();
    let result = tokio::task::spawn_blocking(move || {
        engine.find(network.as_ref(), request.source, request.target, k)
    })
    .await
    .map_err(|err| internal_error(err.to_string()))?
    .map_err(|err| error_response(&err))?;
    let execution_time = start_time.elapsed();

    let response = RouteResponse {
        execution_id: Uuid::new_v4(),
        source: request.source,
        target: request.target,
        k,
        distance: result.distance.into_inner(),
        execution_time_ms: execution_time.as_secs_f64() * 1000.0,
        paths: result
            .paths
            .into_iter()
            .map(|path| WebPath {
                rank: path.rank,
                nodes: path.nodes,
                weight: path.weight.into_inner(),
                coordinates: None,
            })
            .collect(),
    };

    remember_result(&state, session_id, &response)?;
    Ok(Json(response))
}

/// Snap two coordinates to the network and return the tied routes with geometry
pub async fn find_routes_near(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<NearestRouteRequest>,
) -> Result<Json<RouteResponse>, ApiError> {
    let network = session_network(&state, session_id)?;
    let defaults = PlannerConfig::default();
    let config = PlannerConfig {
        perimeter: request.perimeter.unwrap_or(defaults.perimeter),
        k: request.k.unwrap_or(state.default_k),
    };
    let engine = state.engine;
    let (origin, target) = (request.origin, request.target);

    let start_time = Instant::now();
    let routes = tokio::task::spawn_blocking(move || {
        RoutePlanner::new(StaticNetwork::from_shared(network), LinearScanResolver, NodeCoordinates)
            .with_engine(engine)
            .with_config(config)
            .plan(origin, target)
    })
    .await
    .map_err(|err| internal_error(err.to_string()))?
    .map_err(|err| error_response(&err))?;
    let execution_time = start_time.elapsed();

    let (source, destination, distance) = match routes.first() {
        Some(first) => (
            first.nodes.first().copied().unwrap_or_default(),
            first.nodes.last().copied().unwrap_or_default(),
            first.weight.into_inner(),
        ),
        None => return Err(error_response(&Error::EmptyResult(format!("{:?}", target)))),
    };

    let response = RouteResponse {
        execution_id: Uuid::new_v4(),
        source,
        target: destination,
        k: config.k,
        distance,
        execution_time_ms: execution_time.as_secs_f64() * 1000.0,
        paths: routes
            .into_iter()
            .map(|route| WebPath {
                rank: route.rank,
                nodes: route.nodes,
                weight: route.weight.into_inner(),
                coordinates: Some(route.coordinates),
            })
            .collect(),
    };

    remember_result(&state, session_id, &response)?;
    Ok(Json(response))
}

/// List all active sessions
pub async fn list_sessions(State(state): State<AppState>) -> Result<Json<Vec<Uuid>>, ApiError> {
    let sessions = lock_sessions(&state)?;
    let session_ids: Vec<Uuid> = sessions.keys().cloned().collect();
    Ok(Json(session_ids))
}

/// Get session information
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<Session>, ApiError> {
    let sessions = lock_sessions(&state)?;
    match sessions.get(&session_id) {
        Some(session) => Ok(Json(session.clone())),
        None => Err(session_not_found()),
    }
}

/// Health check endpoint
pub async fn health_check() -> Result<Json<serde_json::Value>, ApiError> {
    Ok(Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    })))
}

// Helper functions

/// Maps engine errors onto HTTP status codes
pub fn error_response(err: &Error) -> ApiError {
    let (status, code) = match err {
        Error::UnknownNode(_) => (StatusCode::NOT_FOUND, "unknown_node"),
        Error::InvalidWeight { .. } => (StatusCode::BAD_REQUEST, "invalid_weight"),
        Error::InvalidArgument(_) => (StatusCode::BAD_REQUEST, "invalid_argument"),
        Error::NoPath { .. } => (StatusCode::UNPROCESSABLE_ENTITY, "no_path"),
        Error::EmptyResult(_) => (StatusCode::INTERNAL_SERVER_ERROR, "empty_result"),
        Error::Provider(_) => (StatusCode::INTERNAL_SERVER_ERROR, "provider_failed"),
    };
    if status.is_server_error() {
        warn!("route query failed: {}", err);
    }

    (
        status,
        Json(ErrorResponse {
            error: code.to_string(),
            message: err.to_string(),
            details: None,
        }),
    )
}

fn session_not_found() -> ApiError {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "session_not_found".to_string(),
            message: "Session not found".to_string(),
            details: None,
        }),
    )
}

fn internal_error(message: String) -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: "internal_error".to_string(),
            message,
            details: None,
        }),
    )
}

fn lock_sessions(state: &AppState) -> Result<MutexGuard<'_, HashMap<Uuid, Session>>, ApiError> {
    state
        .sessions
        .lock()
        .map_err(|_| internal_error("session store is poisoned".to_string()))
}

fn session_network(state: &AppState, session_id: Uuid) -> Result<Arc<RoadGraph>, ApiError> {
    let sessions = lock_sessions(state)?;
    sessions
        .get(&session_id)
        .map(|session| Arc::clone(&session.network))
        .ok_or_else(session_not_found)
}

fn remember_result(state: &AppState, session_id: Uuid, response: &RouteResponse) -> Result<(), ApiError> {
    let mut sessions = lock_sessions(state)?;
    if let Some(session) = sessions.get_mut(&session_id) {
        session.last_result = Some(response.clone());
    }
    Ok(())
}

/// Builds the engine graph from an upload. Nodes get a coordinate only when
/// both `lat` and `lon` are present.
pub fn convert_web_graph_to_rust(web_graph: &WebGraph) -> crate::Result<RoadGraph> {
    let mut graph = RoadGraph::with_capacity(web_graph.nodes.len());

    for node in &web_graph.nodes {
        match (node.lat, node.lon) {
            (Some(lat), Some(lon)) => graph.add_node_with_coordinate(node.id, Coordinate::new(lat, lon)),
            _ => graph.add_node(node.id),
        };
    }

    for edge in &web_graph.links {
        if !edge.weight.is_finite() {
            return Err(Error::InvalidArgument(format!(
                "edge {} -> {} has non-finite weight {}",
                edge.source, edge.target, edge.weight
            )));
        }
        let weight = OrderedFloat(edge.weight);
        if edge.bidirectional {
            graph.add_undirected_edge(edge.source, edge.target, weight)?;
        } else {
            graph.add_edge(edge.source, edge.target, weight)?;
        }
    }

    Ok(graph)
}

use axum::{
    http::{header, Method},
    Router,
};
use log::info;
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::algorithm::engine::{EngineConfig, KShortestPaths};
use crate::web::api::{create_router, AppState};

/// Configuration for the web server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// `k` used when a route request does not name one
    pub default_k: usize,
    pub enable_cors: bool,
    pub engine: EngineConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3005,
            default_k: 3,
            enable_cors: true,
            engine: EngineConfig::default(),
        }
    }
}

/// Build the application router with its state and middleware
pub fn build_app(config: &ServerConfig) -> Router {
    let app_state = AppState::new(KShortestPaths::with_config(config.engine), config.default_k);
    let app = Router::new().merge(create_router()).with_state(app_state);

    if config.enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

        app.layer(ServiceBuilder::new().layer(cors).into_inner())
    } else {
        app
    }
}

/// Start the web server
pub async fn start_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_app(&config);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    info!("route server listening on http://{}", addr);
    info!("default k = {}, tie epsilon = {:e}", config.default_k, config.engine.epsilon);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

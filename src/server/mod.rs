//! Government data proxy HTTP API.
//!
//! Routes:
//! - `POST /api/gov-data-proxy`: keyword lookup for a classified road
//! - `GET /health`

mod error;
mod handlers;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::govdata::{DataSource, SimulatedCatalog};

pub use error::ProxyError;

pub const PROXY_PATH: &str = "/api/gov-data-proxy";

/// Application state shared across handlers
pub struct AppState {
    /// data.gov.in API key; `None` makes every lookup fail with 500
    pub api_key: Option<String>,
    pub source: Arc<dyn DataSource>,
}

impl AppState {
    /// State backed by the simulated catalog. Empty keys count as missing.
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_source(api_key, Arc::new(SimulatedCatalog::new()))
    }

    pub fn with_source(api_key: Option<String>, source: Arc<dyn DataSource>) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            source,
        }
    }
}

/// Build the proxy router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health_handler))
        .route(
            PROXY_PATH,
            post(handlers::gov_data_handler).fallback(handlers::method_not_allowed),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

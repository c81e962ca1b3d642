//! Proxy HTTP handlers.

use std::sync::Arc;

use axum::{body::Bytes, extract::State, http::StatusCode, response::Json};
use serde::Serialize;
use tracing::error;

use super::{AppState, ProxyError};
use crate::govdata::lookup_government_data;
use crate::models::{ProxyRequest, ProxyResponse};

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    api_key_configured: bool,
}

/// Health check endpoint
pub async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        api_key_configured: state.api_key.is_some(),
    })
}

/// Government data lookup.
///
/// The key check runs before the body is parsed, so a misconfigured server
/// answers 500 for any payload.
pub async fn gov_data_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<ProxyResponse>, ProxyError> {
    if state.api_key.is_none() {
        error!("DATA_GOV_IN_API_KEY is not set");
        return Err(ProxyError::MissingApiKey);
    }

    let request: ProxyRequest = serde_json::from_slice(&body)?;

    let response = lookup_government_data(state.source.as_ref(), request)
        .await
        .map_err(|e| {
            error!("Government data lookup failed: {}", e);
            ProxyError::DataSource(e)
        })?;

    Ok(Json(response))
}

/// Any method other than POST on the proxy route
pub async fn method_not_allowed() -> (StatusCode, &'static str) {
    (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
}

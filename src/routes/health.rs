// src/routes/health.rs
//! Liveness endpoint.
//!
//! `GET /healthCheck` answers `{"status": true}` whenever the process can
//! serve HTTP. It never touches the store, so a DynamoDB outage does not
//! make the service look dead to its orchestrator.

use axum::{routing::get, Json, Router};
use serde::Serialize;

/// JSON response body for the `/healthCheck` endpoint.
#[derive(Serialize)]
struct HealthResponse {
    status: bool,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: true })
}

/// Subrouter holding `/healthCheck`, generic over the gateway state.
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/healthCheck", get(health))
}

//! Route gateway: merges the endpoint subrouters and owns response encoding.
use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Router,
};
use serde::Serialize;
use tracing::{error, warn};

use crate::{ApiError, ReadingStore};

mod get_last;
mod get_range;
mod health;

// ---

pub fn router<S: ReadingStore>(store: S) -> Router {
    // ---
    Router::new()
        .merge(get_last::router())
        .merge(get_range::router())
        .merge(health::router())
        .with_state(store)
}

/// Serialize `value` and answer 200, or 500 without any partial body.
fn encode_json<T: Serialize>(value: &T) -> Response {
    // ---
    match serde_json::to_vec(value) {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        Err(e) => {
            error!("Failed to encode response: {}", e);
            ApiError::Encode.into_response()
        }
    }
}

/// Log a failed request at a level matching its status, then render it.
fn failure(route: &str, err: ApiError) -> Response {
    // ---
    match &err {
        ApiError::Decode(msg) => warn!("{} - bad request: {}", route, msg),
        ApiError::NotFound(msg) => warn!("{} - {}", route, msg),
        ApiError::Store(msg) => error!("{} - store call failed: {}", route, msg),
        ApiError::Encode => error!("{} - encode failed", route),
    }
    err.into_response()
}

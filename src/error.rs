//! Error taxonomy for the store gateway and the HTTP layer.

use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Failures raised by a [`crate::ReadingStore`].
#[derive(Error, Debug)]
pub enum StoreError {
    /// Connectivity, auth, throttling or a rejected expression.
    #[error("{0}")]
    Backend(String),

    #[error("store call timed out after {}ms", .0.as_millis())]
    Timeout(Duration),

    /// Zero rows where exactly one was expected.
    #[error("no reading found for type '{0}'")]
    NotFound(String),

    /// A returned row did not have the expected attribute shape.
    #[error("malformed item: {0}")]
    MalformedItem(String),
}

/// Failures surfaced to API callers, one per HTTP status.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Decode(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Store(String),

    #[error("failed to encode response")]
    Encode,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        // ---
        match self {
            ApiError::Decode(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Store(_) | ApiError::Encode => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        // ---
        match err {
            StoreError::NotFound(_) => ApiError::NotFound(err.to_string()),
            other => ApiError::Store(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Plain text body carrying the error message.
        (self.status(), self.to_string()).into_response()
    }
}

//! `POST /getRange`: readings whose date lies within `[DateStart, DateEnd]`.
use axum::{body::Bytes, extract::State, response::Response, routing::post, Router};
use tracing::{debug, info};

use super::{encode_json, failure};
use crate::{decode_request, ApiError, RangeReading, ReadingStore};

// ---

pub fn router<S: ReadingStore>() -> Router<S> {
    // ---
    Router::new().route("/getRange", post(handler::<S>))
}

async fn handler<S: ReadingStore>(State(store): State<S>, body: Bytes) -> Response {
    // ---
    info!("POST /getRange");

    match get_range(&store, &body).await {
        Ok(readings) => {
            debug!("POST /getRange - returning {} readings", readings.len());
            encode_json(&readings)
        }
        Err(e) => failure("POST /getRange", e),
    }
}

/// `Type` is decoded but not used by this endpoint.
async fn get_range<S: ReadingStore>(
    store: &S,
    body: &[u8],
) -> Result<Vec<RangeReading>, ApiError> {
    // ---
    let request = decode_request(body)?;
    debug!(
        "POST /getRange - dates {}..={}",
        request.date_start, request.date_end
    );

    Ok(store.range(request.date_start, request.date_end).await?)
}

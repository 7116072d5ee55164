//! `POST /getLast`: newest reading for one type.
use axum::{body::Bytes, extract::State, response::Response, routing::post, Router};
use tracing::{debug, info};

use super::{encode_json, failure};
use crate::{decode_request, ApiError, Reading, ReadingStore};

// ---

pub fn router<S: ReadingStore>() -> Router<S> {
    // ---
    Router::new().route("/getLast", post(handler::<S>))
}

async fn handler<S: ReadingStore>(State(store): State<S>, body: Bytes) -> Response {
    // ---
    info!("POST /getLast");

    match get_last(&store, &body).await {
        Ok(reading) => {
            debug!("POST /getLast - returning reading '{}'", reading.id);
            encode_json(&reading)
        }
        Err(e) => failure("POST /getLast", e),
    }
}

async fn get_last<S: ReadingStore>(store: &S, body: &[u8]) -> Result<Reading, ApiError> {
    // ---
    let request = decode_request(body)?;
    debug!("POST /getLast - type '{}'", request.reading_type);

    Ok(store.latest(&request.reading_type).await?)
}

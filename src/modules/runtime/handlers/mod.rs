//! HTTP request handlers for the protocol endpoints
//!
//! Each handler decodes its envelope from the raw body, so a malformed body
//! is rejected before any capability runs, then delegates to the dispatcher.

mod annotations;
mod query;
mod search;
mod tags;

pub use annotations::AnnotationsHandler;
pub use query::QueryHandler;
pub use search::SearchHandler;
pub use tags::TagsHandler;

use axum::{
    body::Bytes,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use simplejson_core::SimpleJsonError;
use simplejson_types::ErrorResponse;
use tracing::{error, warn};

/// Decode a JSON envelope, treating any failure as a malformed request
pub(crate) fn decode<T: DeserializeOwned>(body: &Bytes) -> Result<T, SimpleJsonError> {
    serde_json::from_slice(body).map_err(|e| SimpleJsonError::MalformedRequest(e.to_string()))
}

/// Turn an error into `(status, {"error": message})`
pub(crate) fn error_response(endpoint: &str, err: SimpleJsonError) -> Response {
    if err.is_error() {
        error!("{} failed: {}", endpoint, err);
    } else {
        warn!("{} rejected: {}", endpoint, err);
    }

    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ErrorResponse::new(err.to_string()))).into_response()
}

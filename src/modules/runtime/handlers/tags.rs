//! `/tag-keys` and `/tag-values` handlers

use axum::{
    body::Bytes,
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use simplejson_types::TagValuesRequest;
use tracing::info;

use super::{decode, error_response};
use crate::state::AppState;

/// Handler for ad hoc filter tag lookups
pub struct TagsHandler;

impl TagsHandler {
    /// Handle GET/POST /tag-keys
    ///
    /// The body carries nothing; an empty body is accepted, anything else
    /// must still be valid JSON.
    pub async fn keys(State(state): State<AppState>, body: Bytes) -> Response {
        if !body.iter().all(u8::is_ascii_whitespace) {
            if let Err(e) = decode::<serde_json::Value>(&body) {
                return error_response("/tag-keys", e);
            }
        }

        let ctx = state.context();
        let _cancel_on_drop = ctx.cancellation().clone().drop_guard();

        match state.dispatcher.tag_keys(&ctx).await {
            Ok(keys) => {
                info!(request_id = %ctx.request_id(), "Returned {} tag keys", keys.len());
                Json(keys).into_response()
            }
            Err(e) => error_response("/tag-keys", e),
        }
    }

    /// Handle GET/POST /tag-values
    pub async fn values(State(state): State<AppState>, body: Bytes) -> Response {
        let request: TagValuesRequest = match decode(&body) {
            Ok(request) => request,
            Err(e) => return error_response("/tag-values", e),
        };

        let ctx = state.context();
        let _cancel_on_drop = ctx.cancellation().clone().drop_guard();

        match state.dispatcher.tag_values(&ctx, &request).await {
            Ok(values) => {
                info!(
                    request_id = %ctx.request_id(),
                    "Returned {} values for tag key '{}'",
                    values.len(),
                    request.key
                );
                Json(values).into_response()
            }
            Err(e) => error_response("/tag-values", e),
        }
    }
}

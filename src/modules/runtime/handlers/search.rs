//! `/search` handler

use axum::{
    body::Bytes,
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use simplejson_types::SearchRequest;
use tracing::info;

use super::{decode, error_response};
use crate::state::AppState;

/// Handler for metric name searches
pub struct SearchHandler;

impl SearchHandler {
    /// Handle GET/POST /search
    pub async fn handle(State(state): State<AppState>, body: Bytes) -> Response {
        let request: SearchRequest = match decode(&body) {
            Ok(request) => request,
            Err(e) => return error_response("/search", e),
        };

        let ctx = state.context();
        let _cancel_on_drop = ctx.cancellation().clone().drop_guard();

        match state.dispatcher.search(&ctx, &request).await {
            Ok(names) => {
                info!(
                    request_id = %ctx.request_id(),
                    "Search '{}' returned {} names",
                    request.target,
                    names.len()
                );
                Json(names).into_response()
            }
            Err(e) => error_response("/search", e),
        }
    }
}

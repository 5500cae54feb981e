//! `/query` handler

use axum::{
    body::Bytes,
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use simplejson_types::QueryRequest;
use tracing::info;

use super::{decode, error_response};
use crate::state::AppState;

/// Handler for time series and table queries
pub struct QueryHandler;

impl QueryHandler {
    /// Handle GET/POST /query
    pub async fn handle(State(state): State<AppState>, body: Bytes) -> Response {
        let request: QueryRequest = match decode(&body) {
            Ok(request) => request,
            Err(e) => return error_response("/query", e),
        };

        let ctx = state.context();
        let _cancel_on_drop = ctx.cancellation().clone().drop_guard();

        match state.dispatcher.query(&ctx, &request).await {
            Ok(results) => {
                info!(
                    request_id = %ctx.request_id(),
                    "Query for {} targets answered with {} results",
                    request.targets.len(),
                    results.len()
                );
                Json(results).into_response()
            }
            Err(e) => error_response("/query", e),
        }
    }
}

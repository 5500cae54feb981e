//! `/annotations` handler

use axum::{
    body::Bytes,
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use simplejson_types::AnnotationsRequest;
use tracing::info;

use super::{decode, error_response};
use crate::state::AppState;

/// Handler for annotation queries
pub struct AnnotationsHandler;

impl AnnotationsHandler {
    /// Handle GET/POST /annotations
    pub async fn handle(State(state): State<AppState>, body: Bytes) -> Response {
        let request: AnnotationsRequest = match decode(&body) {
            Ok(request) => request,
            Err(e) => return error_response("/annotations", e),
        };

        let ctx = state.context();
        let _cancel_on_drop = ctx.cancellation().clone().drop_guard();

        match state.dispatcher.annotations(&ctx, &request).await {
            Ok(annotations) => {
                info!(
                    request_id = %ctx.request_id(),
                    "Annotation query '{}' produced {} objects",
                    request.query(),
                    annotations.len()
                );
                Json(annotations).into_response()
            }
            Err(e) => error_response("/annotations", e),
        }
    }
}

//! Page payload for the interactive client mount.
//!
//! `GET /api/page?domain=&path=` returns the same composed node tree the
//! static endpoint stringifies, serialized as JSON for the client to
//! materialize as live DOM.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use sitelet_render::Node;

use crate::error::ServerError;
use crate::handlers::render::RenderQuery;
use crate::handlers::resolve_and_compose;
use crate::state::AppState;

/// Composed page as the client mount consumes it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PageResponse {
    pub(crate) seo_title: String,
    pub(crate) seo_description: String,
    pub(crate) not_found: bool,
    /// Body nodes in document order, structurally identical to the static
    /// endpoint's markup.
    pub(crate) body: Vec<Node>,
}

/// `GET /api/page` — resolve and compose, returning the node tree as JSON.
pub(crate) async fn get_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RenderQuery>,
) -> Response {
    let budget = state.request_budget;
    let work = resolve_and_compose(&state, &query.domain, &query.path);

    let result = match tokio::time::timeout(budget, work).await {
        Ok(result) => result,
        Err(_) => Err(ServerError::Timeout),
    };

    match result {
        Ok((_site, composed)) => {
            let status = if composed.not_found {
                StatusCode::NOT_FOUND
            } else {
                StatusCode::OK
            };
            let payload = PageResponse {
                seo_title: composed.seo_title,
                seo_description: composed.seo_description,
                not_found: composed.not_found,
                body: composed.body,
            };
            (
                status,
                [(header::CACHE_CONTROL, "public, max-age=60")],
                Json(payload),
            )
                .into_response()
        }
        Err(err) => err.into_response(),
    }
}

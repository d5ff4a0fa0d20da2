//! Static document endpoint.
//!
//! `GET /render?domain=&path=` returns a complete self-contained HTML
//! document for the resolved tenant page. The routing layer in front of
//! this service forwards the original host as the `domain` query parameter.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::document::render_document;
use crate::error::ServerError;
use crate::handlers::resolve_and_compose;
use crate::state::AppState;

/// Query parameters for the static document endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct RenderQuery {
    /// Host the visitor requested, forwarded by the routing layer.
    pub(crate) domain: String,
    /// Request path within the site. Defaults to the root.
    #[serde(default = "default_path")]
    pub(crate) path: String,
}

fn default_path() -> String {
    "/".to_owned()
}

/// `GET /render` — resolve, compose, and serialize a full HTML document.
pub(crate) async fn get_document(
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
            tracing::info!(
                domain = %query.domain,
                path = %query.path,
                status = %status,
                "Rendered document"
            );
            (
                status,
                [
                    (header::CONTENT_TYPE, "text/html; charset=utf-8"),
                    (header::CACHE_CONTROL, "public, max-age=60"),
                ],
                render_document(&composed),
            )
                .into_response()
        }
        Err(err) => err.into_html_response(),
    }
}

//! Site identity payload for the interactive client mount.
//!
//! `GET /api/site?domain=` returns the resolved site's public identity and
//! its derived navigation, enough for the client shell to paint the chrome
//! before the page payload arrives.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use sitelet_compose::{NavEntry, nav_entries};

use crate::error::ServerError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub(crate) struct SiteQuery {
    /// Host the visitor requested, forwarded by the routing layer.
    pub(crate) domain: String,
}

/// Public identity of a resolved site. Internal fields (status, domain
/// verification) never leave the server.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SiteResponse {
    pub(crate) name: String,
    pub(crate) slug: String,
    pub(crate) primary_color: String,
    pub(crate) description: Option<String>,
    /// Nav entries with `active` computed against the root path.
    pub(crate) nav: Vec<NavEntry>,
}

/// `GET /api/site` — resolve the tenant and return its public identity.
pub(crate) async fn get_site(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SiteQuery>,
) -> Response {
    let budget = state.request_budget;

    let result = tokio::time::timeout(budget, async {
        let site = state.resolver.resolve(&query.domain).await?;
        let pages = state
            .store
            .list_published_pages(site.id)
            .await
            .map_err(|err| ServerError::Upstream(err.to_string()))?;
        Ok::<_, ServerError>((site, pages))
    })
    .await
    .unwrap_or(Err(ServerError::Timeout));

    match result {
        Ok((site, pages)) => {
            let payload = SiteResponse {
                name: site.name,
                slug: site.slug,
                primary_color: site.primary_color,
                description: site.settings.description,
                nav: nav_entries(&pages, "/"),
            };
            (
                [(header::CACHE_CONTROL, "public, max-age=60")],
                Json(payload),
            )
                .into_response()
        }
        Err(err) => err.into_response(),
    }
}

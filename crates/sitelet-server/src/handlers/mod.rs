//! Request handlers.

pub(crate) mod page;
pub(crate) mod render;
pub(crate) mod site;

use std::sync::Arc;

use sitelet_compose::{ComposedPage, compose_page};
use sitelet_model::Site;

use crate::error::ServerError;
use crate::state::AppState;

/// Resolve the tenant and compose the document for one request.
///
/// The pages and products fetches are independent and run concurrently; a
/// fault in either fails the request as a whole.
pub(crate) async fn resolve_and_compose(
    state: &Arc<AppState>,
    domain: &str,
    path: &str,
) -> Result<(Site, ComposedPage), ServerError> {
    let site = state.resolver.resolve(domain).await?;

    let (pages, products) = tokio::try_join!(
        state.store.list_published_pages(site.id),
        state.store.list_published_products(site.id),
    )
    .map_err(|err| ServerError::Upstream(err.to_string()))?;

    let composed = compose_page(&site, &pages, &products, path);
    Ok((site, composed))
}

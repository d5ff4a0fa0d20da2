//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::http::HeaderValue;
use axum::http::header::HeaderName;
use axum::routing::get;
use sitelet_store::SiteStore;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::{ServerConfig, app_state};

/// Create the application router.
///
/// Exposed so embedding applications and tests can serve the routes without
/// binding a listener.
#[must_use]
pub fn build_router(config: &ServerConfig, store: Arc<dyn SiteStore>) -> Router {
    let state = app_state(config, store);

    Router::new()
        .route("/render", get(handlers::render::get_document))
        .route("/api/page", get(handlers::page::get_page))
        .route("/api/site", get(handlers::site::get_site))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(content_type_options_layer())
                // Fetched cross-origin by the routing layer
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// Create layer that adds X-Content-Type-Options header.
fn content_type_options_layer() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(
        HeaderName::from_static("x-content-type-options"),
        HeaderValue::from_static("nosniff"),
    )
}

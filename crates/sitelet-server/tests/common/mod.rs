//! Shared helpers for server integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use http_body_util::BodyExt;
use sitelet_model::{Page, Product, Site};
use sitelet_server::{ServerConfig, build_router};
use sitelet_store::{MockStore, SiteStore};
use tower::ServiceExt;
use uuid::Uuid;

pub const ACME_SITE_ID: &str = "22222222-2222-2222-2222-222222222222";

/// A site reachable as `acme.creatorapp.us` and as `courses.acme.com`.
pub fn acme_site() -> Site {
    serde_json::from_value(serde_json::json!({
        "id": ACME_SITE_ID,
        "name": "Acme Academy",
        "slug": "acme",
        "custom_domain": "courses.acme.com",
        "domain_verification_status": "verified",
        "primary_color": "#0ea5e9",
        "settings": {"description": "Online courses by Acme"}
    }))
    .unwrap()
}

pub fn page(slug: &str, title: &str, page_type: Option<&str>, blocks: serde_json::Value) -> Page {
    serde_json::from_value(serde_json::json!({
        "id": Uuid::new_v4().to_string(),
        "site_id": ACME_SITE_ID,
        "title": title,
        "slug": slug,
        "page_type": page_type,
        "content": {"blocks": blocks}
    }))
    .unwrap()
}

pub fn product(title: &str, description: &str, amount: i64) -> Product {
    serde_json::from_value(serde_json::json!({
        "id": Uuid::new_v4().to_string(),
        "title": title,
        "description": description,
        "price_amount": amount,
        "price_currency": "USD"
    }))
    .unwrap()
}

/// Acme site with a designated home page (hero "Welcome") and an about page.
pub fn seeded_store() -> MockStore {
    MockStore::new()
        .with_site(acme_site())
        .with_page(page(
            "creatorappu-landing-page",
            "Landing",
            Some("home"),
            serde_json::json!([
                {"type": "hero", "content": {"headline": "Welcome", "subheadline": "Learn with us"}},
                {"type": "text", "content": {"html": "<p>Hand-crafted lessons.</p>"}}
            ]),
        ))
        .with_page(page(
            "about",
            "About",
            None,
            serde_json::json!([
                {"type": "text", "content": {"html": "<p>Our story</p>"}}
            ]),
        ))
}

pub fn test_app(store: MockStore) -> Router {
    let store: Arc<dyn SiteStore> = Arc::new(store);
    build_router(&ServerConfig::default(), store)
}

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .header("origin", "https://app.creatorapp.us")
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn body_string(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_str(&body_string(response).await).unwrap()
}

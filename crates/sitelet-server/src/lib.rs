//! HTTP delivery for sitelet tenant pages.
//!
//! Two front ends over one composer:
//!
//! - `GET /render?domain=&path=` — the static document endpoint: resolves
//!   the tenant, composes the page, and returns a complete self-contained
//!   HTML document (inline critical CSS, no client framework). Sits behind
//!   a generic routing layer, hence the explicit `domain` parameter and
//!   permissive CORS.
//! - `GET /api/page?domain=&path=` and `GET /api/site?domain=` — the JSON
//!   surface the interactive client mount consumes. The page payload is the
//!   same composed node tree the static endpoint stringifies.
//!
//! The concrete [`SiteStore`] is supplied by the embedding application;
//! persistence is out of scope here.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use sitelet_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = Arc::new(my_backend::PgSiteStore::connect().await);
//!     run_server(ServerConfig::default(), store).await.unwrap();
//! }
//! ```

mod app;
mod document;
mod error;
mod handlers;
mod state;

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use sitelet_compose::{ResolverConfig, TenantResolver};
use sitelet_store::SiteStore;

pub use app::build_router;
use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Tenant resolution configuration (reserved suffixes, host cache TTL).
    pub resolver: ResolverConfig,
    /// Total per-request budget for resolution, fetch, and render.
    pub request_budget: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 8080,
            resolver: ResolverConfig::default(),
            request_budget: Duration::from_secs(10),
        }
    }
}

/// Run the server over the given store.
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails.
pub async fn run_server(
    config: ServerConfig,
    store: Arc<dyn SiteStore>,
) -> Result<(), Box<dyn std::error::Error>> {
    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    let app = build_router(&config, store);

    tracing::info!(address = %addr, "Starting sitelet server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, stopping server...");
}

fn app_state(config: &ServerConfig, store: Arc<dyn SiteStore>) -> Arc<AppState> {
    Arc::new(AppState {
        resolver: TenantResolver::new(Arc::clone(&store), config.resolver.clone()),
        store,
        request_budget: config.request_budget,
    })
}

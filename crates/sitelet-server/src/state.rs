//! Application state.
//!
//! Shared state for all request handlers.

use std::sync::Arc;
use std::time::Duration;

use sitelet_compose::TenantResolver;
use sitelet_store::SiteStore;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Host-to-site resolution with its read-through cache.
    pub(crate) resolver: TenantResolver,
    /// Read interface to pages and products.
    pub(crate) store: Arc<dyn SiteStore>,
    /// Total per-request work budget.
    pub(crate) request_budget: Duration,
}

//! Store trait and error types.

use async_trait::async_trait;
use sitelet_model::{Page, Product, Site};
use uuid::Uuid;

/// Semantic categories for store faults.
///
/// These describe *operational* failures of the backend. A record that
/// simply doesn't exist is expressed as `Ok(None)` / an empty list by the
/// trait methods, never as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum StoreErrorKind {
    /// Backend is unreachable or returned a server fault.
    Unavailable,
    /// The request exceeded its time budget.
    Timeout,
    /// Anything else.
    Other,
}

/// Store fault with a semantic kind and backend-specific source.
#[derive(Debug)]
pub struct StoreError {
    kind: StoreErrorKind,
    /// Backend identifier (e.g. "Postgres", "Mock").
    backend: Option<&'static str>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl StoreError {
    /// Create a new store error.
    #[must_use]
    pub fn new(kind: StoreErrorKind) -> Self {
        Self {
            kind,
            backend: None,
            source: None,
        }
    }

    /// Attach a backend identifier.
    #[must_use]
    pub fn with_backend(mut self, backend: &'static str) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Attach the underlying error source.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Semantic category of the fault.
    #[must_use]
    pub fn kind(&self) -> StoreErrorKind {
        self.kind
    }

    /// Shorthand for an unavailable-backend error.
    #[must_use]
    pub fn unavailable() -> Self {
        Self::new(StoreErrorKind::Unavailable)
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(backend) = self.backend {
            write!(f, "[{backend}] ")?;
        }

        let kind_str = match self.kind {
            StoreErrorKind::Unavailable => "Store unavailable",
            StoreErrorKind::Timeout => "Store timeout",
            StoreErrorKind::Other => "Store error",
        };
        write!(f, "{kind_str}")?;

        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }

        Ok(())
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Read-only access to tenant site records.
///
/// All methods are idempotent reads. `list_*` methods return only published
/// records for the given site, in creation order.
#[async_trait]
pub trait SiteStore: Send + Sync {
    /// Look up a site by its custom domain, exactly as stored.
    ///
    /// Verification and status filtering are the resolver's concern; this
    /// returns the record regardless.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on backend fault.
    async fn find_site_by_custom_domain(&self, domain: &str) -> Result<Option<Site>, StoreError>;

    /// Look up a site by its subdomain slug.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on backend fault.
    async fn find_site_by_slug(&self, slug: &str) -> Result<Option<Site>, StoreError>;

    /// List the site's published pages in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on backend fault.
    async fn list_published_pages(&self, site_id: Uuid) -> Result<Vec<Page>, StoreError>;

    /// List the site's published, active products in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on backend fault.
    async fn list_published_products(&self, site_id: Uuid) -> Result<Vec<Product>, StoreError>;
}

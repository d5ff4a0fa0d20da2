//! Mock store implementation for testing.
//!
//! Provides [`MockStore`] for unit testing resolution and composition
//! without a real backend.

use std::sync::RwLock;

use async_trait::async_trait;
use sitelet_model::{Page, PageStatus, Product, Site};
use uuid::Uuid;

use crate::store::{SiteStore, StoreError};

/// In-memory store for testing.
///
/// Use the builder methods to seed records. `failing()` turns every call
/// into a [`StoreError`], for exercising the upstream-failure path.
///
/// # Example
///
/// ```ignore
/// use sitelet_store::{MockStore, SiteStore};
///
/// let store = MockStore::new().with_site(site).with_page(page);
/// let found = store.find_site_by_slug("acme").await.unwrap();
/// ```
#[derive(Debug, Default)]
pub struct MockStore {
    sites: RwLock<Vec<Site>>,
    pages: RwLock<Vec<Page>>,
    products: RwLock<Vec<Product>>,
    failing: bool,
}

impl MockStore {
    /// Create a new empty mock store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a site record.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_site(self, site: Site) -> Self {
        self.sites.write().unwrap().push(site);
        self
    }

    /// Add a page record.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_page(self, page: Page) -> Self {
        self.pages.write().unwrap().push(page);
        self
    }

    /// Add a product record.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_product(self, product: Product) -> Self {
        self.products.write().unwrap().push(product);
        self
    }

    /// Make every call fail with a store error.
    #[must_use]
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.failing {
            Err(StoreError::unavailable().with_backend("Mock"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl SiteStore for MockStore {
    async fn find_site_by_custom_domain(&self, domain: &str) -> Result<Option<Site>, StoreError> {
        self.check()?;
        Ok(self
            .sites
            .read()
            .unwrap()
            .iter()
            .find(|s| s.custom_domain.as_deref() == Some(domain))
            .cloned())
    }

    async fn find_site_by_slug(&self, slug: &str) -> Result<Option<Site>, StoreError> {
        self.check()?;
        Ok(self
            .sites
            .read()
            .unwrap()
            .iter()
            .find(|s| s.slug == slug)
            .cloned())
    }

    async fn list_published_pages(&self, site_id: Uuid) -> Result<Vec<Page>, StoreError> {
        self.check()?;
        Ok(self
            .pages
            .read()
            .unwrap()
            .iter()
            .filter(|p| p.site_id == site_id && p.status == PageStatus::Published)
            .cloned()
            .collect())
    }

    // Products carry no site_id in the read model; the mock is seeded per
    // test so all products belong to the site under test.
    async fn list_published_products(&self, _site_id: Uuid) -> Result<Vec<Product>, StoreError> {
        self.check()?;
        Ok(self.products.read().unwrap().clone())
    }
}

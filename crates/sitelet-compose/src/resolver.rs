//! Host-based tenant resolution.
//!
//! An inbound host resolves to at most one active site through an explicit,
//! order-sensitive chain of named strategies:
//!
//! 1. exact verified custom domain
//! 2. verified custom domain stored with a `www.` prefix
//! 3. reserved-suffix subdomain (`{slug}.creatorapp.us` style)
//! 4. literal slug
//!
//! The platform's own hosts never match a tenant: they are the main
//! application, and treating them as slugs would shadow real tenants.

use std::sync::Arc;
use std::time::Duration;

use sitelet_model::Site;
use sitelet_store::{SiteStore, StoreError};

use crate::host_cache::HostCache;

/// Hosts that are the platform itself, never a tenant site.
///
/// A fixed constant by design: this list must hold even when the site table
/// is unavailable or compromised.
pub const EXCLUDED_HOSTS: &[&str] = &[
    "localhost",
    "127.0.0.1",
    "creatorapp.us",
    "creatorapp.site",
    "app.creatorapp.us",
];

/// Resolver configuration.
#[derive(Clone, Debug)]
pub struct ResolverConfig {
    /// Reserved subdomain suffixes, leading dot included.
    ///
    /// Both historical platform suffixes are honored by default; the set is
    /// configuration rather than a hardcoded constant because deployments
    /// have disagreed about which one is canonical.
    pub reserved_suffixes: Vec<String>,
    /// TTL for the per-host resolution cache.
    pub cache_ttl: Duration,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            reserved_suffixes: vec![".creatorapp.us".to_owned(), ".creatorapp.site".to_owned()],
            cache_ttl: Duration::from_secs(60),
        }
    }
}

/// Error returned when resolution fails.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// No active site matches the host. This is a content condition, not an
    /// operational fault.
    #[error("no site resolves for host: {0}")]
    SiteNotFound(String),
    /// The store failed; must never be presented as "not found".
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Normalize an inbound host: lowercase, strip any port, strip a leading
/// `www.`.
#[must_use]
pub fn normalize_host(host: &str) -> String {
    let lower = host.trim().to_ascii_lowercase();
    let without_port = lower.split(':').next().unwrap_or(&lower);
    without_port
        .strip_prefix("www.")
        .unwrap_or(without_port)
        .to_owned()
}

/// Maps an inbound host to a single active site.
///
/// Stateless per request apart from an optional read-through TTL cache of
/// successful resolutions; calling [`resolve`](Self::resolve) twice with no
/// intervening data change yields the same result.
pub struct TenantResolver {
    store: Arc<dyn SiteStore>,
    config: ResolverConfig,
    cache: HostCache,
}

impl TenantResolver {
    /// Create a resolver over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn SiteStore>, config: ResolverConfig) -> Self {
        let cache = HostCache::new(config.cache_ttl);
        Self {
            store,
            config,
            cache,
        }
    }

    /// Resolve a host to its site.
    ///
    /// # Errors
    ///
    /// [`ResolveError::SiteNotFound`] when no strategy matches;
    /// [`ResolveError::Store`] when the store faults.
    pub async fn resolve(&self, host: &str) -> Result<Site, ResolveError> {
        let normalized = normalize_host(host);

        if let Some(site) = self.cache.get(&normalized) {
            tracing::debug!(host = %normalized, "Resolved from host cache");
            return Ok(site);
        }

        let site = self.resolve_uncached(&normalized).await?;
        self.cache.insert(normalized, site.clone());
        Ok(site)
    }

    async fn resolve_uncached(&self, host: &str) -> Result<Site, ResolveError> {
        if let Some(site) = self.by_custom_domain(host).await? {
            tracing::debug!(host = %host, site = %site.slug, "Matched custom domain");
            return Ok(site);
        }

        // Covers sites whose custom_domain was stored with the www. prefix
        if let Some(site) = self.by_custom_domain(&format!("www.{host}")).await? {
            tracing::debug!(host = %host, site = %site.slug, "Matched www-prefixed custom domain");
            return Ok(site);
        }

        if EXCLUDED_HOSTS.contains(&host) {
            tracing::debug!(host = %host, "Host is the platform itself, not a tenant");
            return Err(ResolveError::SiteNotFound(host.to_owned()));
        }

        if let Some(slug) = self.strip_reserved_suffix(host)
            && let Some(site) = self.by_slug(slug).await?
        {
            tracing::debug!(host = %host, site = %site.slug, "Matched reserved-suffix subdomain");
            return Ok(site);
        }

        if let Some(site) = self.by_slug(host).await? {
            tracing::debug!(host = %host, site = %site.slug, "Matched literal slug");
            return Ok(site);
        }

        Err(ResolveError::SiteNotFound(host.to_owned()))
    }

    fn strip_reserved_suffix<'a>(&self, host: &'a str) -> Option<&'a str> {
        self.config
            .reserved_suffixes
            .iter()
            .find_map(|suffix| host.strip_suffix(suffix.as_str()))
            .filter(|slug| !slug.is_empty() && !slug.contains('.'))
    }

    async fn by_custom_domain(&self, domain: &str) -> Result<Option<Site>, StoreError> {
        Ok(self
            .store
            .find_site_by_custom_domain(domain)
            .await?
            .filter(|site| site.has_verified_domain() && site.is_active()))
    }

    async fn by_slug(&self, slug: &str) -> Result<Option<Site>, StoreError> {
        Ok(self
            .store
            .find_site_by_slug(slug)
            .await?
            .filter(Site::is_active))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use sitelet_store::MockStore;

    use super::*;

    fn site(value: serde_json::Value) -> Site {
        serde_json::from_value(value).unwrap()
    }

    fn acme_with_domain() -> Site {
        site(json!({
            "id": "55555555-5555-5555-5555-555555555555",
            "name": "Acme",
            "slug": "acme",
            "custom_domain": "acme.com",
            "domain_verification_status": "verified"
        }))
    }

    fn resolver(store: MockStore) -> TenantResolver {
        TenantResolver::new(Arc::new(store), ResolverConfig::default())
    }

    #[test]
    fn test_normalize_host() {
        assert_eq!(normalize_host("WWW.Acme.COM"), "acme.com");
        assert_eq!(normalize_host("acme.com:8080"), "acme.com");
        assert_eq!(normalize_host(" acme.com "), "acme.com");
    }

    #[tokio::test]
    async fn test_custom_domain_match() {
        let r = resolver(MockStore::new().with_site(acme_with_domain()));

        let resolved = r.resolve("acme.com").await.unwrap();
        assert_eq!(resolved.slug, "acme");
    }

    #[tokio::test]
    async fn test_www_equivalent_to_bare_domain() {
        let r = resolver(MockStore::new().with_site(acme_with_domain()));

        let bare = r.resolve("acme.com").await.unwrap();
        let www = r.resolve("www.acme.com").await.unwrap();
        assert_eq!(bare.id, www.id);
    }

    #[tokio::test]
    async fn test_domain_stored_with_www_prefix() {
        let mut s = acme_with_domain();
        s.custom_domain = Some("www.acme.com".to_owned());
        let r = resolver(MockStore::new().with_site(s));

        let resolved = r.resolve("acme.com").await.unwrap();
        assert_eq!(resolved.slug, "acme");
    }

    #[tokio::test]
    async fn test_unverified_domain_does_not_match() {
        let mut s = acme_with_domain();
        s.domain_verification_status = sitelet_model::DomainVerification::Unverified;
        let r = resolver(MockStore::new().with_site(s));

        assert!(matches!(
            r.resolve("acme.com").await,
            Err(ResolveError::SiteNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_inactive_site_does_not_match() {
        let mut s = acme_with_domain();
        s.status = sitelet_model::SiteStatus::Inactive;
        let r = resolver(MockStore::new().with_site(s));

        assert!(r.resolve("acme.com").await.is_err());
        assert!(r.resolve("acme").await.is_err());
    }

    #[tokio::test]
    async fn test_reserved_suffix_subdomain() {
        let s = site(json!({
            "id": "55555555-5555-5555-5555-555555555555",
            "name": "Acme",
            "slug": "acme"
        }));
        let r = resolver(MockStore::new().with_site(s));

        let resolved = r.resolve("acme.creatorapp.us").await.unwrap();
        assert_eq!(resolved.slug, "acme");

        // Both historical suffixes resolve identically
        let alt = r.resolve("acme.creatorapp.site").await.unwrap();
        assert_eq!(alt.id, resolved.id);
    }

    #[tokio::test]
    async fn test_reserved_suffix_equals_literal_slug() {
        let s = site(json!({
            "id": "55555555-5555-5555-5555-555555555555",
            "name": "Acme",
            "slug": "acme"
        }));
        let r = resolver(MockStore::new().with_site(s));

        let via_suffix = r.resolve("acme.creatorapp.us").await.unwrap();
        let via_slug = r.resolve("acme").await.unwrap();
        assert_eq!(via_suffix.id, via_slug.id);
    }

    #[tokio::test]
    async fn test_custom_domain_precedes_slug() {
        // One site owns "other.com" as a domain; another has "other.com" as
        // its slug. The custom domain strategy must win.
        let mut owner = acme_with_domain();
        owner.custom_domain = Some("other.com".to_owned());
        let squatter = site(json!({
            "id": "66666666-6666-6666-6666-666666666666",
            "name": "Squatter",
            "slug": "other.com"
        }));
        let r = resolver(MockStore::new().with_site(owner.clone()).with_site(squatter));

        let resolved = r.resolve("other.com").await.unwrap();
        assert_eq!(resolved.id, owner.id);
    }

    #[tokio::test]
    async fn test_excluded_hosts_never_match_tenants() {
        // Even if someone registers the platform domain as their slug
        let s = site(json!({
            "id": "55555555-5555-5555-5555-555555555555",
            "name": "Evil",
            "slug": "localhost"
        }));
        let r = resolver(MockStore::new().with_site(s));

        assert!(matches!(
            r.resolve("localhost").await,
            Err(ResolveError::SiteNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_unknown_host_not_found() {
        let r = resolver(MockStore::new());

        let err = r.resolve("unknown.example.com").await.unwrap_err();
        assert!(matches!(err, ResolveError::SiteNotFound(_)));
    }

    #[tokio::test]
    async fn test_store_failure_is_not_not_found() {
        let r = resolver(MockStore::new().failing());

        let err = r.resolve("acme.com").await.unwrap_err();
        assert!(matches!(err, ResolveError::Store(_)));
    }

    #[tokio::test]
    async fn test_resolution_is_cached() {
        let r = resolver(MockStore::new().with_site(acme_with_domain()));

        let first = r.resolve("acme.com").await.unwrap();
        let second = r.resolve("acme.com").await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_nested_subdomain_does_not_strip() {
        // "a.b.creatorapp.us" leaves "a.b", which is not a valid slug
        let s = site(json!({
            "id": "55555555-5555-5555-5555-555555555555",
            "name": "Acme",
            "slug": "a.b"
        }));
        let r = resolver(MockStore::new().with_site(s));

        // Falls through to the literal-slug strategy, which does match
        let resolved = r.resolve("a.b").await.unwrap();
        assert_eq!(resolved.slug, "a.b");
        assert!(r.resolve("a.b.creatorapp.us").await.is_err());
    }
}

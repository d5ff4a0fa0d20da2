//! Read-through cache of resolved sites by host.
//!
//! Domain and slug changes are rare admin actions, so a short staleness
//! window is acceptable; expired entries are simply recomputed. Only
//! successful resolutions are cached, so a freshly-connected domain starts
//! working without waiting out a cached miss.

use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

use sitelet_model::Site;

struct Entry {
    site: Site,
    expires_at: Instant,
}

/// TTL cache keyed by normalized host.
pub(crate) struct HostCache {
    ttl: Duration,
    entries: RwLock<HashMap<String, Entry>>,
}

impl HostCache {
    pub(crate) fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Look up a non-expired entry.
    pub(crate) fn get(&self, host: &str) -> Option<Site> {
        let entries = self.entries.read().unwrap();
        let entry = entries.get(host)?;
        if Instant::now() < entry.expires_at {
            Some(entry.site.clone())
        } else {
            None
        }
    }

    /// Store a resolved site. Expired entries for other hosts are pruned
    /// opportunistically to keep the map bounded.
    pub(crate) fn insert(&self, host: String, site: Site) {
        let mut entries = self.entries.write().unwrap();
        let now = Instant::now();
        entries.retain(|_, entry| entry.expires_at > now);
        entries.insert(
            host,
            Entry {
                site,
                expires_at: now + self.ttl,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn site() -> Site {
        serde_json::from_value(json!({
            "id": "44444444-4444-4444-4444-444444444444",
            "name": "Acme",
            "slug": "acme"
        }))
        .unwrap()
    }

    #[test]
    fn test_hit_within_ttl() {
        let cache = HostCache::new(Duration::from_secs(60));
        cache.insert("acme.com".to_owned(), site());

        assert!(cache.get("acme.com").is_some());
    }

    #[test]
    fn test_miss_for_unknown_host() {
        let cache = HostCache::new(Duration::from_secs(60));

        assert!(cache.get("other.com").is_none());
    }

    #[test]
    fn test_zero_ttl_expires_immediately() {
        let cache = HostCache::new(Duration::ZERO);
        cache.insert("acme.com".to_owned(), site());

        assert!(cache.get("acme.com").is_none());
    }
}

//! Tenant site identity.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use uuid::Uuid;

/// Verification state of a tenant's custom domain.
///
/// Only `Verified` domains participate in host resolution; an unverified
/// domain must never route traffic to its site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainVerification {
    #[default]
    Unverified,
    Verified,
}

/// Lifecycle status of a site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SiteStatus {
    #[default]
    Active,
    Inactive,
}

/// Free-form site settings map.
///
/// The renderer only reads `description`; everything else is carried
/// opaquely so settings written by other parts of the platform survive a
/// round trip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteSettings {
    /// Optional site description, used as the SEO description fallback.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Settings this subsystem does not interpret.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// A tenant's site record.
///
/// Read-only from the renderer's perspective. A site is addressable by at
/// most one slug and at most one verified custom domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    pub id: Uuid,
    pub name: String,
    /// Subdomain key, unique across the platform.
    pub slug: String,
    /// Tenant-owned domain pointed at the platform, if any.
    #[serde(default)]
    pub custom_domain: Option<String>,
    #[serde(default)]
    pub domain_verification_status: DomainVerification,
    #[serde(default)]
    pub status: SiteStatus,
    /// Theme accent color as a hex string (e.g. `#6366f1`).
    #[serde(default = "default_primary_color")]
    pub primary_color: String,
    #[serde(default)]
    pub settings: SiteSettings,
}

fn default_primary_color() -> String {
    "#6366f1".to_owned()
}

impl Site {
    /// True if this site's custom domain may be used for host resolution.
    #[must_use]
    pub fn has_verified_domain(&self) -> bool {
        self.custom_domain.is_some()
            && self.domain_verification_status == DomainVerification::Verified
    }

    /// True if the site serves traffic.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == SiteStatus::Active
    }
}

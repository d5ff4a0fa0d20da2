//! Publishable page records.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::block::Block;

/// Publication state of a page.
///
/// The renderer only ever sees `Published` pages; `Draft` exists so records
/// deserialize faithfully regardless of where they came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageStatus {
    Draft,
    #[default]
    Published,
}

/// Structured page content: an ordered list of blocks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageContent {
    #[serde(default)]
    pub blocks: Vec<Block>,
}

/// A unit of publishable content belonging to one site.
///
/// Within a site, `slug` is unique among published pages. A page with
/// `page_type` of `"home"` is the canonical home page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: Uuid,
    pub site_id: Uuid,
    pub title: String,
    /// URL-safe identifier, unique within the site.
    pub slug: String,
    #[serde(default)]
    pub content: PageContent,
    #[serde(default)]
    pub status: PageStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_description: Option<String>,
    /// Classifier (e.g. `"home"` marks the canonical home page).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_type: Option<String>,
}

impl Page {
    /// True if this page is the designated home page.
    #[must_use]
    pub fn is_home(&self) -> bool {
        self.page_type.as_deref() == Some("home") || self.slug == "home"
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_deserialize_page_with_blocks() {
        let page: Page = serde_json::from_value(json!({
            "id": "11111111-1111-1111-1111-111111111111",
            "site_id": "22222222-2222-2222-2222-222222222222",
            "title": "Landing",
            "slug": "landing",
            "content": {"blocks": [
                {"type": "hero", "content": {"headline": "Welcome"}}
            ]}
        }))
        .unwrap();

        assert_eq!(page.content.blocks.len(), 1);
        assert_eq!(page.status, PageStatus::Published);
    }

    #[test]
    fn test_page_without_content_defaults_empty() {
        let page: Page = serde_json::from_value(json!({
            "id": "11111111-1111-1111-1111-111111111111",
            "site_id": "22222222-2222-2222-2222-222222222222",
            "title": "Empty",
            "slug": "empty"
        }))
        .unwrap();

        assert!(page.content.blocks.is_empty());
    }

    #[test]
    fn test_is_home_by_page_type() {
        let page: Page = serde_json::from_value(json!({
            "id": "11111111-1111-1111-1111-111111111111",
            "site_id": "22222222-2222-2222-2222-222222222222",
            "title": "Landing",
            "slug": "creatorappu-landing-page",
            "page_type": "home"
        }))
        .unwrap();

        assert!(page.is_home());
    }

    #[test]
    fn test_is_home_by_slug() {
        let page: Page = serde_json::from_value(json!({
            "id": "11111111-1111-1111-1111-111111111111",
            "site_id": "22222222-2222-2222-2222-222222222222",
            "title": "Home",
            "slug": "home"
        }))
        .unwrap();

        assert!(page.is_home());
    }
}

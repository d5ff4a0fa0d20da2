//! Navigation derivation.
//!
//! Nav entries are a filtered subset of a site's pages matching a fixed
//! allow-list of slugs, in allow-list order (not page creation order). Each
//! entry's label comes from the explicit label map, falling back to the
//! page's own title.

use serde::Serialize;
use sitelet_model::Page;

use crate::composer::select_home_page;

/// Allow-listed nav slugs in display order, with their labels.
///
/// A `None` label means "use the page title".
const NAV_SLUGS: &[(&str, Option<&str>)] = &[
    ("home", Some("Home")),
    ("about", Some("About")),
    ("courses", Some("Courses")),
    ("pricing", Some("Pricing")),
    ("contact", Some("Contact")),
    // No fixed label; uses whatever the tenant titled the page
    ("faq", None),
];

/// One derived navigation entry. Not persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub label: String,
    pub href: String,
    /// True when this entry matches the request path.
    pub active: bool,
}

/// Derive nav entries for a page list and request path.
///
/// The `home` entry maps to the site's designated home page (whatever its
/// slug) and links to `/`; other entries require a page with the exact slug.
#[must_use]
pub fn nav_entries(pages: &[Page], request_path: &str) -> Vec<NavEntry> {
    let path = if request_path.is_empty() {
        "/"
    } else {
        request_path
    };

    NAV_SLUGS
        .iter()
        .filter_map(|(slug, label)| {
            let (page, href) = if *slug == "home" {
                (select_home_page(pages)?, "/".to_owned())
            } else {
                (
                    pages.iter().find(|p| p.slug == *slug)?,
                    format!("/{slug}"),
                )
            };
            Some(NavEntry {
                label: label.map_or_else(|| page.title.clone(), str::to_owned),
                active: href == path,
                href,
            })
        })
        .collect()
}

//! Page composition.
//!
//! [`compose_page`] is the single place rendering decisions are made:
//! page selection for the request path, header and nav assembly, the block
//! sequence, the optional product grid, and the footer. Both delivery paths
//! (static HTML and the interactive mount) serialize the tree this function
//! returns, so they cannot drift apart.

use chrono::{Datelike, Utc};
use sitelet_model::{Page, Product, Site};
use sitelet_render::{Element, Node, Theme, render_blocks};

use crate::nav::{NavEntry, nav_entries};

/// Description truncation limit for product cards.
const PRODUCT_DESCRIPTION_MAX: usize = 120;

/// A fully composed document for one (site, path) request.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedPage {
    /// Document title for the `<title>` tag; never embedded in body markup.
    pub seo_title: String,
    /// Document meta description; empty when nothing is configured.
    pub seo_description: String,
    /// True when this is the themed page-not-found document.
    pub not_found: bool,
    /// Body nodes in document order: header, main content, footer.
    pub body: Vec<Node>,
}

/// Select the designated home page.
///
/// `page_type == "home"` wins, then the `home` slug, then the first
/// published page in creation order.
#[must_use]
pub fn select_home_page(pages: &[Page]) -> Option<&Page> {
    pages
        .iter()
        .find(|p| p.page_type.as_deref() == Some("home"))
        .or_else(|| pages.iter().find(|p| p.slug == "home"))
        .or_else(|| pages.first())
}

/// Compose the document for a request path.
///
/// Pure over its inputs: no fetching, no side effects. Returns the themed
/// not-found document when no page matches (including an empty page list).
#[must_use]
pub fn compose_page(
    site: &Site,
    pages: &[Page],
    products: &[Product],
    request_path: &str,
) -> ComposedPage {
    let theme = Theme::new(site.primary_color.clone());
    let path = normalize_path(request_path);
    let is_home = path == "/";

    let current = if is_home {
        select_home_page(pages)
    } else {
        pages.iter().find(|p| format!("/{}", p.slug) == path)
    };

    let nav = nav_entries(pages, &path);

    let Some(page) = current else {
        return not_found_page(site, &nav, &theme);
    };

    let mut body = vec![header(site, &nav, &theme)];

    let mut main = Element::new("main").children(render_blocks(&page.content.blocks, &theme));
    if !products.is_empty() {
        main = main.child(product_grid(products, &theme));
    }
    body.push(main.into());
    body.push(footer(site, &nav));

    ComposedPage {
        seo_title: page
            .seo_title
            .clone()
            .unwrap_or_else(|| format!("{} | {}", page.title, site.name)),
        seo_description: page
            .seo_description
            .clone()
            .or_else(|| site.settings.description.clone())
            .unwrap_or_default(),
        not_found: false,
        body,
    }
}

fn normalize_path(request_path: &str) -> String {
    if request_path.is_empty() {
        return "/".to_owned();
    }
    if request_path.starts_with('/') {
        request_path.to_owned()
    } else {
        format!("/{request_path}")
    }
}

fn header(site: &Site, nav: &[NavEntry], theme: &Theme) -> Node {
    let mut links = Element::new("nav").class("site-nav");
    for entry in nav {
        let mut link = Element::new("a").attr("href", entry.href.clone());
        if entry.active {
            link = link
                .class("nav-link active")
                .attr("style", format!("color:{};", theme.primary_color));
        } else {
            link = link.class("nav-link");
        }
        links = links.child(link.text(entry.label.clone()));
    }

    Element::new("header")
        .class("site-header")
        .child(Element::new("div").class("site-name").text(site.name.clone()))
        .child(links)
        .into()
}

fn footer(site: &Site, nav: &[NavEntry]) -> Node {
    let mut links = Element::new("nav").class("footer-nav");
    for entry in nav {
        links = links.child(
            Element::new("a")
                .class("footer-link")
                .attr("href", entry.href.clone())
                .text(entry.label.clone()),
        );
    }

    Element::new("footer")
        .class("site-footer")
        .child(links)
        .child(
            Element::new("div")
                .class("footer-copyright")
                .text(format!("© {} {}", Utc::now().year(), site.name)),
        )
        .into()
}

fn product_grid(products: &[Product], theme: &Theme) -> Node {
    let mut grid = Element::new("div").class("products-grid");
    for product in products {
        let thumb: Node = product.thumbnail_url.as_deref().map_or_else(
            || {
                Element::new("div")
                    .class("product-placeholder")
                    .text("🛍")
                    .into()
            },
            |url| {
                Element::new("img")
                    .class("product-thumb")
                    .attr("src", url)
                    .attr("alt", product.title.clone())
                    .into()
            },
        );
        grid = grid.child(
            Element::new("article")
                .class("product-card")
                .child(thumb)
                .child(Element::new("h3").class("product-title").text(product.title.clone()))
                .child(
                    Element::new("p")
                        .class("product-description")
                        .text(truncate(&product.description, PRODUCT_DESCRIPTION_MAX)),
                )
                .child(
                    Element::new("div")
                        .class("product-price")
                        .attr("style", format!("color:{};", theme.primary_color))
                        .text(product.formatted_price()),
                ),
        );
    }

    Element::new("section")
        .class("block block-products")
        .child(Element::new("h2").class("products-headline").text("Products"))
        .child(grid)
        .into()
}

fn not_found_page(site: &Site, nav: &[NavEntry], theme: &Theme) -> ComposedPage {
    let body = vec![
        header(site, nav, theme),
        Element::new("main")
            .class("not-found")
            .child(Element::new("h1").text("Page Not Found"))
            .child(
                Element::new("p").text("The page you're looking for doesn't exist or was moved."),
            )
            .child(
                Element::new("a")
                    .class("not-found-home")
                    .attr("href", "/")
                    .attr("style", format!("background-color:{};", theme.primary_color))
                    .text("Back to home"),
            )
            .into(),
        footer(site, nav),
    ];

    ComposedPage {
        seo_title: format!("Page Not Found | {}", site.name),
        seo_description: String::new(),
        not_found: true,
        body,
    }
}

/// Truncate on a char boundary, appending an ellipsis when shortened.
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_owned();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}…", cut.trim_end())
}

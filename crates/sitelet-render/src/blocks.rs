//! Per-kind block rendering.
//!
//! One pure function per block kind, each mapping a content payload plus the
//! tenant theme to a [`Node`] subtree. Missing fields omit their markup;
//! unknown kinds render to nothing. No function here performs I/O or panics
//! on tenant data.

use sitelet_model::{
    Block, BlockKind, BlockStyles, CtaContent, FeaturesContent, FormContent, GalleryContent,
    HeroContent, ImageContent, PricingContent, StatsContent, TestimonialContent, TextContent,
    VideoContent,
};

use crate::node::{Element, Node};
use crate::sanitize::sanitize_html;
use crate::theme::{DARK_TEXT, Theme, is_light_background};

/// Default glyph for feature cards without a usable icon.
const DEFAULT_FEATURE_ICON: &str = "★";

/// Render a single block against the tenant theme.
///
/// Total over all [`BlockKind`]s; returns `None` for unknown kinds and for
/// blocks with nothing to show.
#[must_use]
pub fn render_block(block: &Block, theme: &Theme) -> Option<Node> {
    let styles = &block.styles;
    match block.kind {
        BlockKind::Hero => Some(hero(&block.content_as(), styles, theme)),
        BlockKind::Text => Some(text(&block.content_as(), styles)),
        BlockKind::Image => image(&block.content_as(), styles),
        BlockKind::Stats => Some(stats(&block.content_as(), styles, theme)),
        BlockKind::Features => Some(features(&block.content_as(), styles)),
        BlockKind::Testimonial => Some(testimonial(&block.content_as(), styles)),
        BlockKind::Cta => Some(cta(&block.content_as(), styles, theme)),
        BlockKind::Form => Some(form(&block.content_as(), styles, theme)),
        BlockKind::Pricing => Some(pricing(&block.content_as(), styles, theme)),
        BlockKind::Video => video(&block.content_as(), styles),
        BlockKind::Gallery => gallery(&block.content_as(), styles),
        BlockKind::Unknown => None,
    }
}

/// Render an ordered block sequence, skipping blocks that produce nothing.
#[must_use]
pub fn render_blocks(blocks: &[Block], theme: &Theme) -> Vec<Node> {
    blocks
        .iter()
        .filter_map(|block| render_block(block, theme))
        .collect()
}

/// Build the wrapping `<section>` with style overrides applied inline.
fn section(class: &str, styles: &BlockStyles) -> Element {
    let base = styles
        .background_color
        .as_ref()
        .map(|bg| format!("background-color:{bg};"))
        .unwrap_or_default();
    styled_section(class, base, styles)
}

/// Like [`section`] but with kind-specific base CSS (e.g. a computed
/// background). Alignment and padding overrides still apply; the caller owns
/// the background decision.
fn styled_section(class: &str, base_css: String, styles: &BlockStyles) -> Element {
    let mut css = base_css;
    if let Some(align) = &styles.text_align {
        css.push_str(&format!("text-align:{align};"));
    }
    if let Some(padding) = &styles.padding {
        css.push_str(&format!("padding:{padding};"));
    }
    let el = Element::new("section").class(class);
    if css.is_empty() { el } else { el.attr("style", css) }
}

fn heading(level: &str, class: &str, text: &str) -> Node {
    Element::new(level).class(class).text(text).into()
}

fn hero(content: &HeroContent, styles: &BlockStyles, theme: &Theme) -> Node {
    let background = content.background_image.as_ref().map_or_else(
        || format!("background:{};", theme.gradient()),
        |url| format!("background-image:url({url});background-size:cover;background-position:center;"),
    );
    let opacity = content.overlay_opacity.unwrap_or(0.7).clamp(0.0, 1.0);
    let alignment = content.alignment.as_deref().unwrap_or("center");

    let mut inner = Element::new("div")
        .class("hero-inner")
        .attr("style", format!("text-align:{alignment};"));
    if let Some(headline) = &content.headline {
        inner = inner.child(heading("h1", "hero-headline", headline));
    }
    if let Some(subheadline) = &content.subheadline {
        inner = inner.child(heading("p", "hero-subheadline", subheadline));
    }
    // CTA renders only when its text is present
    if let Some(cta_text) = content.cta_text.as_deref().filter(|t| !t.is_empty()) {
        inner = inner.child(
            Element::new("a")
                .class("hero-cta")
                .attr("href", content.cta_link.as_deref().unwrap_or("#"))
                .attr("style", format!("background-color:{};", theme.primary_color))
                .text(cta_text),
        );
    }

    styled_section("block block-hero", background, styles)
        .child(
            Element::new("div")
                .class("hero-overlay")
                .attr("style", format!("background:rgba(15,23,42,{opacity});")),
        )
        .child(inner)
        .into()
}

fn text(content: &TextContent, styles: &BlockStyles) -> Node {
    let mut prose = Element::new("div").class("prose");
    if let Some(html) = content.html.as_deref().filter(|h| !h.is_empty()) {
        prose = prose.child(Node::raw(sanitize_html(html)));
    }
    section("block block-text", styles).child(prose).into()
}

fn image(content: &ImageContent, styles: &BlockStyles) -> Option<Node> {
    let url = content.url.as_deref()?;
    let mut figure = Element::new("figure").class("image-figure").child(
        Element::new("img")
            .attr("src", url)
            .attr("alt", content.alt.as_deref().unwrap_or("")),
    );
    if let Some(caption) = &content.caption {
        figure = figure.child(Element::new("figcaption").text(caption));
    }
    Some(section("block block-image", styles).child(figure).into())
}

fn stats(content: &StatsContent, styles: &BlockStyles, theme: &Theme) -> Node {
    let background = styles
        .background_color
        .clone()
        .unwrap_or_else(|| theme.primary_color.clone());
    let text_color = if is_light_background(&background) {
        DARK_TEXT
    } else {
        "#ffffff"
    };

    let mut el = styled_section(
        "block block-stats",
        format!("background-color:{background};color:{text_color};"),
        styles,
    );
    if let Some(headline) = &content.headline {
        el = el.child(heading("h2", "stats-headline", headline));
    }

    let mut grid = Element::new("div").class("stats-grid");
    for stat in &content.stats {
        let mut item = Element::new("div").class("stat");
        if let Some(value) = &stat.value {
            item = item.child(Element::new("span").class("stat-value").text(value));
        }
        if let Some(label) = &stat.label {
            item = item.child(Element::new("span").class("stat-label").text(label));
        }
        grid = grid.child(item);
    }

    el.child(grid).into()
}

fn features(content: &FeaturesContent, styles: &BlockStyles) -> Node {
    let mut el = section("block block-features", styles);
    if let Some(headline) = &content.headline {
        el = el.child(heading("h2", "features-headline", headline));
    }
    if let Some(subheadline) = &content.subheadline {
        el = el.child(heading("p", "features-subheadline", subheadline));
    }

    let mut grid = Element::new("div").class("features-grid");
    for feature in &content.features {
        let icon = feature
            .icon
            .as_deref()
            .filter(|i| !i.is_empty() && i.chars().count() <= 4)
            .unwrap_or(DEFAULT_FEATURE_ICON);
        let mut card = Element::new("div")
            .class("feature-card")
            .child(Element::new("div").class("feature-icon").text(icon));
        if let Some(title) = &feature.title {
            card = card.child(heading("h3", "feature-title", title));
        }
        if let Some(description) = &feature.description {
            card = card.child(heading("p", "feature-description", description));
        }
        grid = grid.child(card);
    }

    el.child(grid).into()
}

fn testimonial(content: &TestimonialContent, styles: &BlockStyles) -> Node {
    let mut card = Element::new("div").class("testimonial-card");
    if let Some(avatar) = &content.avatar {
        card = card.child(
            Element::new("img")
                .class("testimonial-avatar")
                .attr("src", avatar)
                .attr("alt", content.author.as_deref().unwrap_or("")),
        );
    }
    if let Some(quote) = &content.quote {
        card = card.child(
            Element::new("blockquote")
                .class("testimonial-quote")
                .text(format!("\u{201c}{quote}\u{201d}")),
        );
    }
    if let Some(author) = &content.author {
        card = card.child(Element::new("div").class("testimonial-author").text(author));
    }
    if let Some(role) = &content.role {
        card = card.child(Element::new("div").class("testimonial-role").text(role));
    }

    section("block block-testimonial", styles).child(card).into()
}

fn cta(content: &CtaContent, styles: &BlockStyles, theme: &Theme) -> Node {
    let background = styles
        .background_color
        .clone()
        .unwrap_or_else(|| theme.primary_color.clone());

    let mut el = styled_section(
        "block block-cta",
        format!("background-color:{background};"),
        styles,
    );
    if let Some(headline) = &content.headline {
        el = el.child(heading("h2", "cta-headline", headline));
    }
    if let Some(description) = &content.description {
        el = el.child(heading("p", "cta-description", description));
    }
    if let Some(button_text) = content.button_text.as_deref().filter(|t| !t.is_empty()) {
        el = el.child(
            Element::new("a")
                .class("cta-button")
                .attr("href", content.button_link.as_deref().unwrap_or("#"))
                .attr("style", format!("color:{};", theme.primary_color))
                .text(button_text),
        );
    }

    el.into()
}

fn form(content: &FormContent, styles: &BlockStyles, theme: &Theme) -> Node {
    let mut el = section("block block-form", styles);
    if let Some(headline) = &content.headline {
        el = el.child(heading("h2", "form-headline", headline));
    }
    if let Some(description) = &content.description {
        el = el.child(heading("p", "form-description", description));
    }

    // Submission handling is an external collaborator; the markup is inert
    // and the interactive mount owns the submitted-acknowledgment state.
    let mut form_el = Element::new("form").class("form-fields");
    for (index, field) in content.fields.iter().enumerate() {
        let name = field
            .name
            .clone()
            .unwrap_or_else(|| format!("field-{index}"));
        let mut wrapper = Element::new("div").class("form-field");
        if let Some(label) = &field.label {
            wrapper = wrapper.child(Element::new("label").attr("for", name.clone()).text(label));
        }
        let input: Element = match field.field_type.as_deref() {
            Some("textarea") => Element::new("textarea").attr("id", name.clone()).attr("name", name),
            other => {
                let input_type = match other {
                    Some(t @ ("email" | "number" | "tel" | "url")) => t,
                    _ => "text",
                };
                Element::new("input")
                    .attr("type", input_type)
                    .attr("id", name.clone())
                    .attr("name", name)
            }
        };
        let input = if field.required {
            input.attr("required", "required")
        } else {
            input
        };
        wrapper = wrapper.child(input);
        form_el = form_el.child(wrapper);
    }
    form_el = form_el.child(
        Element::new("button")
            .attr("type", "submit")
            .class("form-submit")
            .attr("style", format!("background-color:{};", theme.primary_color))
            .text(content.submit_label.as_deref().unwrap_or("Submit")),
    );

    el.child(form_el).into()
}

fn pricing(content: &PricingContent, styles: &BlockStyles, theme: &Theme) -> Node {
    let mut el = section("block block-pricing", styles);
    if let Some(headline) = &content.headline {
        el = el.child(heading("h2", "pricing-headline", headline));
    }
    if let Some(subheadline) = &content.subheadline {
        el = el.child(heading("p", "pricing-subheadline", subheadline));
    }

    let mut grid = Element::new("div").class("pricing-grid");
    for plan in &content.plans {
        let class = if plan.highlighted {
            "plan-card plan-highlighted"
        } else {
            "plan-card"
        };
        let mut card = Element::new("div").class(class);
        if plan.highlighted {
            card = card.child(
                Element::new("div")
                    .class("plan-badge")
                    .attr("style", format!("background-color:{};", theme.primary_color))
                    .text("Most Popular"),
            );
        }
        if let Some(name) = &plan.name {
            card = card.child(heading("h3", "plan-name", name));
        }
        if let Some(price) = &plan.price {
            let mut price_el = Element::new("div").class("plan-price").text(price);
            if let Some(period) = &plan.period {
                price_el = price_el.child(Element::new("span").class("plan-period").text(period));
            }
            card = card.child(price_el);
        }
        if !plan.features.is_empty() {
            let mut list = Element::new("ul").class("plan-features");
            for feature in &plan.features {
                list = list.child(
                    Element::new("li")
                        .child(Element::new("span").class("plan-check").text("✓"))
                        .text(feature),
                );
            }
            card = card.child(list);
        }
        if let Some(cta_text) = plan.cta_text.as_deref().filter(|t| !t.is_empty()) {
            card = card.child(
                Element::new("a")
                    .class("plan-cta")
                    .attr("href", plan.cta_link.as_deref().unwrap_or("#"))
                    .attr("style", format!("background-color:{};", theme.primary_color))
                    .text(cta_text),
            );
        }
        grid = grid.child(card);
    }

    el.child(grid).into()
}

fn video(content: &VideoContent, styles: &BlockStyles) -> Option<Node> {
    let media: Option<Node> = if let Some(embed_url) = content.embed_url.as_deref() {
        Some(
            Element::new("div")
                .class("video-frame")
                .child(
                    Element::new("iframe")
                        .attr("src", embed_url)
                        .attr("allowfullscreen", "allowfullscreen"),
                )
                .into(),
        )
    } else if let Some(thumbnail) = content.thumbnail.as_deref() {
        Some(
            Element::new("div")
                .class("video-thumb")
                .child(Element::new("img").attr("src", thumbnail).attr("alt", ""))
                .child(Element::new("div").class("video-play").text("▶"))
                .into(),
        )
    } else {
        None
    };

    if media.is_none() && content.headline.is_none() && content.description.is_none() {
        return None;
    }

    let mut el = section("block block-video", styles);
    if let Some(headline) = &content.headline {
        el = el.child(heading("h2", "video-headline", headline));
    }
    if let Some(description) = &content.description {
        el = el.child(heading("p", "video-description", description));
    }
    Some(el.child_opt(media).into())
}

fn gallery(content: &GalleryContent, styles: &BlockStyles) -> Option<Node> {
    let images: Vec<Node> = content
        .images
        .iter()
        .filter_map(|image| {
            image.url.as_deref().map(|url| {
                Element::new("img")
                    .class("gallery-image")
                    .attr("src", url)
                    .attr("alt", image.alt.as_deref().unwrap_or(""))
                    .into()
            })
        })
        .collect();

    if images.is_empty() && content.headline.is_none() {
        return None;
    }

    let mut el = section("block block-gallery", styles);
    if let Some(headline) = &content.headline {
        el = el.child(heading("h2", "gallery-headline", headline));
    }
    Some(
        el.child(Element::new("div").class("gallery-grid").children(images))
            .into(),
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use sitelet_model::Block;

    use super::*;

    fn theme() -> Theme {
        Theme::new("#6366f1")
    }

    fn block(value: serde_json::Value) -> Block {
        serde_json::from_value(value).unwrap()
    }

    fn render_html(value: serde_json::Value) -> String {
        render_block(&block(value), &theme()).map_or_else(String::new, |n| n.html())
    }

    #[test]
    fn test_unknown_kind_renders_nothing() {
        let b = block(json!({"type": "countdown", "content": {}}));

        assert!(render_block(&b, &theme()).is_none());
    }

    #[test]
    fn test_hero_with_headline_and_cta() {
        let html = render_html(json!({
            "type": "hero",
            "content": {
                "headline": "Welcome",
                "subheadline": "Build your thing",
                "cta_text": "Get Started",
                "cta_link": "/signup"
            }
        }));

        assert!(html.contains("block-hero"));
        assert!(html.contains("<h1 class=\"hero-headline\">Welcome</h1>"));
        assert!(html.contains("Build your thing"));
        assert!(html.contains(r#"href="/signup""#));
        // Gradient fallback background from the theme
        assert!(html.contains("linear-gradient(135deg, #6366f1"));
        // Default 70% dark overlay
        assert!(html.contains("rgba(15,23,42,0.7)"));
    }

    #[test]
    fn test_hero_without_cta_text_omits_link() {
        let html = render_html(json!({
            "type": "hero",
            "content": {"headline": "Hi", "cta_link": "/signup"}
        }));

        assert!(!html.contains("<a"));
    }

    #[test]
    fn test_hero_background_image_wins_over_gradient() {
        let html = render_html(json!({
            "type": "hero",
            "content": {"background_image": "https://cdn.example/bg.jpg"}
        }));

        assert!(html.contains("background-image:url(https://cdn.example/bg.jpg)"));
        assert!(!html.contains("linear-gradient"));
    }

    #[test]
    fn test_text_block_sanitizes_script() {
        let html = render_html(json!({
            "type": "text",
            "content": {"html": "<p>ok</p><script>alert(1)</script>"}
        }));

        assert!(html.contains("<p>ok</p>"));
        assert!(!html.contains("<script>"));
        assert!(!html.contains("alert(1)"));
    }

    #[test]
    fn test_image_without_url_renders_nothing() {
        assert_eq!(render_html(json!({"type": "image", "content": {}})), "");
    }

    #[test]
    fn test_image_with_caption() {
        let html = render_html(json!({
            "type": "image",
            "content": {"url": "https://cdn.example/a.png", "caption": "A photo"}
        }));

        assert!(html.contains(r#"<img src="https://cdn.example/a.png""#));
        assert!(html.contains("<figcaption>A photo</figcaption>"));
    }

    #[test]
    fn test_stats_light_background_uses_dark_text() {
        let html = render_html(json!({
            "type": "stats",
            "content": {"stats": [{"value": "10k", "label": "Students"}]},
            "styles": {"background_color": "#ffffff"}
        }));

        assert!(html.contains("background-color:#ffffff;color:#0f172a;"));
        assert!(html.contains("10k"));
    }

    #[test]
    fn test_stats_theme_background_uses_white_text() {
        let html = render_html(json!({
            "type": "stats",
            "content": {"stats": [{"value": "10k", "label": "Students"}]}
        }));

        assert!(html.contains("background-color:#6366f1;color:#ffffff;"));
    }

    #[test]
    fn test_features_icon_rules() {
        let html = render_html(json!({
            "type": "features",
            "content": {"features": [
                {"icon": "🚀", "title": "Fast"},
                {"icon": "this is way too long", "title": "Other"}
            ]}
        }));

        assert!(html.contains("🚀"));
        assert!(!html.contains("this is way too long"));
        assert!(html.contains("★"));
    }

    #[test]
    fn test_testimonial_quote_wrapped_in_quotation_marks() {
        let html = render_html(json!({
            "type": "testimonial",
            "content": {"quote": "Changed my life", "author": "Sam", "role": "Student"}
        }));

        assert!(html.contains("\u{201c}Changed my life\u{201d}"));
        assert!(html.contains("Sam"));
        assert!(html.contains("Student"));
    }

    #[test]
    fn test_cta_button_only_with_text() {
        let with_button = render_html(json!({
            "type": "cta",
            "content": {"headline": "Ready?", "button_text": "Join", "button_link": "/join"}
        }));
        let without_button = render_html(json!({
            "type": "cta",
            "content": {"headline": "Ready?", "button_link": "/join"}
        }));

        assert!(with_button.contains(r#"href="/join""#));
        assert!(!without_button.contains("<a"));
    }

    #[test]
    fn test_form_renders_typed_fields() {
        let html = render_html(json!({
            "type": "form",
            "content": {
                "headline": "Contact",
                "fields": [
                    {"name": "email", "label": "Email", "type": "email", "required": true},
                    {"name": "message", "label": "Message", "type": "textarea"}
                ]
            }
        }));

        assert!(html.contains(r#"<input type="email" id="email" name="email" required="required">"#));
        assert!(html.contains(r#"<textarea id="message" name="message">"#));
        assert!(html.contains(">Submit</button>"));
    }

    #[test]
    fn test_form_unrecognized_field_type_falls_back_to_text() {
        let html = render_html(json!({
            "type": "form",
            "content": {"fields": [{"name": "x", "type": "file"}]}
        }));

        assert!(html.contains(r#"type="text""#));
    }

    #[test]
    fn test_pricing_single_highlighted_badge() {
        let html = render_html(json!({
            "type": "pricing",
            "content": {"plans": [
                {"name": "Basic", "price": "$9"},
                {"name": "Pro", "price": "$29", "highlighted": true},
                {"name": "Team", "price": "$99"}
            ]}
        }));

        assert_eq!(html.matches("Most Popular").count(), 1);
        assert_eq!(html.matches("plan-highlighted").count(), 1);
    }

    #[test]
    fn test_pricing_features_have_check_glyph() {
        let html = render_html(json!({
            "type": "pricing",
            "content": {"plans": [
                {"name": "Basic", "features": ["All courses", "Email support"]}
            ]}
        }));

        assert_eq!(html.matches("✓").count(), 2);
        assert!(html.contains("All courses"));
    }

    #[test]
    fn test_video_embed_renders_iframe() {
        let html = render_html(json!({
            "type": "video",
            "content": {"embed_url": "https://player.example/v/123"}
        }));

        assert!(html.contains(r#"<iframe src="https://player.example/v/123""#));
    }

    #[test]
    fn test_video_thumbnail_renders_play_overlay() {
        let html = render_html(json!({
            "type": "video",
            "content": {"thumbnail": "https://cdn.example/t.jpg"}
        }));

        assert!(html.contains("video-play"));
        assert!(html.contains("▶"));
        assert!(!html.contains("<iframe"));
    }

    #[test]
    fn test_video_empty_renders_nothing() {
        assert_eq!(render_html(json!({"type": "video", "content": {}})), "");
    }

    #[test]
    fn test_gallery_grid() {
        let html = render_html(json!({
            "type": "gallery",
            "content": {"images": [
                {"url": "https://cdn.example/1.png"},
                {"url": "https://cdn.example/2.png", "alt": "two"}
            ]}
        }));

        assert_eq!(html.matches("<img").count(), 2);
        assert!(html.contains(r#"alt="two""#));
    }

    #[test]
    fn test_styles_applied_to_section() {
        let html = render_html(json!({
            "type": "text",
            "content": {"html": "<p>x</p>"},
            "styles": {"background_color": "#111827", "padding": "4rem 2rem"}
        }));

        assert!(html.contains("background-color:#111827;"));
        assert!(html.contains("padding:4rem 2rem;"));
    }

    #[test]
    fn test_render_blocks_preserves_order_and_skips_empty() {
        let blocks: Vec<Block> = vec![
            block(json!({"type": "hero", "content": {"headline": "One"}})),
            block(json!({"type": "widget", "content": {}})),
            block(json!({"type": "cta", "content": {"headline": "Two"}})),
        ];

        let nodes = render_blocks(&blocks, &theme());

        assert_eq!(nodes.len(), 2);
        assert!(nodes[0].text_content().contains("One"));
        assert!(nodes[1].text_content().contains("Two"));
    }
}

//! Typed content blocks.
//!
//! A [`Block`] is one self-contained content unit within a page. The `type`
//! discriminant selects a renderer; the `content` payload is kept as raw
//! JSON and extracted into a typed struct by the renderer via
//! [`Block::content_as`]. Missing or malformed fields degrade to defaults
//! rather than failing the block, and unknown discriminants map to
//! [`BlockKind::Unknown`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Closed enum of block kinds.
///
/// Forward compatible: any discriminant not listed here deserializes to
/// `Unknown`, which renders to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Hero,
    Text,
    Image,
    Stats,
    Features,
    Testimonial,
    Cta,
    Form,
    Pricing,
    Video,
    Gallery,
    #[serde(other)]
    Unknown,
}

/// Optional per-block style overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockStyles {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    /// `left`, `center`, or `right`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,
    /// CSS padding override (e.g. `"4rem 2rem"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
}

/// One content block within a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    #[serde(rename = "type")]
    pub kind: BlockKind,
    #[serde(default)]
    pub content: Value,
    #[serde(default)]
    pub styles: BlockStyles,
}

impl Block {
    /// Create a block of the given kind with a JSON content payload.
    #[must_use]
    pub fn new(kind: BlockKind, content: Value) -> Self {
        Self {
            kind,
            content,
            styles: BlockStyles::default(),
        }
    }

    /// Extract the content payload as a typed struct.
    ///
    /// Fields absent from the payload take their defaults; a payload that
    /// fails to deserialize entirely (wrong shape) also yields the default,
    /// so extraction is total.
    #[must_use]
    pub fn content_as<T: Default + for<'de> Deserialize<'de>>(&self) -> T {
        serde_json::from_value(self.content.clone()).unwrap_or_default()
    }
}

/// Hero block payload: full-bleed headline section.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct HeroContent {
    pub headline: Option<String>,
    pub subheadline: Option<String>,
    pub background_image: Option<String>,
    /// Dark overlay opacity over the background; defaults to 0.7 at render.
    pub overlay_opacity: Option<f64>,
    /// `left`, `center`, or `right`; defaults to centered.
    pub alignment: Option<String>,
    pub cta_text: Option<String>,
    pub cta_link: Option<String>,
}

/// Text block payload: rich HTML prose (sanitized before insertion).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TextContent {
    pub html: Option<String>,
}

/// Image block payload.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ImageContent {
    pub url: Option<String>,
    pub alt: Option<String>,
    pub caption: Option<String>,
}

/// One (value, label) pair in a stats strip.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StatItem {
    pub value: Option<String>,
    pub label: Option<String>,
}

/// Stats block payload.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StatsContent {
    pub headline: Option<String>,
    pub stats: Vec<StatItem>,
}

/// One card in a features grid.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FeatureItem {
    pub icon: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Features block payload.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FeaturesContent {
    pub headline: Option<String>,
    pub subheadline: Option<String>,
    pub features: Vec<FeatureItem>,
}

/// Testimonial block payload.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TestimonialContent {
    pub quote: Option<String>,
    pub author: Option<String>,
    pub role: Option<String>,
    pub avatar: Option<String>,
}

/// Call-to-action block payload.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CtaContent {
    pub headline: Option<String>,
    pub description: Option<String>,
    pub button_text: Option<String>,
    pub button_link: Option<String>,
}

/// One typed field in a form block.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FormField {
    pub name: Option<String>,
    pub label: Option<String>,
    /// `text`, `email`, `textarea`, ...; anything unrecognized renders as text.
    #[serde(rename = "type")]
    pub field_type: Option<String>,
    pub required: bool,
}

/// Form block payload.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FormContent {
    pub headline: Option<String>,
    pub description: Option<String>,
    pub fields: Vec<FormField>,
    pub submit_label: Option<String>,
}

/// One plan card in a pricing grid.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PricingPlan {
    pub name: Option<String>,
    pub price: Option<String>,
    pub period: Option<String>,
    pub features: Vec<String>,
    pub highlighted: bool,
    pub cta_text: Option<String>,
    pub cta_link: Option<String>,
}

/// Pricing block payload.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PricingContent {
    pub headline: Option<String>,
    pub subheadline: Option<String>,
    pub plans: Vec<PricingPlan>,
}

/// Video block payload.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct VideoContent {
    pub headline: Option<String>,
    pub description: Option<String>,
    pub embed_url: Option<String>,
    pub thumbnail: Option<String>,
}

/// One image in a gallery grid.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GalleryImage {
    pub url: Option<String>,
    pub alt: Option<String>,
}

/// Gallery block payload.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GalleryContent {
    pub headline: Option<String>,
    pub images: Vec<GalleryImage>,
}

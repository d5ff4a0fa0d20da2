//! Content model for sitelet tenant sites.
//!
//! Defines the records the renderer consumes: [`Site`] (tenant identity),
//! [`Page`] (publishable content made of ordered [`Block`]s), and
//! [`Product`] (read-only storefront projection). How these records are
//! produced or edited is out of scope; this crate is the shared schema
//! between the store, the composer, and the renderers.
//!
//! # Block dispatch
//!
//! Blocks carry a `type` discriminant and a kind-specific `content` payload.
//! The discriminant is a closed enum ([`BlockKind`]) with an `Unknown`
//! catch-all, so unrecognized block types deserialize cleanly and render to
//! nothing instead of failing the page.

mod block;
mod page;
mod product;
mod site;

pub use block::{
    Block, BlockKind, BlockStyles, CtaContent, FeatureItem, FeaturesContent, FormContent,
    FormField, GalleryContent, GalleryImage, HeroContent, ImageContent, PricingContent,
    PricingPlan, StatItem, StatsContent, TestimonialContent, TextContent, VideoContent,
};
pub use page::{Page, PageContent, PageStatus};
pub use product::Product;
pub use site::{DomainVerification, Site, SiteSettings, SiteStatus};

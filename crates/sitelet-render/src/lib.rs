//! Block renderer for sitelet tenant pages.
//!
//! Rendering decisions live in exactly one place: every block kind maps to a
//! pure function producing an intermediate [`Node`] tree. Two serializers sit
//! on top of the tree:
//!
//! - [`Node::to_html`] stringifies it for the static document endpoint
//!   (pure string assembly, no DOM required)
//! - the tree itself serializes to JSON for the interactive client mount to
//!   materialize as live DOM
//!
//! Both delivery paths therefore emit the same blocks in the same order with
//! the same text content by construction.
//!
//! # Safety contract
//!
//! All text and attribute values are HTML-escaped at serialization. The one
//! exception is the `text` block's rich HTML, which enters the tree as a
//! [`Node::Raw`] node only after passing through [`sanitize_html`].
//!
//! # Totality
//!
//! [`render_block`] has a defined output for every declared [`BlockKind`]
//! and renders unknown kinds to nothing. Missing content fields degrade to
//! omitted markup, never to an error.

mod blocks;
mod escape;
mod node;
mod sanitize;
mod theme;

pub use blocks::{render_block, render_blocks};
pub use escape::escape_html;
pub use node::{Element, Node};
pub use sanitize::sanitize_html;
pub use theme::{Theme, is_light_background};

//! Intermediate render tree.
//!
//! [`Node`] is the single structured representation both delivery paths
//! consume. The static endpoint stringifies it with [`Node::to_html`]; the
//! interactive mount receives it as JSON and builds live DOM from it.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::escape::escape_html;

/// Elements serialized without a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// An element node: tag, attributes in insertion order, children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub tag: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attrs: Vec<(String, String)>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Element {
    /// Create an element with no attributes or children.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Append an attribute.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Append a `class` attribute.
    #[must_use]
    pub fn class(self, value: impl Into<String>) -> Self {
        self.attr("class", value)
    }

    /// Append a child node.
    #[must_use]
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append a child node if present.
    #[must_use]
    pub fn child_opt(mut self, child: Option<impl Into<Node>>) -> Self {
        if let Some(child) = child {
            self.children.push(child.into());
        }
        self
    }

    /// Append multiple child nodes.
    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Append a text child.
    #[must_use]
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

/// One node in the render tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Node {
    Element(Element),
    /// Plain text, escaped at serialization.
    Text(String),
    /// Pre-sanitized HTML inserted verbatim. Only sanitizer output may be
    /// placed here.
    Raw(String),
}

impl Node {
    /// Text node constructor.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Raw node constructor. The caller vouches that `html` is sanitized.
    #[must_use]
    pub fn raw(html: impl Into<String>) -> Self {
        Self::Raw(html.into())
    }

    /// Serialize the tree to an HTML string.
    ///
    /// Text and attribute values are escaped here; raw nodes pass through
    /// verbatim.
    pub fn to_html(&self, out: &mut String) {
        match self {
            Self::Text(text) => out.push_str(&escape_html(text)),
            Self::Raw(html) => out.push_str(html),
            Self::Element(el) => {
                let _ = write!(out, "<{}", el.tag);
                for (name, value) in &el.attrs {
                    let _ = write!(out, r#" {name}="{}""#, escape_html(value));
                }
                out.push('>');
                if VOID_ELEMENTS.contains(&el.tag.as_str()) {
                    return;
                }
                for child in &el.children {
                    child.to_html(out);
                }
                let _ = write!(out, "</{}>", el.tag);
            }
        }
    }

    /// Serialize the tree to a new HTML string.
    #[must_use]
    pub fn html(&self) -> String {
        let mut out = String::new();
        self.to_html(&mut out);
        out
    }

    /// Collect the text segments of the tree in document order.
    ///
    /// Raw nodes are excluded: they carry tenant-authored markup, not
    /// renderer-decided text.
    pub fn collect_text(&self, out: &mut Vec<String>) {
        match self {
            Self::Text(text) => {
                if !text.is_empty() {
                    out.push(text.clone());
                }
            }
            Self::Raw(_) => {}
            Self::Element(el) => {
                for child in &el.children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// All text segments joined with a single space.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut parts = Vec::new();
        self.collect_text(&mut parts);
        parts.join(" ")
    }
}

//! Rich-HTML sanitization for tenant-authored content.
//!
//! The `text` block carries rich HTML written in the page builder. Before it
//! may enter the render tree as a raw node it passes through
//! [`sanitize_html`], which enforces a tag and attribute allow-list.
//!
//! The sanitizer strips silently and never fails: disallowed tags are
//! dropped (keeping their inner text), dangerous containers are dropped with
//! their contents, and event-handler attributes and `javascript:` URLs never
//! survive. Stray `<` characters that don't open a recognizable tag are
//! escaped.

use std::fmt::Write;

use crate::escape::escape_html;

/// Tags whose entire contents are removed.
const DROP_WITH_CONTENT: &[&str] = &["script", "style", "iframe", "object", "embed"];

/// Tags allowed through (attributes filtered per tag).
const ALLOWED_TAGS: &[&str] = &[
    "p", "br", "strong", "em", "b", "i", "u", "s", "a", "ul", "ol", "li", "h1", "h2", "h3", "h4",
    "h5", "h6", "blockquote", "span", "img",
];

/// Sanitize tenant-authored rich HTML against the allow-list.
#[must_use]
pub fn sanitize_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let bytes = input.as_bytes();
    let mut pos = 0;

    while pos < bytes.len() {
        let Some(open) = input[pos..].find('<').map(|i| pos + i) else {
            out.push_str(&escape_text(&input[pos..]));
            break;
        };

        out.push_str(&escape_text(&input[pos..open]));

        // Comments are dropped wholesale
        if input[open..].starts_with("<!--") {
            pos = input[open..]
                .find("-->")
                .map_or(input.len(), |i| open + i + 3);
            continue;
        }

        let Some(close) = input[open..].find('>').map(|i| open + i) else {
            // Unterminated tag: escape the remainder as text
            out.push_str(&escape_html(&input[open..]));
            break;
        };

        let raw_tag = &input[open + 1..close];
        let (is_closing, body) = match raw_tag.strip_prefix('/') {
            Some(rest) => (true, rest),
            None => (false, raw_tag),
        };
        let name: String = body
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();

        if name.is_empty() {
            // Not a tag at all (e.g. "a < b"), escape the bracket
            out.push_str("&lt;");
            pos = open + 1;
            continue;
        }

        pos = close + 1;

        if DROP_WITH_CONTENT.contains(&name.as_str()) {
            if !is_closing {
                pos = skip_past_closing(input, pos, &name);
            }
            continue;
        }

        if !ALLOWED_TAGS.contains(&name.as_str()) {
            // Drop the tag, keep scanning; inner text survives
            continue;
        }

        if is_closing {
            let _ = write!(out, "</{name}>");
        } else {
            emit_open_tag(&mut out, &name, body);
        }
    }

    out
}

/// Advance past the matching closing tag, or to the end of input.
fn skip_past_closing(input: &str, from: usize, name: &str) -> usize {
    let lower = input.to_ascii_lowercase();
    let needle = format!("</{name}");
    match lower[from..].find(&needle) {
        Some(i) => {
            let after = from + i + needle.len();
            lower[after..].find('>').map_or(input.len(), |j| after + j + 1)
        }
        None => input.len(),
    }
}

/// Emit an allowed open tag with its filtered attributes.
fn emit_open_tag(out: &mut String, name: &str, body: &str) {
    let _ = write!(out, "<{name}");

    match name {
        "a" => {
            if let Some(href) = find_attr(body, "href")
                && is_safe_link(&href)
            {
                let _ = write!(out, r#" href="{}" rel="noopener""#, escape_html(&href));
            }
        }
        "img" => {
            if let Some(src) = find_attr(body, "src")
                && is_safe_image(&src)
            {
                let _ = write!(out, r#" src="{}""#, escape_html(&src));
            }
            if let Some(alt) = find_attr(body, "alt") {
                let _ = write!(out, r#" alt="{}""#, escape_html(&alt));
            }
        }
        // Every other allowed tag keeps no attributes
        _ => {}
    }

    out.push('>');
}

/// Extract an attribute value from a tag body, unquoting if needed.
fn find_attr(body: &str, attr: &str) -> Option<String> {
    let lower = body.to_ascii_lowercase();
    let mut search = 0;
    loop {
        let idx = lower[search..].find(attr)? + search;
        // Must be a standalone attribute name
        let preceded_ok = idx == 0
            || lower[..idx]
                .chars()
                .next_back()
                .is_some_and(char::is_whitespace);
        let rest = body[idx + attr.len()..].trim_start();
        if preceded_ok && rest.starts_with('=') {
            let value = rest[1..].trim_start();
            return Some(match value.chars().next() {
                Some(quote @ ('"' | '\'')) => {
                    let inner = &value[1..];
                    let end = inner.find(quote).unwrap_or(inner.len());
                    inner[..end].to_owned()
                }
                _ => value
                    .split(|c: char| c.is_whitespace() || c == '/')
                    .next()
                    .unwrap_or("")
                    .to_owned(),
            });
        }
        search = idx + attr.len();
        if search >= lower.len() {
            return None;
        }
    }
}

fn is_safe_link(url: &str) -> bool {
    let lower = url.trim().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://") || lower.starts_with("mailto:")
}

fn is_safe_image(url: &str) -> bool {
    let lower = url.trim().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Escape text content, leaving already-encoded character entities intact
/// so builder output like `&nbsp;` doesn't get double-escaped.
fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, c) in text.char_indices() {
        match c {
            '&' if !looks_like_entity(&text[i..]) => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// True if the string starts with `&name;` or `&#123;`.
fn looks_like_entity(s: &str) -> bool {
    let rest = &s[1..];
    matches!(
        rest.find(';'),
        Some(end) if end > 0 && end <= 8
            && rest[..end].chars().all(|c| c.is_ascii_alphanumeric() || c == '#')
    )
}

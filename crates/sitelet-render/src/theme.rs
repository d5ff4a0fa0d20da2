//! Theme color handling.
//!
//! The theme is the tenant's primary accent color, threaded through every
//! render function as an explicit parameter. No ambient theme state exists.

/// Backgrounds treated as "light" for the stats contrast rule.
const LIGHT_BACKGROUNDS: &[&str] = &["#f8fafc", "#ffffff"];

/// Dark text color used on light backgrounds.
pub(crate) const DARK_TEXT: &str = "#0f172a";

/// Tenant theme passed to every render function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Primary accent color as a hex string.
    pub primary_color: String,
}

impl Theme {
    /// Create a theme from a hex color string.
    #[must_use]
    pub fn new(primary_color: impl Into<String>) -> Self {
        Self {
            primary_color: primary_color.into(),
        }
    }

    /// CSS gradient derived from the primary color, used as the hero
    /// fallback background.
    #[must_use]
    pub fn gradient(&self) -> String {
        format!(
            "linear-gradient(135deg, {}, {})",
            self.primary_color,
            self.darkened()
        )
    }

    /// Primary color with each RGB channel scaled to 60%.
    ///
    /// Returns the primary color unchanged if it doesn't parse as hex.
    #[must_use]
    pub fn darkened(&self) -> String {
        match parse_hex(&self.primary_color) {
            Some((r, g, b)) => format!(
                "#{:02x}{:02x}{:02x}",
                scale(r),
                scale(g),
                scale(b)
            ),
            None => self.primary_color.clone(),
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scale(channel: u8) -> u8 {
    (f32::from(channel) * 0.6) as u8
}

/// Parse `#rgb` or `#rrggbb` into channels.
fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    match hex.len() {
        3 => {
            let mut chans = hex.chars().map(|c| c.to_digit(16));
            let r = chans.next()??;
            let g = chans.next()??;
            let b = chans.next()??;
            // Single hex digits expand by repetition (0xf -> 0xff)
            Some((
                u8::try_from(r * 17).ok()?,
                u8::try_from(g * 17).ok()?,
                u8::try_from(b * 17).ok()?,
            ))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some((r, g, b))
        }
        _ => None,
    }
}

/// Contrast rule: is this background color "light"?
///
/// Deliberately an allow-list check rather than luminance math; matches the
/// two backgrounds the page builder offers as light.
#[must_use]
pub fn is_light_background(color: &str) -> bool {
    LIGHT_BACKGROUNDS
        .iter()
        .any(|light| light.eq_ignore_ascii_case(color))
}

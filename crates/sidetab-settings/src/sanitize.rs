//! Form sanitization.
//!
//! [`sanitize`] is the callback the host invokes with the raw submitted
//! form before persisting anything. It never fails: every missing or
//! invalid value is replaced by its field default, except the two
//! optional fields (`text_for_tab`, `tab_url`) which are simply carried
//! over as absent.

use sidetab_core::{FontFamily, HexColor, TabPosition};

use crate::defaults;
use crate::fields;
use crate::form::RawSettings;
use crate::settings::TabSettings;

/// URL schemes a submitted `tab_url` may carry.
///
/// A URL with an explicit scheme outside this list is reduced to the
/// empty string rather than dropped, so presence in the form still
/// means presence in the output.
const ALLOWED_URL_SCHEMES: &[&str] = &["http", "https", "ftp", "ftps", "mailto", "tel"];

/// Sanitize a submitted settings form.
///
/// Pure and infallible: each field is validated independently and falls
/// back to its default on any failure. Feeding the output back through
/// (via [`TabSettings::to_map`]) is a fixed point.
///
/// # Example
///
/// ```
/// use sidetab_settings::{sanitize, RawSettings};
///
/// let settings = sanitize(&RawSettings::new());
/// assert_eq!(settings.pixels_from_top, 350);
/// assert_eq!(settings.text_color.as_str(), "#ffffff");
/// assert!(settings.text_for_tab.is_none());
/// ```
pub fn sanitize(input: &RawSettings) -> TabSettings {
    TabSettings {
        text_for_tab: input.get(fields::TEXT_FOR_TAB).map(sanitize_text_field),
        tab_url: input.get(fields::TAB_URL).map(sanitize_url),
        font_family: input
            .get(fields::FONT_FAMILY)
            .and_then(FontFamily::from_stack)
            .unwrap_or(defaults::FONT_FAMILY),
        font_weight_bold: flag(input, fields::FONT_WEIGHT_BOLD),
        text_shadow: flag(input, fields::TEXT_SHADOW),
        target_blank: flag(input, fields::TARGET_BLANK),
        position: input
            .get(fields::LEFT_RIGHT)
            .and_then(TabPosition::from_form_value)
            .unwrap_or(defaults::LEFT_RIGHT),
        pixels_from_top: input
            .get(fields::PIXELS_FROM_TOP)
            .and_then(coerce_pixels)
            .unwrap_or(defaults::PIXELS_FROM_TOP),
        text_color: color(input, fields::TEXT_COLOR, defaults::text_color),
        tab_color: color(input, fields::TAB_COLOR, defaults::tab_color),
        hover_color: color(input, fields::HOVER_COLOR, defaults::hover_color),
    }
}

/// A flag is set only by the literal string `"1"`.
fn flag(input: &RawSettings, key: &str) -> bool {
    input.get(key) == Some("1")
}

fn color(input: &RawSettings, key: &str, default: fn() -> HexColor) -> HexColor {
    input
        .get(key)
        .and_then(HexColor::parse)
        .unwrap_or_else(default)
}

/// Reduce a free-text value to plain text.
///
/// Strips `<...>` markup (an unterminated `<` drops the remainder),
/// removes control characters, and collapses whitespace runs to single
/// spaces with the ends trimmed.
///
/// # Example
///
/// ```
/// use sidetab_settings::sanitize_text_field;
///
/// assert_eq!(
///     sanitize_text_field("  Chat <b>now</b>\twith us  "),
///     "Chat now with us"
/// );
/// ```
pub fn sanitize_text_field(value: &str) -> String {
    let mut stripped = String::with_capacity(value.len());
    let mut in_tag = false;
    for c in value.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            // Whitespace-class controls (tab, newline) survive to the
            // collapse step below; other controls are dropped outright.
            c if !in_tag && (!c.is_control() || c.is_whitespace()) => stripped.push(c),
            _ => {}
        }
    }

    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Reduce a submitted URL to a safe form.
///
/// Removes whitespace, control characters, and the quote/angle
/// characters that can break out of an attribute. A URL with an
/// explicit scheme outside the whitelist becomes the empty string;
/// scheme-less and relative URLs pass through.
///
/// # Example
///
/// ```
/// use sidetab_settings::sanitize_url;
///
/// assert_eq!(sanitize_url(" https://example.com/x "), "https://example.com/x");
/// assert_eq!(sanitize_url("javascript:alert(1)"), "");
/// assert_eq!(sanitize_url("/contact"), "/contact");
/// ```
pub fn sanitize_url(value: &str) -> String {
    let cleaned: String = value
        .chars()
        .filter(|c| !c.is_control() && !c.is_whitespace() && !matches!(c, '<' | '>' | '"' | '\''))
        .collect();

    // A colon before any path/query/fragment delimiter marks an explicit scheme
    if let Some((scheme, _)) = cleaned.split_once(':') {
        let is_scheme = !scheme.contains(['/', '?', '#']);
        if is_scheme
            && !ALLOWED_URL_SCHEMES.contains(&scheme.to_ascii_lowercase().as_str())
        {
            return String::new();
        }
    }

    cleaned
}

/// Coerce a pixel offset the way the original form handler did.
///
/// Accepts any numeric literal (integer or float, with surrounding
/// whitespace), truncates the absolute value toward zero, and requires
/// the result to be strictly positive. `"-5"` coerces to `5`; `"0"`
/// and non-numerics yield `None`.
fn coerce_pixels(value: &str) -> Option<u32> {
    let parsed: f64 = value.trim().parse().ok()?;
    if !parsed.is_finite() {
        return None;
    }

    let px = parsed.abs().trunc();
    if px > 0.0 && px <= f64::from(u32::MAX) {
        Some(px as u32)
    } else {
        None
    }
}

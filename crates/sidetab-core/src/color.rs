//! Validated hex color values.
//!
//! The settings form submits colors as `#rgb` or `#rrggbb` strings. A
//! [`HexColor`] can only be constructed from a string matching that
//! shape; a validated value is stored verbatim (no case folding or
//! short-form expansion), matching what the host persists.

use std::sync::LazyLock;

use regex::Regex;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

static HEX_COLOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#(?:[0-9a-fA-F]{3}){1,2}$").unwrap());

/// A validated CSS hex color (`#rgb` or `#rrggbb`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexColor(String);

impl HexColor {
    /// Validate a submitted color value.
    ///
    /// Returns `None` unless the value is `#` followed by exactly 3 or
    /// 6 hex digits. A match is kept as submitted.
    ///
    /// # Example
    ///
    /// ```
    /// use sidetab_core::HexColor;
    ///
    /// assert!(HexColor::parse("#a0244e").is_some());
    /// assert!(HexColor::parse("#fff").is_some());
    /// assert!(HexColor::parse("a0244e").is_none());
    /// assert!(HexColor::parse("#a0244").is_none());
    /// ```
    pub fn parse(value: &str) -> Option<Self> {
        if HEX_COLOR_RE.is_match(value) {
            Some(Self(value.to_string()))
        } else {
            None
        }
    }

    /// The color string, including the leading `#`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode to RGB components, expanding the 3-digit short form.
    ///
    /// # Example
    ///
    /// ```
    /// use sidetab_core::HexColor;
    ///
    /// let c = HexColor::parse("#ff8000").unwrap();
    /// assert_eq!(c.rgb(), (255, 128, 0));
    ///
    /// let short = HexColor::parse("#f80").unwrap();
    /// assert_eq!(short.rgb(), (255, 136, 0));
    /// ```
    pub fn rgb(&self) -> (u8, u8, u8) {
        let hex = &self.0[1..];
        let expanded;
        let hex = if hex.len() == 3 {
            expanded = hex
                .chars()
                .flat_map(|c| [c, c])
                .collect::<String>();
            expanded.as_str()
        } else {
            hex
        };

        // Construction guarantees 6 hex digits here
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        (r, g, b)
    }
}

impl std::fmt::Display for HexColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        HexColor::parse(&s).ok_or_else(|| de::Error::custom(format!("invalid hex color: {s:?}")))
    }
}

//! Whitelisted settings fields for the side tab.
//!
//! These enums represent the closed sets of values a submitted form may
//! carry for the tab's font stack and screen position. Form values are
//! matched exactly; anything outside the whitelist falls back to the
//! field default during sanitization.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// The font stack applied to the tab label.
///
/// Each variant corresponds to one exact CSS font stack string. Form
/// matching is strict: the whole string, including quoting, must equal
/// one of the stacks returned by [`FontFamily::stack`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// `Arial, sans-serif`
    Arial,
    /// `Georgia, serif`
    Georgia,
    /// `"Helvetica Neue", Helvetica, sans-serif`
    HelveticaNeue,
    /// `"Lucida Sans Unicode", "Lucida Grande", sans-serif`
    LucidaSans,
    /// `Tahoma, sans-serif`
    Tahoma,
    /// `"Trebuchet MS", sans-serif`
    TrebuchetMs,
    /// `Verdana, sans-serif`
    Verdana,
}

impl FontFamily {
    /// All whitelisted font stacks, in settings-page order.
    pub const ALL: [FontFamily; 7] = [
        FontFamily::Arial,
        FontFamily::Georgia,
        FontFamily::HelveticaNeue,
        FontFamily::LucidaSans,
        FontFamily::Tahoma,
        FontFamily::TrebuchetMs,
        FontFamily::Verdana,
    ];

    /// The exact CSS font stack string for this family.
    pub fn stack(&self) -> &'static str {
        match self {
            FontFamily::Arial => "Arial, sans-serif",
            FontFamily::Georgia => "Georgia, serif",
            FontFamily::HelveticaNeue => "\"Helvetica Neue\", Helvetica, sans-serif",
            FontFamily::LucidaSans => "\"Lucida Sans Unicode\", \"Lucida Grande\", sans-serif",
            FontFamily::Tahoma => "Tahoma, sans-serif",
            FontFamily::TrebuchetMs => "\"Trebuchet MS\", sans-serif",
            FontFamily::Verdana => "Verdana, sans-serif",
        }
    }

    /// Match a submitted form value against the whitelist.
    ///
    /// The comparison is exact (case-sensitive, quoting and spacing
    /// included). Returns `None` for anything outside the whitelist.
    pub fn from_stack(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.stack() == value)
    }
}

impl Default for FontFamily {
    fn default() -> Self {
        FontFamily::Arial
    }
}

impl std::fmt::Display for FontFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.stack())
    }
}

impl Serialize for FontFamily {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.stack())
    }
}

impl<'de> Deserialize<'de> for FontFamily {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        FontFamily::from_stack(&s)
            .ok_or_else(|| de::Error::custom(format!("unknown font stack: {s:?}")))
    }
}

/// Which edge of the page the tab is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabPosition {
    /// Anchored to the left edge
    Left,
    /// Anchored to the right edge
    Right,
}

impl TabPosition {
    /// The form value for this position.
    pub fn as_str(&self) -> &'static str {
        match self {
            TabPosition::Left => "left",
            TabPosition::Right => "right",
        }
    }

    /// Match a submitted form value exactly (`"left"` or `"right"`).
    pub fn from_form_value(value: &str) -> Option<Self> {
        match value {
            "left" => Some(TabPosition::Left),
            "right" => Some(TabPosition::Right),
            _ => None,
        }
    }
}

impl Default for TabPosition {
    fn default() -> Self {
        TabPosition::Left
    }
}

impl std::fmt::Display for TabPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for TabPosition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TabPosition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        TabPosition::from_form_value(&s)
            .ok_or_else(|| de::Error::custom(format!("unknown tab position: {s:?}")))
    }
}

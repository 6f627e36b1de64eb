//! The sanitized settings record.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sidetab_core::{FontFamily, HexColor, Result, SideTabError, TabPosition};

use crate::defaults;
use crate::fields;
use crate::form::RawSettings;

/// Sanitized side tab settings, as persisted by the host.
///
/// Every instance is fully populated: the six defaulted fields always
/// hold a valid value, the flags are plain booleans, and only
/// `text_for_tab` / `tab_url` can be absent (they have no default).
/// Serialization mirrors the persisted record: flags and absent
/// optional fields are omitted rather than written as false/empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabSettings {
    /// Tab label. `None` when never submitted.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub text_for_tab: Option<String>,

    /// Link target. `None` when never submitted.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub tab_url: Option<String>,

    /// Whitelisted font stack for the label.
    #[serde(default)]
    pub font_family: FontFamily,

    /// Render the label bold.
    #[serde(skip_serializing_if = "is_false", default)]
    pub font_weight_bold: bool,

    /// Render the label with a text shadow.
    #[serde(skip_serializing_if = "is_false", default)]
    pub text_shadow: bool,

    /// Open the link in a new browser tab.
    #[serde(skip_serializing_if = "is_false", default)]
    pub target_blank: bool,

    /// Screen edge the tab is anchored to.
    #[serde(rename = "left_right", default)]
    pub position: TabPosition,

    /// Vertical offset in pixels, strictly positive.
    #[serde(default = "default_pixels")]
    pub pixels_from_top: u32,

    /// Label text color.
    #[serde(default = "defaults::text_color")]
    pub text_color: HexColor,

    /// Tab background color.
    #[serde(default = "defaults::tab_color")]
    pub tab_color: HexColor,

    /// Tab background color on hover.
    #[serde(default = "defaults::hover_color")]
    pub hover_color: HexColor,
}

fn is_false(value: &bool) -> bool {
    !*value
}

fn default_pixels() -> u32 {
    defaults::PIXELS_FROM_TOP
}

impl Default for TabSettings {
    fn default() -> Self {
        Self {
            text_for_tab: None,
            tab_url: None,
            font_family: defaults::FONT_FAMILY,
            font_weight_bold: false,
            text_shadow: false,
            target_blank: false,
            position: defaults::LEFT_RIGHT,
            pixels_from_top: defaults::PIXELS_FROM_TOP,
            text_color: defaults::text_color(),
            tab_color: defaults::tab_color(),
            hover_color: defaults::hover_color(),
        }
    }
}

impl TabSettings {
    /// Whether the tab can actually be rendered.
    ///
    /// Both optional fields must be present and non-empty: the tab
    /// needs a label and a link target. The admin screen surfaces a
    /// notice instead of failing when this is false.
    pub fn is_renderable(&self) -> bool {
        let has = |field: &Option<String>| matches!(field, Some(v) if !v.is_empty());
        has(&self.text_for_tab) && has(&self.tab_url)
    }

    /// The persisted key/value record.
    ///
    /// Always carries the six defaulted fields. The flags appear with
    /// value `"1"` only when set; absence means false. The optional
    /// fields appear only when present.
    pub fn to_map(&self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();

        if let Some(text) = &self.text_for_tab {
            map.insert(fields::TEXT_FOR_TAB.to_string(), text.clone());
        }
        if let Some(url) = &self.tab_url {
            map.insert(fields::TAB_URL.to_string(), url.clone());
        }

        map.insert(
            fields::FONT_FAMILY.to_string(),
            self.font_family.stack().to_string(),
        );

        if self.font_weight_bold {
            map.insert(fields::FONT_WEIGHT_BOLD.to_string(), "1".to_string());
        }
        if self.text_shadow {
            map.insert(fields::TEXT_SHADOW.to_string(), "1".to_string());
        }
        if self.target_blank {
            map.insert(fields::TARGET_BLANK.to_string(), "1".to_string());
        }

        map.insert(
            fields::LEFT_RIGHT.to_string(),
            self.position.as_str().to_string(),
        );
        map.insert(
            fields::PIXELS_FROM_TOP.to_string(),
            self.pixels_from_top.to_string(),
        );
        map.insert(
            fields::TEXT_COLOR.to_string(),
            self.text_color.as_str().to_string(),
        );
        map.insert(
            fields::TAB_COLOR.to_string(),
            self.tab_color.as_str().to_string(),
        );
        map.insert(
            fields::HOVER_COLOR.to_string(),
            self.hover_color.as_str().to_string(),
        );

        map
    }

    /// Serialize to the TOML form the CLI reads and writes.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| SideTabError::Settings(format!("Serialization error: {e}")))
    }

    /// Parse a previously stored TOML record.
    ///
    /// Unlike [`sanitize`](crate::sanitize), this is strict: the stored
    /// record is trusted, so a malformed value is an error rather than
    /// a silent fallback.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| SideTabError::Settings(format!("Parse error: {e}")))
    }
}

impl From<&TabSettings> for RawSettings {
    /// Re-submit sanitized settings as a form, e.g. to re-validate a
    /// stored record.
    fn from(settings: &TabSettings) -> Self {
        RawSettings::from(settings.to_map())
    }
}

//! Form field keys.
//!
//! The settings form and the persisted options record share these keys.
//! Any other key in a submitted form is ignored.

/// Tab label text. Optional; no default is substituted when absent.
pub const TEXT_FOR_TAB: &str = "text_for_tab";

/// Tab link target. Optional; no default is substituted when absent.
pub const TAB_URL: &str = "tab_url";

/// Whitelisted CSS font stack for the label.
pub const FONT_FAMILY: &str = "font_family";

/// Flag: render the label bold. Present with value `"1"` or absent.
pub const FONT_WEIGHT_BOLD: &str = "font_weight_bold";

/// Flag: render the label with a text shadow. Present with value `"1"` or absent.
pub const TEXT_SHADOW: &str = "text_shadow";

/// Flag: open the link in a new tab. Present with value `"1"` or absent.
pub const TARGET_BLANK: &str = "target_blank";

/// Screen edge the tab is anchored to (`left` or `right`).
pub const LEFT_RIGHT: &str = "left_right";

/// Vertical offset of the tab in pixels, strictly positive.
pub const PIXELS_FROM_TOP: &str = "pixels_from_top";

/// Label text color.
pub const TEXT_COLOR: &str = "text_color";

/// Tab background color.
pub const TAB_COLOR: &str = "tab_color";

/// Tab background color on hover.
pub const HOVER_COLOR: &str = "hover_color";

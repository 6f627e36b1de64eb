//! Per-field defaults applied when a submitted value is absent or invalid.
//!
//! `text_for_tab` and `tab_url` deliberately have no entry here: those
//! two fields are omitted from the output entirely when not submitted.

use sidetab_core::{FontFamily, HexColor, TabPosition};

/// Default font stack.
pub const FONT_FAMILY: FontFamily = FontFamily::Arial;

/// Default tab position.
pub const LEFT_RIGHT: TabPosition = TabPosition::Left;

/// Default vertical offset in pixels.
pub const PIXELS_FROM_TOP: u32 = 350;

/// Default label text color.
pub fn text_color() -> HexColor {
    HexColor::parse("#ffffff").expect("default text color is valid hex")
}

/// Default tab background color.
pub fn tab_color() -> HexColor {
    HexColor::parse("#a0244e").expect("default tab color is valid hex")
}

/// Default hover color.
pub fn hover_color() -> HexColor {
    HexColor::parse("#a4a4a4").expect("default hover color is valid hex")
}

//! Basic example: sanitize a submitted settings form.
//!
//! Run with: `cargo run --example basic`

use sidetab_settings::{sanitize, RawSettings};

fn main() {
    // What a browser might actually submit: some fields valid, some
    // hostile, some plain wrong.
    let mut form = RawSettings::new();
    form.set("text_for_tab", "Chat <b>with</b> us!")
        .set("tab_url", "https://example.com/chat")
        .set("font_family", "Comic Sans") // not whitelisted
        .set("font_weight_bold", "1")
        .set("text_shadow", "0") // only "1" sets a flag
        .set("left_right", "right")
        .set("pixels_from_top", "-120") // abs() applies
        .set("text_color", "#fff")
        .set("tab_color", "not a color")
        .set("hover_color", "#a4a4a4")
        .set("injected_field", "ignored");

    let settings = sanitize(&form);

    println!("Persisted record:");
    for (key, value) in settings.to_map() {
        println!("  {key} = {value:?}");
    }

    println!();
    println!("renderable: {}", settings.is_renderable());
}

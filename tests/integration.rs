//! Integration tests for sidetab.
//!
//! These tests exercise the full path a host would take: raw form in,
//! sanitized record out, persisted map shape, and the admin glue wired
//! up against an in-memory host.

use std::collections::BTreeMap;

use sidetab_admin::{
    ActionLink, Admin, AssetPipeline, SanitizeCallback, ScreenApi, SettingsStore,
    OPTION_GROUP, OPTION_KEY, SETTINGS_SCREEN_ID,
};
use sidetab_core::{FontFamily, TabPosition};
use sidetab_settings::{fields, sanitize, RawSettings, TabSettings};

/// Build a raw form from literal pairs.
fn form(pairs: &[(&str, &str)]) -> RawSettings {
    pairs.iter().copied().collect()
}

/// The six fields that always carry a value in the persisted record.
const DEFAULTED_FIELDS: [&str; 6] = [
    fields::FONT_FAMILY,
    fields::LEFT_RIGHT,
    fields::PIXELS_FROM_TOP,
    fields::TEXT_COLOR,
    fields::TAB_COLOR,
    fields::HOVER_COLOR,
];

#[test]
fn empty_form_produces_the_documented_defaults() {
    let map = sanitize(&RawSettings::new()).to_map();

    let expected: BTreeMap<String, String> = [
        (fields::FONT_FAMILY, "Arial, sans-serif"),
        (fields::LEFT_RIGHT, "left"),
        (fields::PIXELS_FROM_TOP, "350"),
        (fields::TEXT_COLOR, "#ffffff"),
        (fields::TAB_COLOR, "#a0244e"),
        (fields::HOVER_COLOR, "#a4a4a4"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    assert_eq!(map, expected);
}

#[test]
fn hostile_form_is_fully_neutralized() {
    let settings = sanitize(&form(&[
        ("text_for_tab", "<script>alert(1)</script>Chat"),
        ("tab_url", "javascript:alert(1)"),
        ("font_family", "'; DROP TABLE options; --"),
        ("font_weight_bold", "yes"),
        ("left_right", "LEFT"),
        ("pixels_from_top", "9e999"),
        ("text_color", "#zzzzzz"),
        ("tab_color", "red"),
        ("hover_color", "#12345"),
        ("totally_unknown", "whatever"),
    ]));

    assert_eq!(settings.text_for_tab.as_deref(), Some("alert(1)Chat"));
    assert_eq!(settings.tab_url.as_deref(), Some(""));
    assert_eq!(settings.font_family, FontFamily::Arial);
    assert!(!settings.font_weight_bold);
    assert_eq!(settings.position, TabPosition::Left);
    assert_eq!(settings.pixels_from_top, 350);
    assert_eq!(settings.text_color.as_str(), "#ffffff");
    assert_eq!(settings.tab_color.as_str(), "#a0244e");
    assert_eq!(settings.hover_color.as_str(), "#a4a4a4");

    // Unknown keys never leak into the persisted record
    assert!(!settings.to_map().contains_key("totally_unknown"));
}

#[test]
fn valid_form_survives_intact() {
    let settings = sanitize(&form(&[
        ("text_for_tab", "Chat with us"),
        ("tab_url", "https://example.com/chat"),
        ("font_family", "\"Trebuchet MS\", sans-serif"),
        ("font_weight_bold", "1"),
        ("text_shadow", "1"),
        ("target_blank", "1"),
        ("left_right", "right"),
        ("pixels_from_top", "125"),
        ("text_color", "#fafafa"),
        ("tab_color", "#336699"),
        ("hover_color", "#224466"),
    ]));

    let map = settings.to_map();
    assert_eq!(map.len(), 11);
    assert_eq!(map[fields::TEXT_FOR_TAB], "Chat with us");
    assert_eq!(map[fields::TAB_URL], "https://example.com/chat");
    assert_eq!(map[fields::FONT_FAMILY], "\"Trebuchet MS\", sans-serif");
    assert_eq!(map[fields::FONT_WEIGHT_BOLD], "1");
    assert_eq!(map[fields::TEXT_SHADOW], "1");
    assert_eq!(map[fields::TARGET_BLANK], "1");
    assert_eq!(map[fields::LEFT_RIGHT], "right");
    assert_eq!(map[fields::PIXELS_FROM_TOP], "125");
    assert!(settings.is_renderable());
}

#[test]
fn persisted_record_is_a_sanitizer_fixed_point() {
    let stored = sanitize(&form(&[
        ("text_for_tab", "Feedback <b>now</b>"),
        ("tab_url", " /feedback "),
        ("font_family", "Georgia, serif"),
        ("text_shadow", "1"),
        ("pixels_from_top", "-80"),
        ("hover_color", "#ABC"),
    ]));

    let revalidated = sanitize(&RawSettings::from(&stored));
    assert_eq!(stored, revalidated);
    assert_eq!(stored.to_map(), revalidated.to_map());
}

#[test]
fn defaulted_fields_are_always_present() {
    let cases: [&[(&str, &str)]; 4] = [
        &[],
        &[("pixels_from_top", "0")],
        &[("text_for_tab", "x"), ("tab_url", "y")],
        &[("font_family", ""), ("text_color", ""), ("left_right", "")],
    ];

    for case in cases {
        let map = sanitize(&form(case)).to_map();
        for field in DEFAULTED_FIELDS {
            assert!(map.contains_key(field), "{field} missing for {case:?}");
        }
    }
}

// ---------------------------------------------------------------------------
// Admin glue against an in-memory host
// ---------------------------------------------------------------------------

/// Minimal in-memory host: one option slot, a fixed screen, and a log
/// of enqueued assets.
#[derive(Default)]
struct InMemoryHost {
    options: BTreeMap<String, BTreeMap<String, String>>,
    callback: Option<(String, SanitizeCallback)>,
    screen_id: String,
    enqueued_styles: Vec<String>,
    enqueued_scripts: Vec<String>,
}

impl InMemoryHost {
    fn on_screen(screen_id: &str) -> Self {
        Self {
            screen_id: screen_id.to_string(),
            ..Default::default()
        }
    }

    /// Simulate a form submission through the registered callback.
    fn submit(&mut self, raw: &RawSettings) -> TabSettings {
        let (key, callback) = self.callback.as_ref().expect("no callback registered");
        let sanitized = callback(raw);
        self.options.insert(key.clone(), sanitized.to_map());
        sanitized
    }
}

impl SettingsStore for InMemoryHost {
    fn register(&mut self, _group: &str, key: &str, sanitize: SanitizeCallback) {
        self.callback = Some((key.to_string(), sanitize));
    }
}

impl ScreenApi for InMemoryHost {
    fn current_screen_id(&self) -> String {
        self.screen_id.clone()
    }
}

impl AssetPipeline for InMemoryHost {
    fn enqueue_style(&mut self, handle: &str, _src: Option<&str>, _deps: &[&str], _v: Option<&str>) {
        self.enqueued_styles.push(handle.to_string());
    }

    fn enqueue_script(&mut self, handle: &str, _src: Option<&str>, _deps: &[&str], _v: Option<&str>) {
        self.enqueued_scripts.push(handle.to_string());
    }
}

#[test]
fn submission_through_the_host_persists_the_sanitized_map() {
    let admin = Admin::new("sidetab", "0.1.0", "/plugins/sidetab", TabSettings::default());
    let mut host = InMemoryHost::default();
    admin.register_settings(&mut host);
    assert!(host.callback.is_some());

    let sanitized = host.submit(&form(&[
        ("text_for_tab", "Contact"),
        ("tab_url", "/contact"),
        ("tab_color", "bogus"),
    ]));

    let stored = &host.options[OPTION_KEY];
    assert_eq!(stored[fields::TAB_COLOR], "#a0244e");
    assert_eq!(stored[fields::TEXT_FOR_TAB], "Contact");
    assert!(sanitized.is_renderable());

    assert_eq!(OPTION_GROUP, "sidetab_option_group");
}

#[test]
fn assets_load_only_on_the_settings_screen() {
    let admin = Admin::new("sidetab", "0.1.0", "/plugins/sidetab", TabSettings::default());
    let mut host = InMemoryHost::default();

    let off_screen = InMemoryHost::on_screen("dashboard");
    admin.enqueue_styles(&off_screen, &mut host);
    admin.enqueue_scripts(&off_screen, &mut host);
    assert!(host.enqueued_styles.is_empty());
    assert!(host.enqueued_scripts.is_empty());

    let settings_screen = InMemoryHost::on_screen(SETTINGS_SCREEN_ID);
    admin.enqueue_styles(&settings_screen, &mut host);
    admin.enqueue_scripts(&settings_screen, &mut host);
    assert_eq!(host.enqueued_styles, vec!["color-picker", "sidetab"]);
    assert_eq!(host.enqueued_scripts, vec!["sidetab"]);
}

#[test]
fn unrenderable_settings_surface_as_a_notice_not_an_error() {
    let stored = sanitize(&form(&[("left_right", "right")]));
    assert!(!stored.is_renderable());

    let admin = Admin::new("sidetab", "0.1.0", "/plugins/sidetab", stored);
    let screen = InMemoryHost::on_screen(SETTINGS_SCREEN_ID);

    let notice = admin.required_fields_notice(&screen).unwrap();
    assert!(notice.message.contains("required fields"));

    let off_screen = InMemoryHost::on_screen("dashboard");
    assert!(admin.required_fields_notice(&off_screen).is_none());
}

#[test]
fn action_links_keep_host_links_after_ours() {
    let admin = Admin::new("sidetab", "0.1.0", "/plugins/sidetab", TabSettings::default());
    let host_links = vec![
        ActionLink::new("edit", "Edit", "#edit"),
        ActionLink::new("deactivate", "Deactivate", "#deactivate"),
    ];

    let links = admin.action_links(host_links);
    let ids: Vec<&str> = links.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["settings", "support", "edit", "deactivate"]);
}

//! Host integration example: wire the admin component to a toy host.
//!
//! Run with: `cargo run --example host_integration`

use sidetab_admin::{
    Admin, AssetPipeline, SanitizeCallback, ScreenApi, SettingsStore, SETTINGS_SCREEN_ID,
};
use sidetab_settings::{sanitize, RawSettings, TabSettings};

/// A toy host: remembers the registered callback and prints every
/// asset enqueue it receives.
#[derive(Default)]
struct ToyHost {
    callback: Option<SanitizeCallback>,
    screen_id: String,
}

impl SettingsStore for ToyHost {
    fn register(&mut self, group: &str, key: &str, sanitize: SanitizeCallback) {
        println!("host: registered sanitize callback for {group}/{key}");
        self.callback = Some(sanitize);
    }
}

impl ScreenApi for ToyHost {
    fn current_screen_id(&self) -> String {
        self.screen_id.clone()
    }
}

impl AssetPipeline for ToyHost {
    fn enqueue_style(&mut self, handle: &str, src: Option<&str>, deps: &[&str], v: Option<&str>) {
        println!("host: enqueue_style {handle} src={src:?} deps={deps:?} version={v:?}");
    }

    fn enqueue_script(&mut self, handle: &str, src: Option<&str>, deps: &[&str], v: Option<&str>) {
        println!("host: enqueue_script {handle} src={src:?} deps={deps:?} version={v:?}");
    }
}

fn main() {
    // An unrenderable settings snapshot: nothing submitted yet.
    let stored = sanitize(&RawSettings::new());
    let admin = Admin::new("sidetab", "0.1.0", "/plugins/sidetab", stored);

    let mut host = ToyHost {
        screen_id: SETTINGS_SCREEN_ID.to_string(),
        ..Default::default()
    };

    admin.register_settings(&mut host);

    // On the settings screen, assets load and the notice shows.
    let screen = ToyHost {
        screen_id: SETTINGS_SCREEN_ID.to_string(),
        ..Default::default()
    };
    admin.enqueue_styles(&screen, &mut host);
    admin.enqueue_scripts(&screen, &mut host);

    if let Some(notice) = admin.required_fields_notice(&screen) {
        println!("notice ({:?}): {}", notice.level, notice.message);
    }

    // Simulate a submission through the registered callback.
    let callback = host.callback.expect("callback registered above");
    let mut form = RawSettings::new();
    form.set("text_for_tab", "Contact")
        .set("tab_url", "/contact");
    let submitted: TabSettings = callback(&form);
    println!("after submission, renderable: {}", submitted.is_renderable());
}

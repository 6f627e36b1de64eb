//! The admin-screen component.

use sidetab_settings::{sanitize, TabSettings};

use crate::{ActionLink, AssetPipeline, MenuEntry, Notice, ScreenApi, SettingsStore};

/// Option group the sanitize callback is registered under.
pub const OPTION_GROUP: &str = "sidetab_option_group";

/// Option key the host persists the sanitized record under.
pub const OPTION_KEY: &str = "sidetab_plugin_options";

/// Page slug of the plugin's settings page.
pub const SETTINGS_PAGE_SLUG: &str = "sidetab_options_page";

/// Screen id the host reports while the settings page is shown.
pub const SETTINGS_SCREEN_ID: &str = "settings_page_sidetab";

/// Handle of the host-provided color picker assets.
const COLOR_PICKER_HANDLE: &str = "color-picker";

/// Support link shown in the installed-plugins row.
const SUPPORT_URL: &str = "https://github.com/sidetab/sidetab-rs/issues";

const REQUIRED_FIELDS_MESSAGE: &str = "Your tab will not display without the required fields.";

/// Admin-area integration for the side tab plugin.
///
/// Holds the plugin identity and a snapshot of the sanitized settings,
/// and drives the host through the seams in the crate root: settings
/// registration, settings-page asset loading, menu and plugin-row
/// entries, and the required-fields notice.
pub struct Admin {
    plugin_name: String,
    version: String,
    asset_base: String,
    settings: TabSettings,
}

impl Admin {
    /// Create the admin component.
    ///
    /// `asset_base` is the public base URI of the plugin's own files,
    /// without a trailing slash.
    pub fn new(
        plugin_name: impl Into<String>,
        version: impl Into<String>,
        asset_base: impl Into<String>,
        settings: TabSettings,
    ) -> Self {
        Self {
            plugin_name: plugin_name.into(),
            version: version.into(),
            asset_base: asset_base.into(),
            settings,
        }
    }

    /// The plugin identifier used for asset handles.
    pub fn plugin_name(&self) -> &str {
        &self.plugin_name
    }

    /// The sanitized settings snapshot this component was built with.
    pub fn settings(&self) -> &TabSettings {
        &self.settings
    }

    /// Register the sanitize callback with the host settings store.
    pub fn register_settings(&self, store: &mut dyn SettingsStore) {
        store.register(OPTION_GROUP, OPTION_KEY, sanitize);
    }

    /// Whether the host is currently rendering our settings page.
    pub fn is_settings_page(&self, screen: &dyn ScreenApi) -> bool {
        screen.current_screen_id() == SETTINGS_SCREEN_ID
    }

    /// Enqueue the settings-page stylesheets.
    ///
    /// Does nothing on any other screen. Pulls in the host color
    /// picker plus the plugin's own admin stylesheet.
    pub fn enqueue_styles(&self, screen: &dyn ScreenApi, assets: &mut dyn AssetPipeline) {
        if !self.is_settings_page(screen) {
            return;
        }

        assets.enqueue_style(COLOR_PICKER_HANDLE, None, &[], None);
        assets.enqueue_style(
            &self.plugin_name,
            Some(&format!("{}/admin/css/sidetab-admin.css", self.asset_base)),
            &[],
            Some(&self.version),
        );
    }

    /// Enqueue the settings-page script, depending on the color picker.
    ///
    /// Does nothing on any other screen.
    pub fn enqueue_scripts(&self, screen: &dyn ScreenApi, assets: &mut dyn AssetPipeline) {
        if !self.is_settings_page(screen) {
            return;
        }

        assets.enqueue_script(
            &self.plugin_name,
            Some(&format!("{}/admin/js/sidetab-admin.js", self.asset_base)),
            &[COLOR_PICKER_HANDLE],
            Some(&self.version),
        );
    }

    /// The options-page entry under the host settings menu.
    pub fn menu_entry(&self) -> MenuEntry {
        MenuEntry {
            page_title: "Side Tab Option Settings".to_string(),
            menu_title: "Side Tab".to_string(),
            capability: "manage_options".to_string(),
            slug: SETTINGS_PAGE_SLUG.to_string(),
        }
    }

    /// Build the installed-plugins row links.
    ///
    /// Prepends the Settings and Support links to whatever the host
    /// already renders, preserving the host links' order.
    pub fn action_links(&self, existing: Vec<ActionLink>) -> Vec<ActionLink> {
        let mut links = vec![
            ActionLink::new(
                "settings",
                "Settings",
                format!("options-general.php?page={SETTINGS_PAGE_SLUG}"),
            ),
            ActionLink::new("support", "Support", SUPPORT_URL).opens_new_tab(),
        ];
        links.extend(existing);
        links
    }

    /// The required-fields notice, when it applies.
    ///
    /// Shown only on our settings page, and only while the stored
    /// settings cannot render the tab. Never an error path: downstream
    /// code treats an unrenderable record as a notice, not a failure.
    pub fn required_fields_notice(&self, screen: &dyn ScreenApi) -> Option<Notice> {
        if !self.is_settings_page(screen) {
            return None;
        }

        if self.settings.is_renderable() {
            None
        } else {
            Some(Notice::error(REQUIRED_FIELDS_MESSAGE))
        }
    }
}

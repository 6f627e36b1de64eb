//! Sidetab Admin Integration
//!
//! This crate wires the settings sanitizer into a host CMS's admin
//! screens. The host itself (settings store, screen detection, asset
//! pipeline) is reached only through the trait seams defined here, so
//! the glue stays testable without a running host.
//!
//! # Host seams
//!
//! - [`SettingsStore`] - persists whatever the registered sanitize
//!   callback returns
//! - [`ScreenApi`] - identifies the admin screen currently shown
//! - [`AssetPipeline`] - enqueues stylesheets and scripts
//!
//! # Example
//!
//! ```
//! use sidetab_admin::{Admin, SanitizeCallback, SettingsStore};
//! use sidetab_settings::TabSettings;
//!
//! struct Store(Vec<(String, String)>);
//!
//! impl SettingsStore for Store {
//!     fn register(&mut self, group: &str, key: &str, _sanitize: SanitizeCallback) {
//!         self.0.push((group.to_string(), key.to_string()));
//!     }
//! }
//!
//! let admin = Admin::new("sidetab", "0.1.0", "/plugins/sidetab", TabSettings::default());
//! let mut store = Store(Vec::new());
//! admin.register_settings(&mut store);
//! assert_eq!(store.0.len(), 1);
//! ```

mod admin;

pub use admin::{Admin, OPTION_GROUP, OPTION_KEY, SETTINGS_PAGE_SLUG, SETTINGS_SCREEN_ID};

use sidetab_settings::{RawSettings, TabSettings};

/// The sanitize callback handed to the host settings store.
///
/// A plain function pointer: the sanitizer is pure and needs no
/// captured state, so no dynamic dispatch is involved.
pub type SanitizeCallback = fn(&RawSettings) -> TabSettings;

/// Host settings registry.
///
/// The host persists whatever the registered callback returns under
/// `key`; this crate's only obligation is to hand over a conformant
/// callback.
pub trait SettingsStore {
    /// Register `sanitize` for the option `key` in `group`.
    fn register(&mut self, group: &str, key: &str, sanitize: SanitizeCallback);
}

/// Host screen/context lookup.
pub trait ScreenApi {
    /// Identifier of the admin screen currently being rendered.
    fn current_screen_id(&self) -> String;
}

/// Host asset pipeline.
///
/// `src` is `None` for assets the host has already registered under
/// `handle` (the host resolves them itself), `Some` for plugin-owned
/// files.
pub trait AssetPipeline {
    /// Enqueue a stylesheet.
    fn enqueue_style(&mut self, handle: &str, src: Option<&str>, deps: &[&str], version: Option<&str>);

    /// Enqueue a script.
    fn enqueue_script(&mut self, handle: &str, src: Option<&str>, deps: &[&str], version: Option<&str>);
}

/// A link rendered in the host's installed-plugins row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionLink {
    /// Stable slot identifier (`settings`, `support`, ...).
    pub id: String,
    /// Visible label.
    pub label: String,
    /// Link target.
    pub href: String,
    /// Whether the link opens in a new tab.
    pub new_tab: bool,
}

impl ActionLink {
    /// Create a same-tab link.
    pub fn new(id: impl Into<String>, label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            href: href.into(),
            new_tab: false,
        }
    }

    /// Mark the link to open in a new tab.
    pub fn opens_new_tab(mut self) -> Self {
        self.new_tab = true;
        self
    }
}

/// Severity of an admin notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Red error banner
    Error,
    /// Yellow warning banner
    Warning,
}

/// An admin-facing notice banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Banner severity.
    pub level: NoticeLevel,
    /// Message text (opaque; the host handles any translation).
    pub message: String,
}

impl Notice {
    /// Create an error-level notice.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// An options-page entry under the host's settings menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    /// Browser/page title.
    pub page_title: String,
    /// Label shown in the settings menu.
    pub menu_title: String,
    /// Capability required to see the page.
    pub capability: String,
    /// Page slug the host routes to.
    pub slug: String,
}

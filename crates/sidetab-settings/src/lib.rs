//! Sidetab Settings
//!
//! This crate holds the settings sanitizer and the persisted settings
//! record for the side tab plugin.
//!
//! # Overview
//!
//! The host hands the raw submitted form ([`RawSettings`]) to
//! [`sanitize`], which returns the fully populated [`TabSettings`]
//! record to persist. Sanitization never fails: invalid or missing
//! values are silently replaced by their defaults (see [`defaults`]),
//! except the two optional fields, which stay absent when not
//! submitted.
//!
//! # Example
//!
//! ```
//! use sidetab_settings::{sanitize, RawSettings};
//!
//! let mut form = RawSettings::new();
//! form.set("text_for_tab", "Chat with us")
//!     .set("tab_url", "https://example.com/chat")
//!     .set("left_right", "right")
//!     .set("pixels_from_top", "200")
//!     .set("tab_color", "#336699");
//!
//! let settings = sanitize(&form);
//! assert!(settings.is_renderable());
//! assert_eq!(settings.pixels_from_top, 200);
//! ```

pub mod defaults;
pub mod fields;
mod form;
mod sanitize;
mod settings;

pub use form::RawSettings;
pub use sanitize::{sanitize, sanitize_text_field, sanitize_url};
pub use settings::TabSettings;

//! Sidetab Core
//!
//! This crate provides core types, validation primitives, and error
//! definitions for the sidetab settings layer.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`FontFamily`], [`TabPosition`] - Whitelisted settings fields
//! - [`HexColor`] - Validated `#rgb` / `#rrggbb` color values
//! - [`SideTabError`] - Error types

pub mod color;
pub mod enums;
pub mod error;

pub use color::HexColor;
pub use enums::{FontFamily, TabPosition};
pub use error::{Result, SideTabError};

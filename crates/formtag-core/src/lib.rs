//! # formtag-core
//!
//! Core types, settings, translation catalog, and error types for formtag.
//! This crate has no formtag dependencies and provides the foundation for
//! the other crates in the workspace.
//!
//! ## Modules
//!
//! - [`error`] - Error types and result aliases
//! - [`settings`] - Render settings and global configuration
//! - [`settings_loader`] - Loading settings from TOML, JSON, and the environment
//! - [`i18n`] - Active language and translation catalog
//! - [`logging`] - Tracing-based logging integration
//! - [`utils`] - HTML escaping and text helpers

pub mod error;
pub mod i18n;
pub mod logging;
pub mod settings;
pub mod settings_loader;
pub mod utils;

// Re-export the most commonly used types at the crate root.
pub use error::{FormTagError, FormTagResult, ValidationError};
pub use settings::{RenderSettings, Settings, SETTINGS};

//! Settings for formtag.
//!
//! [`Settings`] holds the logging and language configuration plus the
//! [`RenderSettings`] that control the fixed strings emitted by the field
//! renderer. [`LazySettings`] is a globally-accessible, set-once container.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Strings the renderer emits that are not derived from the model.
///
/// # Examples
///
/// ```
/// use formtag_core::settings::RenderSettings;
///
/// let render = RenderSettings::default();
/// assert_eq!(render.url_placeholder, "http://domain.com");
/// assert_eq!(render.empty_value_display, "/");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderSettings {
    /// Placeholder for `type="url"` inputs.
    pub url_placeholder: String,
    /// Placeholder for `type="email"` inputs.
    pub email_placeholder: String,
    /// Placeholder for `type="password"` inputs.
    pub password_placeholder: String,
    /// Text shown in view mode when a field has no value.
    pub empty_value_display: String,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            url_placeholder: "http://domain.com".to_string(),
            email_placeholder: "email@domain.com".to_string(),
            password_placeholder: "password".to_string(),
            empty_value_display: "/".to_string(),
        }
    }
}

/// The complete set of formtag settings.
///
/// # Examples
///
/// ```
/// use formtag_core::settings::Settings;
///
/// let settings = Settings::default();
/// assert!(settings.debug);
/// assert_eq!(settings.language_code, "en");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Whether debug mode is enabled (pretty logs instead of JSON).
    pub debug: bool,
    /// The log filter (e.g. "info", "formtag_forms=trace").
    pub log_level: String,
    /// The language used for label lookups.
    pub language_code: String,
    /// Renderer strings.
    pub render: RenderSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: true,
            log_level: "info".to_string(),
            language_code: "en".to_string(),
            render: RenderSettings::default(),
        }
    }
}

/// A lazily-initialized, globally-accessible settings container.
///
/// Call [`configure`](LazySettings::configure) once at startup. Until then
/// [`get_or_default`](LazySettings::get_or_default) hands out the defaults.
pub struct LazySettings {
    inner: OnceLock<Settings>,
}

impl Default for LazySettings {
    fn default() -> Self {
        Self::new()
    }
}

impl LazySettings {
    /// Creates a new, unconfigured `LazySettings`.
    pub const fn new() -> Self {
        Self {
            inner: OnceLock::new(),
        }
    }

    /// Configures the global settings.
    ///
    /// Returns the rejected settings if they were already configured.
    pub fn configure(&self, settings: Settings) -> Result<(), Settings> {
        self.inner.set(settings)
    }

    /// Returns the configured settings, or the defaults when unconfigured.
    pub fn get_or_default(&self) -> &Settings {
        static DEFAULTS: OnceLock<Settings> = OnceLock::new();
        self.inner
            .get()
            .unwrap_or_else(|| DEFAULTS.get_or_init(Settings::default))
    }
}

/// The global settings instance.
pub static SETTINGS: LazySettings = LazySettings::new();

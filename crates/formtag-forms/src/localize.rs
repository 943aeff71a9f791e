//! Label localization.
//!
//! Labels and default placeholders come from a [`Localizer`] keyed by the
//! qualified field name (`user.email`).

use std::collections::HashMap;

use formtag_core::i18n;

/// Resolves the display label for a qualified field name.
pub trait Localizer {
    /// Returns the label for `key`. Implementations return the key itself
    /// when they have no translation.
    fn label(&self, key: &str) -> String;
}

/// A [`Localizer`] backed by the global translation catalog.
///
/// With no fixed language it follows the thread's active language
/// ([`i18n::activate`]).
#[derive(Debug, Clone, Default)]
pub struct CatalogLocalizer {
    language: Option<String>,
}

impl CatalogLocalizer {
    /// Follows the thread's active language.
    pub const fn active() -> Self {
        Self { language: None }
    }

    /// Always looks labels up in `language`.
    pub fn for_language(language: impl Into<String>) -> Self {
        Self {
            language: Some(language.into()),
        }
    }
}

impl Localizer for CatalogLocalizer {
    fn label(&self, key: &str) -> String {
        match &self.language {
            Some(lang) => i18n::gettext_in(lang, key),
            None => i18n::gettext(key),
        }
    }
}

impl Localizer for HashMap<String, String> {
    fn label(&self, key: &str) -> String {
        self.get(key).cloned().unwrap_or_else(|| key.to_string())
    }
}

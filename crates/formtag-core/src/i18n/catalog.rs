//! Translation catalog for field labels.
//!
//! The catalog stores translations in a global, thread-safe registry keyed
//! by language code. Translations can be loaded from JSON or registered
//! programmatically.
//!
//! ## JSON Format
//!
//! ```json
//! {
//!   "messages": {
//!     "user.email": "Email address",
//!     "user.name": "Full name"
//!   }
//! }
//! ```
//!
//! A flat object (`{"user.email": "Email address"}`) is accepted as well.

use std::collections::HashMap;
use std::sync::{OnceLock, PoisonError, RwLock};

use crate::error::FormTagError;

/// A translation catalog for a single language.
#[derive(Debug, Clone, Default)]
pub struct TranslationCatalog {
    messages: HashMap<String, String>,
}

/// The global translation catalog registry, keyed by language code.
fn global_catalogs() -> &'static RwLock<HashMap<String, TranslationCatalog>> {
    static CATALOGS: OnceLock<RwLock<HashMap<String, TranslationCatalog>>> = OnceLock::new();
    CATALOGS.get_or_init(|| RwLock::new(HashMap::new()))
}

fn with_catalog<F, R>(language: &str, f: F) -> Option<R>
where
    F: FnOnce(&TranslationCatalog) -> Option<R>,
{
    let catalogs = global_catalogs()
        .read()
        .unwrap_or_else(PoisonError::into_inner);
    catalogs.get(language).and_then(f)
}

#[allow(clippy::significant_drop_tightening)]
fn with_catalog_mut<F>(language: &str, f: F)
where
    F: FnOnce(&mut TranslationCatalog),
{
    let mut catalogs = global_catalogs()
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    let catalog = catalogs.entry(language.to_string()).or_default();
    f(catalog);
}

// ── Registration API ─────────────────────────────────────────────────────

/// Registers message translations for a language.
///
/// New entries are merged into any existing catalog, overwriting duplicates.
///
/// # Examples
///
/// ```
/// use formtag_core::i18n::catalog;
///
/// catalog::register_translations("fr", vec![("user.name", "Nom")]);
/// assert_eq!(catalog::translate("fr", "user.name").as_deref(), Some("Nom"));
/// ```
pub fn register_translations(language: &str, entries: Vec<(&str, &str)>) {
    with_catalog_mut(language, |catalog| {
        for (msgid, translated) in entries {
            catalog
                .messages
                .insert(msgid.to_string(), translated.to_string());
        }
    });
}

/// Loads translations from a JSON string.
///
/// Accepts either `{"messages": {...}}` or a flat object of strings.
/// Non-string values are skipped.
pub fn load_from_json(language: &str, json_str: &str) -> Result<usize, FormTagError> {
    let value: serde_json::Value = serde_json::from_str(json_str)
        .map_err(|e| FormTagError::Serialization(format!("Invalid message catalog JSON: {e}")))?;

    let object = value
        .get("messages")
        .unwrap_or(&value)
        .as_object()
        .ok_or_else(|| {
            FormTagError::Serialization("Message catalog must be a JSON object".to_string())
        })?;

    let mut loaded = 0;
    with_catalog_mut(language, |catalog| {
        for (msgid, translated) in object {
            if let Some(t) = translated.as_str() {
                catalog.messages.insert(msgid.clone(), t.to_string());
                loaded += 1;
            }
        }
    });

    tracing::debug!(language, loaded, "loaded message catalog");
    Ok(loaded)
}

// ── Lookup API ───────────────────────────────────────────────────────────

/// Looks up a translation in the catalog.
pub fn translate(language: &str, msgid: &str) -> Option<String> {
    with_catalog(language, |catalog| catalog.messages.get(msgid).cloned())
}

/// Clears all translations for a given language.
pub fn clear_language(language: &str) {
    global_catalogs()
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .remove(language);
}

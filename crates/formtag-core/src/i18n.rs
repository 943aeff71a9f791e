//! Localization of field labels.
//!
//! Labels are looked up by qualified field name (`user.email`) in a
//! per-language [`catalog`]. The active language is thread-local, so one
//! render call on one thread sees one language.
//!
//! ## Quick Start
//!
//! ```
//! use formtag_core::i18n;
//!
//! i18n::catalog::register_translations("es", vec![("user.email", "Correo")]);
//!
//! i18n::activate("es");
//! assert_eq!(i18n::gettext("user.email"), "Correo");
//!
//! i18n::deactivate();
//! assert_eq!(i18n::gettext("user.email"), "user.email");
//! ```

pub mod catalog;

use std::cell::RefCell;

thread_local! {
    static CURRENT_LANGUAGE: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// The language used when none has been activated on this thread.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Activates the given language code for the current thread.
pub fn activate(language_code: &str) {
    CURRENT_LANGUAGE.with(|cell| {
        *cell.borrow_mut() = Some(language_code.to_string());
    });
}

/// Deactivates the current thread's language, reverting to [`DEFAULT_LANGUAGE`].
pub fn deactivate() {
    CURRENT_LANGUAGE.with(|cell| {
        *cell.borrow_mut() = None;
    });
}

/// Returns the language code active on the current thread.
pub fn get_language() -> String {
    CURRENT_LANGUAGE.with(|cell| {
        cell.borrow()
            .clone()
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string())
    })
}

/// Translates a key using the current thread's active language.
///
/// If no translation is found the key itself is returned, so an
/// untranslated field shows its qualified name rather than nothing.
pub fn gettext(msgid: &str) -> String {
    let lang = get_language();
    catalog::translate(&lang, msgid).unwrap_or_else(|| msgid.to_string())
}

/// Translates a key in an explicit language, ignoring the thread's active one.
pub fn gettext_in(language: &str, msgid: &str) -> String {
    catalog::translate(language, msgid).unwrap_or_else(|| msgid.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_language() {
        deactivate();
        assert_eq!(get_language(), "en");
    }

    #[test]
    fn test_activate_and_deactivate() {
        activate("fr");
        assert_eq!(get_language(), "fr");
        deactivate();
        assert_eq!(get_language(), "en");
    }

    #[test]
    fn test_gettext_falls_back_to_key() {
        activate("i18n_test_fallback");
        assert_eq!(gettext("post.title"), "post.title");
        deactivate();
    }

    #[test]
    fn test_gettext_active_language() {
        catalog::register_translations("i18n_test_active", vec![("post.title", "Titre")]);
        activate("i18n_test_active");
        assert_eq!(gettext("post.title"), "Titre");
        deactivate();
    }

    #[test]
    fn test_gettext_in() {
        catalog::register_translations("i18n_test_in", vec![("post.body", "Corps")]);
        assert_eq!(gettext_in("i18n_test_in", "post.body"), "Corps");
        assert_eq!(gettext_in("i18n_test_in", "post.other"), "post.other");
    }

    #[test]
    fn test_language_is_thread_local() {
        activate("de");
        let other = std::thread::spawn(get_language).join().unwrap();
        assert_eq!(other, "en");
        assert_eq!(get_language(), "de");
        deactivate();
    }
}

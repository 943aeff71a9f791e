//! Pending validation errors.
//!
//! The renderer asks a [`ValidationErrorStore`] for the message attached to
//! each qualified field name and appends it after the field's element.

use std::collections::HashMap;

use formtag_core::ValidationError;

/// Read-only access to validation errors keyed by qualified field name.
pub trait ValidationErrorStore {
    /// Returns the message to display for `key`, if any.
    ///
    /// An empty message counts as no error.
    fn error_for(&self, key: &str) -> Option<String>;
}

/// A store with no errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoErrors;

impl ValidationErrorStore for NoErrors {
    fn error_for(&self, _key: &str) -> Option<String> {
        None
    }
}

impl ValidationErrorStore for HashMap<String, String> {
    fn error_for(&self, key: &str) -> Option<String> {
        self.get(key).filter(|m| !m.is_empty()).cloned()
    }
}

/// Validation errors collected for one request.
///
/// Several errors may be recorded per field; the first one recorded is the
/// one displayed.
///
/// # Examples
///
/// ```
/// use formtag_core::ValidationError;
/// use formtag_forms::{ValidationErrorStore, ValidationErrors};
///
/// let mut errors = ValidationErrors::new();
/// errors.add("user.name", ValidationError::new("too short", "min_size"));
/// assert_eq!(errors.error_for("user.name").as_deref(), Some("too short"));
/// assert_eq!(errors.error_for("user.age"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ValidationErrors {
    errors: HashMap<String, Vec<ValidationError>>,
}

impl ValidationErrors {
    /// Creates an empty error set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an error for a qualified field name.
    pub fn add(&mut self, key: impl Into<String>, error: ValidationError) {
        self.errors.entry(key.into()).or_default().push(error);
    }

    /// Returns the first error recorded for `key`.
    pub fn first(&self, key: &str) -> Option<&ValidationError> {
        self.errors.get(key).and_then(|list| list.first())
    }

    /// Returns all errors recorded for `key`.
    pub fn all(&self, key: &str) -> &[ValidationError] {
        self.errors.get(key).map(Vec::as_slice).unwrap_or_default()
    }
}

impl ValidationErrorStore for ValidationErrors {
    fn error_for(&self, key: &str) -> Option<String> {
        self.first(key)
            .filter(|e| !e.message.is_empty())
            .map(|e| e.message.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_errors() {
        assert_eq!(NoErrors.error_for("user.name"), None);
    }

    #[test]
    fn test_first_error_wins() {
        let mut errors = ValidationErrors::new();
        errors.add("user.name", ValidationError::new("Required", "required"));
        errors.add("user.name", ValidationError::new("Too short", "min_size"));
        assert_eq!(errors.error_for("user.name").as_deref(), Some("Required"));
        assert_eq!(errors.all("user.name").len(), 2);
    }

    #[test]
    fn test_empty_message_is_no_error() {
        let mut errors = ValidationErrors::new();
        errors.add("user.name", ValidationError::new("", "invalid"));
        assert_eq!(errors.all("user.name").len(), 1);
        assert_eq!(errors.error_for("user.name"), None);
    }

    #[test]
    fn test_unknown_key() {
        let mut errors = ValidationErrors::new();
        errors.add("a.b", ValidationError::new("x", "y"));
        assert!(errors.all("a.c").is_empty());
        assert!(errors.first("a.c").is_none());
        assert_eq!(errors.error_for("a.c"), None);
    }

    #[test]
    fn test_hashmap_store() {
        let mut map = HashMap::new();
        map.insert("a.b".to_string(), "bad".to_string());
        map.insert("a.c".to_string(), String::new());
        assert_eq!(map.error_for("a.b").as_deref(), Some("bad"));
        assert_eq!(map.error_for("a.c"), None);
    }
}

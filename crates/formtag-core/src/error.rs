//! Core error types for formtag.
//!
//! [`FormTagError`] covers everything a render call can fail with: a missing
//! model, a field that cannot be read from the model, configuration and
//! template-boundary problems, and sink/IO failures.

use std::fmt;

use thiserror::Error;

/// A validation error attached to a single field.
///
/// The `code` identifies the kind of failure (e.g. "required", "max_size")
/// and the `message` is what gets shown next to the field.
///
/// # Examples
///
/// ```
/// use formtag_core::error::ValidationError;
///
/// let err = ValidationError::new("Too short", "min_size");
/// assert_eq!(err.to_string(), "Too short");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The message displayed to the user.
    pub message: String,
    /// A short code identifying the type of validation failure.
    pub code: String,
}

impl ValidationError {
    /// Creates a new `ValidationError` with a message and code.
    pub fn new(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: code.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ValidationError {}

/// The primary error type for formtag.
#[derive(Error, Debug)]
pub enum FormTagError {
    /// The render call was made without a model.
    #[error("You must specify a model. E.g: {{% DisplayForModel model=your_model_instance %}}")]
    MissingModel,

    /// The model does not expose a field named in its schema.
    #[error("Field '{field}' not found on model '{model}'")]
    FieldLookup {
        /// The model name.
        model: String,
        /// The field that could not be read.
        field: String,
    },

    /// A field value has a type the renderer cannot display.
    #[error("Field '{field}' has type {found}, expected {expected}")]
    TypeMismatch {
        /// The field name.
        field: String,
        /// What the renderer expected.
        expected: String,
        /// What it got.
        found: String,
    },

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A tag was invoked with an unknown name or malformed arguments.
    #[error("Template syntax error: {0}")]
    TemplateSyntax(String),

    /// An error occurred during serialization or deserialization.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Writing to the output sink failed.
    #[error("Render error: {0}")]
    Render(#[from] fmt::Error),

    /// An I/O error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenience type alias for `Result<T, FormTagError>`.
pub type FormTagResult<T> = Result<T, FormTagError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::new("This field is required.", "required");
        assert_eq!(err.to_string(), "This field is required.");
        assert_eq!(err.code, "required");
    }

    #[test]
    fn test_missing_model_message() {
        let err = FormTagError::MissingModel;
        assert!(err.to_string().starts_with("You must specify a model."));
        assert!(err.to_string().contains("{% DisplayForModel model="));
    }

    #[test]
    fn test_field_lookup_display() {
        let err = FormTagError::FieldLookup {
            model: "user".into(),
            field: "age".into(),
        };
        assert_eq!(err.to_string(), "Field 'age' not found on model 'user'");
    }

    #[test]
    fn test_type_mismatch_display() {
        let err = FormTagError::TypeMismatch {
            field: "tags".into(),
            expected: "scalar".into(),
            found: "array".into(),
        };
        assert_eq!(err.to_string(), "Field 'tags' has type array, expected scalar");
    }

    #[test]
    fn test_fmt_error_conversion() {
        let err: FormTagError = fmt::Error.into();
        assert!(matches!(err, FormTagError::Render(_)));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: FormTagError = io_err.into();
        assert!(err.to_string().contains("file missing"));
    }
}

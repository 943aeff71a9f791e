//! Field descriptors and declared constraints.
//!
//! A [`FieldDescriptor`] is the statically declared description of one model
//! field: its name, the name of its declared type, the [`Constraint`]s that
//! apply to it, and its [`Visibility`]. Descriptors are built once per model
//! type (by `#[derive(FormModel)]` or by hand) and never mutated while
//! rendering.

use serde::{Deserialize, Serialize};

/// A declared validation rule on a field.
///
/// Format kinds (`Email`, `Url`, `Password`) select the HTML input type; the
/// other variants become additional input attributes. A field may carry any
/// number of constraints and all of them are rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Constraint {
    /// The field must have a value.
    Required,
    /// Lower numeric bound.
    Min {
        /// The bound.
        value: f64,
    },
    /// Upper numeric bound.
    Max {
        /// The bound.
        value: f64,
    },
    /// Inclusive numeric range.
    Range {
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },
    /// Maximum length in characters.
    MaxLength {
        /// The length.
        value: usize,
    },
    /// The value must match a regular expression.
    Pattern {
        /// The expression, passed to the browser as-is.
        regex: String,
    },
    /// The value is an email address.
    Email,
    /// The value is a URL.
    Url,
    /// The value is a password.
    Password,
}

impl Constraint {
    /// Shorthand for [`Constraint::Min`].
    pub const fn min(value: f64) -> Self {
        Self::Min { value }
    }

    /// Shorthand for [`Constraint::Max`].
    pub const fn max(value: f64) -> Self {
        Self::Max { value }
    }

    /// Shorthand for [`Constraint::Range`].
    pub const fn range(min: f64, max: f64) -> Self {
        Self::Range { min, max }
    }

    /// Shorthand for [`Constraint::MaxLength`].
    pub const fn max_length(value: usize) -> Self {
        Self::MaxLength { value }
    }

    /// Shorthand for [`Constraint::Pattern`].
    pub fn pattern(regex: impl Into<String>) -> Self {
        Self::Pattern {
            regex: regex.into(),
        }
    }
}

/// How a field takes part in rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Rendered as a labelled input or view span.
    #[default]
    Normal,
    /// Always rendered as `<input type="hidden">`.
    Hidden,
    /// Left out unless an explicit ignore list is supplied.
    Ignored,
}

/// The declared shape of one model field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// The field name as declared on the model.
    pub name: String,
    /// The declared type's name (e.g. `String`, `NaiveDate`).
    #[serde(default = "default_type_name")]
    pub type_name: String,
    /// Constraints in declaration order.
    #[serde(default)]
    pub constraints: Vec<Constraint>,
    /// Rendering visibility.
    #[serde(default)]
    pub visibility: Visibility,
}

fn default_type_name() -> String {
    "String".to_string()
}

impl FieldDescriptor {
    /// Creates a normal, unconstrained field.
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            constraints: Vec::new(),
            visibility: Visibility::Normal,
        }
    }

    /// Adds a constraint.
    #[must_use]
    pub fn constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    /// Marks the field hidden.
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visibility = Visibility::Hidden;
        self
    }

    /// Marks the field excluded by default.
    #[must_use]
    pub fn excluded(mut self) -> Self {
        self.visibility = Visibility::Ignored;
        self
    }

    /// Returns `true` if the field carries the given constraint kind.
    ///
    /// Only the variant is compared, not its payload.
    pub fn has(&self, kind: &Constraint) -> bool {
        self.constraints
            .iter()
            .any(|c| std::mem::discriminant(c) == std::mem::discriminant(kind))
    }

    /// Returns `true` if the field carries [`Constraint::Required`].
    pub fn is_required(&self) -> bool {
        self.constraints.contains(&Constraint::Required)
    }

    /// Returns `true` if the declared type is a date type.
    pub fn is_date_type(&self) -> bool {
        self.type_name.contains("Date")
    }

    /// Returns `true` if the field is always rendered hidden.
    pub fn is_hidden(&self) -> bool {
        self.visibility == Visibility::Hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults() {
        let f = FieldDescriptor::new("title", "String");
        assert_eq!(f.name, "title");
        assert!(f.constraints.is_empty());
        assert_eq!(f.visibility, Visibility::Normal);
    }

    #[test]
    fn test_builder_chain() {
        let f = FieldDescriptor::new("age", "i32")
            .constraint(Constraint::Required)
            .constraint(Constraint::range(1.0, 10.0));
        assert!(f.is_required());
        assert!(f.has(&Constraint::range(0.0, 0.0)));
        assert!(!f.has(&Constraint::min(0.0)));
    }

    #[test]
    fn test_visibility_builders() {
        assert!(FieldDescriptor::new("id", "i64").hidden().is_hidden());
        assert_eq!(
            FieldDescriptor::new("secret", "String").excluded().visibility,
            Visibility::Ignored
        );
    }

    #[test]
    fn test_is_date_type() {
        assert!(FieldDescriptor::new("born", "NaiveDate").is_date_type());
        assert!(FieldDescriptor::new("at", "chrono :: NaiveDateTime").is_date_type());
        assert!(!FieldDescriptor::new("name", "String").is_date_type());
    }

    #[test]
    fn test_constraint_serde_tagged() {
        let c: Constraint =
            serde_json::from_str(r#"{"kind": "range", "min": 1, "max": 10}"#).unwrap();
        assert_eq!(c, Constraint::range(1.0, 10.0));

        let c: Constraint = serde_json::from_str(r#"{"kind": "email"}"#).unwrap();
        assert_eq!(c, Constraint::Email);
    }

    #[test]
    fn test_descriptor_serde_defaults() {
        let f: FieldDescriptor = serde_json::from_str(r#"{"name": "title"}"#).unwrap();
        assert_eq!(f.type_name, "String");
        assert_eq!(f.visibility, Visibility::Normal);
        assert!(f.constraints.is_empty());

        let f: FieldDescriptor =
            serde_json::from_str(r#"{"name": "id", "visibility": "hidden"}"#).unwrap();
        assert!(f.is_hidden());
    }
}

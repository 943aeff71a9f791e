//! Mapping declared constraints to HTML input attributes.
//!
//! The input `type` comes from the first matching rule, in this order:
//! `Url`, `Email`, `Password`, a declared type whose name contains `Date`,
//! then plain text. All other attributes are additive and always emitted in
//! the fixed order `required`, `min`, `max`, range bounds, `maxlength`,
//! `pattern`, regardless of the order the constraints were declared in.

use formtag_core::RenderSettings;

use crate::fields::{Constraint, FieldDescriptor};
use crate::localize::Localizer;

/// An HTML attribute name and its unescaped value.
pub type Attribute = (&'static str, String);

/// An input type with its optional placeholder.
pub type InputType = (&'static str, Option<String>);

/// Returns the input `type` and optional `placeholder` for a field.
///
/// `label` is only evaluated for plain text fields, whose placeholder is
/// their localized label.
pub fn input_type<F>(field: &FieldDescriptor, render: &RenderSettings, label: F) -> InputType
where
    F: FnOnce() -> String,
{
    if field.has(&Constraint::Url) {
        ("url", Some(render.url_placeholder.clone()))
    } else if field.has(&Constraint::Email) {
        ("email", Some(render.email_placeholder.clone()))
    } else if field.has(&Constraint::Password) {
        ("password", Some(render.password_placeholder.clone()))
    } else if field.is_date_type() {
        ("date", None)
    } else {
        ("text", Some(label()))
    }
}

/// Resolves the full, ordered attribute list for an editable field.
///
/// # Examples
///
/// ```
/// use formtag_core::RenderSettings;
/// use formtag_forms::{resolve_attributes, Constraint, FieldDescriptor};
/// use std::collections::HashMap;
///
/// let field = FieldDescriptor::new("age", "i32")
///     .constraint(Constraint::Required)
///     .constraint(Constraint::range(1.0, 10.0));
/// let labels: HashMap<String, String> = HashMap::new();
///
/// let attrs = resolve_attributes(&field, "user.age", &labels, &RenderSettings::default());
/// let names: Vec<&str> = attrs.iter().map(|(n, _)| *n).collect();
/// assert_eq!(names, ["type", "placeholder", "required", "min", "max"]);
/// ```
pub fn resolve_attributes(
    field: &FieldDescriptor,
    qualified_name: &str,
    localizer: &dyn Localizer,
    render: &RenderSettings,
) -> Vec<Attribute> {
    let mut attrs = Vec::new();

    let (input_type, placeholder) = input_type(field, render, || localizer.label(qualified_name));
    attrs.push(("type", input_type.to_string()));
    if let Some(placeholder) = placeholder {
        attrs.push(("placeholder", placeholder));
    }

    if field.is_required() {
        attrs.push(("required", "required".to_string()));
    }

    for c in &field.constraints {
        if let Constraint::Min { value } = c {
            attrs.push(("min", value.to_string()));
        }
    }

    for c in &field.constraints {
        if let Constraint::Max { value } = c {
            attrs.push(("max", value.to_string()));
        }
    }

    // Range adds both bounds even when Min/Max already did.
    for c in &field.constraints {
        if let Constraint::Range { min, max } = c {
            attrs.push(("min", min.to_string()));
            attrs.push(("max", max.to_string()));
        }
    }

    for c in &field.constraints {
        if let Constraint::MaxLength { value } = c {
            attrs.push(("maxlength", value.to_string()));
        }
    }

    for c in &field.constraints {
        if let Constraint::Pattern { regex } = c {
            attrs.push(("pattern", regex.clone()));
        }
    }

    attrs
}

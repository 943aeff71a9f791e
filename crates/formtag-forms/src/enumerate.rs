//! Field enumeration: which fields of a schema produce output.
//!
//! A field is ignored when no ignore list was given and it is marked
//! [`Visibility::Ignored`], or when an ignore list was given and names it.
//! An explicit ignore list replaces the per-field markers entirely: a field
//! marked ignored but absent from the list is rendered.

use formtag_core::utils::split_comma_list;

use crate::fields::{FieldDescriptor, Visibility};
use crate::model::ModelSchema;

/// Parses an `ignore` argument such as `"field1, field2"`.
///
/// All whitespace is removed before splitting on commas.
pub fn parse_ignore_list(ignore: &str) -> Vec<String> {
    split_comma_list(ignore)
}

/// Returns `true` if the field produces no output at all.
pub fn is_ignored(field: &FieldDescriptor, ignore: Option<&[String]>) -> bool {
    match ignore {
        None => field.visibility == Visibility::Ignored,
        Some(names) => names.iter().any(|n| *n == field.name),
    }
}

/// Iterates the schema's non-ignored fields in declaration order.
pub fn visible_fields<'a>(
    schema: &'a ModelSchema,
    ignore: Option<&'a [String]>,
) -> impl Iterator<Item = &'a FieldDescriptor> + 'a {
    schema
        .fields
        .iter()
        .filter(move |field| {
            let ignored = is_ignored(field, ignore);
            if ignored {
                tracing::debug!(field = %field.name, "skipping ignored field");
            }
            !ignored
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> ModelSchema {
        ModelSchema::new("Item")
            .field(FieldDescriptor::new("a", "String"))
            .field(FieldDescriptor::new("b", "String"))
            .field(FieldDescriptor::new("c", "String").excluded())
            .field(FieldDescriptor::new("d", "String").hidden())
    }

    fn names<'a>(it: impl Iterator<Item = &'a FieldDescriptor>) -> Vec<&'a str> {
        it.map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn test_parse_ignore_list() {
        assert_eq!(parse_ignore_list("field1, field2"), vec!["field1", "field2"]);
        assert_eq!(parse_ignore_list("single"), vec!["single"]);
    }

    #[test]
    fn test_no_ignore_list_honours_marker() {
        let s = schema();
        assert_eq!(names(visible_fields(&s, None)), vec!["a", "b", "d"]);
    }

    #[test]
    fn test_ignore_list_overrides_marker() {
        // The list replaces per-field markers: "c" is excluded by marker but
        // rendered because the list does not name it.
        let s = schema();
        let ignore = parse_ignore_list("a, b");
        assert_eq!(names(visible_fields(&s, Some(ignore.as_slice()))), vec!["c", "d"]);
    }

    #[test]
    fn test_empty_ignore_list_renders_everything() {
        let s = schema();
        let ignore: Vec<String> = Vec::new();
        assert_eq!(names(visible_fields(&s, Some(ignore.as_slice()))), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_hidden_fields_are_not_ignored() {
        let s = schema();
        assert!(!is_ignored(&s.fields[3], None));
    }

    #[test]
    fn test_ignore_names_are_exact() {
        let s = schema();
        let ignore = parse_ignore_list("A");
        assert!(!is_ignored(&s.fields[0], Some(ignore.as_slice())));
    }
}

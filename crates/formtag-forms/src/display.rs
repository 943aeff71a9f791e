//! The render call: one model in, one block of markup per visible field out.

use std::fmt::Write;

use formtag_core::logging::render_span;
use formtag_core::{FormTagError, FormTagResult, RenderSettings, SETTINGS};

use crate::enumerate::{parse_ignore_list, visible_fields};
use crate::errors::{NoErrors, ValidationErrorStore};
use crate::localize::{CatalogLocalizer, Localizer};
use crate::model::Model;
use crate::render::MarkupRenderer;

/// What to render: a model, an optional ignore list, and the mode.
pub struct RenderRequest<'a> {
    /// The model instance. Rendering without one fails with
    /// [`FormTagError::MissingModel`].
    pub model: Option<&'a dyn Model>,
    /// Field names to leave out. When present, per-field exclude markers are
    /// not consulted.
    pub ignore: Option<Vec<String>>,
    /// Editable inputs (`true`) or read-only spans (`false`).
    pub editable: bool,
}

impl<'a> RenderRequest<'a> {
    /// An editable render of `model` with no ignore list.
    pub fn new(model: &'a dyn Model) -> Self {
        Self {
            model: Some(model),
            ignore: None,
            editable: true,
        }
    }

    /// A request with no model, as produced by a tag invoked without one.
    pub const fn without_model() -> Self {
        Self {
            model: None,
            ignore: None,
            editable: true,
        }
    }

    /// Sets the ignore list from a comma-separated string.
    #[must_use]
    pub fn ignore(mut self, ignore: &str) -> Self {
        self.ignore = Some(parse_ignore_list(ignore));
        self
    }

    /// Sets the ignore list from field names.
    #[must_use]
    pub fn ignore_fields<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the render mode.
    #[must_use]
    pub const fn editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }
}

/// The collaborators a render call reads from.
#[derive(Clone, Copy)]
pub struct RenderEnv<'a> {
    /// Label lookup.
    pub localizer: &'a dyn Localizer,
    /// Pending validation errors.
    pub errors: &'a dyn ValidationErrorStore,
    /// Renderer strings.
    pub settings: &'a RenderSettings,
}

static ACTIVE_LANGUAGE: CatalogLocalizer = CatalogLocalizer::active();

impl<'a> RenderEnv<'a> {
    /// Creates an environment from explicit collaborators.
    pub fn new(
        localizer: &'a dyn Localizer,
        errors: &'a dyn ValidationErrorStore,
        settings: &'a RenderSettings,
    ) -> Self {
        Self {
            localizer,
            errors,
            settings,
        }
    }

    /// Replaces the error store.
    #[must_use]
    pub fn with_errors(mut self, errors: &'a dyn ValidationErrorStore) -> Self {
        self.errors = errors;
        self
    }

    /// Replaces the localizer.
    #[must_use]
    pub fn with_localizer(mut self, localizer: &'a dyn Localizer) -> Self {
        self.localizer = localizer;
        self
    }
}

impl Default for RenderEnv<'static> {
    /// Catalog labels in the thread's active language, no errors, and the
    /// global render settings.
    fn default() -> Self {
        Self {
            localizer: &ACTIVE_LANGUAGE,
            errors: &NoErrors,
            settings: &SETTINGS.get_or_default().render,
        }
    }
}

/// Renders every visible field of the requested model into `out`.
///
/// Fails with [`FormTagError::MissingModel`] before anything is written when
/// the request has no model. Field values are read as the fields are
/// rendered; the first lookup failure aborts the call. Output is staged and
/// appended to `out` only once every field has rendered, so a failed call
/// writes nothing.
pub fn display_for_model<W: Write + ?Sized>(
    request: &RenderRequest<'_>,
    env: &RenderEnv<'_>,
    out: &mut W,
) -> FormTagResult<()> {
    let Some(model) = request.model else {
        tracing::warn!("DisplayForModel invoked without a model");
        return Err(FormTagError::MissingModel);
    };

    let schema = model.schema();
    let span = render_span(&schema.model_key(), request.editable);
    let _guard = span.enter();

    let renderer = MarkupRenderer::new(env.localizer, env.errors, env.settings);
    let ignore = request.ignore.as_deref();

    let mut staged = String::new();
    for field in visible_fields(schema, ignore) {
        let value = model.value_of(&field.name)?;
        renderer.render_field(&mut staged, schema, field, &value, request.editable)?;
        tracing::trace!(field = %field.name, hidden = field.is_hidden(), "rendered field");
    }

    out.write_str(&staged)?;
    Ok(())
}

/// Renders the requested model into a new `String`.
pub fn render_to_string(request: &RenderRequest<'_>, env: &RenderEnv<'_>) -> FormTagResult<String> {
    let mut out = String::new();
    display_for_model(request, env, &mut out)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::fields::{Constraint, FieldDescriptor};
    use crate::model::ModelSchema;
    use crate::value::FieldValue;

    struct Person {
        schema: ModelSchema,
        values: HashMap<&'static str, FieldValue>,
    }

    impl Model for Person {
        fn schema(&self) -> &ModelSchema {
            &self.schema
        }

        fn value_of(&self, field: &str) -> FormTagResult<FieldValue> {
            self.values
                .get(field)
                .cloned()
                .ok_or_else(|| self.schema.missing_field(field))
        }
    }

    fn person() -> Person {
        Person {
            schema: ModelSchema::new("Person")
                .field(FieldDescriptor::new("id", "i64").hidden())
                .field(FieldDescriptor::new("name", "String").constraint(Constraint::Required))
                .field(FieldDescriptor::new("notes", "String").excluded()),
            values: [
                ("id", FieldValue::Integer(3)),
                ("name", FieldValue::from("Grace")),
                ("notes", FieldValue::Null),
            ]
            .into_iter()
            .collect(),
        }
    }

    #[test]
    fn test_missing_model_writes_nothing() {
        let mut out = String::new();
        let err = display_for_model(
            &RenderRequest::without_model(),
            &RenderEnv::default(),
            &mut out,
        )
        .unwrap_err();
        assert!(matches!(err, FormTagError::MissingModel));
        assert!(out.is_empty());
    }

    #[test]
    fn test_fields_in_declaration_order() {
        let p = person();
        let html = render_to_string(&RenderRequest::new(&p), &RenderEnv::default()).unwrap();
        let id_pos = html.find(r#"name="person.id""#).unwrap();
        let name_pos = html.find(r#"name="person.name""#).unwrap();
        assert!(id_pos < name_pos);
        assert!(!html.contains("person.notes"));
    }

    #[test]
    fn test_renders_exactly_the_visible_fields() {
        let p = person();
        let ignore = parse_ignore_list("id");
        let expected: Vec<String> = visible_fields(&p.schema, Some(&ignore))
            .map(|f| p.schema.qualified_name(&f.name))
            .collect();
        assert_eq!(expected, ["person.name", "person.notes"]);

        let html =
            render_to_string(&RenderRequest::new(&p).ignore("id"), &RenderEnv::default()).unwrap();
        for qualified in &expected {
            assert!(html.contains(&format!(r#"name="{qualified}""#)), "{qualified}");
        }
        assert!(!html.contains("person.id"));
    }

    #[test]
    fn test_lookup_failure_aborts_without_output() {
        let mut p = person();
        p.values.remove("name");
        let mut out = String::from("before");
        let err = display_for_model(&RenderRequest::new(&p), &RenderEnv::default(), &mut out)
            .unwrap_err();
        assert!(matches!(err, FormTagError::FieldLookup { .. }));
        assert_eq!(out, "before");
    }

    #[test]
    fn test_ignored_field_value_is_not_read() {
        let mut p = person();
        p.values.remove("notes");
        assert!(render_to_string(&RenderRequest::new(&p), &RenderEnv::default()).is_ok());
    }

    #[test]
    fn test_request_builders() {
        let p = person();
        let req = RenderRequest::new(&p).ignore("a, b").editable(false);
        assert_eq!(req.ignore, Some(vec!["a".to_string(), "b".to_string()]));
        assert!(!req.editable);

        let req = RenderRequest::new(&p).ignore_fields(["x"]);
        assert_eq!(req.ignore, Some(vec!["x".to_string()]));
    }

    #[test]
    fn test_env_with_errors() {
        let p = person();
        let mut errors = HashMap::new();
        errors.insert("person.name".to_string(), "taken".to_string());
        let env = RenderEnv::default().with_errors(&errors);
        let html = render_to_string(&RenderRequest::new(&p), &env).unwrap();
        assert!(html.contains(r#"<span class="error">taken</span>"#));
    }
}

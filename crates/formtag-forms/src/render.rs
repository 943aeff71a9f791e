//! HTML markup for a single field.
//!
//! Three shapes, one per field:
//!
//! - hidden: `<input type="hidden" name=".." value=".."/>`, no label, no error
//! - editable: a `<p>` holding a `<label>`, an `<input>` with the resolved
//!   constraint attributes, and the pending error if any
//! - view: a `<p>` holding a `<label>` and a `<span>` with the value, or the
//!   empty-value text when there is none
//!
//! Every interpolated string goes through [`escape_html`].

use std::fmt::{self, Write};

use formtag_core::utils::escape_html;
use formtag_core::RenderSettings;

use crate::constraints::resolve_attributes;
use crate::errors::ValidationErrorStore;
use crate::fields::FieldDescriptor;
use crate::localize::Localizer;
use crate::model::{html_id, ModelSchema};
use crate::value::FieldValue;

/// Writes field markup into any [`fmt::Write`] sink.
pub struct MarkupRenderer<'a> {
    localizer: &'a dyn Localizer,
    errors: &'a dyn ValidationErrorStore,
    settings: &'a RenderSettings,
}

impl<'a> MarkupRenderer<'a> {
    /// Creates a renderer over the given collaborators.
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

    /// Renders one field in the shape its visibility and `editable` call for.
    pub fn render_field<W: Write>(
        &self,
        out: &mut W,
        schema: &ModelSchema,
        field: &FieldDescriptor,
        value: &FieldValue,
        editable: bool,
    ) -> fmt::Result {
        let qualified = schema.qualified_name(&field.name);
        if field.is_hidden() {
            self.render_hidden(out, &qualified, value)
        } else if editable {
            self.render_editable(out, &qualified, field, value)
        } else {
            self.render_view(out, &qualified, value)
        }
    }

    /// Renders a hidden input. A null value renders as `value=""`.
    pub fn render_hidden<W: Write>(
        &self,
        out: &mut W,
        qualified: &str,
        value: &FieldValue,
    ) -> fmt::Result {
        write!(
            out,
            r#"<input type="hidden" name="{}" value="{}"/>"#,
            escape_html(qualified),
            escape_html(&value.to_string())
        )
    }

    /// Renders a labelled `<input>` with the field's constraint attributes.
    ///
    /// `value` is emitted only for non-null values; an empty string still
    /// gives `value=""`.
    pub fn render_editable<W: Write>(
        &self,
        out: &mut W,
        qualified: &str,
        field: &FieldDescriptor,
        value: &FieldValue,
    ) -> fmt::Result {
        let id = html_id(qualified);
        self.write_label(out, &id, qualified)?;

        write!(
            out,
            r#"<input id="{}" name="{}""#,
            escape_html(&id),
            escape_html(qualified)
        )?;
        if !value.is_null() {
            write!(out, r#" value="{}""#, escape_html(&value.to_string()))?;
        }
        for (name, attr_value) in resolve_attributes(field, qualified, self.localizer, self.settings)
        {
            write!(out, r#" {name}="{}""#, escape_html(&attr_value))?;
        }
        out.write_str("/>")?;

        self.write_error(out, qualified)?;
        out.write_str("\n</p>\n")
    }

    /// Renders a labelled read-only `<span>`.
    pub fn render_view<W: Write>(
        &self,
        out: &mut W,
        qualified: &str,
        value: &FieldValue,
    ) -> fmt::Result {
        let id = html_id(qualified);
        self.write_label(out, &id, qualified)?;

        let text = if value.is_blank() {
            self.settings.empty_value_display.clone()
        } else {
            value.to_string()
        };
        write!(
            out,
            r#"<span id="{}" name="{}">{}</span>"#,
            escape_html(&id),
            escape_html(qualified),
            escape_html(&text)
        )?;

        self.write_error(out, qualified)?;
        out.write_str("\n</p>\n")
    }

    fn write_label<W: Write>(&self, out: &mut W, id: &str, qualified: &str) -> fmt::Result {
        write!(
            out,
            "\n<p>\n\t<label for=\"{}\">{}</label>\n\t",
            escape_html(id),
            escape_html(&self.localizer.label(qualified))
        )
    }

    fn write_error<W: Write>(&self, out: &mut W, qualified: &str) -> fmt::Result {
        match self.errors.error_for(qualified) {
            Some(message) if !message.is_empty() => write!(
                out,
                r#"<span class="error">{}</span>"#,
                escape_html(&message)
            ),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::errors::NoErrors;
    use crate::fields::Constraint;

    fn schema() -> ModelSchema {
        ModelSchema::new("User")
    }

    fn labels() -> HashMap<String, String> {
        let mut m = HashMap::new();
        m.insert("user.name".to_string(), "Name".to_string());
        m
    }

    fn render(field: &FieldDescriptor, value: &FieldValue, editable: bool) -> String {
        let labels = labels();
        let settings = RenderSettings::default();
        let renderer = MarkupRenderer::new(&labels, &NoErrors, &settings);
        let mut out = String::new();
        renderer
            .render_field(&mut out, &schema(), field, value, editable)
            .unwrap();
        out
    }

    #[test]
    fn test_editable_exact_markup() {
        let field = FieldDescriptor::new("name", "String").constraint(Constraint::Required);
        let html = render(&field, &"Ada".into(), true);
        assert_eq!(
            html,
            "\n<p>\n\t<label for=\"username\">Name</label>\n\t\
             <input id=\"username\" name=\"user.name\" value=\"Ada\" type=\"text\" \
             placeholder=\"Name\" required=\"required\"/>\n</p>\n"
        );
    }

    #[test]
    fn test_view_exact_markup() {
        let field = FieldDescriptor::new("name", "String");
        let html = render(&field, &"Ada".into(), false);
        assert_eq!(
            html,
            "\n<p>\n\t<label for=\"username\">Name</label>\n\t\
             <span id=\"username\" name=\"user.name\">Ada</span>\n</p>\n"
        );
    }

    #[test]
    fn test_editable_null_has_no_value_attribute() {
        let field = FieldDescriptor::new("name", "String");
        let html = render(&field, &FieldValue::Null, true);
        assert!(!html.contains("value="));
    }

    #[test]
    fn test_editable_empty_string_keeps_value_attribute() {
        let field = FieldDescriptor::new("name", "String");
        let html = render(&field, &"".into(), true);
        assert!(html.contains(r#" value="""#));
    }

    #[test]
    fn test_view_blank_shows_slash() {
        let field = FieldDescriptor::new("name", "String");
        for value in [FieldValue::Null, FieldValue::from("")] {
            let html = render(&field, &value, false);
            assert!(html.contains(r#"name="user.name">/</span>"#));
            assert_eq!(html.matches(">/<").count(), 1);
        }
    }

    #[test]
    fn test_hidden_same_in_both_modes() {
        let field = FieldDescriptor::new("id", "i64").hidden();
        let editable = render(&field, &FieldValue::Integer(7), true);
        let view = render(&field, &FieldValue::Integer(7), false);
        assert_eq!(editable, r#"<input type="hidden" name="user.id" value="7"/>"#);
        assert_eq!(editable, view);
    }

    #[test]
    fn test_hidden_null_value() {
        let field = FieldDescriptor::new("id", "i64").hidden();
        let html = render(&field, &FieldValue::Null, true);
        assert_eq!(html, r#"<input type="hidden" name="user.id" value=""/>"#);
    }

    #[test]
    fn test_values_are_escaped() {
        let field = FieldDescriptor::new("name", "String");
        let html = render(&field, &r#""><script>x</script>"#.into(), true);
        assert!(!html.contains("<script>"));
        assert!(html.contains(r#"value="&quot;&gt;&lt;script&gt;x&lt;/script&gt;""#));

        let html = render(&field, &"<b>".into(), false);
        assert!(html.contains(">&lt;b&gt;</span>"));
    }

    #[test]
    fn test_label_is_escaped() {
        let mut labels = HashMap::new();
        labels.insert("user.name".to_string(), "<i>Name</i>".to_string());
        let settings = RenderSettings::default();
        let renderer = MarkupRenderer::new(&labels, &NoErrors, &settings);
        let mut out = String::new();
        renderer
            .render_view(&mut out, "user.name", &FieldValue::Null)
            .unwrap();
        assert!(out.contains("&lt;i&gt;Name&lt;/i&gt;</label>"));
    }

    #[test]
    fn test_error_span_follows_element() {
        let mut errors = HashMap::new();
        errors.insert("user.name".to_string(), "too <short>".to_string());
        let labels = labels();
        let settings = RenderSettings::default();
        let renderer = MarkupRenderer::new(&labels, &errors, &settings);
        let field = FieldDescriptor::new("name", "String");

        let mut out = String::new();
        renderer
            .render_field(&mut out, &schema(), &field, &"x".into(), true)
            .unwrap();
        assert!(out.contains(r#"/><span class="error">too &lt;short&gt;</span>"#));

        let mut out = String::new();
        renderer
            .render_field(&mut out, &schema(), &field, &"x".into(), false)
            .unwrap();
        assert!(out.contains(r#"</span><span class="error">too &lt;short&gt;</span>"#));
    }

    #[test]
    fn test_custom_empty_value_display() {
        let labels = labels();
        let settings = RenderSettings {
            empty_value_display: "n/a".to_string(),
            ..RenderSettings::default()
        };
        let renderer = MarkupRenderer::new(&labels, &NoErrors, &settings);
        let mut out = String::new();
        renderer
            .render_view(&mut out, "user.name", &FieldValue::Null)
            .unwrap();
        assert!(out.contains(">n/a</span>"));
    }
}

//! Model schemas and the [`Model`] trait.
//!
//! A [`ModelSchema`] replaces runtime reflection: it is the ordered list of
//! a model type's fields, declared once per type. The renderer reads field
//! values through [`Model::value_of`].

use std::sync::Arc;

use formtag_core::{FormTagError, FormTagResult};
use serde::{Deserialize, Serialize};

use crate::fields::FieldDescriptor;
use crate::value::FieldValue;

/// The declared fields of one model type, in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSchema {
    /// The model type name (e.g. `User`, or a path like `app::models::User`).
    pub name: String,
    /// Fields in declaration order.
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
}

impl ModelSchema {
    /// Creates an empty schema.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Appends a field.
    #[must_use]
    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    /// Returns the lowercased simple type name used as the field-name prefix.
    ///
    /// Any module path is dropped first, so `app::models::BlogPost` and
    /// `BlogPost` both give `blogpost`.
    ///
    /// # Examples
    ///
    /// ```
    /// use formtag_forms::ModelSchema;
    ///
    /// assert_eq!(ModelSchema::new("app::models::BlogPost").model_key(), "blogpost");
    /// ```
    pub fn model_key(&self) -> String {
        let simple = self
            .name
            .rsplit(|c: char| c == ':' || c == '.')
            .next()
            .unwrap_or(&self.name);
        simple.to_lowercase()
    }

    /// Returns `model_key + "." + field`, the key used for labels, errors,
    /// and the HTML `name` attribute.
    pub fn qualified_name(&self, field: &str) -> String {
        format!("{}.{field}", self.model_key())
    }

    /// Looks up a field descriptor by name.
    pub fn get(&self, field: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == field)
    }

    /// Builds the lookup error for a field this model cannot read.
    pub fn missing_field(&self, field: &str) -> FormTagError {
        FormTagError::FieldLookup {
            model: self.name.clone(),
            field: field.to_string(),
        }
    }
}

/// Returns the HTML `id` for a qualified name: the name with dots removed.
///
/// ```
/// assert_eq!(formtag_forms::html_id("user.email"), "useremail");
/// ```
pub fn html_id(qualified_name: &str) -> String {
    qualified_name.replace('.', "")
}

/// A model instance that can be rendered.
///
/// Implemented by `#[derive(FormModel)]`, by [`RecordModel`], or by hand.
/// Lookup failures are returned, not papered over: a render call that hits
/// one fails as a whole.
pub trait Model {
    /// The model's field schema.
    fn schema(&self) -> &ModelSchema;

    /// Reads the current value of a field.
    fn value_of(&self, field: &str) -> FormTagResult<FieldValue>;
}

impl<M: Model + ?Sized> Model for &M {
    fn schema(&self) -> &ModelSchema {
        (**self).schema()
    }

    fn value_of(&self, field: &str) -> FormTagResult<FieldValue> {
        (**self).value_of(field)
    }
}

impl<M: Model + ?Sized> Model for Arc<M> {
    fn schema(&self) -> &ModelSchema {
        (**self).schema()
    }

    fn value_of(&self, field: &str) -> FormTagResult<FieldValue> {
        (**self).value_of(field)
    }
}

/// A model backed by a JSON object and a shared schema.
///
/// Keys missing from the object read as [`FieldValue::Null`]; fields not in
/// the schema fail with [`FormTagError::FieldLookup`]; arrays and objects
/// fail with [`FormTagError::TypeMismatch`].
#[derive(Debug, Clone)]
pub struct RecordModel {
    schema: Arc<ModelSchema>,
    values: serde_json::Map<String, serde_json::Value>,
}

impl RecordModel {
    /// Creates a record from a schema and a JSON object.
    pub fn new(
        schema: Arc<ModelSchema>,
        values: serde_json::Map<String, serde_json::Value>,
    ) -> Self {
        Self { schema, values }
    }

    /// Creates a record from any JSON value, which must be an object.
    pub fn from_json(schema: Arc<ModelSchema>, value: serde_json::Value) -> FormTagResult<Self> {
        match value {
            serde_json::Value::Object(values) => Ok(Self::new(schema, values)),
            other => Err(FormTagError::Serialization(format!(
                "Record for '{}' must be a JSON object, got {}",
                schema.name,
                json_kind(&other)
            ))),
        }
    }
}

const fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

impl Model for RecordModel {
    fn schema(&self) -> &ModelSchema {
        &self.schema
    }

    fn value_of(&self, field: &str) -> FormTagResult<FieldValue> {
        if self.schema.get(field).is_none() {
            return Err(self.schema.missing_field(field));
        }
        self.values
            .get(field)
            .map_or(Ok(FieldValue::Null), |v| FieldValue::from_json(field, v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::Constraint;

    fn user_schema() -> Arc<ModelSchema> {
        Arc::new(
            ModelSchema::new("User")
                .field(FieldDescriptor::new("name", "String").constraint(Constraint::Required))
                .field(FieldDescriptor::new("age", "i32")),
        )
    }

    #[test]
    fn test_model_key_lowercases() {
        assert_eq!(ModelSchema::new("BlogPost").model_key(), "blogpost");
    }

    #[test]
    fn test_model_key_strips_path() {
        assert_eq!(ModelSchema::new("models.User").model_key(), "user");
        assert_eq!(ModelSchema::new("crate::models::User").model_key(), "user");
    }

    #[test]
    fn test_qualified_name_and_id() {
        let schema = ModelSchema::new("User");
        let qn = schema.qualified_name("firstName");
        assert_eq!(qn, "user.firstName");
        assert_eq!(html_id(&qn), "userfirstName");
    }

    #[test]
    fn test_field_order_preserved() {
        let schema = user_schema();
        let names: Vec<&str> = schema.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["name", "age"]);
    }

    #[test]
    fn test_record_model_values() {
        let record = RecordModel::from_json(
            user_schema(),
            serde_json::json!({"name": "Ada", "age": 36}),
        )
        .unwrap();
        assert_eq!(record.value_of("name").unwrap(), FieldValue::Text("Ada".into()));
        assert_eq!(record.value_of("age").unwrap(), FieldValue::Integer(36));
    }

    #[test]
    fn test_record_model_missing_key_is_null() {
        let record = RecordModel::from_json(user_schema(), serde_json::json!({})).unwrap();
        assert_eq!(record.value_of("age").unwrap(), FieldValue::Null);
    }

    #[test]
    fn test_record_model_unknown_field() {
        let record = RecordModel::from_json(user_schema(), serde_json::json!({})).unwrap();
        let err = record.value_of("email").unwrap_err();
        assert!(matches!(err, FormTagError::FieldLookup { ref field, .. } if field == "email"));
    }

    #[test]
    fn test_record_model_rejects_non_object() {
        let err = RecordModel::from_json(user_schema(), serde_json::json!([1])).unwrap_err();
        assert!(err.to_string().contains("got array"));
    }

    #[test]
    fn test_schema_serde() {
        let schema: ModelSchema = serde_json::from_str(
            r#"{"name": "User", "fields": [
                {"name": "email", "constraints": [{"kind": "email"}, {"kind": "required"}]}
            ]}"#,
        )
        .unwrap();
        assert_eq!(schema.fields.len(), 1);
        assert!(schema.fields[0].is_required());
    }
}

//! Tag argument values and the variable context tags are resolved against.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use formtag_forms::Model;

/// A value passed to a tag argument.
#[derive(Clone)]
pub enum TagValue {
    /// A string value.
    String(String),
    /// A boolean value.
    Bool(bool),
    /// A 64-bit integer.
    Integer(i64),
    /// A model instance.
    Model(Arc<dyn Model + Send + Sync>),
    /// The absence of a value.
    None,
}

impl TagValue {
    /// Wraps a model instance.
    pub fn model<M: Model + Send + Sync + 'static>(model: M) -> Self {
        Self::Model(Arc::new(model))
    }

    /// A short name for the kind of value, used in error messages.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Bool(_) => "boolean",
            Self::Integer(_) => "integer",
            Self::Model(_) => "model",
            Self::None => "none",
        }
    }

    /// Returns `true` for [`TagValue::None`].
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl fmt::Debug for TagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.debug_tuple("String").field(s).finish(),
            Self::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Self::Integer(i) => f.debug_tuple("Integer").field(i).finish(),
            Self::Model(m) => f.debug_tuple("Model").field(&m.schema().name).finish(),
            Self::None => f.write_str("None"),
        }
    }
}

impl From<&str> for TagValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for TagValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<bool> for TagValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for TagValue {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<Arc<dyn Model + Send + Sync>> for TagValue {
    fn from(model: Arc<dyn Model + Send + Sync>) -> Self {
        Self::Model(model)
    }
}

/// Named arguments for one tag invocation.
#[derive(Debug, Clone, Default)]
pub struct TagArgs {
    values: HashMap<String, TagValue>,
}

impl TagArgs {
    /// Creates an empty argument map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an argument, builder style.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<TagValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets an argument.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<TagValue>) {
        self.values.insert(name.into(), value.into());
    }

    /// Looks up an argument. A [`TagValue::None`] argument reads as absent.
    pub fn get(&self, name: &str) -> Option<&TagValue> {
        self.values.get(name).filter(|v| !v.is_none())
    }
}

/// Variables visible to a tag invocation, looked up by name.
#[derive(Debug, Clone, Default)]
pub struct TagContext {
    vars: HashMap<String, TagValue>,
}

impl TagContext {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a variable.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<TagValue>) {
        self.vars.insert(name.into(), value.into());
    }

    /// Looks up a variable.
    pub fn get(&self, name: &str) -> Option<&TagValue> {
        self.vars.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formtag_forms::{ModelSchema, RecordModel};

    fn record() -> RecordModel {
        RecordModel::new(Arc::new(ModelSchema::new("Note")), serde_json::Map::new())
    }

    #[test]
    fn test_none_reads_as_absent() {
        let args = TagArgs::new().with("model", TagValue::None);
        assert!(args.get("model").is_none());
        assert!(args.values.contains_key("model"));
    }

    #[test]
    fn test_from_impls() {
        assert!(matches!(TagValue::from("x"), TagValue::String(ref s) if s == "x"));
        assert!(matches!(TagValue::from(false), TagValue::Bool(false)));
        assert!(matches!(TagValue::from(3i64), TagValue::Integer(3)));
    }

    #[test]
    fn test_kind() {
        assert_eq!(TagValue::model(record()).kind(), "model");
        assert_eq!(TagValue::None.kind(), "none");
    }

    #[test]
    fn test_debug_shows_model_name() {
        let value = TagValue::model(record());
        assert_eq!(format!("{value:?}"), "Model(\"Note\")");
    }

    #[test]
    fn test_context_lookup() {
        let mut ctx = TagContext::new();
        ctx.set("note", TagValue::model(record()));
        assert!(matches!(ctx.get("note"), Some(TagValue::Model(_))));
        assert!(ctx.get("missing").is_none());
    }
}

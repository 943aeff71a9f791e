//! Scalar field values.
//!
//! [`FieldValue`] is the current value of one model field as the renderer
//! sees it. Anything a model stores is converted into one of these scalars
//! through `From`, or through [`FieldValue::from_json`] for JSON records.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use formtag_core::FormTagError;
use serde::{Deserialize, Serialize};

/// The current value of a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum FieldValue {
    /// No value.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A 64-bit integer.
    Integer(i64),
    /// A 64-bit float.
    Float(f64),
    /// A calendar date, rendered as `YYYY-MM-DD`.
    Date(NaiveDate),
    /// A date and time, rendered as `YYYY-MM-DDTHH:MM:SS`.
    DateTime(NaiveDateTime),
    /// A string.
    Text(String),
}

impl FieldValue {
    /// Returns `true` for [`FieldValue::Null`].
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` when the value is null or renders as an empty string.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Converts a JSON scalar into a field value.
    ///
    /// Arrays and objects have no scalar form and fail with
    /// [`FormTagError::TypeMismatch`].
    pub fn from_json(field: &str, value: &serde_json::Value) -> Result<Self, FormTagError> {
        match value {
            serde_json::Value::Null => Ok(Self::Null),
            serde_json::Value::Bool(b) => Ok(Self::Bool(*b)),
            serde_json::Value::Number(n) => Ok(n
                .as_i64()
                .map(Self::Integer)
                .or_else(|| n.as_f64().map(Self::Float))
                .unwrap_or_else(|| Self::Text(n.to_string()))),
            serde_json::Value::String(s) => Ok(Self::Text(s.clone())),
            serde_json::Value::Array(_) => Err(mismatch(field, "array")),
            serde_json::Value::Object(_) => Err(mismatch(field, "object")),
        }
    }
}

fn mismatch(field: &str, found: &str) -> FormTagError {
    FormTagError::TypeMismatch {
        field: field.to_string(),
        expected: "scalar".to_string(),
        found: found.to_string(),
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Self::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S")),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for FieldValue {
                fn from(i: $t) -> Self {
                    Self::Integer(i64::from(i))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

// Values outside the i64 range keep their digits as text.
macro_rules! impl_from_wide_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for FieldValue {
                fn from(i: $t) -> Self {
                    i64::try_from(i).map_or_else(|_| Self::Text(i.to_string()), Self::Integer)
                }
            }
        )*
    };
}

impl_from_wide_integer!(u64, usize, isize, i128, u128);

impl From<char> for FieldValue {
    fn from(c: char) -> Self {
        Self::Text(c.to_string())
    }
}

impl From<f32> for FieldValue {
    fn from(x: f32) -> Self {
        Self::Float(f64::from(x))
    }
}

impl From<f64> for FieldValue {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(d: NaiveDate) -> Self {
        Self::Date(d)
    }
}

impl From<NaiveDateTime> for FieldValue {
    fn from(dt: NaiveDateTime) -> Self {
        Self::DateTime(dt)
    }
}

impl<T: Into<Self>> From<Option<T>> for FieldValue {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Self::Null, Into::into)
    }
}

/// Support code for `#[derive(FormModel)]`. Not public API.
#[doc(hidden)]
pub mod __private {
    use formtag_core::{FormTagError, FormTagResult};

    use super::FieldValue;

    /// Borrowed field handed to [`Scalar`] or [`Opaque`] by method lookup.
    pub struct FieldRef<'a, T>(pub &'a T);

    /// Picked for field types that convert into a [`FieldValue`].
    pub trait Scalar {
        fn field_value(&self, field: &str) -> FormTagResult<FieldValue>;
    }

    impl<T: Clone + Into<FieldValue>> Scalar for FieldRef<'_, T> {
        fn field_value(&self, _field: &str) -> FormTagResult<FieldValue> {
            Ok(self.0.clone().into())
        }
    }

    /// Picked for every other type; reading such a field fails.
    pub trait Opaque {
        fn field_value(&self, field: &str) -> FormTagResult<FieldValue>;
    }

    impl<T> Opaque for &FieldRef<'_, T> {
        fn field_value(&self, field: &str) -> FormTagResult<FieldValue> {
            Err(FormTagError::TypeMismatch {
                field: field.to_string(),
                expected: "scalar".to_string(),
                found: std::any::type_name::<T>().to_string(),
            })
        }
    }
}

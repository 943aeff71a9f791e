//! # formtag-forms
//!
//! Renders HTML form markup for a model instance. Each model exposes a
//! [`ModelSchema`]: an ordered list of [`FieldDescriptor`]s carrying the
//! field's declared type, its [`Constraint`]s, and its [`Visibility`].
//! [`display_for_model`] walks that schema and writes one block per visible
//! field, either as an editable `<input>` or a read-only `<span>`.
//!
//! ```
//! use formtag_forms::{
//!     display_for_model, Constraint, FieldDescriptor, FieldValue, Model, ModelSchema,
//!     RenderEnv, RenderRequest,
//! };
//! use formtag_core::FormTagResult;
//!
//! struct Signup {
//!     schema: ModelSchema,
//!     email: String,
//! }
//!
//! impl Model for Signup {
//!     fn schema(&self) -> &ModelSchema {
//!         &self.schema
//!     }
//!
//!     fn value_of(&self, field: &str) -> FormTagResult<FieldValue> {
//!         match field {
//!             "email" => Ok(self.email.clone().into()),
//!             _ => Err(self.schema.missing_field(field)),
//!         }
//!     }
//! }
//!
//! let signup = Signup {
//!     schema: ModelSchema::new("Signup").field(
//!         FieldDescriptor::new("email", "String")
//!             .constraint(Constraint::Email)
//!             .constraint(Constraint::Required),
//!     ),
//!     email: "a@b.c".into(),
//! };
//!
//! let mut html = String::new();
//! display_for_model(&RenderRequest::new(&signup), &RenderEnv::default(), &mut html).unwrap();
//! assert!(html.contains(r#"<input id="signupemail" name="signup.email" value="a@b.c" type="email""#));
//! assert!(html.contains(r#"required="required""#));
//! ```

pub mod constraints;
pub mod display;
pub mod enumerate;
pub mod errors;
pub mod fields;
pub mod localize;
pub mod model;
pub mod render;
pub mod value;

pub use constraints::resolve_attributes;
pub use formtag_core::{FormTagError, FormTagResult};
pub use display::{display_for_model, render_to_string, RenderEnv, RenderRequest};
pub use enumerate::{is_ignored, parse_ignore_list, visible_fields};
pub use errors::{NoErrors, ValidationErrorStore, ValidationErrors};
pub use fields::{Constraint, FieldDescriptor, Visibility};
pub use localize::{CatalogLocalizer, Localizer};
pub use model::{html_id, Model, ModelSchema, RecordModel};
pub use render::MarkupRenderer;
pub use value::FieldValue;

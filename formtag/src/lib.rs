//! # formtag
//!
//! Renders HTML form markup for a model instance: one labelled `<input>` or
//! read-only `<span>` per field, with HTML5 validation attributes derived
//! from the field's declared constraints.
//!
//! This is the meta-crate that re-exports the sub-crates. Depend on
//! individual crates for finer-grained control.
//!
//! ```
//! use formtag::prelude::*;
//!
//! #[derive(FormModel)]
//! struct Login {
//!     #[form_field(required, email)]
//!     email: String,
//!     #[form_field(required, password)]
//!     password: String,
//! }
//!
//! let login = Login { email: String::new(), password: String::new() };
//! let html = render_to_string(&RenderRequest::new(&login), &RenderEnv::default()).unwrap();
//! assert!(html.contains(r#"type="password" placeholder="password" required="required""#));
//! ```

/// Error types, settings, logging, and the translation catalog.
pub use formtag_core as core;

/// Schemas, constraint resolution, and markup rendering.
pub use formtag_forms as forms;

/// `#[derive(FormModel)]`.
#[cfg(feature = "macros")]
pub use formtag_macros as macros;

/// Tag arguments, the tag library, and the `DisplayForModel` tag.
#[cfg(feature = "template")]
pub use formtag_template as template;

/// The `formtag` command-line renderer.
#[cfg(feature = "cli")]
pub use formtag_cli as cli;

/// The types most callers need.
pub mod prelude {
    pub use formtag_core::{FormTagError, FormTagResult, RenderSettings, Settings};
    pub use formtag_forms::{
        display_for_model, render_to_string, Constraint, FieldDescriptor, FieldValue, Model,
        ModelSchema, RecordModel, RenderEnv, RenderRequest, ValidationErrors, Visibility,
    };
    #[cfg(feature = "macros")]
    pub use formtag_macros::FormModel;
    #[cfg(feature = "template")]
    pub use formtag_template::{TagArgs, TagContext, TagLibrary, TagValue};
}

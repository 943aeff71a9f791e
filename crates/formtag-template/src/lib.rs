//! # formtag-template
//!
//! The template-facing side of formtag. A template engine hands a tag its
//! arguments as a [`TagArgs`] map; [`TagLibrary`] looks the tag up by name
//! and runs it against a [`RenderEnv`](formtag_forms::RenderEnv).
//!
//! The built-in library carries `DisplayForModel`:
//!
//! ```
//! use std::sync::Arc;
//!
//! use formtag_forms::{FieldDescriptor, ModelSchema, RecordModel, RenderEnv};
//! use formtag_template::{TagContext, TagLibrary, TagValue};
//!
//! let schema = Arc::new(ModelSchema::new("Post").field(FieldDescriptor::new("title", "String")));
//! let post = RecordModel::from_json(schema, serde_json::json!({"title": "Hello"})).unwrap();
//!
//! let mut context = TagContext::new();
//! context.set("post", TagValue::model(post));
//!
//! let mut html = String::new();
//! TagLibrary::with_builtins()
//!     .render("{% DisplayForModel model=post editable=false %}", &context, &RenderEnv::default(), &mut html)
//!     .unwrap();
//! assert!(html.contains(r#"<span id="posttitle" name="post.title">Hello</span>"#));
//! ```

pub mod context;
pub mod library;
pub mod parser;
pub mod tags;

pub use context::{TagArgs, TagContext, TagValue};
pub use library::{TagFn, TagLibrary};
pub use parser::{parse_invocation, Invocation};

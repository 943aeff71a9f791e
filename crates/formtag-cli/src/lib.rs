//! # formtag-cli
//!
//! The `formtag` command: renders a JSON record against a JSON model schema
//! and prints the markup.
//!
//! ```text
//! formtag render --schema user.schema.json --data user.json --ignore "notes" --view
//! ```
//!
//! A schema file is a serialized [`ModelSchema`](formtag_forms::ModelSchema):
//!
//! ```json
//! {"name": "User", "fields": [
//!     {"name": "id", "type_name": "i64", "visibility": "hidden"},
//!     {"name": "email", "constraints": [{"kind": "required"}, {"kind": "email"}]}
//! ]}
//! ```

pub mod cli;
pub mod render;

pub use cli::{Cli, Command, RenderArgs};

//! # formtag-macros
//!
//! `#[derive(FormModel)]` declares a struct's form schema at compile time and
//! implements `formtag_forms::Model` for it.
//!
//! ```ignore
//! use formtag_macros::FormModel;
//!
//! #[derive(FormModel)]
//! struct User {
//!     #[form_field(hidden)]
//!     id: i64,
//!     #[form_field(required, max_length = 40)]
//!     name: String,
//!     #[form_field(range(min = 18, max = 120))]
//!     age: i32,
//!     #[form_field(email)]
//!     email: Option<String>,
//! }
//! ```
//!
//! This crate is independent of the other formtag crates because proc-macro
//! crates cannot depend on crates that use them. Generated code refers to
//! `::formtag_forms` by path.

mod bound;
mod model;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives `formtag_forms::Model`.
///
/// Struct attribute `#[form_model(name = "...")]` overrides the schema name
/// (defaults to the struct name). Field attributes under `#[form_field(...)]`:
/// `required`, `min = N`, `max = N`, `range(min = N, max = N)`,
/// `max_length = N`, `pattern = "..."`, `email`, `url`, `password`, `hidden`,
/// and `ignore`.
#[proc_macro_derive(FormModel, attributes(form_model, form_field))]
pub fn derive_form_model(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    model::derive_form_model_impl(&input).into()
}

//! `#[derive(FormModel)]` implementation.
//!
//! Generates an implementation of `formtag_forms::Model` for a named struct:
//! a `form_schema()` associated function that builds the `ModelSchema` once
//! and caches it, and a `value_of` that reads fields by name.

use darling::{FromDeriveInput, FromField, FromMeta};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, Type};

use crate::bound::Bound;

/// Struct-level attributes parsed from `#[form_model(...)]`.
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(form_model), supports(struct_named))]
pub struct FormModelOpts {
    pub ident: syn::Ident,
    pub generics: syn::Generics,
    pub data: darling::ast::Data<(), FieldOpts>,

    /// Schema name; defaults to the struct name.
    #[darling(default)]
    pub name: Option<String>,
}

/// Both bounds of `range(min = .., max = ..)`.
#[derive(Debug, Clone, Copy, FromMeta)]
pub struct RangeOpts {
    pub min: Bound,
    pub max: Bound,
}

/// Per-field attributes parsed from `#[form_field(...)]`.
#[derive(Debug, FromField)]
#[darling(attributes(form_field))]
pub struct FieldOpts {
    pub ident: Option<syn::Ident>,
    pub ty: syn::Type,

    #[darling(default)]
    pub required: bool,

    #[darling(default)]
    pub min: Option<Bound>,

    #[darling(default)]
    pub max: Option<Bound>,

    #[darling(default)]
    pub range: Option<RangeOpts>,

    /// Maximum length in characters.
    #[darling(default)]
    pub max_length: Option<usize>,

    /// Regular expression the value must match.
    #[darling(default)]
    pub pattern: Option<String>,

    #[darling(default)]
    pub email: bool,

    #[darling(default)]
    pub url: bool,

    #[darling(default)]
    pub password: bool,

    /// Always rendered as a hidden input.
    #[darling(default)]
    pub hidden: bool,

    /// Left out unless the caller passes its own ignore list.
    #[darling(default)]
    pub ignore: bool,
}

/// Generates the `Model` implementation for the struct.
pub fn derive_form_model_impl(input: &DeriveInput) -> TokenStream {
    let opts = match FormModelOpts::from_derive_input(input) {
        Ok(o) => o,
        Err(e) => return e.write_errors(),
    };

    let Some(fields) = opts.data.as_ref().take_struct() else {
        return darling::Error::unsupported_shape("enum")
            .with_span(&opts.ident)
            .write_errors();
    };

    let mut errors = darling::Error::accumulator();
    let mut descriptors = Vec::new();
    let mut arms = Vec::new();
    for f in fields.fields {
        let Some(ident) = f.ident.as_ref() else {
            continue;
        };
        if let Some(descriptor) = errors.handle(field_descriptor(ident, f)) {
            descriptors.push(descriptor);
        }
        let name = ident.to_string();
        // An ignored field may hold any type; it is only read when a caller's
        // ignore list brings it back, and then a non-scalar fails at runtime.
        if f.ignore {
            arms.push(quote! {
                #name => (&::formtag_forms::value::__private::FieldRef(&self.#ident))
                    .field_value(#name),
            });
        } else {
            arms.push(quote! {
                #name => ::core::result::Result::Ok(::formtag_forms::FieldValue::from(
                    ::core::clone::Clone::clone(&self.#ident),
                )),
            });
        }
    }
    if let Err(e) = errors.finish() {
        return e.write_errors();
    }

    let struct_name = &opts.ident;
    let schema_name = opts
        .name
        .clone()
        .unwrap_or_else(|| struct_name.to_string());
    let (impl_generics, ty_generics, where_clause) = opts.generics.split_for_impl();

    quote! {
        impl #impl_generics #struct_name #ty_generics #where_clause {
            /// Returns the form schema declared on this type.
            pub fn form_schema() -> &'static ::formtag_forms::ModelSchema {
                static SCHEMA: ::std::sync::OnceLock<::formtag_forms::ModelSchema> =
                    ::std::sync::OnceLock::new();
                SCHEMA.get_or_init(|| {
                    ::formtag_forms::ModelSchema::new(#schema_name)
                        #(.field(#descriptors))*
                })
            }
        }

        impl #impl_generics ::formtag_forms::Model for #struct_name #ty_generics #where_clause {
            fn schema(&self) -> &::formtag_forms::ModelSchema {
                Self::form_schema()
            }

            fn value_of(
                &self,
                field: &str,
            ) -> ::formtag_forms::FormTagResult<::formtag_forms::FieldValue> {
                #[allow(unused_imports)]
                use ::formtag_forms::value::__private::{Opaque as _, Scalar as _};
                match field {
                    #(#arms)*
                    _ => ::core::result::Result::Err(Self::form_schema().missing_field(field)),
                }
            }
        }
    }
}

/// Generates a single `FieldDescriptor` construction expression.
fn field_descriptor(ident: &syn::Ident, f: &FieldOpts) -> darling::Result<TokenStream> {
    if f.hidden && f.ignore {
        return Err(
            darling::Error::custom("a field cannot be both `hidden` and `ignore`").with_span(ident),
        );
    }

    let name = ident.to_string();
    let type_name = declared_type_name(&f.ty);

    let mut chain = Vec::new();
    for constraint in constraints(f) {
        chain.push(quote! { .constraint(#constraint) });
    }
    if f.hidden {
        chain.push(quote! { .hidden() });
    }
    if f.ignore {
        chain.push(quote! { .excluded() });
    }

    Ok(quote! {
        ::formtag_forms::FieldDescriptor::new(#name, #type_name)
            #(#chain)*
    })
}

/// Constraint expressions for a field, in a fixed order.
fn constraints(f: &FieldOpts) -> Vec<TokenStream> {
    let mut out = Vec::new();
    if f.required {
        out.push(quote! { ::formtag_forms::Constraint::Required });
    }
    if let Some(Bound(value)) = f.min {
        out.push(quote! { ::formtag_forms::Constraint::min(#value) });
    }
    if let Some(Bound(value)) = f.max {
        out.push(quote! { ::formtag_forms::Constraint::max(#value) });
    }
    if let Some(RangeOpts {
        min: Bound(min),
        max: Bound(max),
    }) = f.range
    {
        out.push(quote! { ::formtag_forms::Constraint::range(#min, #max) });
    }
    if let Some(len) = f.max_length {
        out.push(quote! { ::formtag_forms::Constraint::max_length(#len) });
    }
    if let Some(ref regex) = f.pattern {
        out.push(quote! { ::formtag_forms::Constraint::pattern(#regex) });
    }
    if f.email {
        out.push(quote! { ::formtag_forms::Constraint::Email });
    }
    if f.url {
        out.push(quote! { ::formtag_forms::Constraint::Url });
    }
    if f.password {
        out.push(quote! { ::formtag_forms::Constraint::Password });
    }
    out
}

/// The name recorded as the field's declared type.
///
/// `Option<T>` records `T`. Paths record their last segment, so
/// `chrono::NaiveDate` records `NaiveDate`.
fn declared_type_name(ty: &Type) -> String {
    let ty = unwrap_option_type(ty).unwrap_or(ty);
    if let Type::Path(type_path) = ty {
        if let Some(segment) = type_path.path.segments.last() {
            return segment.ident.to_string();
        }
    }
    type_to_string(ty)
}

/// If the type is `Option<T>`, returns `Some(&T)`. Otherwise `None`.
pub(crate) fn unwrap_option_type(ty: &Type) -> Option<&Type> {
    if let Type::Path(type_path) = ty {
        let segment = type_path.path.segments.last()?;
        if segment.ident == "Option" {
            if let syn::PathArguments::AngleBracketed(ref args) = segment.arguments {
                if let Some(syn::GenericArgument::Type(inner)) = args.args.first() {
                    return Some(inner);
                }
            }
        }
    }
    None
}

/// Converts a `syn::Type` to a string for matching.
pub(crate) fn type_to_string(ty: &Type) -> String {
    quote!(#ty).to_string()
}

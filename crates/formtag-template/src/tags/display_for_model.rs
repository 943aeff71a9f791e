//! `{% DisplayForModel model=m ignore="a, b" editable=false %}`
//!
//! Renders every field of `model`. `ignore` is a comma-separated list of
//! field names to leave out. `editable` defaults to `true`; any value other
//! than `true` or `"true"` selects view mode.

use std::fmt::Write;

use formtag_core::{FormTagError, FormTagResult};
use formtag_forms::{display_for_model, Model, RenderEnv, RenderRequest};

use crate::context::{TagArgs, TagValue};

/// The name the tag is registered under.
pub const NAME: &str = "DisplayForModel";

/// Executes the tag.
pub fn display_for_model_tag(
    args: &TagArgs,
    env: &RenderEnv<'_>,
    out: &mut dyn Write,
) -> FormTagResult<()> {
    let model: Option<&dyn Model> = match args.get("model") {
        None => None,
        Some(TagValue::Model(m)) => Some(&**m as &dyn Model),
        Some(other) => return Err(mismatch("model", "model", other)),
    };

    let mut request = RenderRequest {
        model,
        ignore: None,
        editable: editable_flag(args.get("editable")),
    };
    match args.get("ignore") {
        None => {}
        Some(TagValue::String(list)) => request = request.ignore(list),
        Some(other) => return Err(mismatch("ignore", "string", other)),
    }

    display_for_model(&request, env, out)
}

/// Absent means editable; otherwise only `true` or `"true"` does.
fn editable_flag(value: Option<&TagValue>) -> bool {
    match value {
        None => true,
        Some(TagValue::Bool(b)) => *b,
        Some(TagValue::String(s)) => s == "true",
        Some(_) => false,
    }
}

fn mismatch(field: &str, expected: &str, found: &TagValue) -> FormTagError {
    FormTagError::TypeMismatch {
        field: field.to_string(),
        expected: expected.to_string(),
        found: found.kind().to_string(),
    }
}

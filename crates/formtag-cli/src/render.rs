//! The `render` subcommand.

use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use formtag_core::i18n::catalog;
use formtag_core::{settings_loader, Settings, ValidationError};
use formtag_forms::{
    render_to_string, CatalogLocalizer, ModelSchema, RecordModel, RenderEnv, RenderRequest,
    ValidationErrors,
};
use serde::Deserialize;

use crate::cli::RenderArgs;

/// Loads settings from `config` if given, then applies environment
/// overrides.
pub fn load_settings(config: Option<&Path>) -> anyhow::Result<Settings> {
    match config {
        Some(path) => settings_loader::from_file_with_env(path)
            .with_context(|| format!("loading settings from {}", path.display())),
        None => Ok(settings_loader::from_env()),
    }
}

/// One or more messages for a field.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorMessages {
    One(String),
    Many(Vec<String>),
}

/// Parses `{"user.name": "too short", "user.age": ["a", "b"]}`.
pub fn parse_errors(json: &str) -> anyhow::Result<ValidationErrors> {
    let raw: HashMap<String, ErrorMessages> =
        serde_json::from_str(json).context("errors file must be a JSON object")?;
    let mut errors = ValidationErrors::new();
    for (key, messages) in raw {
        let messages = match messages {
            ErrorMessages::One(m) => vec![m],
            ErrorMessages::Many(ms) => ms,
        };
        for message in messages {
            errors.add(key.clone(), ValidationError::new(message, "invalid"));
        }
    }
    Ok(errors)
}

fn read(path: &Path, what: &str) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("reading {what} {}", path.display()))
}

/// Renders the record described by `args` and writes the markup to `out`.
pub fn run(args: &RenderArgs, settings: &Settings, out: &mut dyn Write) -> anyhow::Result<()> {
    let schema: ModelSchema = serde_json::from_str(&read(&args.schema, "schema")?)
        .with_context(|| format!("parsing schema {}", args.schema.display()))?;
    let data: serde_json::Value = serde_json::from_str(&read(&args.data, "data")?)
        .with_context(|| format!("parsing data {}", args.data.display()))?;
    let record = RecordModel::from_json(Arc::new(schema), data)?;

    let language = args
        .language
        .clone()
        .unwrap_or_else(|| settings.language_code.clone());
    if let Some(path) = &args.messages {
        let count = catalog::load_from_json(&language, &read(path, "messages")?)?;
        tracing::debug!(count, language = %language, "loaded label translations");
    }
    let localizer = CatalogLocalizer::for_language(language);

    let errors = match &args.errors {
        Some(path) => parse_errors(&read(path, "errors")?)?,
        None => ValidationErrors::new(),
    };

    let mut request = RenderRequest::new(&record).editable(!args.view);
    if let Some(ignore) = &args.ignore {
        request = request.ignore(ignore);
    }

    let env = RenderEnv::new(&localizer, &errors, &settings.render);
    let html = render_to_string(&request, &env)?;
    out.write_all(html.as_bytes())?;
    out.flush()?;
    Ok(())
}

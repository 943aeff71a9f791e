//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Render HTML form markup for model records
#[derive(Debug, Parser)]
#[command(name = "formtag")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Settings file (TOML, or JSON with a `.json` extension)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render one record against a model schema
    Render(RenderArgs),
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Model schema as JSON
    #[arg(long)]
    pub schema: PathBuf,

    /// Record as a JSON object
    #[arg(long)]
    pub data: PathBuf,

    /// Comma-separated field names to leave out
    #[arg(long)]
    pub ignore: Option<String>,

    /// Render read-only spans instead of inputs
    #[arg(long)]
    pub view: bool,

    /// Validation errors as JSON, keyed by qualified field name
    #[arg(long)]
    pub errors: Option<PathBuf>,

    /// Label translations as JSON
    #[arg(long)]
    pub messages: Option<PathBuf>,

    /// Language for labels; defaults to the configured language code
    #[arg(long)]
    pub language: Option<String>,
}

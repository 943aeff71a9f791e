use clap::Parser;
use formtag_cli::{render, Cli, Command};
use formtag_core::logging::setup_logging;
use formtag_core::SETTINGS;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = render::load_settings(cli.config.as_deref())?;
    setup_logging(&settings);
    if SETTINGS.configure(settings).is_err() {
        tracing::warn!("settings were already configured");
    }
    let settings = SETTINGS.get_or_default();

    match cli.command {
        Command::Render(args) => render::run(&args, settings, &mut std::io::stdout().lock()),
    }
}

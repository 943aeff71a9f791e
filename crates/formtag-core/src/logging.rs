//! Logging integration for formtag.
//!
//! Provides helpers for configuring [`tracing`]-based logging from
//! [`Settings`](crate::settings::Settings) and for creating per-render spans.

use crate::settings::Settings;

/// Sets up the global tracing subscriber based on the given settings.
///
/// The filter is read from `settings.log_level`. In debug mode a pretty,
/// human-readable format is used; otherwise a structured JSON format.
/// Installing twice is a no-op.
pub fn setup_logging(settings: &Settings) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(&settings.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if settings.debug {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .pretty()
            .try_init()
            .ok();
    } else {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .json()
            .try_init()
            .ok();
    }
}

/// Creates a tracing span for one model render call.
///
/// # Examples
///
/// ```
/// use formtag_core::logging::render_span;
///
/// let span = render_span("user", true);
/// let _guard = span.enter();
/// tracing::debug!("rendering");
/// ```
pub fn render_span(model: &str, editable: bool) -> tracing::Span {
    tracing::debug_span!("render", model = model, editable = editable)
}

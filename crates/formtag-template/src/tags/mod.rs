//! Built-in tags.

pub mod display_for_model;

use crate::library::TagLibrary;

/// Registers every built-in tag on `library`.
pub fn register_builtins(library: &mut TagLibrary) {
    library.register_tag(display_for_model::NAME, display_for_model::display_for_model_tag);
}

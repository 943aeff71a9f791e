//! Utility helpers.
//!
//! - [`html`] - HTML escaping for text and attribute positions
//! - [`text`] - Whitespace stripping and comma-separated list parsing

pub mod html;
pub mod text;

pub use html::escape_html;
pub use text::{split_comma_list, strip_whitespace};

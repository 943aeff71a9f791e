//! String utility functions.

use std::sync::OnceLock;

use regex::Regex;

fn whitespace_re() -> &'static Regex {
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("whitespace regex is valid"))
}

/// Removes every whitespace character from a string.
///
/// # Examples
///
/// ```
/// use formtag_core::utils::text::strip_whitespace;
///
/// assert_eq!(strip_whitespace(" a, b ,\tc "), "a,b,c");
/// ```
pub fn strip_whitespace(s: &str) -> String {
    whitespace_re().replace_all(s, "").into_owned()
}

/// Splits a comma-separated list after stripping all whitespace.
///
/// Empty segments (from `"a,,b"` or a trailing comma) are dropped.
///
/// # Examples
///
/// ```
/// use formtag_core::utils::text::split_comma_list;
///
/// assert_eq!(split_comma_list("field1, field2"), vec!["field1", "field2"]);
/// assert!(split_comma_list("  ").is_empty());
/// ```
pub fn split_comma_list(s: &str) -> Vec<String> {
    strip_whitespace(s)
        .split(',')
        .filter(|part| !part.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_whitespace_all_kinds() {
        assert_eq!(strip_whitespace("a \t b\n c"), "abc");
    }

    #[test]
    fn test_strip_whitespace_inside_names() {
        // Whitespace is removed everywhere, not just around commas.
        assert_eq!(strip_whitespace("first name"), "firstname");
    }

    #[test]
    fn test_split_comma_list_basic() {
        assert_eq!(split_comma_list("a,b,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_comma_list_spaces() {
        assert_eq!(split_comma_list(" a , b "), vec!["a", "b"]);
    }

    #[test]
    fn test_split_comma_list_empty_segments() {
        assert_eq!(split_comma_list("a,,b,"), vec!["a", "b"]);
    }

    #[test]
    fn test_split_comma_list_empty() {
        assert!(split_comma_list("").is_empty());
    }
}

//! HTML escaping.

use std::borrow::Cow;

/// Escapes HTML special characters in a string.
///
/// Replaces `&`, `<`, `>`, `"`, and `'` with their entity equivalents, which
/// makes the result safe both as element text and inside a double- or
/// single-quoted attribute value. Returns the input unchanged (borrowed)
/// when there is nothing to escape.
///
/// # Examples
///
/// ```
/// use formtag_core::utils::escape_html;
///
/// assert_eq!(escape_html("<b>\"Tom\" & 'Jerry'</b>"),
///            "&lt;b&gt;&quot;Tom&quot; &amp; &#x27;Jerry&#x27;&lt;/b&gt;");
/// assert_eq!(escape_html("plain"), "plain");
/// ```
pub fn escape_html(s: &str) -> Cow<'_, str> {
    if !s.contains(|c: char| matches!(c, '&' | '<' | '>' | '"' | '\'')) {
        return Cow::Borrowed(s);
    }

    let mut escaped = String::with_capacity(s.len() + 16);
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

//! Tag invocation parsing.
//!
//! Accepts `{% Name key=value key="quoted value" %}`; the `{%`/`%}`
//! delimiters are optional. Values are quoted strings, `true`/`false`,
//! `None`, integers, or bare variable names resolved against a
//! [`TagContext`].

use std::sync::OnceLock;

use formtag_core::FormTagError;
use regex::Regex;

use crate::context::{TagArgs, TagContext, TagValue};

/// The right-hand side of one `key=value` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgExpr {
    /// A quoted string literal, unquoted.
    Str(String),
    /// `true` or `false`.
    Bool(bool),
    /// An integer literal.
    Integer(i64),
    /// The literal `None`.
    None,
    /// A variable reference.
    Variable(String),
}

/// A parsed tag invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// The tag name.
    pub name: String,
    /// Arguments in source order.
    pub args: Vec<(String, ArgExpr)>,
}

impl Invocation {
    /// Resolves variable references against `context`.
    ///
    /// An undefined variable resolves to [`TagValue::None`], which tags read
    /// as an absent argument.
    pub fn resolve(&self, context: &TagContext) -> TagArgs {
        let mut args = TagArgs::new();
        for (key, expr) in &self.args {
            let value = match expr {
                ArgExpr::Str(s) => TagValue::String(s.clone()),
                ArgExpr::Bool(b) => TagValue::Bool(*b),
                ArgExpr::Integer(i) => TagValue::Integer(*i),
                ArgExpr::None => TagValue::None,
                ArgExpr::Variable(name) => context.get(name).cloned().unwrap_or(TagValue::None),
            };
            args.insert(key.clone(), value);
        }
        args
    }
}

fn identifier() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier regex is valid"))
}

/// Parses a tag invocation.
///
/// # Examples
///
/// ```
/// use formtag_template::parser::{parse_invocation, ArgExpr};
///
/// let inv = parse_invocation(r#"{% DisplayForModel model=user ignore="a, b" %}"#).unwrap();
/// assert_eq!(inv.name, "DisplayForModel");
/// assert_eq!(inv.args[1], ("ignore".to_string(), ArgExpr::Str("a, b".to_string())));
/// ```
pub fn parse_invocation(source: &str) -> Result<Invocation, FormTagError> {
    let mut content = source.trim();
    if let Some(inner) = content.strip_prefix("{%") {
        content = inner.strip_suffix("%}").ok_or_else(|| {
            FormTagError::TemplateSyntax(format!("Unclosed tag '{source}'"))
        })?;
    }

    let parts = split_tag_args(content)?;
    let mut parts = parts.into_iter();
    let name = parts
        .next()
        .ok_or_else(|| FormTagError::TemplateSyntax("Empty tag".to_string()))?;
    if !identifier().is_match(&name) {
        return Err(FormTagError::TemplateSyntax(format!(
            "Invalid tag name '{name}'"
        )));
    }

    let mut args = Vec::new();
    for part in parts {
        let (key, raw) = part.split_once('=').ok_or_else(|| {
            FormTagError::TemplateSyntax(format!(
                "'{name}' takes key=value arguments, got '{part}'"
            ))
        })?;
        if !identifier().is_match(key) {
            return Err(FormTagError::TemplateSyntax(format!(
                "Invalid argument name '{key}' in '{name}'"
            )));
        }
        if args.iter().any(|(k, _)| k == key) {
            return Err(FormTagError::TemplateSyntax(format!(
                "Argument '{key}' given twice in '{name}'"
            )));
        }
        args.push((key.to_string(), parse_value(raw)?));
    }

    Ok(Invocation { name, args })
}

fn parse_value(raw: &str) -> Result<ArgExpr, FormTagError> {
    if raw.len() >= 2
        && ((raw.starts_with('"') && raw.ends_with('"'))
            || (raw.starts_with('\'') && raw.ends_with('\'')))
    {
        return Ok(ArgExpr::Str(raw[1..raw.len() - 1].to_string()));
    }
    match raw {
        "true" | "True" => return Ok(ArgExpr::Bool(true)),
        "false" | "False" => return Ok(ArgExpr::Bool(false)),
        "None" => return Ok(ArgExpr::None),
        _ => {}
    }
    if let Ok(i) = raw.parse::<i64>() {
        return Ok(ArgExpr::Integer(i));
    }
    if identifier().is_match(raw) {
        return Ok(ArgExpr::Variable(raw.to_string()));
    }
    Err(FormTagError::TemplateSyntax(format!(
        "Could not parse argument value '{raw}'"
    )))
}

/// Splits tag content on whitespace, keeping quoted runs together.
fn split_tag_args(content: &str) -> Result<Vec<String>, FormTagError> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut in_single_quote = false;
    let mut in_double_quote = false;

    for ch in content.chars() {
        match ch {
            '\'' if !in_double_quote => {
                in_single_quote = !in_single_quote;
                current.push(ch);
            }
            '"' if !in_single_quote => {
                in_double_quote = !in_double_quote;
                current.push(ch);
            }
            c if c.is_whitespace() && !in_single_quote && !in_double_quote => {
                if !current.is_empty() {
                    parts.push(std::mem::take(&mut current));
                }
            }
            _ => current.push(ch),
        }
    }

    if in_single_quote || in_double_quote {
        return Err(FormTagError::TemplateSyntax(format!(
            "Unterminated string in '{content}'"
        )));
    }
    if !current.is_empty() {
        parts.push(current);
    }
    Ok(parts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arg(inv: &Invocation, key: &str) -> ArgExpr {
        inv.args
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
            .unwrap()
    }

    #[test]
    fn test_parse_full_invocation() {
        let inv =
            parse_invocation(r#"{% DisplayForModel model=user ignore='a, b' editable=false %}"#)
                .unwrap();
        assert_eq!(inv.name, "DisplayForModel");
        assert_eq!(arg(&inv, "model"), ArgExpr::Variable("user".into()));
        assert_eq!(arg(&inv, "ignore"), ArgExpr::Str("a, b".into()));
        assert_eq!(arg(&inv, "editable"), ArgExpr::Bool(false));
    }

    #[test]
    fn test_delimiters_optional() {
        let inv = parse_invocation("DisplayForModel model=user").unwrap();
        assert_eq!(inv.args.len(), 1);
    }

    #[test]
    fn test_literals() {
        let inv = parse_invocation("T a=1 b=-2 c=None d=True e=\"\"").unwrap();
        assert_eq!(arg(&inv, "a"), ArgExpr::Integer(1));
        assert_eq!(arg(&inv, "b"), ArgExpr::Integer(-2));
        assert_eq!(arg(&inv, "c"), ArgExpr::None);
        assert_eq!(arg(&inv, "d"), ArgExpr::Bool(true));
        assert_eq!(arg(&inv, "e"), ArgExpr::Str(String::new()));
    }

    #[test]
    fn test_errors() {
        for src in [
            "{% DisplayForModel model=user",
            "{% %}",
            "{% DisplayForModel user %}",
            "{% DisplayForModel ignore=\"a %}",
            "{% DisplayForModel a=1 a=2 %}",
            "{% DisplayForModel a=$x %}",
            "{% 9tag %}",
        ] {
            let err = parse_invocation(src).unwrap_err();
            assert!(matches!(err, FormTagError::TemplateSyntax(_)), "{src}");
        }
    }

    #[test]
    fn test_resolve_variables() {
        let mut ctx = TagContext::new();
        ctx.set("flag", true);
        let inv = parse_invocation("T editable=flag model=nothing").unwrap();
        let args = inv.resolve(&ctx);
        assert!(matches!(args.get("editable"), Some(TagValue::Bool(true))));
        assert!(args.get("model").is_none());
    }
}

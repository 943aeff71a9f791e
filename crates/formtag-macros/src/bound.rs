//! Numeric bound literal for darling attributes.
//!
//! Darling parses `f64` from float literals only. Bounds are usually written
//! as integers, so this accepts both, with an optional leading minus:
//! `min = 1`, `max = 2.5`, `min = -10`.

use darling::FromMeta;

/// A numeric bound parsed from an integer or float literal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bound(pub f64);

impl FromMeta for Bound {
    fn from_value(value: &syn::Lit) -> darling::Result<Self> {
        match value {
            syn::Lit::Int(lit) => lit.base10_parse::<f64>().map(Bound).map_err(Into::into),
            syn::Lit::Float(lit) => lit.base10_parse::<f64>().map(Bound).map_err(Into::into),
            _ => Err(darling::Error::unexpected_lit_type(value)),
        }
    }

    fn from_expr(expr: &syn::Expr) -> darling::Result<Self> {
        let parsed = match expr {
            syn::Expr::Lit(lit) => Self::from_value(&lit.lit),
            syn::Expr::Group(group) => Self::from_expr(&group.expr),
            syn::Expr::Unary(syn::ExprUnary {
                op: syn::UnOp::Neg(_),
                expr,
                ..
            }) => Self::from_expr(expr).map(|Bound(v)| Bound(-v)),
            _ => Err(darling::Error::unexpected_expr_type(expr)),
        };
        parsed.map_err(|e| e.with_span(expr))
    }
}

//! Utility functions for procedural macros
//!
//! This module contains the helpers used by the `ChoiceEnum` derive: case
//! rules for declared names, literal parsing for value overrides and doc
//! comment extraction for descriptions.

use darling::FromMeta;
use heck::{
    ToKebabCase, ToLowerCamelCase, ToShoutyKebabCase, ToShoutySnakeCase, ToSnakeCase,
    ToUpperCamelCase,
};
use syn::{Attribute, Expr, ExprLit, ExprUnary, Lit, LitStr, Meta, UnOp};

/// Case rule applied to variant identifiers by `#[choice(rename_all = "...")]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameRule {
    /// `UPPERCASE`
    Upper,
    /// `lowercase`
    Lower,
    /// `PascalCase`
    Pascal,
    /// `camelCase`
    Camel,
    /// `snake_case`
    Snake,
    /// `SCREAMING_SNAKE_CASE`
    ScreamingSnake,
    /// `kebab-case`
    Kebab,
    /// `SCREAMING-KEBAB-CASE`
    ScreamingKebab,
}

impl RenameRule {
    /// Apply the rule to a variant identifier
    pub fn apply(self, ident: &str) -> String {
        match self {
            Self::Upper => ident.to_uppercase(),
            Self::Lower => ident.to_lowercase(),
            Self::Pascal => ident.to_upper_camel_case(),
            Self::Camel => ident.to_lower_camel_case(),
            Self::Snake => ident.to_snake_case(),
            Self::ScreamingSnake => ident.to_shouty_snake_case(),
            Self::Kebab => ident.to_kebab_case(),
            Self::ScreamingKebab => ident.to_shouty_kebab_case(),
        }
    }
}

impl FromMeta for RenameRule {
    fn from_string(value: &str) -> darling::Result<Self> {
        match value {
            "UPPERCASE" => Ok(Self::Upper),
            "lowercase" => Ok(Self::Lower),
            "PascalCase" => Ok(Self::Pascal),
            "camelCase" => Ok(Self::Camel),
            "snake_case" => Ok(Self::Snake),
            "SCREAMING_SNAKE_CASE" => Ok(Self::ScreamingSnake),
            "kebab-case" => Ok(Self::Kebab),
            "SCREAMING-KEBAB-CASE" => Ok(Self::ScreamingKebab),
            other => Err(darling::Error::unknown_value(other)),
        }
    }
}

/// A per-variant value override, `#[choice(value = ...)]`
///
/// The literal kind is checked against the enum's value policy later, so
/// both kinds are accepted here.
#[derive(Debug, Clone)]
pub enum ValueOverride {
    /// A string literal
    Text(LitStr),
    /// Anything else, expected to be an integer literal
    Integer(Expr),
}

impl FromMeta for ValueOverride {
    fn from_expr(expr: &Expr) -> darling::Result<Self> {
        match expr {
            Expr::Lit(ExprLit {
                lit: Lit::Str(text),
                ..
            }) => Ok(Self::Text(text.clone())),
            other => Ok(Self::Integer(other.clone())),
        }
    }
}

/// Parse an integer literal expression, allowing a leading minus sign
pub fn int_from_expr(expr: &Expr) -> darling::Result<i64> {
    let (negative, lit) = match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Int(lit), ..
        }) => (false, lit),
        Expr::Unary(ExprUnary {
            op: UnOp::Neg(_),
            expr: inner,
            ..
        }) => match &**inner {
            Expr::Lit(ExprLit {
                lit: Lit::Int(lit), ..
            }) => (true, lit),
            _ => return Err(darling::Error::custom("expected an integer literal").with_span(expr)),
        },
        Expr::Paren(paren) => return int_from_expr(&paren.expr),
        Expr::Group(group) => return int_from_expr(&group.expr),
        _ => return Err(darling::Error::custom("expected an integer literal").with_span(expr)),
    };

    let magnitude = lit.base10_parse::<i128>()?;
    let value = if negative { -magnitude } else { magnitude };
    i64::try_from(value)
        .map_err(|_| darling::Error::custom(format!("{value} does not fit in i64")).with_span(lit))
}

/// Join the doc comment lines of a variant into a single description
pub fn doc_description(attrs: &[Attribute]) -> Option<String> {
    let lines: Vec<String> = attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| match &attr.meta {
            Meta::NameValue(meta) => match &meta.value {
                Expr::Lit(ExprLit {
                    lit: Lit::Str(text),
                    ..
                }) => Some(text.value().trim().to_owned()),
                _ => None,
            },
            _ => None,
        })
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        None
    } else {
        Some(lines.join(" "))
    }
}

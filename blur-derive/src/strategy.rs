//! Parsing of `#[blur(...)]` field attributes.
//!
//! This module maps attribute syntax to traversal decisions and produces
//! structured errors for invalid forms.

use proc_macro2::{Ident, Span};
use quote::format_ident;
use syn::{
    parse::{Parse, ParseStream},
    spanned::Spanned,
    Attribute, Meta, Result, Token,
};

/// Field transformation strategy based on `#[blur(...)]` attributes.
///
/// | Attribute | Strategy | Behavior |
/// |-----------|----------|----------|
/// | None | `PassThrough` | Field passes through unchanged |
/// | `#[blur]` | `Cascade` | Walk into the field with `Blurrable` |
/// | `#[blur(Category, ..)]` | `Mask(..)` | Apply the category's directive |
#[derive(Clone, Debug)]
pub(crate) enum Strategy {
    /// No annotation: pass through unchanged.
    PassThrough,
    /// Bare `#[blur]`: cascade into a nested `Blurrable`.
    Cascade,
    /// `#[blur(Category, ..)]`: mask string-like leaves.
    Mask(MaskArgs),
}

/// Category plus per-site overrides, e.g. `#[blur(Name, placeholder = 'x')]`.
#[derive(Clone, Debug)]
pub(crate) struct MaskArgs {
    pub(crate) category: syn::Path,
    pub(crate) overrides: Vec<Override>,
}

/// One `option = value` pair.
#[derive(Clone, Debug)]
pub(crate) struct Override {
    pub(crate) option: DirectiveOption,
    pub(crate) value: syn::Expr,
}

/// Directive parameters that can be overridden per field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum DirectiveOption {
    StartOffset,
    EndOffset,
    Regex,
    Placeholder,
    Condition,
}

impl DirectiveOption {
    const EXPECTED: &'static str =
        "expected one of `start_offset`, `end_offset`, `regex`, `placeholder`, `condition`";

    fn from_ident(ident: &Ident) -> Option<Self> {
        match ident.to_string().as_str() {
            "start_offset" => Some(Self::StartOffset),
            "end_offset" => Some(Self::EndOffset),
            "regex" => Some(Self::Regex),
            "placeholder" => Some(Self::Placeholder),
            "condition" => Some(Self::Condition),
            _ => None,
        }
    }

    /// The `Directive` builder method applying this option.
    pub(crate) fn builder_method(self) -> Ident {
        let name = match self {
            Self::StartOffset => "with_start_offset",
            Self::EndOffset => "with_end_offset",
            Self::Regex => "with_regex",
            Self::Placeholder => "with_placeholder",
            Self::Condition => "with_condition",
        };
        format_ident!("{}", name)
    }
}

impl Parse for MaskArgs {
    fn parse(input: ParseStream<'_>) -> Result<Self> {
        let category: syn::Path = input.parse().map_err(|err| {
            syn::Error::new(
                err.span(),
                "expected a category type (e.g., #[blur(Email)])",
            )
        })?;

        let mut overrides: Vec<Override> = Vec::new();
        while !input.is_empty() {
            input.parse::<Token![,]>()?;
            if input.is_empty() {
                break;
            }
            let key: Ident = input.parse()?;
            let option = DirectiveOption::from_ident(&key).ok_or_else(|| {
                syn::Error::new(
                    key.span(),
                    format!("unknown blur option `{key}`; {}", DirectiveOption::EXPECTED),
                )
            })?;
            if overrides.iter().any(|existing| existing.option == option) {
                return Err(syn::Error::new(
                    key.span(),
                    format!("duplicate blur option `{key}`"),
                ));
            }
            input.parse::<Token![=]>()?;
            let value: syn::Expr = input.parse()?;
            overrides.push(Override { option, value });
        }

        Ok(Self {
            category,
            overrides,
        })
    }
}

fn set_strategy(target: &mut Option<Strategy>, next: Strategy, span: Span) -> Result<()> {
    if target.is_some() {
        return Err(syn::Error::new(
            span,
            "multiple #[blur] attributes specified on the same field",
        ));
    }
    *target = Some(next);
    Ok(())
}

pub(crate) fn parse_field_strategy(attrs: &[Attribute]) -> Result<Strategy> {
    let mut strategy: Option<Strategy> = None;
    for attr in attrs {
        if !attr.path().is_ident("blur") {
            continue;
        }

        match &attr.meta {
            Meta::Path(_) => {
                set_strategy(&mut strategy, Strategy::Cascade, attr.span())?;
            }
            Meta::List(list) => {
                let args = list.parse_args::<MaskArgs>()?;
                set_strategy(&mut strategy, Strategy::Mask(args), attr.span())?;
            }
            Meta::NameValue(_) => {
                return Err(syn::Error::new(
                    attr.span(),
                    "name-value syntax is not supported for #[blur]",
                ));
            }
        }
    }

    Ok(strategy.unwrap_or(Strategy::PassThrough))
}

//! Per-field code generation shared by structs and enums.

use proc_macro2::{Ident, Span, TokenStream};
use quote::{format_ident, quote, quote_spanned};
use syn::{spanned::Spanned, Fields, Result};

use crate::{
    crate_path,
    generics::collect_generics_from_type,
    strategy::{parse_field_strategy, MaskArgs, Strategy},
    types::is_scalar_type,
};

/// Generic parameters collected while walking fields.
pub(crate) struct DeriveContext<'a> {
    pub(crate) generics: &'a syn::Generics,
    pub(crate) cascaded_generics: &'a mut Vec<Ident>,
    pub(crate) masked_generics: &'a mut Vec<Ident>,
}

/// Builds `<Category as DefaultDirective>::directive().with_x(..)...`.
fn directive_expr(args: &MaskArgs) -> TokenStream {
    let category = &args.category;
    let default_directive = crate_path("DefaultDirective");
    let overrides = args.overrides.iter().map(|item| {
        let method = item.option.builder_method();
        let value = &item.value;
        quote! { .#method(#value) }
    });
    quote! {
        <#category as #default_directive>::directive() #(#overrides)*
    }
}

/// Generates the statements that rebind `binding` to its blurred value.
///
/// | Annotation | Output |
/// |------------|--------|
/// | None | nothing, the binding is moved back as is |
/// | `#[blur]` | `Blurrable::blur_with(binding, masker)?` |
/// | `#[blur(Category, ..)]` | `Maskable::mask_with(binding, directive, masker)?` |
///
/// Each masked field gets its own `OnceLock`, so the directive is built once
/// per field for the lifetime of the process.
pub(crate) fn generate_field_transform(
    ctx: &mut DeriveContext<'_>,
    ty: &syn::Type,
    binding: &Ident,
    span: Span,
    strategy: &Strategy,
) -> Result<TokenStream> {
    match strategy {
        Strategy::PassThrough => Ok(TokenStream::new()),
        Strategy::Cascade => {
            if is_scalar_type(ty) {
                return Err(syn::Error::new(
                    span,
                    "#[blur] on a scalar field has no effect; remove the attribute",
                ));
            }
            collect_generics_from_type(ty, ctx.generics, ctx.cascaded_generics);
            let blurrable = crate_path("Blurrable");
            Ok(quote_spanned! { span =>
                let #binding = #blurrable::blur_with(#binding, masker)?;
            })
        }
        Strategy::Mask(args) => {
            if is_scalar_type(ty) {
                return Err(syn::Error::new(
                    span,
                    "scalar fields cannot be masked; categories apply to string-like values",
                ));
            }
            collect_generics_from_type(ty, ctx.generics, ctx.masked_generics);
            let maskable = crate_path("Maskable");
            let directive_ty = crate_path("Directive");
            let directive = directive_expr(args);
            Ok(quote_spanned! { span =>
                let #binding = {
                    static DIRECTIVE: ::std::sync::OnceLock<#directive_ty> =
                        ::std::sync::OnceLock::new();
                    #maskable::mask_with(#binding, DIRECTIVE.get_or_init(|| #directive), masker)?
                };
            })
        }
    }
}

/// Bindings and transforms for one struct body or enum variant.
pub(crate) struct BoundFields {
    /// `{ a, b }`, `(field_0, field_1)` or nothing for unit shapes.
    pub(crate) pattern: TokenStream,
    pub(crate) transforms: Vec<TokenStream>,
}

/// Binds every field to a local and generates its transform.
///
/// The same `pattern` destructures the input and rebuilds the output.
pub(crate) fn bind_fields(ctx: &mut DeriveContext<'_>, fields: Fields) -> Result<BoundFields> {
    let mut bindings = Vec::new();
    let mut transforms = Vec::new();
    let named = matches!(fields, Fields::Named(_));

    for (index, field) in fields.into_iter().enumerate() {
        let span = field.span();
        let strategy = parse_field_strategy(&field.attrs)?;
        let binding = match &field.ident {
            Some(ident) => ident.clone(),
            None => format_ident!("field_{index}"),
        };
        transforms.push(generate_field_transform(
            ctx, &field.ty, &binding, span, &strategy,
        )?);
        bindings.push(binding);
    }

    let pattern = if named {
        quote! { { #(#bindings),* } }
    } else if bindings.is_empty() {
        TokenStream::new()
    } else {
        quote! { ( #(#bindings),* ) }
    };
    Ok(BoundFields {
        pattern,
        transforms,
    })
}

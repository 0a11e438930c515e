//! Enum-specific `Blurrable` derivation.
//!
//! Each variant becomes one match arm that destructures, transforms and
//! rebuilds the same variant.

use proc_macro2::{Ident, TokenStream};
use quote::quote;
use syn::{spanned::Spanned, DataEnum, Result};

use crate::transform::{bind_fields, BoundFields, DeriveContext};

pub(crate) struct EnumDeriveOutput {
    pub(crate) body: TokenStream,
    pub(crate) cascaded_generics: Vec<Ident>,
    pub(crate) masked_generics: Vec<Ident>,
}

pub(crate) fn derive_enum(data: DataEnum, generics: &syn::Generics) -> Result<EnumDeriveOutput> {
    let mut arms = Vec::new();
    let mut cascaded_generics = Vec::new();
    let mut masked_generics = Vec::new();

    for variant in data.variants {
        if let Some(attr) = variant.attrs.iter().find(|attr| attr.path().is_ident("blur")) {
            return Err(syn::Error::new(
                attr.span(),
                "#[blur] belongs on fields, not on enum variants",
            ));
        }

        let variant_ident = variant.ident;
        let mut ctx = DeriveContext {
            generics,
            cascaded_generics: &mut cascaded_generics,
            masked_generics: &mut masked_generics,
        };
        let BoundFields {
            pattern,
            transforms,
        } = bind_fields(&mut ctx, variant.fields)?;

        arms.push(quote! {
            Self::#variant_ident #pattern => {
                #(#transforms)*
                ::core::result::Result::Ok(Self::#variant_ident #pattern)
            }
        });
    }

    let body = quote! {
        match self {
            #(#arms)*
        }
    };

    Ok(EnumDeriveOutput {
        body,
        cascaded_generics,
        masked_generics,
    })
}

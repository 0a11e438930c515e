//! Struct-specific `Blurrable` derivation.

use proc_macro2::{Ident, TokenStream};
use quote::quote;
use syn::{DataStruct, Fields, Result};

use crate::transform::{bind_fields, BoundFields, DeriveContext};

pub(crate) struct StructDeriveOutput {
    pub(crate) body: TokenStream,
    pub(crate) cascaded_generics: Vec<Ident>,
    pub(crate) masked_generics: Vec<Ident>,
}

pub(crate) fn derive_struct(data: DataStruct, generics: &syn::Generics) -> Result<StructDeriveOutput> {
    let mut cascaded_generics = Vec::new();
    let mut masked_generics = Vec::new();

    let body = if matches!(data.fields, Fields::Unit) {
        quote! { ::core::result::Result::Ok(self) }
    } else {
        let mut ctx = DeriveContext {
            generics,
            cascaded_generics: &mut cascaded_generics,
            masked_generics: &mut masked_generics,
        };
        let BoundFields {
            pattern,
            transforms,
        } = bind_fields(&mut ctx, data.fields)?;
        quote! {
            let Self #pattern = self;
            #(#transforms)*
            ::core::result::Result::Ok(Self #pattern)
        }
    };

    Ok(StructDeriveOutput {
        body,
        cascaded_generics,
        masked_generics,
    })
}

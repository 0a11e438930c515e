//! Derive macro for `blur`.
//!
//! This crate generates the traversal code behind `#[derive(Blur)]`. It:
//! - reads `#[blur(...)]` field attributes
//! - emits a `Blurrable` implementation that hands string-like fields to a masker
//!
//! It does **not** define categories or masking algorithms. Those live in the
//! main `blur` crate and run at runtime.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[allow(unused_extern_crates)]
extern crate proc_macro;

use proc_macro2::TokenStream;
use proc_macro_crate::{crate_name, FoundCrate};
use quote::{format_ident, quote};
use syn::{parse_macro_input, spanned::Spanned, Data, DeriveInput, Result};

mod derive_enum;
mod derive_struct;
mod generics;
mod strategy;
mod transform;
mod types;
use derive_enum::{derive_enum, EnumDeriveOutput};
use derive_struct::{derive_struct, StructDeriveOutput};
use generics::{add_cascade_bounds, add_mask_bounds};

/// Derives `blur::Blurrable` for structs and enums.
///
/// # Field Attributes
///
/// - **No annotation**: the field passes through unchanged. Any type works,
///   including external ones with no masking support.
///
/// - `#[blur]`: cascades into a type that implements `Blurrable`, such as
///   another `#[derive(Blur)]` type or an `Option`/`Vec`/map of one.
///
/// - `#[blur(Category)]`: masks string-like leaves with the category's default
///   directive. Works for `String`, `Option<String>`, `Vec<String>`, map
///   values and any nesting of those. Overrides follow the category:
///
///   ```ignore
///   #[blur(Name, start_offset = 1, end_offset = 0, placeholder = 'x')]
///   #[blur(Strings, regex = r"\d+", condition = blur::NonEmpty)]
///   ```
///
///   The directive is built on first use and reused afterwards.
///
/// Unions, variant-level and container-level `#[blur]`, and `#[blur]` on
/// scalar fields are rejected at compile time.
#[proc_macro_derive(Blur, attributes(blur))]
pub fn derive_blur(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Returns the token stream referencing the `blur` crate root.
///
/// Handles renamed dependencies (`my_blur = { package = "blur", .. }`). Inside
/// `blur` itself the crate is reachable as `::blur` through
/// `extern crate self as blur`.
fn crate_root() -> TokenStream {
    match crate_name("blur") {
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
        Ok(FoundCrate::Itself) | Err(_) => quote! { ::blur },
    }
}

fn crate_path(item: &str) -> TokenStream {
    let root = crate_root();
    let item = format_ident!("{}", item);
    quote! { #root::#item }
}

fn expand(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        attrs,
        ..
    } = input;

    if let Some(attr) = attrs.iter().find(|attr| attr.path().is_ident("blur")) {
        return Err(syn::Error::new(
            attr.span(),
            "#[blur] belongs on fields, not on the type itself",
        ));
    }

    let (body, cascaded_generics, masked_generics) = match data {
        Data::Struct(data) => {
            let StructDeriveOutput {
                body,
                cascaded_generics,
                masked_generics,
            } = derive_struct(data, &generics)?;
            (body, cascaded_generics, masked_generics)
        }
        Data::Enum(data) => {
            let EnumDeriveOutput {
                body,
                cascaded_generics,
                masked_generics,
            } = derive_enum(data, &generics)?;
            (body, cascaded_generics, masked_generics)
        }
        Data::Union(u) => {
            return Err(syn::Error::new(
                u.union_token.span(),
                "`Blur` cannot be derived for unions",
            ));
        }
    };

    let crate_root = crate_root();
    let bounded = add_cascade_bounds(generics, &cascaded_generics);
    let bounded = add_mask_bounds(bounded, &masked_generics);
    let (impl_generics, ty_generics, where_clause) = bounded.split_for_impl();

    Ok(quote! {
        impl #impl_generics #crate_root::Blurrable for #ident #ty_generics #where_clause {
            #[allow(unused_variables)]
            fn blur_with<M: #crate_root::Masker>(
                self,
                masker: &M,
            ) -> ::core::result::Result<Self, #crate_root::BlurError> {
                #body
            }
        }
    })
}

//! Trait bounds for generic parameters.
//!
//! Bounds are added only for generics that appear in masked or cascaded
//! fields. Pass-through fields never constrain their type parameters.
//!
//! `PhantomData<T>` is skipped while collecting, so a marker such as
//!
//! ```ignore
//! struct Tagged<T> {
//!     #[blur(Strings)]
//!     value: String,
//!     _marker: PhantomData<T>,
//! }
//! ```
//!
//! does not require `T: Blurrable` even if the marker were annotated.

use syn::{parse_quote, Ident};

use crate::crate_path;

pub(crate) fn collect_generics_from_type(
    ty: &syn::Type,
    generics: &syn::Generics,
    result: &mut Vec<Ident>,
) {
    match ty {
        syn::Type::Path(path) => {
            let Some(segment) = path.path.segments.last() else {
                return;
            };
            if segment.ident == "PhantomData" {
                return;
            }

            if let syn::PathArguments::AngleBracketed(args) = &segment.arguments {
                for arg in &args.args {
                    if let syn::GenericArgument::Type(inner_ty) = arg {
                        collect_generics_from_type(inner_ty, generics, result);
                    }
                }
            }

            for param in generics.type_params() {
                if segment.ident == param.ident && !result.iter().any(|g| g == &param.ident) {
                    result.push(param.ident.clone());
                }
            }
        }
        syn::Type::Array(array) => collect_generics_from_type(&array.elem, generics, result),
        syn::Type::Paren(paren) => collect_generics_from_type(&paren.elem, generics, result),
        syn::Type::Group(group) => collect_generics_from_type(&group.elem, generics, result),
        _ => {}
    }
}

fn add_bounds(mut generics: syn::Generics, used_generics: &[Ident], item: &str) -> syn::Generics {
    for param in generics.type_params_mut() {
        if used_generics.iter().any(|g| g == &param.ident) {
            let bound = crate_path(item);
            param.bounds.push(parse_quote!(#bound));
        }
    }
    generics
}

/// Adds `Blurrable` bounds to generics used by `#[blur]` fields.
pub(crate) fn add_cascade_bounds(generics: syn::Generics, used_generics: &[Ident]) -> syn::Generics {
    add_bounds(generics, used_generics, "Blurrable")
}

/// Adds `Maskable` bounds to generics used by `#[blur(Category)]` fields.
pub(crate) fn add_mask_bounds(generics: syn::Generics, used_generics: &[Ident]) -> syn::Generics {
    add_bounds(generics, used_generics, "Maskable")
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::collect_generics_from_type;

    fn collect(ty: syn::Type) -> Vec<String> {
        let generics: syn::Generics = parse_quote!(<T, U>);
        let mut result = Vec::new();
        collect_generics_from_type(&ty, &generics, &mut result);
        result.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn finds_nested_parameters_once() {
        assert_eq!(collect(parse_quote!(Vec<Option<T>>)), ["T"]);
        assert_eq!(collect(parse_quote!(HashMap<U, Vec<T>>)), ["U", "T"]);
        assert_eq!(collect(parse_quote!(Result<T, T>)), ["T"]);
        assert_eq!(collect(parse_quote!([Option<U>; 4])), ["U"]);
    }

    #[test]
    fn skips_phantom_data() {
        assert!(collect(parse_quote!(PhantomData<T>)).is_empty());
        assert!(collect(parse_quote!(::core::marker::PhantomData<U>)).is_empty());
    }

    #[test]
    fn concrete_types_add_nothing() {
        assert!(collect(parse_quote!(Option<String>)).is_empty());
    }
}

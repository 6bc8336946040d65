// SPDX-License-Identifier: MIT
// Copyright (c) "2025" . The Causal Explainer Authors and Contributors. All Rights Reserved.

//! Derive macros shared across the `causal_explainer` crate.
//!
//! `Constructor` generates a `new` associated function for structs and one
//! `new_<variant>` function per enum variant, mirroring the hand-written
//! constructors that would otherwise be duplicated across every error and
//! value type in the crate.

use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{parse_macro_input, Data, DeriveInput, Fields};

/// Derives a constructor.
///
/// * On a struct, generates `Self::new(..)` taking one parameter per field in
///   declaration order. A field annotated `#[new(default)]` is excluded from
///   the parameter list and initialized via `Default::default()` instead.
/// * On an enum, generates `Self::new_<variant_snake_case>(..)` per variant,
///   taking one parameter per field of that variant.
#[proc_macro_derive(Constructor, attributes(new))]
pub fn derive_constructor(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let body = match &input.data {
        Data::Struct(data) => {
            let ctor = constructor_fn(&format_ident!("new"), &data.fields, None);
            quote! {
                impl #impl_generics #name #ty_generics #where_clause {
                    #ctor
                }
            }
        }
        Data::Enum(data) => {
            let variants = data.variants.iter().map(|variant| {
                let fn_name = format_ident!("new_{}", to_snake_case(&variant.ident.to_string()));
                constructor_fn(&fn_name, &variant.fields, Some(&variant.ident))
            });
            quote! {
                impl #impl_generics #name #ty_generics #where_clause {
                    #(#variants)*
                }
            }
        }
        Data::Union(_) => {
            return syn::Error::new_spanned(name, "Constructor cannot be derived for unions")
                .to_compile_error()
                .into();
        }
    };

    body.into()
}

/// Builds one constructor function for either a struct (`variant` is `None`)
/// or a single enum variant (`variant` is `Some`).
fn constructor_fn(
    fn_name: &syn::Ident,
    fields: &Fields,
    variant: Option<&syn::Ident>,
) -> proc_macro2::TokenStream {
    let self_path = match variant {
        Some(v) => quote! { Self::#v },
        None => quote! { Self },
    };

    match fields {
        Fields::Named(named) => {
            let mut params = Vec::new();
            let mut inits = Vec::new();
            for field in &named.named {
                let ident = field.ident.as_ref().unwrap();
                let ty = &field.ty;
                if is_default_field(field) {
                    inits.push(quote! { #ident: ::core::default::Default::default() });
                } else {
                    params.push(quote! { #ident: #ty });
                    inits.push(quote! { #ident });
                }
            }
            quote! {
                pub fn #fn_name(#(#params),*) -> Self {
                    #self_path { #(#inits),* }
                }
            }
        }
        Fields::Unnamed(unnamed) => {
            let mut params = Vec::new();
            let mut inits = Vec::new();
            for (i, field) in unnamed.unnamed.iter().enumerate() {
                let ty = &field.ty;
                if is_default_field(field) {
                    inits.push(quote! { ::core::default::Default::default() });
                } else {
                    let ident = format_ident!("field{}", i);
                    params.push(quote! { #ident: #ty });
                    inits.push(quote! { #ident });
                }
            }
            quote! {
                pub fn #fn_name(#(#params),*) -> Self {
                    #self_path(#(#inits),*)
                }
            }
        }
        Fields::Unit => {
            quote! {
                pub fn #fn_name() -> Self {
                    #self_path
                }
            }
        }
    }
}

fn is_default_field(field: &syn::Field) -> bool {
    field.attrs.iter().any(|attr| {
        attr.path().is_ident("new")
            && attr
                .parse_args::<syn::Path>()
                .map(|p| p.is_ident("default"))
                .unwrap_or(false)
    })
}

fn to_snake_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    for (i, ch) in s.char_indices() {
        if ch.is_uppercase() {
            if i != 0 {
                out.push('_');
            }
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

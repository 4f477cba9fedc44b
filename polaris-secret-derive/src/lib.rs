//! Derive macro for `polaris-secret`.
//!
//! This crate generates the recursive redaction proxy behind
//! `#[derive(Redact)]`. It:
//! - reads field visibility and `#[redact(...)]` attributes
//! - emits a `polaris_secret::RedactableWithMapper` implementation
//!
//! It does not define the marker type or the redaction options. Those live in
//! the main `polaris-secret` crate and are applied at runtime.

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
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else,
    clippy::manual_inspect
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[allow(unused_extern_crates)]
extern crate proc_macro;

use proc_macro_crate::{FoundCrate, crate_name};
use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Result, parse_macro_input, spanned::Spanned};

mod derive_enum;
mod derive_struct;
mod generics;
mod strategy;
mod transform;
use derive_enum::derive_enum;
use derive_struct::derive_struct;
use generics::{add_default_bounds, add_walk_bounds};

/// Derives `polaris_secret::RedactableWithMapper` for structs and enums.
///
/// The generated implementation reports `Kind::Struct` / `Kind::Enum` to the
/// mapper and rebuilds the value field by field.
///
/// # Field Rules
///
/// - **`pub` struct fields and all enum variant fields** are walked: the field
///   type must implement `RedactableWithMapper`, and every `SecretString`
///   reachable from it is redacted.
///
/// - **Non-`pub` struct fields** (including `pub(crate)` and friends) are not
///   part of the type's public contract. They are *not* copied: the redacted
///   value holds `Default::default()` in their place, so the field type must
///   implement `Default`.
///
/// - **Function pointer fields** (`fn(&str) -> bool`) are kept as they are.
///
/// - `#[redact(walk)]`: walk the field whatever its visibility.
///
/// - `#[redact(zero)]`: replace the field with `Default::default()`.
///
/// - `#[redact(skip)]`: keep the field as it is, without traversal. Use this
///   for foreign types that can never hold a secret and do not implement
///   `RedactableWithMapper`.
///
/// Generic parameters pick up `RedactableWithMapper` bounds when used by
/// walked fields and `Default` bounds when used by zeroed fields.
///
/// Unions and container-level `#[redact]` attributes are rejected at compile
/// time.
#[proc_macro_derive(Redact, attributes(redact))]
pub fn derive_redact(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Returns the token stream to reference the polaris-secret crate root.
///
/// Handles crate renaming (e.g., `secret = { package = "polaris-secret", ... }`)
/// and internal usage, where the crate refers to itself through
/// `extern crate self as polaris_secret`.
fn crate_root() -> TokenStream {
    match crate_name("polaris-secret") {
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
        Ok(FoundCrate::Itself) | Err(_) => quote! { ::polaris_secret },
    }
}

fn crate_path(item: &str) -> TokenStream {
    let root = crate_root();
    let item_ident = format_ident!("{}", item);
    quote! { #root::#item_ident }
}

struct DeriveOutput {
    redaction_body: TokenStream,
    walked_generics: Vec<Ident>,
    zeroed_generics: Vec<Ident>,
}

fn expand(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        attrs,
        ..
    } = input;

    if let Some(attr) = attrs.iter().find(|attr| attr.path().is_ident("redact")) {
        return Err(syn::Error::new(
            attr.span(),
            "#[redact(...)] is a field attribute and cannot be placed on the type",
        ));
    }

    let output = match data {
        Data::Struct(data) => derive_struct(data, &generics)?,
        Data::Enum(data) => derive_enum(data, &generics)?,
        Data::Union(u) => {
            return Err(syn::Error::new(
                u.union_token.span(),
                "`Redact` cannot be derived for unions",
            ));
        }
    };

    let crate_root = crate_root();
    let DeriveOutput {
        redaction_body,
        walked_generics,
        zeroed_generics,
    } = output;

    let bounded = add_walk_bounds(generics, &walked_generics);
    let bounded = add_default_bounds(bounded, &zeroed_generics);
    let (impl_generics, ty_generics, where_clause) = bounded.split_for_impl();

    Ok(quote! {
        impl #impl_generics #crate_root::RedactableWithMapper for #ident #ty_generics #where_clause {
            fn redact_with<M: #crate_root::RedactableMapper>(self, mapper: &M) -> Self {
                #redaction_body
            }
        }
    })
}

//! Enum-specific `RedactableWithMapper` derivation.
//!
//! Generates one match arm per variant. Variant fields are public, so every
//! field is walked unless a `#[redact(...)]` attribute says otherwise.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{DataEnum, Fields, Result, spanned::Spanned};

use crate::{
    DeriveOutput, crate_path,
    derive_struct::named_ident,
    strategy::{FieldOwner, field_strategy},
    transform::{DeriveContext, generate_field_transform},
};

pub(crate) fn derive_enum(data: DataEnum, generics: &syn::Generics) -> Result<DeriveOutput> {
    let container_path = crate_path("RedactableWithMapper");
    let kind_path = crate_path("Kind");
    let mut walked_generics = Vec::new();
    let mut zeroed_generics = Vec::new();
    let mut ctx = DeriveContext {
        generics,
        container_path: &container_path,
        walked_generics: &mut walked_generics,
        zeroed_generics: &mut zeroed_generics,
    };

    let mut arms = Vec::new();
    for variant in data.variants {
        let variant_ident = &variant.ident;
        let arm = match variant.fields {
            Fields::Unit => quote! { Self::#variant_ident => Self::#variant_ident },
            Fields::Named(fields) => {
                let mut patterns = Vec::new();
                let mut values = Vec::new();
                for (index, field) in fields.named.into_iter().enumerate() {
                    let span = field.span();
                    let strategy = field_strategy(&field.attrs, &field.ty, FieldOwner::Variant)?;
                    let binding = format_ident!("field_{index}");
                    let ident = named_ident(field.ident, span)?;
                    let transform =
                        generate_field_transform(&mut ctx, &field.ty, &binding, span, strategy);
                    let (pattern, value) = (transform.pattern, transform.value);
                    patterns.push(quote! { #ident: #pattern });
                    values.push(quote! { #ident: #value });
                }
                quote! {
                    Self::#variant_ident { #(#patterns),* } => Self::#variant_ident { #(#values),* }
                }
            }
            Fields::Unnamed(fields) => {
                let mut patterns = Vec::new();
                let mut values = Vec::new();
                for (index, field) in fields.unnamed.into_iter().enumerate() {
                    let span = field.span();
                    let strategy = field_strategy(&field.attrs, &field.ty, FieldOwner::Variant)?;
                    let binding = format_ident!("field_{index}");
                    let transform =
                        generate_field_transform(&mut ctx, &field.ty, &binding, span, strategy);
                    patterns.push(transform.pattern);
                    values.push(transform.value);
                }
                quote! {
                    Self::#variant_ident ( #(#patterns),* ) => Self::#variant_ident ( #(#values),* )
                }
            }
        };
        arms.push(arm);
    }

    let redaction_body: TokenStream = quote! {
        mapper.visit(#kind_path::Enum, ::core::any::type_name::<Self>());
        match self {
            #(#arms),*
        }
    };

    Ok(DeriveOutput {
        redaction_body,
        walked_generics,
        zeroed_generics,
    })
}

//! Struct-specific `RedactableWithMapper` derivation.
//!
//! Public fields are walked, non-public fields are replaced by their default,
//! unless a `#[redact(...)]` attribute says otherwise.

use proc_macro2::{Ident, Span};
use quote::{format_ident, quote};
use syn::{DataStruct, Fields, Result, spanned::Spanned};

use crate::{
    DeriveOutput, crate_path,
    strategy::{FieldOwner, field_strategy},
    transform::{DeriveContext, generate_field_transform},
};

pub(crate) fn derive_struct(data: DataStruct, generics: &syn::Generics) -> Result<DeriveOutput> {
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

    let rebuild = match data.fields {
        Fields::Named(fields) => {
            let mut patterns = Vec::new();
            let mut values = Vec::new();
            for (index, field) in fields.named.into_iter().enumerate() {
                let span = field.span();
                let strategy = field_strategy(&field.attrs, &field.ty, FieldOwner::Struct(&field.vis))?;
                let binding = format_ident!("field_{index}");
                let ident = named_ident(field.ident, span)?;
                let transform =
                    generate_field_transform(&mut ctx, &field.ty, &binding, span, strategy);
                let (pattern, value) = (transform.pattern, transform.value);
                patterns.push(quote! { #ident: #pattern });
                values.push(quote! { #ident: #value });
            }
            quote! {
                let Self { #(#patterns),* } = self;
                Self { #(#values),* }
            }
        }
        Fields::Unnamed(fields) => {
            let mut patterns = Vec::new();
            let mut values = Vec::new();
            for (index, field) in fields.unnamed.into_iter().enumerate() {
                let span = field.span();
                let strategy = field_strategy(&field.attrs, &field.ty, FieldOwner::Struct(&field.vis))?;
                let binding = format_ident!("field_{index}");
                let transform =
                    generate_field_transform(&mut ctx, &field.ty, &binding, span, strategy);
                patterns.push(transform.pattern);
                values.push(transform.value);
            }
            quote! {
                let Self ( #(#patterns),* ) = self;
                Self ( #(#values),* )
            }
        }
        Fields::Unit => quote! { self },
    };

    Ok(DeriveOutput {
        redaction_body: quote! {
            mapper.visit(#kind_path::Struct, ::core::any::type_name::<Self>());
            #rebuild
        },
        walked_generics,
        zeroed_generics,
    })
}

pub(crate) fn named_ident(ident: Option<Ident>, span: Span) -> Result<Ident> {
    ident.ok_or_else(|| syn::Error::new(span, "named field should have an identifier"))
}

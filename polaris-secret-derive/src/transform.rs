//! Shared field transformation logic for struct and enum derivation.

use proc_macro2::{Ident, Span, TokenStream};
use quote::{quote, quote_spanned};

use crate::{generics::collect_generics_from_type, strategy::Strategy};

/// Accumulated state during field processing.
pub(crate) struct DeriveContext<'a> {
    pub(crate) generics: &'a syn::Generics,
    pub(crate) container_path: &'a TokenStream,
    pub(crate) walked_generics: &'a mut Vec<Ident>,
    pub(crate) zeroed_generics: &'a mut Vec<Ident>,
}

/// How one field is destructured out of `self` and rebuilt.
pub(crate) struct FieldTransform {
    /// Pattern binding the original value (`_` when it is discarded).
    pub(crate) pattern: TokenStream,
    /// Expression producing the redacted value.
    pub(crate) value: TokenStream,
}

/// Generates the destructuring pattern and rebuild expression for one field.
///
/// | Strategy | Pattern   | Value                                     |
/// |----------|-----------|-------------------------------------------|
/// | `Walk`   | `binding` | `RedactableWithMapper::redact_with(binding, mapper)` |
/// | `Zero`   | `_`       | `Default::default()`                      |
/// | `Skip`   | `binding` | `binding`                                 |
pub(crate) fn generate_field_transform(
    ctx: &mut DeriveContext<'_>,
    ty: &syn::Type,
    binding: &Ident,
    span: Span,
    strategy: Strategy,
) -> FieldTransform {
    let container_path = ctx.container_path;

    match strategy {
        Strategy::Walk => {
            collect_generics_from_type(ty, ctx.generics, ctx.walked_generics);
            FieldTransform {
                pattern: quote! { #binding },
                value: quote_spanned! { span =>
                    #container_path::redact_with(#binding, mapper)
                },
            }
        }
        Strategy::Zero => {
            collect_generics_from_type(ty, ctx.generics, ctx.zeroed_generics);
            FieldTransform {
                pattern: quote! { _ },
                value: quote_spanned! { span =>
                    ::core::default::Default::default()
                },
            }
        }
        Strategy::Skip => FieldTransform {
            pattern: quote! { #binding },
            value: quote! { #binding },
        },
    }
}

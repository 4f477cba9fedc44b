//! Parsing of `#[redact(...)]` field attributes.
//!
//! This module maps attribute syntax and field visibility to traversal
//! decisions and produces structured errors for invalid forms.

use proc_macro2::Span;
use syn::{Attribute, Meta, Result, Type, Visibility, spanned::Spanned};

/// Field transformation strategy.
///
/// ## Strategy Mapping
///
/// | Field                               | Strategy | Behavior                                 |
/// |-------------------------------------|----------|------------------------------------------|
/// | `pub` struct field, enum field      | `Walk`   | Redact recursively                       |
/// | non-`pub` struct field              | `Zero`   | Replace with `Default::default()`        |
/// | `#[redact(walk)]`                   | `Walk`   | Redact recursively, whatever the visibility |
/// | `#[redact(zero)]`                   | `Zero`   | Replace with `Default::default()`        |
/// | `#[redact(skip)]`                   | `Skip`   | Keep as-is, no traversal                 |
/// | unannotated function pointer        | `Skip`   | Keep as-is, no traversal                 |
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Strategy {
    Walk,
    Zero,
    Skip,
}

/// Where a field lives; decides the strategy of unannotated fields.
#[derive(Clone, Copy, Debug)]
pub(crate) enum FieldOwner<'a> {
    /// A struct field: only the public contract is walked.
    Struct(&'a Visibility),
    /// An enum variant field: always public.
    Variant,
}

fn set_strategy(target: &mut Option<Strategy>, next: Strategy, span: Span) -> Result<()> {
    if target.is_some() {
        return Err(syn::Error::new(
            span,
            "multiple #[redact] options on the same field",
        ));
    }
    *target = Some(next);
    Ok(())
}

/// Parses an explicit `#[redact(...)]` override, if any.
pub(crate) fn parse_field_override(attrs: &[Attribute]) -> Result<Option<Strategy>> {
    let mut strategy: Option<Strategy> = None;
    for attr in attrs {
        if !attr.path().is_ident("redact") {
            continue;
        }

        match &attr.meta {
            Meta::Path(_) => {
                return Err(syn::Error::new(
                    attr.span(),
                    "missing option: use #[redact(skip)], #[redact(zero)] or #[redact(walk)]",
                ));
            }
            Meta::List(list) => {
                list.parse_nested_meta(|meta| {
                    let next = if meta.path.is_ident("skip") {
                        Strategy::Skip
                    } else if meta.path.is_ident("zero") {
                        Strategy::Zero
                    } else if meta.path.is_ident("walk") {
                        Strategy::Walk
                    } else {
                        return Err(meta.error(
                            "unknown #[redact] option; expected `skip`, `zero` or `walk`",
                        ));
                    };
                    if !meta.input.is_empty() && !meta.input.peek(syn::Token![,]) {
                        return Err(meta.error("#[redact] options do not take arguments"));
                    }
                    set_strategy(&mut strategy, next, attr.span())
                })?;
            }
            Meta::NameValue(_) => {
                return Err(syn::Error::new(
                    attr.span(),
                    "expected #[redact(option)] syntax (e.g., #[redact(skip)])",
                ));
            }
        }
    }
    Ok(strategy)
}

/// Resolves the strategy for a field from its attributes, type and visibility.
///
/// Function pointers never hold data and may be higher-ranked
/// (`fn(&str) -> bool`), which no trait impl can cover, so they are kept as-is.
pub(crate) fn field_strategy(
    attrs: &[Attribute],
    ty: &Type,
    owner: FieldOwner<'_>,
) -> Result<Strategy> {
    if let Some(strategy) = parse_field_override(attrs)? {
        return Ok(strategy);
    }
    if is_fn_pointer(ty) {
        return Ok(Strategy::Skip);
    }
    Ok(match owner {
        FieldOwner::Struct(Visibility::Public(_)) | FieldOwner::Variant => Strategy::Walk,
        FieldOwner::Struct(_) => Strategy::Zero,
    })
}

fn is_fn_pointer(ty: &Type) -> bool {
    match ty {
        Type::BareFn(_) => true,
        Type::Paren(paren) => is_fn_pointer(&paren.elem),
        Type::Group(group) => is_fn_pointer(&group.elem),
        _ => false,
    }
}

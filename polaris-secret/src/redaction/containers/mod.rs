//! `RedactableWithMapper` implementations for standard library types.
//!
//! Every implementation reports its [`Kind`](super::Kind) to the mapper and
//! then rebuilds the value from redacted parts.
//!
//! ## Map Keys Are Redacted
//!
//! Keys and values of `HashMap` / `BTreeMap` are walked independently. A map
//! keyed by `SecretString` therefore collapses to a single redacted key; the
//! value that survives is the last one inserted (for `BTreeMap`, the one under
//! the greatest original key).
//!
//! ## Set Redaction Can Collapse Elements
//!
//! For `HashSet` / `BTreeSet`, each element is redacted and the results are
//! collected back into a set, which may shrink it.

mod cells;
mod maps;
mod opaque;
mod passthrough;
mod sequences;
mod sets;
mod wrappers;

#[cfg(test)]
mod tests;

// =============================================================================
// Passthrough implementation helper
// =============================================================================

macro_rules! impl_redactable_passthrough {
    ($ty:ty) => {
        impl crate::redaction::traits::RedactableWithMapper for $ty {
            fn redact_with<M: crate::redaction::redact::RedactableMapper>(
                self,
                mapper: &M,
            ) -> Self {
                mapper.visit(
                    crate::redaction::redact::Kind::Leaf,
                    ::std::any::type_name::<Self>(),
                );
                self
            }
        }
    };
}

pub(super) use impl_redactable_passthrough;

//! Core traits for walking values and redacting the secrets they contain.
//!
//! - [`RedactableWithMapper`]: one recursive proxy step per type
//! - [`Redactable`]: user-facing `.redact()` methods

use super::redact::{self, RedactableMapper};
use crate::options::RedactOption;

// =============================================================================
// RedactableWithMapper - recursive proxy
// =============================================================================

/// A type that participates in redaction traversal.
///
/// Each implementation is one case of the traversal: it reports itself to the
/// mapper through [`RedactableMapper::visit`], then rebuilds `self` from the
/// redacted copies of its parts. Leaf types return themselves unchanged,
/// except [`SecretString`](crate::SecretString), which is handed to
/// [`RedactableMapper::map_secret`].
///
/// Implemented for std scalars and containers, and generated for your own
/// types by `#[derive(Redact)]`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `RedactableWithMapper`",
    label = "this type cannot be walked for secrets",
    note = "use `#[derive(Redact)]` on the type definition",
    note = "or mark the field with `#[redact(skip)]` if it can never hold a secret"
)]
pub trait RedactableWithMapper: Sized {
    /// Returns a copy of `self` with every secret replaced by the mapper.
    #[must_use]
    fn redact_with<M: RedactableMapper>(self, mapper: &M) -> Self;

    /// Returns `true` when [`redact`](crate::redact) should hand the value
    /// back without traversal: nil values (`None`, `Dynamic::Null`) and
    /// opaque ones (function pointers, channel endpoints).
    fn is_nil_or_opaque(&self) -> bool {
        false
    }
}

// =============================================================================
// Redactable - User-facing .redact() methods
// =============================================================================

/// Method-call entrypoints, blanket-implemented for every
/// [`RedactableWithMapper`] type.
pub trait Redactable: RedactableWithMapper {
    /// Redacts the value with the default options.
    #[must_use]
    fn redact(self) -> Self {
        redact::redact(self, &[])
    }

    /// Redacts the value with the given options.
    #[must_use]
    fn redact_with_options(self, options: &[RedactOption]) -> Self {
        redact::redact(self, options)
    }
}

impl<T> Redactable for T where T: RedactableWithMapper {}

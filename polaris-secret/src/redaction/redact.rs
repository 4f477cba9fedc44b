//! The redaction entrypoint and the mapper that performs substitutions.

use std::fmt;

use super::traits::RedactableWithMapper;
use crate::{
    SecretString,
    options::{RedactConfig, RedactOption},
};

// =============================================================================
// Kind - traversal cases
// =============================================================================

/// The traversal case a [`RedactableWithMapper`] implementation belongs to.
///
/// Reported to [`RedactableMapper::visit`] on every step; the built-in
/// [`Redactor`] logs it in debug mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Fixed-size array.
    Array,
    /// [`Dynamic`](crate::Dynamic) value.
    Dynamic,
    /// Associative map; keys and values are both walked.
    Map,
    /// Owning or shared pointer (`Box`, `Rc`, `Arc`, cells).
    Pointer,
    /// Growable sequence (`Vec`, `VecDeque`).
    Sequence,
    /// Set; equal redacted elements collapse.
    Set,
    /// `Option` or `Result`.
    Optional,
    /// Tuple.
    Tuple,
    /// Derived struct.
    Struct,
    /// Derived enum.
    Enum,
    /// Anything without inner structure, including `SecretString`.
    Leaf,
}

impl Kind {
    /// Lower-case name used in log output.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Array => "array",
            Self::Dynamic => "dynamic",
            Self::Map => "map",
            Self::Pointer => "pointer",
            Self::Sequence => "sequence",
            Self::Set => "set",
            Self::Optional => "optional",
            Self::Tuple => "tuple",
            Self::Struct => "struct",
            Self::Enum => "enum",
            Self::Leaf => "leaf",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// RedactableMapper - what happens at each step
// =============================================================================

/// Decides what a secret becomes and observes each traversal step.
pub trait RedactableMapper {
    /// Returns the replacement for a secret leaf.
    fn map_secret(&self, value: SecretString) -> SecretString;

    /// Called once at the start of every traversal step.
    fn visit(&self, _kind: Kind, _type_name: &'static str) {}
}

/// The mapper behind [`redact`]: substitutes the configured redaction text and
/// logs each step through `tracing` when debug mode is on.
#[derive(Clone, Debug)]
pub struct Redactor {
    config: RedactConfig,
}

impl Redactor {
    /// Creates a redactor for one redaction call.
    pub fn new(config: RedactConfig) -> Self {
        Self { config }
    }

    /// The configuration this redactor applies.
    pub fn config(&self) -> &RedactConfig {
        &self.config
    }
}

impl Default for Redactor {
    fn default() -> Self {
        Self::new(RedactConfig::default())
    }
}

impl RedactableMapper for Redactor {
    fn map_secret(&self, _value: SecretString) -> SecretString {
        SecretString::new(self.config.redaction_text.as_str())
    }

    fn visit(&self, kind: Kind, type_name: &'static str) {
        if self.config.debug_mode {
            tracing::debug!(
                target: "polaris_secret::redact",
                case = kind.as_str(),
                value_type = type_name,
                "redact step"
            );
        }
    }
}

// =============================================================================
// redact - entrypoint
// =============================================================================

/// Returns a copy of `value` in which every [`SecretString`] holds the
/// redaction text.
///
/// Nil values (`None`, `Dynamic::Null`) and opaque ones (function pointers,
/// channel endpoints) are returned as they are. Otherwise the options are
/// applied in order on top of [`RedactConfig::default`] and the value is
/// walked with a [`Redactor`]. Never fails.
///
/// Only secrets the traversal can reach are replaced: non-`pub` fields of
/// derived structs are reset to their default instead, `#[redact(skip)]`
/// fields are kept untouched, and plain strings are never redacted.
///
/// ```rust
/// use polaris_secret::{SecretString, redact, redaction_text};
///
/// let keys = vec![SecretString::from("a"), SecretString::from("b")];
/// assert_eq!(redact(keys, &[]), ["REDACTED", "REDACTED"]);
///
/// let key = SecretString::from("a");
/// assert_eq!(redact(key, &[redaction_text("X")]), "X");
/// ```
pub fn redact<T>(value: T, options: &[RedactOption]) -> T
where
    T: RedactableWithMapper,
{
    if value.is_nil_or_opaque() {
        return value;
    }
    let redactor = Redactor::new(RedactConfig::from_options(options));
    value.redact_with(&redactor)
}

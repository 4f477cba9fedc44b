//! Redaction traversal and entrypoints.
//!
//! - **`traits`**: `RedactableWithMapper` (one dispatch case per type) and the
//!   user-facing `Redactable`
//! - **`redact`**: the `redact` entrypoint, `RedactableMapper`, `Redactor`, `Kind`
//! - **`containers`**: implementations for std types
//! - **`dynamic`**: the `Dynamic` value enum standing in for "any"
//! - **`json`**: `serde_json` support (feature `json`)

mod containers;
mod dynamic;
#[cfg(feature = "json")]
mod json;
mod redact;
mod traits;

pub use dynamic::Dynamic;
#[cfg(feature = "json")]
pub use json::{RedactedJson, RedactedJsonExt};
pub use redact::{Kind, RedactableMapper, Redactor, redact};
pub use traits::{Redactable, RedactableWithMapper};

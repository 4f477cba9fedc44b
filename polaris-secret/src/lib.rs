//! Type-preserving redaction of secrets in arbitrary value graphs.
//!
//! Request and response payloads of the SDK carry credentials (access keys,
//! secret keys, passwords, RSA keys). Before such a payload is written to a
//! debug log it is passed through [`redact`], which returns a structurally
//! identical copy in which every [`SecretString`] has been replaced by a fixed
//! redaction text.
//!
//! The engine matches on *type*, never on content:
//! - wrap every credential in [`SecretString`]; plain `String` fields are
//!   never redacted, whatever their name
//! - only `pub` fields of `#[derive(Redact)]` structs are traversed; other
//!   fields come back as `Default::default()`
//!
//! ```rust
//! use polaris_secret::{Redact, SecretString, redact, redaction_text};
//!
//! #[derive(Debug, Redact)]
//! struct AwsCredentials {
//!     pub access_key: String,
//!     pub secret_key: SecretString,
//! }
//!
//! let creds = AwsCredentials {
//!     access_key: "AKIAEXAMPLE".into(),
//!     secret_key: "wJalrXUtnFEMI".into(),
//! };
//! let redacted = redact(creds, &[redaction_text("***")]);
//! assert_eq!(redacted.access_key, "AKIAEXAMPLE");
//! assert_eq!(redacted.secret_key, "***");
//! ```
//!
//! The `Redact` derive macro lives in `polaris-secret-derive` and is
//! re-exported from this crate.

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
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

pub use polaris_secret_derive::Redact;

#[allow(unused_extern_crates)]
extern crate self as polaris_secret;

mod options;
mod redaction;
#[cfg(feature = "slog")]
pub mod slog;
mod string;
pub mod tracing;

pub use options::{DEFAULT_REDACTION_TEXT, RedactConfig, RedactOption, debug, redaction_text};
pub use redaction::{
    Dynamic, Kind, Redactable, RedactableMapper, RedactableWithMapper, Redactor, redact,
};
#[cfg(feature = "json")]
pub use redaction::{RedactedJson, RedactedJsonExt};
pub use string::SecretString;

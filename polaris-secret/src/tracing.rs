//! Adapters for emitting redacted payloads through `tracing`.
//!
//! # Example
//!
//! ```ignore
//! use polaris_secret::tracing::TracingRedactedExt;
//!
//! tracing::debug!(request = %request.tracing_redacted(), "create AWS account");
//! ```

use std::fmt;

use tracing::field::{DisplayValue, display};

use crate::{options::RedactOption, redaction::Redactable};

/// Extension trait for logging a redacted copy of a value.
///
/// The value is cloned and redacted, and its `Debug` form becomes a
/// `tracing` display field. The original is left untouched.
pub trait TracingRedactedExt {
    /// Redacts with the default options.
    fn tracing_redacted(&self) -> DisplayValue<String>;

    /// Redacts with `options`.
    fn tracing_redacted_with(&self, options: &[RedactOption]) -> DisplayValue<String>;
}

impl<T> TracingRedactedExt for T
where
    T: Redactable + Clone + fmt::Debug,
{
    fn tracing_redacted(&self) -> DisplayValue<String> {
        self.tracing_redacted_with(&[])
    }

    fn tracing_redacted_with(&self, options: &[RedactOption]) -> DisplayValue<String> {
        let redacted = self.clone().redact_with_options(options);
        display(format!("{redacted:?}"))
    }
}

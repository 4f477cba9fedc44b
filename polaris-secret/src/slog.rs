//! Adapters for emitting redacted values through `slog`.
//!
//! The logged representation is always derived from a redacted copy and is
//! emitted as structured JSON via `slog`'s nested-value support. Serialization
//! failures become placeholder strings rather than logging errors.
//!
//! It does not configure `slog`.

use serde::Serialize;
use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

pub use crate::redaction::RedactedJson;
use crate::{options::RedactOption, redaction::Redactable};

/// Marker trait for `slog::Value` types that only ever emit redacted output.
///
/// ```compile_fail
/// use polaris_secret::slog::SlogRedacted;
///
/// fn assert_slog_redacted<T: SlogRedacted>() {}
///
/// assert_slog_redacted::<String>();
/// ```
pub trait SlogRedacted: SlogValue {}

impl<T: SlogRedacted + ?Sized> SlogRedacted for &T {}

impl SlogValue for RedactedJson {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.value().clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

impl SlogRedacted for RedactedJson {}

/// Extension trait for slog logging of redacted payloads.
///
/// ```ignore
/// use polaris_secret::slog::SlogRedactedExt;
///
/// info!(logger, "add archival location"; "request" => request.slog_redacted_json());
/// ```
pub trait SlogRedactedExt: Redactable + Serialize {
    /// Redacts `self` with the default options into a structured `slog::Value`.
    fn slog_redacted_json(self) -> RedactedJson {
        self.slog_redacted_json_with(&[])
    }

    /// Redacts `self` with `options` into a structured `slog::Value`.
    fn slog_redacted_json_with(self, options: &[RedactOption]) -> RedactedJson {
        RedactedJson::from_redacted(&self.redact_with_options(options))
    }
}

impl<T> SlogRedactedExt for T where T: Redactable + Serialize {}

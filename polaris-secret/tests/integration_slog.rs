//! Integration tests for the slog module.
//!
//! These tests verify that:
//! - `slog_redacted_json()` produces correctly redacted JSON values
//! - The `slog::Value` implementation emits nested serde values

#![cfg(feature = "slog")]

use std::{cell::RefCell, collections::HashMap, fmt::Arguments};

use polaris_secret::{
    Redact, RedactedJson, SecretString, redaction_text,
    slog::{SlogRedacted, SlogRedactedExt},
};
use serde::Serialize;
use serde_json::Value as JsonValue;

// A test serializer that captures serialized key-value pairs
struct CapturingSerializer {
    captured: RefCell<HashMap<String, CapturedValue>>,
}

#[derive(Debug, Clone, PartialEq)]
enum CapturedValue {
    Str(String),
    Serde(JsonValue),
}

impl CapturingSerializer {
    fn new() -> Self {
        Self {
            captured: RefCell::new(HashMap::new()),
        }
    }

    fn get(&self, key: &str) -> Option<CapturedValue> {
        self.captured.borrow().get(key).cloned()
    }
}

impl slog::Serializer for CapturingSerializer {
    fn emit_arguments(&mut self, key: slog::Key, val: &Arguments<'_>) -> slog::Result {
        self.captured
            .borrow_mut()
            .insert(key.into(), CapturedValue::Str(val.to_string()));
        Ok(())
    }

    fn emit_serde(&mut self, key: slog::Key, val: &dyn slog::SerdeValue) -> slog::Result {
        let json = serde_json::to_value(val.as_serde()).unwrap_or(JsonValue::Null);
        self.captured
            .borrow_mut()
            .insert(key.into(), CapturedValue::Serde(json));
        Ok(())
    }
}

fn serialize_to_capture<V: slog::Value>(value: &V, key: &'static str) -> Option<CapturedValue> {
    static RS: slog::RecordStatic<'static> = slog::record_static!(slog::Level::Info, "");
    let mut serializer = CapturingSerializer::new();
    let args = format_args!("");
    let record = slog::Record::new(&RS, &args, slog::b!());
    value.serialize(&record, key, &mut serializer).unwrap();
    serializer.get(key)
}

#[derive(Clone, Serialize, Redact)]
struct AddClusterRequest {
    pub cluster_id: String,
    pub password: SecretString,
    pub tokens: Vec<SecretString>,
}

fn request() -> AddClusterRequest {
    AddClusterRequest {
        cluster_id: "c-1".into(),
        password: "hunter2".into(),
        tokens: vec!["t1".into(), "t2".into()],
    }
}

#[test]
fn redacted_json_implements_slog_redacted() {
    fn assert_slog_redacted<T: SlogRedacted>() {}

    assert_slog_redacted::<RedactedJson>();
    assert_slog_redacted::<&RedactedJson>();
}

#[test]
fn redacts_simple_struct() {
    let redacted = request().slog_redacted_json();

    let Some(CapturedValue::Serde(json)) = serialize_to_capture(&redacted, "request") else {
        panic!("Expected Serde value for 'request' key");
    };
    assert_eq!(json["cluster_id"], "c-1");
    assert_eq!(json["password"], "REDACTED");
    assert_eq!(json["tokens"], serde_json::json!(["REDACTED", "REDACTED"]));
}

#[test]
fn honors_redaction_text() {
    let redacted = request().slog_redacted_json_with(&[redaction_text("***")]);

    let Some(CapturedValue::Serde(json)) = serialize_to_capture(&redacted, "request") else {
        panic!("Expected Serde value for 'request' key");
    };
    assert_eq!(json["password"], "***");
}

#[test]
fn works_with_slog_macros() {
    let drain = slog::Discard;
    let logger = slog::Logger::root(drain, slog::o!());
    slog::info!(logger, "add cluster"; "request" => request().slog_redacted_json());
}

//! `serde_json` support: JSON output of redacted values and JSON conversions
//! for [`Dynamic`].
//!
//! `serde_json::Value` itself is a leaf: it has no way to mark a string as a
//! secret, so it passes through unchanged. Convert it to [`Dynamic`] and wrap
//! the credential-bearing entries in `Dynamic::Secret` to have them redacted.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value as JsonValue};

use super::{containers::impl_redactable_passthrough, dynamic::Dynamic, traits::Redactable};
use crate::options::RedactOption;

impl_redactable_passthrough!(JsonValue);

// =============================================================================
// RedactedJson - JSON form of a redacted value
// =============================================================================

/// The JSON form of an already redacted value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RedactedJson(JsonValue);

impl RedactedJson {
    /// Wraps a JSON value that holds no secrets.
    pub fn new(value: JsonValue) -> Self {
        Self(value)
    }

    /// The redacted JSON.
    pub fn value(&self) -> &JsonValue {
        &self.0
    }

    /// Consumes the wrapper and returns the redacted JSON.
    #[must_use]
    pub fn into_value(self) -> JsonValue {
        self.0
    }

    /// Serializes a value that has already been redacted.
    pub(crate) fn from_redacted<T: Serialize>(redacted: &T) -> Self {
        let json = serde_json::to_value(redacted).unwrap_or_else(|err| {
            JsonValue::String(format!("Failed to serialize redacted value: {err}"))
        });
        Self(json)
    }
}

impl fmt::Display for RedactedJson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Serialize for RedactedJson {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

/// Extension trait for logging payloads as redacted JSON.
///
/// The value is cloned, redacted, then serialized. A serialization failure
/// never propagates: the result is then a JSON string describing the error.
pub trait RedactedJsonExt: Redactable + Clone + Serialize {
    /// Redacts a clone of `self` with the default options.
    fn redacted_json(&self) -> RedactedJson {
        self.redacted_json_with(&[])
    }

    /// Redacts a clone of `self` with `options`.
    fn redacted_json_with(&self, options: &[RedactOption]) -> RedactedJson {
        RedactedJson::from_redacted(&self.clone().redact_with_options(options))
    }
}

impl<T> RedactedJsonExt for T where T: Redactable + Clone + Serialize {}

// =============================================================================
// Dynamic <-> JSON
// =============================================================================

impl From<JsonValue> for Dynamic {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => Self::Null,
            JsonValue::Bool(value) => Self::Bool(value),
            JsonValue::Number(number) => {
                if let Some(value) = number.as_i64() {
                    Self::Int(value)
                } else if let Some(value) = number.as_u64() {
                    Self::UInt(value)
                } else {
                    number.as_f64().map_or(Self::Null, Self::Float)
                }
            }
            JsonValue::String(text) => Self::Text(text),
            JsonValue::Array(values) => Self::List(values.into_iter().map(Into::into).collect()),
            JsonValue::Object(map) => Self::Map(
                map.into_iter()
                    .map(|(key, value)| (key, value.into()))
                    .collect(),
            ),
        }
    }
}

impl From<Dynamic> for JsonValue {
    fn from(value: Dynamic) -> Self {
        match value {
            Dynamic::Null => Self::Null,
            Dynamic::Bool(value) => Self::Bool(value),
            Dynamic::Int(value) => Self::Number(value.into()),
            Dynamic::UInt(value) => Self::Number(value.into()),
            Dynamic::Float(value) => Number::from_f64(value).map_or(Self::Null, Self::Number),
            Dynamic::Text(text) => Self::String(text),
            Dynamic::Secret(secret) => Self::String(secret.into_inner()),
            Dynamic::List(values) => Self::Array(values.into_iter().map(Into::into).collect()),
            Dynamic::Map(map) => Self::Object(
                map.into_iter()
                    .map(|(key, value)| (key, value.into()))
                    .collect(),
            ),
        }
    }
}

impl Serialize for Dynamic {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(value) => serializer.serialize_bool(*value),
            Self::Int(value) => serializer.serialize_i64(*value),
            Self::UInt(value) => serializer.serialize_u64(*value),
            Self::Float(value) => serializer.serialize_f64(*value),
            Self::Text(text) => serializer.serialize_str(text),
            Self::Secret(secret) => serializer.serialize_str(secret),
            Self::List(values) => serializer.collect_seq(values),
            Self::Map(map) => serializer.collect_map(map),
        }
    }
}

/// Deserialized strings become `Dynamic::Text`; nothing is a secret until the
/// caller marks it.
impl<'de> Deserialize<'de> for Dynamic {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        JsonValue::deserialize(deserializer).map(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{SecretString, redaction_text};

    #[derive(Clone, Serialize)]
    struct Credentials {
        user: String,
        password: SecretString,
    }

    impl crate::RedactableWithMapper for Credentials {
        fn redact_with<M: crate::RedactableMapper>(self, mapper: &M) -> Self {
            Self {
                user: self.user,
                password: self.password.redact_with(mapper),
            }
        }
    }

    #[test]
    fn redacted_json_serializes_the_redacted_copy() {
        let creds = Credentials {
            user: "admin".into(),
            password: "hunter2".into(),
        };
        assert_eq!(
            creds.redacted_json().into_value(),
            json!({ "user": "admin", "password": "REDACTED" })
        );
        assert_eq!(creds.password, "hunter2");
    }

    #[test]
    fn redacted_json_with_honors_options() {
        let secret = SecretString::from("key");
        assert_eq!(
            secret.redacted_json_with(&[redaction_text("***")]).to_string(),
            "\"***\""
        );
    }

    #[test]
    fn json_value_is_a_leaf() {
        let value = json!({ "password": "hunter2" });
        assert_eq!(value.clone().redact(), value);
    }

    #[test]
    fn dynamic_round_trips_through_json() {
        let value = json!({ "n": -1, "u": u64::MAX, "f": 1.5, "list": [true, null] });
        let dynamic = Dynamic::from(value.clone());
        assert_eq!(dynamic.get("n"), Some(&Dynamic::Int(-1)));
        assert_eq!(dynamic.get("u"), Some(&Dynamic::UInt(u64::MAX)));
        assert_eq!(JsonValue::from(dynamic), value);
    }

    #[test]
    fn dynamic_secret_serializes_as_plain_string() {
        let dynamic = Dynamic::Secret(SecretString::from("pw"));
        assert_eq!(serde_json::to_value(&dynamic).unwrap(), json!("pw"));
        assert_eq!(serde_json::to_value(dynamic.redact()).unwrap(), json!("REDACTED"));
    }
}

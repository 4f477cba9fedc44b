//! A closed set of runtime-typed values.
//!
//! Payload fragments whose shape is only known at runtime (GraphQL variables,
//! free-form metadata) are modelled as [`Dynamic`]. Redaction rebuilds the
//! same variant around the redacted payload.

use std::collections::BTreeMap;

use crate::{
    SecretString,
    redaction::{
        redact::{Kind, RedactableMapper},
        traits::RedactableWithMapper,
    },
};

/// A dynamically typed value.
///
/// `Null` plays the role of a nil "any": [`redact`](crate::redact) returns it
/// unchanged without traversal.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Dynamic {
    /// No value.
    #[default]
    Null,
    /// Boolean.
    Bool(bool),
    /// Signed integer.
    Int(i64),
    /// Unsigned integer too large for `Int`.
    UInt(u64),
    /// Floating-point number.
    Float(f64),
    /// Plain text, never redacted.
    Text(String),
    /// Text that is replaced during redaction.
    Secret(SecretString),
    /// Ordered list; each element is redacted.
    List(Vec<Dynamic>),
    /// String-keyed map; keys are plain text, values are redacted.
    Map(BTreeMap<String, Dynamic>),
}

impl Dynamic {
    /// Whether `self` is `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Looks up `key` when `self` is a map.
    pub fn get(&self, key: &str) -> Option<&Dynamic> {
        match self {
            Self::Map(map) => map.get(key),
            _ => None,
        }
    }

    /// Returns the text of a `Text` or `Secret` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Secret(secret) => Some(secret.as_str()),
            _ => None,
        }
    }
}

impl RedactableWithMapper for Dynamic {
    fn redact_with<M: RedactableMapper>(self, mapper: &M) -> Self {
        mapper.visit(Kind::Dynamic, std::any::type_name::<Self>());
        match self {
            Self::Null => Self::Null,
            Self::Bool(value) => Self::Bool(value.redact_with(mapper)),
            Self::Int(value) => Self::Int(value.redact_with(mapper)),
            Self::UInt(value) => Self::UInt(value.redact_with(mapper)),
            Self::Float(value) => Self::Float(value.redact_with(mapper)),
            Self::Text(value) => Self::Text(value.redact_with(mapper)),
            Self::Secret(value) => Self::Secret(value.redact_with(mapper)),
            Self::List(values) => Self::List(values.redact_with(mapper)),
            Self::Map(map) => Self::Map(map.redact_with(mapper)),
        }
    }

    fn is_nil_or_opaque(&self) -> bool {
        self.is_null()
    }
}

impl From<bool> for Dynamic {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Dynamic {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u64> for Dynamic {
    fn from(value: u64) -> Self {
        Self::UInt(value)
    }
}

impl From<f64> for Dynamic {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<String> for Dynamic {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for Dynamic {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<SecretString> for Dynamic {
    fn from(value: SecretString) -> Self {
        Self::Secret(value)
    }
}

impl<T: Into<Dynamic>> From<Vec<T>> for Dynamic {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Dynamic>> From<Option<T>> for Dynamic {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<K: Into<String>, V: Into<Dynamic>> FromIterator<(K, V)> for Dynamic {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::Map(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

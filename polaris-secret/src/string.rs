//! The sensitive-text marker type.

use std::{borrow::Borrow, fmt, ops::Deref};

/// Text that must never reach a log unredacted.
///
/// `SecretString` behaves like a plain string everywhere (it derefs to `str`,
/// formats as its content, compares with `str` and `String`, and serializes
/// transparently under the `json` feature). Its *type* is what the redaction
/// engine looks for: passing a value through [`redact`](crate::redact)
/// replaces every `SecretString` it contains with the configured redaction
/// text, regardless of the content.
///
/// ```rust
/// use polaris_secret::{Redactable, SecretString};
///
/// let password = SecretString::from("hunter2");
/// assert_eq!(password, "hunter2");
/// assert_eq!(password.redact(), "REDACTED");
/// ```
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "json",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct SecretString(String);

impl SecretString {
    /// Creates a marker around `value`.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the wrapped text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the marker and returns the wrapped text.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for SecretString {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for SecretString {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<SecretString> for String {
    fn from(value: SecretString) -> Self {
        value.0
    }
}

impl Deref for SecretString {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for SecretString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for SecretString {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl PartialEq<str> for SecretString {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SecretString {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<String> for SecretString {
    fn eq(&self, other: &String) -> bool {
        &self.0 == other
    }
}

//! Per-call redaction options and the configuration record built from them.

/// Text substituted for every [`SecretString`](crate::SecretString) unless a
/// [`redaction_text`] option overrides it.
pub const DEFAULT_REDACTION_TEXT: &str = "REDACTED";

/// A single directive passed to [`redact`](crate::redact).
///
/// Options are applied in the order given; a later option of the same kind
/// overrides an earlier one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RedactOption {
    /// Emit one `DEBUG` event per traversal step.
    Debug(bool),
    /// Replace secrets with this text instead of [`DEFAULT_REDACTION_TEXT`].
    RedactionText(String),
}

/// Turns debug logging of the traversal on or off.
pub fn debug(enabled: bool) -> RedactOption {
    RedactOption::Debug(enabled)
}

/// Sets the text secrets are replaced with.
pub fn redaction_text(text: impl Into<String>) -> RedactOption {
    RedactOption::RedactionText(text.into())
}

/// Configuration for one redaction call.
///
/// Built from [`RedactConfig::default`] plus the supplied options and never
/// modified afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RedactConfig {
    pub(crate) debug_mode: bool,
    pub(crate) redaction_text: String,
}

impl RedactConfig {
    /// Applies `options` in order on top of the defaults.
    pub fn from_options(options: &[RedactOption]) -> Self {
        options
            .iter()
            .fold(Self::default(), |mut config, option| {
                match option {
                    RedactOption::Debug(enabled) => config.debug_mode = *enabled,
                    RedactOption::RedactionText(text) => config.redaction_text.clone_from(text),
                }
                config
            })
    }

    /// Whether traversal steps are logged.
    pub fn debug_mode(&self) -> bool {
        self.debug_mode
    }

    /// The text secrets are replaced with.
    pub fn redaction_text(&self) -> &str {
        &self.redaction_text
    }
}

impl Default for RedactConfig {
    fn default() -> Self {
        Self {
            debug_mode: false,
            redaction_text: DEFAULT_REDACTION_TEXT.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_options() {
        let config = RedactConfig::from_options(&[]);
        assert!(!config.debug_mode());
        assert_eq!(config.redaction_text(), "REDACTED");
    }

    #[test]
    fn options_override_defaults() {
        let config = RedactConfig::from_options(&[debug(true), redaction_text("***")]);
        assert!(config.debug_mode());
        assert_eq!(config.redaction_text(), "***");
    }

    #[test]
    fn last_option_of_a_kind_wins() {
        let config = RedactConfig::from_options(&[
            redaction_text("first"),
            debug(true),
            redaction_text("second"),
            debug(false),
        ]);
        assert!(!config.debug_mode());
        assert_eq!(config.redaction_text(), "second");
    }

    #[test]
    fn empty_redaction_text_is_allowed() {
        let config = RedactConfig::from_options(&[redaction_text("")]);
        assert_eq!(config.redaction_text(), "");
    }
}

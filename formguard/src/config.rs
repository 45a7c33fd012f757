//! Validation configuration.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigurationError;
use crate::validators::PatternRule;

/// Messages and defaults shared by the fields of a form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Message recorded by the required gate.
    #[serde(default = "default_required_message")]
    pub required_message: String,
    /// Prefix put in front of wrapped unexpected failures.
    #[serde(default = "default_unexpected_prefix")]
    pub unexpected_message_prefix: String,
    /// Whether pattern rules built from this config ignore case.
    #[serde(default = "default_case_insensitive")]
    pub case_insensitive_patterns: bool,
}

fn default_required_message() -> String {
    "This field is required.".to_string()
}

fn default_unexpected_prefix() -> String {
    "Unknown error".to_string()
}

fn default_case_insensitive() -> bool {
    true
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            required_message: default_required_message(),
            unexpected_message_prefix: default_unexpected_prefix(),
            case_insensitive_patterns: default_case_insensitive(),
        }
    }
}

impl ValidationConfig {
    /// Creates a new configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a configuration from JSON. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigurationError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets the required message.
    #[must_use]
    pub fn with_required_message(mut self, message: impl Into<String>) -> Self {
        self.required_message = message.into();
        self
    }

    /// Sets the unexpected-error prefix.
    #[must_use]
    pub fn with_unexpected_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.unexpected_message_prefix = prefix.into();
        self
    }

    /// Sets pattern case sensitivity.
    #[must_use]
    pub fn with_case_insensitive_patterns(mut self, enabled: bool) -> Self {
        self.case_insensitive_patterns = enabled;
        self
    }

    /// Builds a pattern rule honoring this config's case setting.
    pub fn pattern(
        &self,
        pattern: &str,
        message: Option<String>,
    ) -> Result<PatternRule, ConfigurationError> {
        PatternRule::with_case(pattern, message, self.case_insensitive_patterns)
    }
}

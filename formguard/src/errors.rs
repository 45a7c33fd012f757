//! Error types for the formguard library.
//!
//! Three layers live here:
//!
//! - [`FieldError`]: a user-facing record stored in a field's error list.
//! - [`ValidationError`]: what a single validator returns when it fails. The
//!   variant decides whether the validation loop continues or stops.
//! - [`ConfigurationError`]: programmer mistakes (malformed descriptors,
//!   duplicate field names). These propagate to the caller and are never
//!   recorded as field errors.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The kind of a recorded field error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorKind {
    /// Emitted by the required gate when a mandatory field has no data.
    Required,
    /// Raised by a validator; remaining validators are skipped.
    Terminal,
    /// Raised by a validator; remaining validators still run.
    Recoverable,
    /// A lower-level failure surfaced from a validator and was wrapped.
    Unexpected,
}

impl FieldErrorKind {
    /// Returns true if this kind halts the rest of the validation run.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Required | Self::Terminal)
    }
}

impl fmt::Display for FieldErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => write!(f, "required"),
            Self::Terminal => write!(f, "terminal"),
            Self::Recoverable => write!(f, "recoverable"),
            Self::Unexpected => write!(f, "unexpected"),
        }
    }
}

/// A single user-facing error recorded on a field.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct FieldError {
    /// What produced the error.
    pub kind: FieldErrorKind,
    /// Human-readable message, rendered as-is by the host.
    pub message: String,
}

impl FieldError {
    /// Creates a new field error.
    #[must_use]
    pub fn new(kind: FieldErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Creates the synthetic error emitted by the required gate.
    #[must_use]
    pub fn required(message: impl Into<String>) -> Self {
        Self::new(FieldErrorKind::Required, message)
    }

    /// Creates a terminal error.
    #[must_use]
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::new(FieldErrorKind::Terminal, message)
    }

    /// Creates a recoverable error.
    #[must_use]
    pub fn recoverable(message: impl Into<String>) -> Self {
        Self::new(FieldErrorKind::Recoverable, message)
    }

    /// Creates an error wrapping an unexpected failure.
    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(FieldErrorKind::Unexpected, message)
    }

    /// Returns true if this error stopped the validation run.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.kind.is_terminal()
    }
}

/// Failure returned by a single validator invocation.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Record the message and keep running the remaining validators.
    #[error("{0}")]
    Recoverable(String),

    /// Record the message and skip the remaining validators.
    #[error("{0}")]
    Terminal(String),

    /// Any other failure. Wrapped into a recoverable record by the field.
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl ValidationError {
    /// Creates a recoverable failure.
    #[must_use]
    pub fn recoverable(message: impl Into<String>) -> Self {
        Self::Recoverable(message.into())
    }

    /// Creates a terminal failure.
    #[must_use]
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal(message.into())
    }

    /// Returns true if this failure stops the validation run.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Terminal(_))
    }

    /// Converts the failure into the record stored on the field.
    ///
    /// Unexpected failures keep their source text behind `unexpected_prefix`.
    #[must_use]
    pub fn into_field_error(self, unexpected_prefix: &str) -> FieldError {
        match self {
            Self::Recoverable(message) => FieldError::recoverable(message),
            Self::Terminal(message) => FieldError::terminal(message),
            Self::Unexpected(err) => {
                FieldError::unexpected(format!("{unexpected_prefix}: {err}"))
            }
        }
    }
}

/// Result of running one validator.
pub type ValidationResult = Result<(), ValidationError>;

/// Fatal configuration mistakes, surfaced at construction or check time.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// A length rule was declared without any bound.
    #[error("Length rule needs at least one of `min` or `max`")]
    EmptyLengthRange,

    /// A length rule was declared with `min > max`.
    #[error("Length rule has min {min} greater than max {max}")]
    InvertedLengthRange {
        /// Lower bound.
        min: usize,
        /// Upper bound.
        max: usize,
    },

    /// A pattern rule did not compile.
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The offending pattern.
        pattern: String,
        /// The regex compile error.
        #[source]
        source: regex::Error,
    },

    /// A field name is empty or whitespace-only.
    #[error("Field name cannot be empty or whitespace-only")]
    EmptyFieldName,

    /// Two fields in one form share a name.
    #[error("Duplicate field name '{name}' in form")]
    DuplicateField {
        /// The repeated name.
        name: String,
    },

    /// A cross-field rule names a field the form does not contain.
    #[error("Field '{field}' compares against unknown field '{other}'")]
    UnknownPeer {
        /// The field carrying the rule.
        field: String,
        /// The missing field name.
        other: String,
    },

    /// A validation config document could not be parsed.
    #[error("Invalid validation config: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_field_error_kinds() {
        assert!(FieldError::required("x").is_terminal());
        assert!(FieldError::terminal("x").is_terminal());
        assert!(!FieldError::recoverable("x").is_terminal());
        assert!(!FieldError::unexpected("x").is_terminal());
    }

    #[test]
    fn test_field_error_display_is_message() {
        let err = FieldError::recoverable("Too short");
        assert_eq!(err.to_string(), "Too short");
    }

    #[test]
    fn test_field_error_serializes_kind_snake_case() {
        let err = FieldError::required("This field is required.");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"kind": "required", "message": "This field is required."})
        );
    }

    #[test]
    fn test_unexpected_is_wrapped_with_prefix() {
        let err = ValidationError::from(anyhow::anyhow!("disk on fire"));
        let record = err.into_field_error("Unknown error");
        assert_eq!(record.kind, FieldErrorKind::Unexpected);
        assert_eq!(record.message, "Unknown error: disk on fire");
    }

    #[test]
    fn test_validation_error_conversion_keeps_kind() {
        let stop = ValidationError::terminal("bad phone").into_field_error("Unknown error");
        assert_eq!(stop, FieldError::terminal("bad phone"));

        let soft = ValidationError::recoverable("too short").into_field_error("Unknown error");
        assert_eq!(soft, FieldError::recoverable("too short"));
    }

    #[test]
    fn test_configuration_error_display() {
        let err = ConfigurationError::InvertedLengthRange { min: 10, max: 2 };
        assert_eq!(err.to_string(), "Length rule has min 10 greater than max 2");

        let err = ConfigurationError::UnknownPeer {
            field: "confirm".to_string(),
            other: "password".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Field 'confirm' compares against unknown field 'password'"
        );
    }
}

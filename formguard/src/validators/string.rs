//! Rules for string fields.

use std::fmt;
use std::sync::Arc;

use regex::{Regex, RegexBuilder};

use super::{EqualTo, Rule};
use crate::errors::{ConfigurationError, ValidationError, ValidationResult};

/// Character-count bounds, inclusive on both ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthRange {
    min: Option<usize>,
    max: Option<usize>,
    message: Option<String>,
}

impl LengthRange {
    /// Creates a length rule.
    ///
    /// At least one bound must be given, and `min <= max` when both are.
    pub fn new(
        min: Option<usize>,
        max: Option<usize>,
        message: Option<String>,
    ) -> Result<Self, ConfigurationError> {
        match (min, max) {
            (None, None) => Err(ConfigurationError::EmptyLengthRange),
            (Some(min), Some(max)) if min > max => {
                Err(ConfigurationError::InvertedLengthRange { min, max })
            }
            _ => Ok(Self { min, max, message }),
        }
    }

    /// Lower bound.
    #[must_use]
    pub fn min(&self) -> Option<usize> {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub fn max(&self) -> Option<usize> {
        self.max
    }

    /// Checks the character count of `text`.
    pub fn check(&self, text: &str) -> ValidationResult {
        let len = text.chars().count();
        let default_message = match (self.min, self.max) {
            (Some(min), Some(max)) if len < min || len > max => {
                format!("Field must be between {min} and {max} characters long.")
            }
            (Some(min), None) if len < min => {
                format!("Field must be at least {min} characters long.")
            }
            (None, Some(max)) if len > max => {
                format!("Field cannot be longer than {max} characters.")
            }
            _ => return Ok(()),
        };
        Err(ValidationError::Recoverable(
            self.message.clone().unwrap_or(default_message),
        ))
    }
}

/// Requires the input to match a regular expression somewhere.
#[derive(Debug, Clone)]
pub struct PatternRule {
    regex: Regex,
    message: Option<String>,
}

impl PatternRule {
    /// Compiles a case-insensitive pattern rule.
    pub fn new(pattern: &str, message: Option<String>) -> Result<Self, ConfigurationError> {
        Self::with_case(pattern, message, true)
    }

    /// Compiles a pattern rule with explicit case sensitivity.
    pub fn with_case(
        pattern: &str,
        message: Option<String>,
        case_insensitive: bool,
    ) -> Result<Self, ConfigurationError> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(case_insensitive)
            .build()
            .map_err(|source| ConfigurationError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?;
        Ok(Self { regex, message })
    }

    /// The source pattern.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Checks that `text` matches.
    pub fn check(&self, text: &str) -> ValidationResult {
        if self.regex.is_match(text) {
            return Ok(());
        }
        Err(ValidationError::Recoverable(
            self.message
                .clone()
                .unwrap_or_else(|| "Invalid input".to_string()),
        ))
    }
}

impl PartialEq for PatternRule {
    fn eq(&self, other: &Self) -> bool {
        self.pattern() == other.pattern() && self.message == other.message
    }
}

type CheckFn = dyn Fn(&str) -> ValidationResult + Send + Sync;

/// A host-supplied rule.
///
/// The closure decides the outcome: [`ValidationError::Terminal`] to stop the
/// run, [`ValidationError::Recoverable`] to continue, or any lower-level error
/// through `?`, which lands as [`ValidationError::Unexpected`].
#[derive(Clone)]
pub struct CustomRule {
    name: String,
    check: Arc<CheckFn>,
}

impl CustomRule {
    /// Creates a named custom rule.
    pub fn new<F>(name: impl Into<String>, check: F) -> Self
    where
        F: Fn(&str) -> ValidationResult + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            check: Arc::new(check),
        }
    }

    /// The rule's name, used in logs.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Runs the closure against `text`.
    pub fn check(&self, text: &str) -> ValidationResult {
        (self.check)(text)
    }
}

impl fmt::Debug for CustomRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomRule")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Validators for string fields, evaluated in list order.
#[derive(Debug, Clone)]
pub enum StringValidator {
    /// Character count must fall within bounds.
    Length(LengthRange),
    /// Input must match a pattern.
    Pattern(PatternRule),
    /// Input must equal another field's data.
    EqualTo(EqualTo),
    /// Host-supplied rule.
    Custom(CustomRule),
}

impl StringValidator {
    /// Creates a length validator.
    pub fn length(
        min: Option<usize>,
        max: Option<usize>,
        message: Option<String>,
    ) -> Result<Self, ConfigurationError> {
        LengthRange::new(min, max, message).map(Self::Length)
    }

    /// Creates a case-insensitive pattern validator.
    pub fn pattern(pattern: &str, message: Option<String>) -> Result<Self, ConfigurationError> {
        PatternRule::new(pattern, message).map(Self::Pattern)
    }

    /// Creates an equality validator against another field.
    #[must_use]
    pub fn equal_to(other: impl Into<String>, message: Option<String>) -> Self {
        Self::EqualTo(EqualTo::new(other, message))
    }

    /// Creates a custom validator.
    pub fn custom<F>(name: impl Into<String>, check: F) -> Self
    where
        F: Fn(&str) -> ValidationResult + Send + Sync + 'static,
    {
        Self::Custom(CustomRule::new(name, check))
    }

    /// Short label for logs.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Length(_) => "length",
            Self::Pattern(_) => "pattern",
            Self::EqualTo(_) => "equal_to",
            Self::Custom(rule) => rule.name(),
        }
    }
}

impl Rule for StringValidator {
    fn peer(&self) -> Option<&str> {
        match self {
            Self::EqualTo(rule) => Some(&rule.other),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_length_too_short_mentions_bounds() {
        let rule = LengthRange::new(Some(6), Some(20), None).unwrap();
        let err = rule.check("hello").unwrap_err();
        assert!(!err.is_terminal());
        assert_eq!(
            err.to_string(),
            "Field must be between 6 and 20 characters long."
        );
    }

    #[test]
    fn test_length_in_range() {
        let rule = LengthRange::new(Some(6), Some(20), None).unwrap();
        assert!(rule.check("abcdefg").is_ok());
        assert!(rule.check("abcdef").is_ok());
        assert!(rule.check(&"a".repeat(20)).is_ok());
        assert!(rule.check(&"a".repeat(21)).is_err());
    }

    #[test]
    fn test_length_single_bounds() {
        let min_only = LengthRange::new(Some(3), None, None).unwrap();
        assert_eq!(
            min_only.check("ab").unwrap_err().to_string(),
            "Field must be at least 3 characters long."
        );
        assert!(min_only.check(&"a".repeat(500)).is_ok());

        let max_only = LengthRange::new(None, Some(2), None).unwrap();
        assert_eq!(
            max_only.check("abc").unwrap_err().to_string(),
            "Field cannot be longer than 2 characters."
        );
        assert!(max_only.check("").is_ok());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let rule = LengthRange::new(None, Some(3), None).unwrap();
        assert!(rule.check("手机号").is_ok());
    }

    #[test]
    fn test_length_override_message() {
        let rule = LengthRange::new(Some(6), None, Some("Too short".to_string())).unwrap();
        assert_eq!(rule.check("abc").unwrap_err().to_string(), "Too short");
    }

    #[test]
    fn test_length_rejects_bad_bounds() {
        assert!(matches!(
            LengthRange::new(None, None, None),
            Err(ConfigurationError::EmptyLengthRange)
        ));
        assert!(matches!(
            LengthRange::new(Some(5), Some(4), None),
            Err(ConfigurationError::InvertedLengthRange { min: 5, max: 4 })
        ));
        assert!(LengthRange::new(Some(4), Some(4), None).is_ok());
    }

    #[test]
    fn test_pattern_match_is_valid() {
        let rule = PatternRule::new(r"^\d{11}$", None).unwrap();
        assert!(rule.check("13800000000").is_ok());
        let err = rule.check("1380000").unwrap_err();
        assert_eq!(err.to_string(), "Invalid input");
    }

    #[test]
    fn test_pattern_is_case_insensitive_by_default() {
        let rule = PatternRule::new("^abc", Some("Must start with abc".to_string())).unwrap();
        assert!(rule.check("ABCdef").is_ok());
        assert_eq!(rule.check("xyz").unwrap_err().to_string(), "Must start with abc");
    }

    #[test]
    fn test_pattern_compile_error() {
        let result = PatternRule::new("(unclosed", None);
        match result {
            Err(ConfigurationError::InvalidPattern { pattern, .. }) => {
                assert_eq!(pattern, "(unclosed");
            }
            other => panic!("expected InvalidPattern, got {other:?}"),
        }
    }

    #[test]
    fn test_custom_rule_outcomes() {
        let rule = CustomRule::new("digits", |text| {
            if text.chars().all(|c| c.is_ascii_digit()) {
                Ok(())
            } else {
                Err(ValidationError::terminal("Digits only"))
            }
        });
        assert!(rule.check("123").is_ok());
        assert!(rule.check("12a").unwrap_err().is_terminal());
    }

    #[test]
    fn test_custom_rule_debug_hides_closure() {
        let rule = CustomRule::new("noop", |_| Ok(()));
        assert_eq!(format!("{rule:?}"), "CustomRule { name: \"noop\", .. }");
    }

    #[test]
    fn test_string_validator_peer() {
        assert_eq!(StringValidator::equal_to("password", None).peer(), Some("password"));
        assert_eq!(
            StringValidator::length(Some(1), None, None).unwrap().peer(),
            None
        );
    }

    #[test]
    fn test_string_validator_label() {
        assert_eq!(StringValidator::pattern("a", None).unwrap().label(), "pattern");
        assert_eq!(StringValidator::custom("phone", |_| Ok(())).label(), "phone");
    }
}

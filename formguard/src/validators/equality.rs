//! Cross-field equality.

use serde::{Deserialize, Serialize};

use crate::errors::{ValidationError, ValidationResult};

/// Requires the field's data to equal another field's data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EqualTo {
    /// Name of the field to compare against.
    pub other: String,
    /// Override message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl EqualTo {
    /// Creates a new equality rule.
    #[must_use]
    pub fn new(other: impl Into<String>, message: Option<String>) -> Self {
        Self {
            other: other.into(),
            message,
        }
    }

    /// Checks `data` against the other field's current data.
    pub fn check<T>(&self, data: Option<&T>, other: Option<&T>) -> ValidationResult
    where
        T: PartialEq + ?Sized,
    {
        equals(data, other, &self.other, self.message.as_deref())
    }
}

/// Fails with a recoverable error when `data != other`.
///
/// Absent data only equals absent data.
pub fn equals<T>(
    data: Option<&T>,
    other: Option<&T>,
    other_name: &str,
    message: Option<&str>,
) -> ValidationResult
where
    T: PartialEq + ?Sized,
{
    if data == other {
        return Ok(());
    }
    let msg = message.map_or_else(
        || format!("Field must be equal to {other_name}."),
        str::to_string,
    );
    Err(ValidationError::Recoverable(msg))
}

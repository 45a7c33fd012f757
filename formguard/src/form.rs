//! Form aggregation.
//!
//! A form borrows its fields for one validation pass, takes a snapshot of
//! every field's data for cross-field rules, validates each field in order
//! and reports success only if every field succeeded.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{ConfigurationError, FieldError};
use crate::fields::{FieldValues, FormField};

/// Validates `fields` in order and returns true only if all are valid.
///
/// Every field is validated even after a failure, so each one ends the pass
/// with a fresh error list.
pub fn validate_fields(fields: &mut [&mut dyn FormField]) -> bool {
    let peers = FieldValues::capture(fields);
    let mut success = true;
    for field in fields.iter_mut() {
        let valid = field.validate_in(&peers);
        success = success && valid;
    }
    debug!(
        field_count = fields.len(),
        valid = success,
        "Validated form"
    );
    success
}

/// Checks that field names are non-blank and unique, and that cross-field
/// rules resolve.
pub fn check_fields(fields: &[&dyn FormField]) -> Result<(), ConfigurationError> {
    let mut names = HashSet::with_capacity(fields.len());
    for field in fields {
        if field.field_name().trim().is_empty() {
            return Err(ConfigurationError::EmptyFieldName);
        }
        if !names.insert(field.field_name()) {
            return Err(ConfigurationError::DuplicateField {
                name: field.field_name().to_string(),
            });
        }
    }

    for field in fields {
        if let Some(other) = field
            .referenced_fields()
            .into_iter()
            .find(|other| !names.contains(other))
        {
            return Err(ConfigurationError::UnknownPeer {
                field: field.field_name().to_string(),
                other: other.to_string(),
            });
        }
    }

    Ok(())
}

/// A fixed set of fields owned by a screen.
pub trait Form {
    /// The form's fields, in validation order.
    fn fields(&self) -> Vec<&dyn FormField>;

    /// Mutable access to the form's fields, in validation order.
    fn fields_mut(&mut self) -> Vec<&mut dyn FormField>;

    /// Validates every field; true only if all are valid.
    fn validate(&mut self) -> bool {
        validate_fields(&mut self.fields_mut())
    }

    /// Checks the form's configuration. Call once after construction.
    fn check(&self) -> Result<(), ConfigurationError> {
        check_fields(&self.fields())
    }

    /// Summarizes the errors of the most recent pass.
    fn report(&self) -> FormReport {
        FormReport::from_fields(&self.fields())
    }
}

/// Errors of one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldReport {
    /// Field name.
    pub field: String,
    /// Errors in detection order.
    pub errors: Vec<FieldError>,
}

/// Errors of a form's most recent pass, grouped by field.
///
/// Fields without errors are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormReport {
    /// Failing fields in form order.
    pub fields: Vec<FieldReport>,
}

impl FormReport {
    /// Builds a report from the fields' current error lists.
    #[must_use]
    pub fn from_fields(fields: &[&dyn FormField]) -> Self {
        let fields = fields
            .iter()
            .filter(|field| !field.field_errors().is_empty())
            .map(|field| FieldReport {
                field: field.field_name().to_string(),
                errors: field.field_errors().to_vec(),
            })
            .collect();
        Self { fields }
    }

    /// True if no field has errors.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.fields.is_empty()
    }

    /// Error messages for one field.
    #[must_use]
    pub fn messages_for(&self, field: &str) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|report| report.field == field)
            .flat_map(|report| report.errors.iter().map(|e| e.message.as_str()))
            .collect()
    }

    /// Total number of errors.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.fields.iter().map(|report| report.errors.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{BooleanField, Field, StringField};
    use crate::validators::StringValidator;
    use pretty_assertions::assert_eq;

    fn length_field(name: &str, data: &str) -> StringField {
        StringField::text(name)
            .with_validator(StringValidator::length(Some(3), None, None).unwrap())
            .with_data(data)
    }

    #[test]
    fn test_all_valid() {
        let mut a = length_field("a", "abcd");
        let mut b = length_field("b", "abcd");
        assert!(validate_fields(&mut [&mut a, &mut b]));
    }

    #[test]
    fn test_invalid_then_valid_is_failure() {
        let mut a = length_field("a", "x");
        let mut b = length_field("b", "abcd");
        assert!(!validate_fields(&mut [&mut a, &mut b]));
    }

    #[test]
    fn test_valid_then_invalid_is_failure() {
        let mut a = length_field("a", "abcd");
        let mut b = length_field("b", "x");
        assert!(!validate_fields(&mut [&mut a, &mut b]));
    }

    #[test]
    fn test_every_field_is_validated_after_a_failure() {
        let mut a = length_field("a", "x");
        let mut b = length_field("b", "y");
        validate_fields(&mut [&mut a, &mut b]);
        assert_eq!(a.errors().len(), 1);
        assert_eq!(b.errors().len(), 1);
    }

    #[test]
    fn test_empty_form_is_valid() {
        assert!(validate_fields(&mut []));
    }

    #[test]
    fn test_cross_field_equality_through_form() {
        let mut password = StringField::password("password").with_data("secret1");
        let mut confirm = StringField::password("confirm")
            .with_validator(StringValidator::equal_to("password", None))
            .with_data("secret1");
        assert!(validate_fields(&mut [&mut password, &mut confirm]));

        confirm.set_data(Some("secret2".to_string()));
        assert!(!validate_fields(&mut [&mut password, &mut confirm]));
        assert!(password.errors().is_empty());
        assert_eq!(confirm.errors().len(), 1);
    }

    #[test]
    fn test_mixed_kinds() {
        let mut name = StringField::text("name").with_data("Ada");
        let mut agree = BooleanField::new("agree").required(true);
        assert!(!validate_fields(&mut [&mut name, &mut agree]));

        agree.set_data(Some(true));
        assert!(validate_fields(&mut [&mut name, &mut agree]));
    }

    #[test]
    fn test_check_duplicate_names() {
        let a = StringField::text("dup");
        let b = BooleanField::new("dup");
        let err = check_fields(&[&a, &b]).unwrap_err();
        assert!(matches!(err, ConfigurationError::DuplicateField { name } if name == "dup"));
    }

    #[test]
    fn test_check_blank_name() {
        let blank = StringField::text("   ");
        assert!(matches!(
            check_fields(&[&blank]),
            Err(ConfigurationError::EmptyFieldName)
        ));
    }

    #[test]
    fn test_check_unknown_peer() {
        let confirm =
            StringField::text("confirm").with_validator(StringValidator::equal_to("password", None));
        let err = check_fields(&[&confirm]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Field 'confirm' compares against unknown field 'password'"
        );
    }

    #[test]
    fn test_check_ok() {
        let password = StringField::password("password");
        let confirm =
            StringField::password("confirm").with_validator(StringValidator::equal_to("password", None));
        assert!(check_fields(&[&password, &confirm]).is_ok());
    }

    #[test]
    fn test_report_groups_by_field() {
        let mut a = length_field("a", "x");
        let mut b = length_field("b", "abcd");
        let mut c = StringField::text("c");
        validate_fields(&mut [&mut a, &mut b, &mut c]);

        let report = FormReport::from_fields(&[&a, &b, &c]);
        assert!(!report.is_valid());
        assert_eq!(report.error_count(), 2);
        assert_eq!(
            report.messages_for("a"),
            vec!["Field must be at least 3 characters long."]
        );
        assert!(report.messages_for("b").is_empty());
        assert_eq!(report.messages_for("c"), vec!["This field is required."]);
    }
}

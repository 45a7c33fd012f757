//! Test assertions for fields and forms.

use crate::errors::FieldErrorKind;
use crate::fields::Field;
use crate::form::Form;

/// Validates `field` and asserts it passed.
pub fn assert_field_valid<F: Field>(field: &mut F) {
    let valid = field.validate();
    assert!(
        valid,
        "Expected field '{}' to be valid, got errors: {:?}",
        field.name(),
        field.error_messages()
    );
}

/// Validates `field` and asserts it failed.
pub fn assert_field_invalid<F: Field>(field: &mut F) {
    let valid = field.validate();
    assert!(
        !valid,
        "Expected field '{}' to be invalid, but it passed",
        field.name()
    );
}

/// Asserts the kinds of the field's current errors, in order.
pub fn assert_field_errors<F: Field>(field: &F, expected: &[FieldErrorKind]) {
    let actual: Vec<FieldErrorKind> = field.errors().iter().map(|e| e.kind).collect();
    assert_eq!(
        actual,
        expected,
        "Unexpected error kinds for field '{}': {:?}",
        field.name(),
        field.error_messages()
    );
}

/// Validates `form` and asserts it passed.
pub fn assert_form_valid<T: Form>(form: &mut T) {
    let valid = form.validate();
    assert!(
        valid,
        "Expected form to be valid, got report: {:?}",
        form.report()
    );
}

/// Validates `form` and asserts it failed.
pub fn assert_form_invalid<T: Form>(form: &mut T) {
    let valid = form.validate();
    assert!(!valid, "Expected form to be invalid, but it passed");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{BooleanField, StringField};
    use crate::validators::StringValidator;

    #[test]
    fn test_assert_field_valid() {
        let mut field = BooleanField::new("remember_me");
        assert_field_valid(&mut field);
    }

    #[test]
    #[should_panic(expected = "Expected field 'mobile' to be valid")]
    fn test_assert_field_valid_fails() {
        let mut field = StringField::text("mobile");
        assert_field_valid(&mut field);
    }

    #[test]
    fn test_assert_field_errors() {
        let mut field = StringField::text("code")
            .with_validators([
                StringValidator::length(Some(4), None, None).unwrap(),
                StringValidator::pattern("^[0-9]+$", None).unwrap(),
            ])
            .with_data("ab");
        assert_field_invalid(&mut field);
        assert_field_errors(
            &field,
            &[FieldErrorKind::Recoverable, FieldErrorKind::Recoverable],
        );
    }
}

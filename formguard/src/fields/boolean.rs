//! Boolean fields.

use super::{Field, FieldCore, FieldValues};
use crate::errors::ValidationResult;
use crate::validators::BooleanValidator;
use crate::widget::Switch;

/// An on/off field. Optional unless built with `.required(true)`.
#[derive(Debug, Clone)]
pub struct BooleanField {
    core: FieldCore<bool, BooleanValidator>,
    widget: Switch,
}

impl BooleanField {
    /// Creates a boolean field.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            core: FieldCore::new(name, false),
            widget: Switch,
        }
    }
}

impl Field for BooleanField {
    type Value = bool;
    type Widget = Switch;
    type Validator = BooleanValidator;

    fn core(&self) -> &FieldCore<bool, BooleanValidator> {
        &self.core
    }

    fn core_mut(&mut self) -> &mut FieldCore<bool, BooleanValidator> {
        &mut self.core
    }

    fn widget(&self) -> &Switch {
        &self.widget
    }

    fn run(
        &self,
        validator: &BooleanValidator,
        _data: &bool,
        _peers: &FieldValues,
    ) -> ValidationResult {
        match *validator {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_by_default() {
        let mut field = BooleanField::new("remember_me");
        assert!(!field.is_required());
        assert!(field.validate());
    }

    #[test]
    fn test_required_and_absent() {
        let mut field = BooleanField::new("accept_terms").required(true);
        assert!(!field.validate());
        assert_eq!(field.errors().len(), 1);
        assert!(field.errors()[0].is_terminal());
    }

    #[test]
    fn test_false_counts_as_present() {
        let mut field = BooleanField::new("accept_terms")
            .required(true)
            .with_data(false);
        assert!(field.validate());
    }
}

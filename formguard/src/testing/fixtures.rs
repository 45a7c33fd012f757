//! Test fixtures.

use crate::errors::ConfigurationError;
use crate::fields::{BooleanField, Field, FormField, StringField};
use crate::form::Form;
use crate::validators::StringValidator;

/// A login screen: mobile number, password and an optional "remember me".
#[derive(Debug, Clone)]
pub struct LoginForm {
    /// Mobile number, required, no rules.
    pub mobile: StringField,
    /// Password, required, 6 to 20 characters.
    pub password: StringField,
    /// Remember-me toggle, optional.
    pub remember: BooleanField,
}

impl LoginForm {
    /// Builds the form.
    pub fn new() -> Result<Self, ConfigurationError> {
        Ok(Self {
            mobile: StringField::text("mobile").with_label("Mobile"),
            password: StringField::password("password")
                .with_label("Password")
                .with_validator(StringValidator::length(Some(6), Some(20), None)?),
            remember: BooleanField::new("remember_me").with_label("Remember me?"),
        })
    }

    /// Fills in the text fields.
    #[must_use]
    pub fn filled(mut self, mobile: &str, password: &str) -> Self {
        self.mobile.set_data(Some(mobile.to_string()));
        self.password.set_data(Some(password.to_string()));
        self
    }
}

impl Form for LoginForm {
    fn fields(&self) -> Vec<&dyn FormField> {
        vec![
            &self.mobile as &dyn FormField,
            &self.password,
            &self.remember,
        ]
    }

    fn fields_mut(&mut self) -> Vec<&mut dyn FormField> {
        vec![
            &mut self.mobile as &mut dyn FormField,
            &mut self.password,
            &mut self.remember,
        ]
    }
}

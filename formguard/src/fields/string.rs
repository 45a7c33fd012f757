//! String fields.

use super::{Field, FieldCore, FieldValues};
use crate::errors::ValidationResult;
use crate::validators::StringValidator;
use crate::widget::TextInput;

/// A text-valued field. Required unless built with `.required(false)`.
#[derive(Debug, Clone)]
pub struct StringField {
    core: FieldCore<String, StringValidator>,
    widget: TextInput,
}

impl StringField {
    /// Creates a plain text field.
    #[must_use]
    pub fn text(name: impl Into<String>) -> Self {
        Self {
            core: FieldCore::new(name, true),
            widget: TextInput::plain(),
        }
    }

    /// Creates a password field, whose widget masks input.
    #[must_use]
    pub fn password(name: impl Into<String>) -> Self {
        Self {
            core: FieldCore::new(name, true),
            widget: TextInput::secure(),
        }
    }

    /// True if this field masks its input.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.widget.secure
    }
}

impl Field for StringField {
    type Value = String;
    type Widget = TextInput;
    type Validator = StringValidator;

    fn core(&self) -> &FieldCore<String, StringValidator> {
        &self.core
    }

    fn core_mut(&mut self) -> &mut FieldCore<String, StringValidator> {
        &mut self.core
    }

    fn widget(&self) -> &TextInput {
        &self.widget
    }

    fn run(
        &self,
        validator: &StringValidator,
        data: &String,
        peers: &FieldValues,
    ) -> ValidationResult {
        match validator {
            StringValidator::Length(rule) => rule.check(data),
            StringValidator::Pattern(rule) => rule.check(data),
            StringValidator::EqualTo(rule) => {
                rule.check(Some(data.as_str()), peers.text(&rule.other))
            }
            StringValidator::Custom(rule) => rule.check(data),
        }
    }
}

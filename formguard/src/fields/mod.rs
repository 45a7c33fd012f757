//! The field contract and the concrete field kinds.
//!
//! Every field kind implements [`Field`], which fixes the value, widget and
//! validator types for that kind and supplies [`Field::run`] to apply one
//! validator. The validation algorithm itself is written once, in the
//! provided [`Field::validate_with`]:
//!
//! 1. errors from the previous run are discarded;
//! 2. a required field without data records a single required error and
//!    stops; an optional field without data is valid and stops;
//! 3. validators run in list order. Recoverable failures are recorded and
//!    the loop continues, a terminal failure is recorded and ends the loop,
//!    and unexpected failures are recorded as recoverable.
//!
//! [`FormField`] is the object-safe view of the same capability, used by the
//! form aggregator to drive fields of different kinds through one interface.

mod boolean;
mod state;
mod string;
mod value;

pub use boolean::BooleanField;
pub use state::FieldCore;
pub use string::StringField;
pub use value::{FieldValue, FieldValues};

use std::fmt::Debug;

use tracing::{debug, trace, warn};

use crate::config::ValidationConfig;
use crate::errors::{FieldError, ValidationError, ValidationResult};
use crate::validators::{equals, Rule};

/// The contract every field kind satisfies.
pub trait Field {
    /// Type of the field's data.
    type Value: Clone + PartialEq + Debug + Into<FieldValue>;
    /// Opaque presentation handle.
    type Widget;
    /// Validator descriptors accepted by this kind.
    type Validator: Rule;

    /// Shared field state.
    fn core(&self) -> &FieldCore<Self::Value, Self::Validator>;

    /// Mutable shared field state.
    fn core_mut(&mut self) -> &mut FieldCore<Self::Value, Self::Validator>;

    /// The field's presentation handle.
    fn widget(&self) -> &Self::Widget;

    /// Applies one validator to the field's present data.
    ///
    /// `peers` holds the other fields' data for cross-field rules.
    fn run(
        &self,
        validator: &Self::Validator,
        data: &Self::Value,
        peers: &FieldValues,
    ) -> ValidationResult;

    /// The field's name.
    fn name(&self) -> &str {
        self.core().name()
    }

    /// Display label.
    fn label(&self) -> Option<&str> {
        self.core().label.as_deref()
    }

    /// Sets the display label.
    fn set_label(&mut self, label: Option<String>) {
        self.core_mut().label = label;
    }

    /// Help text.
    fn description(&self) -> Option<&str> {
        self.core().description.as_deref()
    }

    /// Sets the help text.
    fn set_description(&mut self, description: Option<String>) {
        self.core_mut().description = description;
    }

    /// Placeholder value.
    fn placeholder(&self) -> Option<&Self::Value> {
        self.core().placeholder.as_ref()
    }

    /// Sets the placeholder value.
    fn set_placeholder(&mut self, placeholder: Option<Self::Value>) {
        self.core_mut().placeholder = placeholder;
    }

    /// Current data.
    fn data(&self) -> Option<&Self::Value> {
        self.core().data.as_ref()
    }

    /// Replaces the current data.
    fn set_data(&mut self, data: Option<Self::Value>) {
        self.core_mut().data = data;
    }

    /// Removes the current data.
    fn clear_data(&mut self) {
        self.core_mut().data = None;
    }

    /// Whether the field must have data.
    fn is_required(&self) -> bool {
        self.core().is_required()
    }

    /// Validators in evaluation order.
    fn validators(&self) -> &[Self::Validator] {
        self.core().validators()
    }

    /// Errors from the most recent run.
    fn errors(&self) -> &[FieldError] {
        self.core().errors()
    }

    /// Messages of the most recent run's errors, in detection order.
    fn error_messages(&self) -> Vec<&str> {
        self.errors().iter().map(|e| e.message.as_str()).collect()
    }

    /// True if the most recent run recorded no errors.
    fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }

    /// Validates the field on its own. Cross-field rules see no peer data.
    fn validate(&mut self) -> bool {
        self.validate_with(&FieldValues::default())
    }

    /// Validates the field against a snapshot of its peers' data.
    ///
    /// Returns true iff no error was recorded.
    fn validate_with(&mut self, peers: &FieldValues) -> bool {
        let errors = collect_errors(&*self, peers);
        let valid = errors.is_empty();
        debug!(
            field = %self.name(),
            valid,
            error_count = errors.len(),
            "Validated field"
        );
        self.core_mut().errors = errors;
        valid
    }

    /// Compares this field's data with another field of the same value type.
    fn equals_field<O>(&self, other: &O, message: Option<&str>) -> ValidationResult
    where
        Self: Sized,
        O: Field<Value = Self::Value>,
    {
        equals(self.data(), other.data(), other.name(), message)
    }

    /// Sets the display label.
    #[must_use]
    fn with_label(mut self, label: impl Into<String>) -> Self
    where
        Self: Sized,
    {
        self.core_mut().label = Some(label.into());
        self
    }

    /// Sets the help text.
    #[must_use]
    fn with_description(mut self, description: impl Into<String>) -> Self
    where
        Self: Sized,
    {
        self.core_mut().description = Some(description.into());
        self
    }

    /// Sets the placeholder.
    #[must_use]
    fn with_placeholder(mut self, placeholder: impl Into<Self::Value>) -> Self
    where
        Self: Sized,
    {
        self.core_mut().placeholder = Some(placeholder.into());
        self
    }

    /// Sets the initial data.
    #[must_use]
    fn with_data(mut self, data: impl Into<Self::Value>) -> Self
    where
        Self: Sized,
    {
        self.core_mut().data = Some(data.into());
        self
    }

    /// Appends a validator.
    #[must_use]
    fn with_validator(mut self, validator: Self::Validator) -> Self
    where
        Self: Sized,
    {
        self.core_mut().validators.push(validator);
        self
    }

    /// Appends several validators, keeping their order.
    #[must_use]
    fn with_validators(mut self, validators: impl IntoIterator<Item = Self::Validator>) -> Self
    where
        Self: Sized,
    {
        self.core_mut().validators.extend(validators);
        self
    }

    /// Overrides whether the field is required.
    #[must_use]
    fn required(mut self, is_required: bool) -> Self
    where
        Self: Sized,
    {
        self.core_mut().set_required(is_required);
        self
    }

    /// Uses the given messages and defaults.
    #[must_use]
    fn with_config(mut self, config: ValidationConfig) -> Self
    where
        Self: Sized,
    {
        self.core_mut().config = config;
        self
    }
}

/// Runs the required gate and the validator loop without touching state.
fn collect_errors<F>(field: &F, peers: &FieldValues) -> Vec<FieldError>
where
    F: Field + ?Sized,
{
    let core = field.core();
    let Some(data) = core.data.as_ref() else {
        if core.is_required() {
            return vec![FieldError::required(&core.config().required_message)];
        }
        return Vec::new();
    };

    let mut errors = Vec::new();
    for validator in core.validators() {
        let Err(failure) = field.run(validator, data, peers) else {
            continue;
        };
        trace!(field = %core.name(), validator = ?validator, error = %failure, "Validator failed");
        if let ValidationError::Unexpected(ref err) = failure {
            warn!(field = %core.name(), error = %err, "Validator raised an unexpected error");
        }
        let stop = failure.is_terminal();
        errors.push(failure.into_field_error(&core.config().unexpected_message_prefix));
        if stop {
            break;
        }
    }
    errors
}

/// Object-safe view of a field, used by forms.
///
/// Implemented for every [`Field`], so forms can hold fields of different
/// kinds without knowing their concrete types.
pub trait FormField {
    /// The field's name.
    fn field_name(&self) -> &str;

    /// True if the field currently has data.
    fn has_data(&self) -> bool;

    /// The field's current data, type-erased.
    fn snapshot(&self) -> Option<FieldValue>;

    /// Names of other fields read by this field's validators.
    fn referenced_fields(&self) -> Vec<&str>;

    /// Runs validation against a peer snapshot.
    fn validate_in(&mut self, peers: &FieldValues) -> bool;

    /// Errors from the most recent run.
    fn field_errors(&self) -> &[FieldError];
}

impl<F: Field> FormField for F {
    fn field_name(&self) -> &str {
        self.core().name()
    }

    fn has_data(&self) -> bool {
        self.core().data.is_some()
    }

    fn snapshot(&self) -> Option<FieldValue> {
        self.core().data.clone().map(Into::into)
    }

    fn referenced_fields(&self) -> Vec<&str> {
        self.core()
            .validators()
            .iter()
            .filter_map(Rule::peer)
            .collect()
    }

    fn validate_in(&mut self, peers: &FieldValues) -> bool {
        self.validate_with(peers)
    }

    fn field_errors(&self) -> &[FieldError] {
        self.core().errors()
    }
}

//! State shared by every field kind.

use crate::config::ValidationConfig;
use crate::errors::FieldError;

/// Identity, metadata, data, rules and last-run errors of one field.
///
/// Concrete field kinds embed one of these and expose it through
/// [`Field::core`](super::Field::core).
#[derive(Debug, Clone)]
pub struct FieldCore<V, R> {
    name: String,
    /// Display label.
    pub label: Option<String>,
    /// Longer help text.
    pub description: Option<String>,
    /// Hint shown while the field is empty.
    pub placeholder: Option<V>,
    /// Current data. `None` means no value was provided.
    pub data: Option<V>,
    is_required: bool,
    pub(crate) validators: Vec<R>,
    pub(crate) errors: Vec<FieldError>,
    pub(crate) config: ValidationConfig,
}

impl<V, R> FieldCore<V, R> {
    /// Creates the state for a field named `name`.
    #[must_use]
    pub fn new(name: impl Into<String>, is_required: bool) -> Self {
        Self {
            name: name.into(),
            label: None,
            description: None,
            placeholder: None,
            data: None,
            is_required,
            validators: Vec::new(),
            errors: Vec::new(),
            config: ValidationConfig::default(),
        }
    }

    /// The field's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the field must have data.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.is_required
    }

    /// Validators in evaluation order.
    #[must_use]
    pub fn validators(&self) -> &[R] {
        &self.validators
    }

    /// Errors from the most recent run.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Messages and defaults used by this field.
    #[must_use]
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    pub(crate) fn set_required(&mut self, is_required: bool) {
        self.is_required = is_required;
    }
}

//! # Formguard
//!
//! Declarative validation for input fields and the forms that group them.
//!
//! Each field declares a value type, whether it is required, and an ordered
//! list of validators. Validation:
//!
//! - **Required gate**: a required field without data gets one error and no
//!   validator runs; an optional field without data is valid as-is.
//! - **Ordered validators**: recoverable failures accumulate so the user sees
//!   every independent problem; a terminal failure stops the field's run.
//! - **Contained failures**: unexpected errors inside a validator become
//!   recoverable field errors and never escape.
//! - **Forms**: every field is validated and the form passes only if all do.
//!
//! ## Quick Start
//!
//! ```rust
//! use formguard::prelude::*;
//!
//! # fn main() -> Result<(), ConfigurationError> {
//! let mut password = StringField::password("password")
//!     .with_validator(StringValidator::length(Some(6), Some(20), None)?)
//!     .with_data("hello");
//!
//! assert!(!password.validate());
//! assert_eq!(
//!     password.error_messages(),
//!     vec!["Field must be between 6 and 20 characters long."]
//! );
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod config;
pub mod errors;
pub mod fields;
pub mod form;
pub mod testing;
pub mod validators;
pub mod widget;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::ValidationConfig;
    pub use crate::errors::{
        ConfigurationError, FieldError, FieldErrorKind, ValidationError, ValidationResult,
    };
    pub use crate::fields::{
        BooleanField, Field, FieldCore, FieldValue, FieldValues, FormField, StringField,
    };
    pub use crate::form::{check_fields, validate_fields, FieldReport, Form, FormReport};
    pub use crate::validators::{
        BooleanValidator, CustomRule, EqualTo, LengthRange, PatternRule, Rule, StringValidator,
    };
    pub use crate::widget::{Switch, TextInput};
}

//! Testing utilities for formguard fields and forms.
//!
//! This module provides:
//! - Assertions over field and form validation outcomes
//! - A small login form fixture

mod assertions;
mod fixtures;

pub use assertions::{
    assert_field_errors, assert_field_invalid, assert_field_valid, assert_form_invalid,
    assert_form_valid,
};
pub use fixtures::LoginForm;

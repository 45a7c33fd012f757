//! Validation rules.
//!
//! Every rule is a pure function of the field's current data and the rule's
//! own parameters. Rules that need parameters checked (length bounds, regex
//! syntax) expose fallible constructors, so a malformed descriptor can never
//! reach the validation loop.

mod boolean;
mod equality;
mod string;

pub use boolean::BooleanValidator;
pub use equality::{equals, EqualTo};
pub use string::{CustomRule, LengthRange, PatternRule, StringValidator};

use std::fmt::Debug;

/// Capabilities shared by every validator descriptor.
pub trait Rule: Debug {
    /// Name of another field this rule reads, if any.
    fn peer(&self) -> Option<&str> {
        None
    }
}

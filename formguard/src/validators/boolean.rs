//! Boolean rules.

use super::Rule;

/// Validators for boolean fields.
///
/// There are none yet. The enum is uninhabited, so a boolean field's
/// validator list is always empty and only the required gate applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BooleanValidator {}

impl Rule for BooleanValidator {}

//! Presentation handles owned by fields.
//!
//! The validation core never reads these. They only carry the bits of
//! presentation state a field kind decides at construction time, so a host
//! UI layer can mirror them onto its real controls.

use serde::{Deserialize, Serialize};

/// A single-line text input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextInput {
    /// Whether typed characters should be masked.
    pub secure: bool,
}

impl TextInput {
    /// Creates a plain text input.
    #[must_use]
    pub fn plain() -> Self {
        Self { secure: false }
    }

    /// Creates a masked input for secrets.
    #[must_use]
    pub fn secure() -> Self {
        Self { secure: true }
    }
}

/// An on/off toggle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Switch;

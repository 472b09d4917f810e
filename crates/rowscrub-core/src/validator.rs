//! Email field validator.
//!
//! **Question**: Does the designated field look like an email address?
//!
//! The decision is made on the trimmed value, but the stored value is only
//! ever rewritten on failure. A passing field keeps its surrounding
//! whitespace; a failing one becomes the empty string.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::MalformedRecordError;
use crate::patterns::is_email_shaped;
use crate::record::{Record, EMAIL_FIELD_INDEX};

/// What the validator did to a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ValidationOutcome {
    /// Field looked like an email and was left as is.
    Kept,
    /// Field failed the shape check and was replaced with `""`.
    Cleared { original: String },
}

impl ValidationOutcome {
    pub fn is_cleared(&self) -> bool {
        matches!(self, ValidationOutcome::Cleared { .. })
    }
}

/// Clears the email field of a record when it fails the shape check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmailFieldValidator {
    field_index: usize,
}

impl EmailFieldValidator {
    /// Validator for the standard email position.
    pub fn new() -> Self {
        Self {
            field_index: EMAIL_FIELD_INDEX,
        }
    }

    /// Validator for a record layout that keeps the email elsewhere.
    pub fn with_field_index(field_index: usize) -> Self {
        Self { field_index }
    }

    pub fn field_index(&self) -> usize {
        self.field_index
    }

    /// Check the email field and clear it in place if it fails.
    ///
    /// No other position is read or written. The record is left unchanged
    /// when an error is returned.
    pub fn validate(&self, record: &mut Record) -> Result<ValidationOutcome, MalformedRecordError> {
        let index = self.field_index;
        if is_email_shaped(record.text_field(index)?) {
            debug!(index, "email field kept");
            return Ok(ValidationOutcome::Kept);
        }

        let original = record.clear_text_field(index).unwrap_or_default();
        debug!(index, len = original.len(), "email field cleared");
        Ok(ValidationOutcome::Cleared { original })
    }
}

impl Default for EmailFieldValidator {
    fn default() -> Self {
        Self::new()
    }
}

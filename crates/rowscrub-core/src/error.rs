//! Error taxonomy for record processing.

use thiserror::Error;

/// Errors that fail a single record invocation.
///
/// A field that does not look like an email is not an error; see
/// [`ValidationOutcome`](crate::ValidationOutcome).
#[derive(Error, Debug)]
pub enum ScrubError {
    #[error("Failed to decode record: {0}")]
    DecodeError(#[source] serde_json::Error),

    #[error("Malformed record: {0}")]
    MalformedRecord(#[from] MalformedRecordError),

    #[error("Failed to encode record: {0}")]
    EncodeError(#[source] serde_json::Error),
}

impl ScrubError {
    /// Stable code for host pipelines that route failures by code.
    pub fn code(&self) -> &'static str {
        match self {
            ScrubError::DecodeError(_) => "DECODE_ERROR",
            ScrubError::MalformedRecord(_) => "MALFORMED_RECORD",
            ScrubError::EncodeError(_) => "ENCODE_ERROR",
        }
    }
}

/// The record decoded but cannot carry an email field at the expected position.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedRecordError {
    #[error("record has {len} field(s), email field index {index} is out of range")]
    MissingEmailField { index: usize, len: usize },

    #[error("email field at index {index} holds {found}, expected a string")]
    EmailFieldNotText { index: usize, found: &'static str },
}

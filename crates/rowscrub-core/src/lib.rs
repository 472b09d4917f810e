//! # rowscrub-core
//!
//! Row-level email field validation for data pipeline records.
//!
//! A record is one JSON array. The field at index 3 is expected to hold an
//! email address; if its trimmed value is not `localpart@domain.tld` shaped,
//! the field is replaced with an empty string. Nothing else in the record is
//! read or changed.
//!
//! ## Key Guarantees
//!
//! 1. **Shape preserving**: output length and field order equal the input's
//! 2. **Stateless**: every call is independent, no global mutable state
//! 3. **Idempotent**: validating an already validated record is a no-op
//! 4. **Strict input**: malformed records fail, they are never coerced
//!
//! ## Example
//!
//! ```rust
//! use rowscrub_core::process_json;
//!
//! let output = process_json(r#"[3, "Jane", 23, "123qq.com"]"#)?;
//! assert_eq!(output, r#"[3,"Jane",23,""]"#);
//! # Ok::<(), rowscrub_core::ScrubError>(())
//! ```

pub mod error;
pub mod patterns;
pub mod record;
pub mod validator;

// Re-export main types at crate root
pub use error::{MalformedRecordError, ScrubError};
pub use patterns::{is_email_shaped, trim_field, EMAIL_SHAPE};
pub use record::{Record, EMAIL_FIELD_INDEX};
pub use validator::{EmailFieldValidator, ValidationOutcome};

use tracing::debug;

/// Validate a decoded record.
///
/// The record is mutated in place and handed back. Only the email field can
/// change, and only to `""`.
pub fn validate(mut record: Record) -> Result<Record, ScrubError> {
    EmailFieldValidator::new().validate(&mut record)?;
    Ok(record)
}

/// Decode, validate and re-encode one record.
///
/// This is the whole process-boundary contract: one JSON array in, one
/// compact JSON array out.
pub fn process_json(input: &str) -> Result<String, ScrubError> {
    let mut record = Record::from_json(input)?;
    let outcome = EmailFieldValidator::new().validate(&mut record)?;
    debug!(fields = record.len(), cleared = outcome.is_cleared(), "record processed");
    record.to_json()
}

//! Email shape detection.
//!
//! The check is deliberately coarse: `localpart@domain.tld` shaped, matched
//! as a prefix of the trimmed value. It is a sanity filter for pipeline data,
//! not an address grammar.

use lazy_static::lazy_static;
use regex::Regex;

/// Pattern source for the email shape check.
///
/// Anchored at the start only. Text after a matching prefix is accepted.
pub const EMAIL_SHAPE: &str = r"^[^@]+@[^@]+\.[^@]+";

lazy_static! {
    /// Compiled [`EMAIL_SHAPE`].
    pub static ref EMAIL_SHAPE_PATTERN: Regex = Regex::new(EMAIL_SHAPE).unwrap();
}

/// Strip leading and trailing whitespace before the shape check.
///
/// Besides Unicode `White_Space`, the ASCII information separators
/// U+001C..=U+001F count as whitespace here, the same set the upstream
/// row scripts strip.
pub fn trim_field(value: &str) -> &str {
    value.trim_matches(is_strippable)
}

fn is_strippable(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Check whether a raw field value looks like an email address once trimmed.
pub fn is_email_shaped(value: &str) -> bool {
    EMAIL_SHAPE_PATTERN.is_match(trim_field(value))
}

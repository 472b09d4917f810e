//! Record model and JSON codec.
//!
//! A record is one pipeline row: an ordered JSON array whose positions carry
//! meaning by contract with the caller. Only the email field is interpreted;
//! every other value is opaque and round-trips untouched.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{MalformedRecordError, ScrubError};

/// Position of the email field in every record.
pub const EMAIL_FIELD_INDEX: usize = 3;

/// One row of pipeline data.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: Vec<Value>,
}

impl Record {
    pub fn new(fields: Vec<Value>) -> Self {
        Self { fields }
    }

    /// Decode a record from a JSON array.
    ///
    /// The input must hold exactly one array; surrounding whitespace is fine,
    /// trailing data or any other top-level value is a decode error.
    pub fn from_json(input: &str) -> Result<Self, ScrubError> {
        serde_json::from_str(input).map_err(ScrubError::DecodeError)
    }

    /// Encode as compact single-line JSON.
    pub fn to_json(&self) -> Result<String, ScrubError> {
        serde_json::to_string(self).map_err(ScrubError::EncodeError)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> &[Value] {
        &self.fields
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.fields.get(index)
    }

    pub fn into_fields(self) -> Vec<Value> {
        self.fields
    }

    /// Borrow the text at `index`, failing if it is absent or not a string.
    pub fn text_field(&self, index: usize) -> Result<&str, MalformedRecordError> {
        match self.fields.get(index) {
            None => Err(MalformedRecordError::MissingEmailField {
                index,
                len: self.fields.len(),
            }),
            Some(Value::String(text)) => Ok(text.as_str()),
            Some(other) => Err(MalformedRecordError::EmailFieldNotText {
                index,
                found: json_type_name(other),
            }),
        }
    }

    /// Overwrite the value at `index`. Callers check the index first.
    pub(crate) fn clear_text_field(&mut self, index: usize) -> Option<String> {
        match self.fields.get_mut(index) {
            Some(Value::String(text)) => Some(std::mem::take(text)),
            _ => None,
        }
    }
}

impl From<Vec<Value>> for Record {
    fn from(fields: Vec<Value>) -> Self {
        Self::new(fields)
    }
}

impl From<Record> for Vec<Value> {
    fn from(record: Record) -> Self {
        record.fields
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_array() {
        let record = Record::from_json(r#" [3, "Jane", 23, "123qq.com"] "#).unwrap();
        assert_eq!(record.len(), 4);
        assert_eq!(record.get(1), Some(&json!("Jane")));
        assert_eq!(record.text_field(3).unwrap(), "123qq.com");
    }

    #[test]
    fn test_decode_rejects_non_array() {
        for input in [r#"{"3": "a@b.c"}"#, r#""a@b.c""#, "42", "null"] {
            let err = Record::from_json(input).unwrap_err();
            assert!(matches!(err, ScrubError::DecodeError(_)), "{input}");
        }
    }

    #[test]
    fn test_decode_rejects_invalid_json() {
        for input in ["", "[1, 2", "[1, 2] [3]", "[NaN, 1, 2, \"a\"]", "not json"] {
            let err = Record::from_json(input).unwrap_err();
            assert!(matches!(err, ScrubError::DecodeError(_)), "{input:?}");
        }
    }

    #[test]
    fn test_encode_is_single_line() {
        let record = Record::from_json("[\n  3,\n  \"Jane\",\n  23,\n  \"\"\n]").unwrap();
        assert_eq!(record.to_json().unwrap(), r#"[3,"Jane",23,""]"#);
    }

    #[test]
    fn test_opaque_values_round_trip_exactly() {
        let input = r#"[1.50,{"z":1,"a":2},12345678901234567890123,"x@y.z",null,[true]]"#;
        let record = Record::from_json(input).unwrap();
        assert_eq!(record.to_json().unwrap(), input);
    }

    #[test]
    fn test_text_field_missing() {
        let record = Record::new(vec![json!(1), json!("X")]);
        assert_eq!(
            record.text_field(EMAIL_FIELD_INDEX),
            Err(MalformedRecordError::MissingEmailField { index: 3, len: 2 })
        );
    }

    #[test]
    fn test_text_field_wrong_type() {
        let record = Record::new(vec![json!(1), json!("X"), json!(2), json!(null)]);
        assert_eq!(
            record.text_field(EMAIL_FIELD_INDEX),
            Err(MalformedRecordError::EmailFieldNotText { index: 3, found: "null" })
        );

        let record = Record::new(vec![json!(1), json!("X"), json!(2), json!(7)]);
        assert_eq!(
            record.text_field(EMAIL_FIELD_INDEX),
            Err(MalformedRecordError::EmailFieldNotText { index: 3, found: "a number" })
        );
    }

    #[test]
    fn test_clear_text_field_returns_original() {
        let mut record = Record::new(vec![json!(0), json!(0), json!(0), json!(" a ")]);
        assert_eq!(record.clear_text_field(3), Some(" a ".to_string()));
        assert_eq!(record.get(3), Some(&json!("")));
        assert_eq!(record.clear_text_field(9), None);
    }
}

//! Python bindings for rowscrub.
//!
//! ```python
//! import rowscrub
//!
//! rowscrub.process_record('[3, "Jane", 23, "123qq.com"]')  # '[3,"Jane",23,""]'
//! rowscrub.is_email_shaped("  amy@x.co  ")                # True
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Validate one JSON-encoded record and return it re-encoded.
///
/// Raises `ValueError` when the input is not a JSON array or the email
/// field is missing or not a string.
#[pyfunction]
fn process_record(record_json: &str) -> PyResult<String> {
    rowscrub_core::process_json(record_json)
        .map_err(|err| PyValueError::new_err(format!("{}: {}", err.code(), err)))
}

/// Check whether a value passes the email shape check after trimming.
#[pyfunction]
fn is_email_shaped(value: &str) -> bool {
    rowscrub_core::is_email_shaped(value)
}

#[pymodule]
fn rowscrub(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(process_record, m)?)?;
    m.add_function(wrap_pyfunction!(is_email_shaped, m)?)?;
    m.add("EMAIL_FIELD_INDEX", rowscrub_core::EMAIL_FIELD_INDEX)?;
    Ok(())
}

//! Type conversion utilities for FFI boundary
//!
//! Converts between Rust types and PyO3-compatible types (PyDict).

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::clock::{ClockConfig, UpdateStrategy};
use crate::error::ClockError;
use crate::models::Moment;

// ========================================================================
// PyDict Extraction Helpers
// ========================================================================

/// Extract a field with a default value if missing.
///
/// # Errors
/// Returns error only if type conversion fails (not if field is missing)
fn extract_with_default<'py, T>(dict: &Bound<'py, PyDict>, key: &str, default: T) -> PyResult<T>
where
    T: FromPyObject<'py>,
{
    match dict.get_item(key)? {
        Some(value) => value.extract(),
        None => Ok(default),
    }
}

/// Map a clock error to the matching Python exception
///
/// Bad input or config raises `ValueError`; an unsynchronized clock raises
/// `RuntimeError`.
pub fn clock_error_to_py(err: ClockError) -> PyErr {
    if err.is_invalid_input() || matches!(err, ClockError::InvalidConfig(_)) {
        PyValueError::new_err(err.to_string())
    } else {
        PyRuntimeError::new_err(err.to_string())
    }
}

// ========================================================================
// Configuration Parsers
// ========================================================================

/// Convert Python dict to ClockConfig
///
/// Recognized keys: `strategy` ("projection" or "accumulator"),
/// `start_enabled` (bool), `max_catch_up_secs` (int or None).
///
/// # Errors
/// Raises ValueError on unknown strategy names, wrong types or failed
/// validation.
pub fn parse_clock_config(py_config: &Bound<'_, PyDict>) -> PyResult<ClockConfig> {
    let strategy_name: String =
        extract_with_default(py_config, "strategy", "projection".to_string())?;
    let strategy = match strategy_name.as_str() {
        "projection" => UpdateStrategy::Projection,
        "accumulator" => UpdateStrategy::Accumulator,
        other => {
            return Err(PyValueError::new_err(format!(
                "Unknown strategy '{}' (expected 'projection' or 'accumulator')",
                other
            )))
        }
    };

    let config = ClockConfig {
        strategy,
        start_enabled: extract_with_default(py_config, "start_enabled", false)?,
        max_catch_up_secs: extract_with_default(py_config, "max_catch_up_secs", None)?,
    };
    config.validate().map_err(clock_error_to_py)?;
    Ok(config)
}

/// Convert Moment to Python dict
///
/// `hour` is the presentation hour (1-12 in 12-hour mode); `hour24` is the
/// canonical value.
pub fn moment_to_py(py: Python<'_>, moment: &Moment) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new(py);

    dict.set_item("day", moment.day())?;
    dict.set_item("month", moment.month())?;
    dict.set_item("year", moment.year())?;
    dict.set_item("hour", moment.hour())?;
    dict.set_item("hour24", moment.hour24())?;
    dict.set_item("minute", moment.minute())?;
    dict.set_item("second", moment.second())?;
    dict.set_item("is_pm", moment.is_pm())?;
    dict.set_item("twelve_hour", moment.mode().is_12h())?;
    dict.set_item("weekday", moment.weekday().index())?;
    dict.set_item("weekday_name", moment.weekday_name())?;

    Ok(dict.unbind())
}

//! PyO3 wrapper for SoftRtc
//!
//! This module provides the Python interface to the Rust clock.

use pyo3::prelude::*;
use pyo3::types::PyDict;

use super::types::{clock_error_to_py, moment_to_py, parse_clock_config};
use crate::calendar::HourMode;
use crate::clock::{ClockConfig, SoftRtc as RustSoftRtc};
use crate::core::tick::MonotonicTicks;

/// Python wrapper for the Rust soft clock
///
/// # Example (from Python)
///
/// ```python
/// from soft_rtc_core import SoftRtc
///
/// rtc = SoftRtc.new({"strategy": "projection", "start_enabled": True})
/// rtc.write(31, 12, 2024, 11, 59, 58, is_pm=True, twelve_hour=True)
/// print(rtc.format())  # 31-12-2024 11:59:58 PM Tue
/// ```
#[pyclass(name = "SoftRtc")]
pub struct PySoftRtc {
    inner: RustSoftRtc<MonotonicTicks>,
}

#[pymethods]
impl PySoftRtc {
    /// Create a new clock, optionally from a configuration dict
    ///
    /// # Errors
    ///
    /// Raises ValueError if the configuration is malformed or invalid.
    #[staticmethod]
    #[pyo3(signature = (config=None))]
    fn new(config: Option<&Bound<'_, PyDict>>) -> PyResult<Self> {
        let rust_config = match config {
            Some(dict) => parse_clock_config(dict)?,
            None => ClockConfig::default(),
        };
        let inner = RustSoftRtc::with_config(MonotonicTicks::new(), rust_config)
            .map_err(clock_error_to_py)?;
        Ok(PySoftRtc { inner })
    }

    fn enable(&mut self) {
        self.inner.enable();
    }

    fn disable(&mut self) {
        self.inner.disable();
    }

    fn stop(&mut self) {
        self.inner.stop();
    }

    fn flush(&mut self) {
        self.inner.flush();
    }

    /// Set the clock
    ///
    /// # Errors
    ///
    /// Raises ValueError if any field is out of range; the clock keeps its
    /// previous state.
    #[allow(clippy::too_many_arguments)]
    #[pyo3(signature = (day, month, year, hour, minute, second, is_pm=false, twelve_hour=false))]
    fn write(
        &mut self,
        day: u8,
        month: u8,
        year: u16,
        hour: u8,
        minute: u8,
        second: u8,
        is_pm: bool,
        twelve_hour: bool,
    ) -> PyResult<()> {
        let mode = if twelve_hour {
            HourMode::Hour12
        } else {
            HourMode::Hour24
        };
        self.inner
            .write(day, month, year, hour, minute, second, is_pm, mode)
            .map_err(clock_error_to_py)
    }

    /// Current moment as a dict
    ///
    /// # Errors
    ///
    /// Raises RuntimeError while the clock is unsynced or disabled.
    fn read(&self, py: Python<'_>) -> PyResult<Py<PyDict>> {
        let moment = self.inner.read().map_err(clock_error_to_py)?;
        moment_to_py(py, &moment)
    }

    /// Accumulator step; returns the whole seconds applied
    fn advance(&mut self) -> PyResult<u32> {
        self.inner.advance().map_err(clock_error_to_py)
    }

    /// `DD-MM-YYYY HH:MM:SS {AM|PM|24H} Www`
    fn format(&self) -> PyResult<String> {
        self.inner.render().map_err(clock_error_to_py)
    }

    /// True when reads succeed (enabled and synced)
    fn is_synced(&self) -> bool {
        self.inner.sync_status()
    }
}

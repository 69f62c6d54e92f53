//! Soft RTC Core - software real-time clock
//!
//! Derives a calendar date and wall-clock time from a free-running
//! millisecond tick counter, with no timekeeping hardware and no calendar
//! library.
//!
//! # Architecture
//!
//! - **core**: Tick sources and wraparound-safe elapsed time
//! - **calendar**: Leap years, month lengths, weekday, year encoding, 12/24h
//! - **models**: Domain types (Moment, ClockState)
//! - **clock**: Projection, accumulator and the `SoftRtc` owner type
//!
//! # Critical Invariants
//!
//! 1. Canonical hour storage is always 24-hour
//! 2. Years are confined to 2000..=2199 (two-digit year plus century bit)
//! 3. A failed write never mutates state
//! 4. Reads before the first successful write report `NotSynchronized`

// Module declarations
pub mod calendar;
pub mod clock;
pub mod core;
pub mod error;
pub mod models;

// Re-exports for convenience
pub use calendar::{HourMode, ShortYear, Weekday};
pub use clock::{ClockConfig, SoftRtc, UpdateStrategy};
pub use core::tick::{ManualTicks, MonotonicTicks, Tick, TickSource};
pub use error::ClockError;
pub use models::{ClockState, Moment, MomentParts};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn soft_rtc_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::clock::PySoftRtc>()?;
    Ok(())
}

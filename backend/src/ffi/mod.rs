//! Python bindings (PyO3)
//!
//! Compiled only with the `pyo3` feature. The boundary is kept small: one
//! class wrapping [`SoftRtc`](crate::SoftRtc) over the monotonic tick source,
//! with dict-based config input and moment output.

pub mod clock;
pub mod types;

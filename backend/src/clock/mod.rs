//! Clock engine: projection, accumulator and the owning [`SoftRtc`] type
//!
//! - **projection**: stateless elapsed-time reconstruction
//! - **accumulator**: committing step that folds elapsed seconds into state
//! - **engine**: lifecycle, write/read and status for one clock instance
//! - **config**: strategy and catch-up settings

pub mod accumulator;
pub mod config;
pub mod engine;
pub mod projection;

pub use accumulator::advance_state;
pub use config::{ClockConfig, UpdateStrategy};
pub use engine::SoftRtc;
pub use projection::{project, project_at};

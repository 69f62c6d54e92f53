//! Domain models for the soft clock

pub mod moment;
pub mod state;

// Re-exports
pub use moment::{Moment, MomentParts};
pub use state::{ClockState, PACKED_BITS};

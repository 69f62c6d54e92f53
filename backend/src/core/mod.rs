//! Core clock plumbing: tick sources and elapsed-time measurement

pub mod tick;

pub use tick::{elapsed_seconds, elapsed_ticks, ManualTicks, MonotonicTicks, Tick, TickSource};

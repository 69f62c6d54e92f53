//! Tick sources
//!
//! The clock never reads wall time. It polls a free-running millisecond
//! counter and measures elapsed time against the reading captured at `write`.
//!
//! # Critical Invariants
//!
//! 1. A [`Tick`] is an unsigned 32-bit millisecond count that wraps silently
//! 2. Elapsed time is always `now.wrapping_sub(anchor)`, so a single
//!    wraparound between anchor and read still yields the true elapsed value
//! 3. More than one full wrap (~49.7 days) between readings is undetectable

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Millisecond counter reading with an unspecified epoch
pub type Tick = u32;

/// Milliseconds per second of clock time
pub const TICKS_PER_SECOND: Tick = 1000;

/// Source of free-running millisecond ticks
///
/// Implementations must be non-blocking and monotonic until wraparound.
/// Any `Fn() -> Tick` closure is a tick source.
pub trait TickSource {
    /// Current counter reading
    fn now(&self) -> Tick;
}

impl<F> TickSource for F
where
    F: Fn() -> Tick,
{
    fn now(&self) -> Tick {
        self()
    }
}

/// Elapsed milliseconds from `anchor` to `now`, tolerant of one wraparound
///
/// # Example
/// ```
/// use soft_rtc_core::core::tick::elapsed_ticks;
///
/// assert_eq!(elapsed_ticks(1_000, 3_500), 2_500);
/// // Counter wrapped between the two readings
/// assert_eq!(elapsed_ticks(u32::MAX - 499, 500), 1_000);
/// ```
pub fn elapsed_ticks(anchor: Tick, now: Tick) -> Tick {
    now.wrapping_sub(anchor)
}

/// Whole seconds elapsed from `anchor` to `now` (floor)
pub fn elapsed_seconds(anchor: Tick, now: Tick) -> u32 {
    elapsed_ticks(anchor, now) / TICKS_PER_SECOND
}

/// Tick source backed by [`Instant`]
///
/// Counts milliseconds since construction, truncated to 32 bits so it wraps
/// exactly like a hardware millisecond counter.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicTicks {
    origin: Instant,
}

impl MonotonicTicks {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicTicks {
    fn default() -> Self {
        Self::new()
    }
}

impl TickSource for MonotonicTicks {
    fn now(&self) -> Tick {
        // Truncation is the wraparound.
        self.origin.elapsed().as_millis() as Tick
    }
}

/// Manually-driven tick source
///
/// Clones share the same counter, so a test can hand one clone to the clock
/// and keep another to move time forward.
///
/// # Example
/// ```
/// use soft_rtc_core::core::tick::{ManualTicks, TickSource};
///
/// let ticks = ManualTicks::new(0);
/// let handle = ticks.clone();
/// handle.advance(1_500);
/// assert_eq!(ticks.now(), 1_500);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ManualTicks {
    counter: Arc<AtomicU32>,
}

impl ManualTicks {
    pub fn new(start: Tick) -> Self {
        Self {
            counter: Arc::new(AtomicU32::new(start)),
        }
    }

    /// Set the counter to an absolute reading
    pub fn set(&self, tick: Tick) {
        self.counter.store(tick, Ordering::Relaxed);
    }

    /// Move the counter forward, wrapping like a hardware counter
    pub fn advance(&self, millis: Tick) {
        // fetch_add on atomics wraps on overflow
        self.counter.fetch_add(millis, Ordering::Relaxed);
    }

    /// Move the counter forward by whole seconds
    pub fn advance_secs(&self, secs: u32) {
        self.advance(secs.wrapping_mul(TICKS_PER_SECOND));
    }
}

impl TickSource for ManualTicks {
    fn now(&self) -> Tick {
        self.counter.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_seconds_floors() {
        assert_eq!(elapsed_seconds(0, 999), 0);
        assert_eq!(elapsed_seconds(0, 1_000), 1);
        assert_eq!(elapsed_seconds(250, 2_249), 1);
    }

    #[test]
    fn test_elapsed_across_wraparound() {
        let anchor = u32::MAX - 1_999;
        assert_eq!(elapsed_ticks(anchor, 0), 2_000);
        assert_eq!(elapsed_seconds(anchor, 3_000), 5);
    }

    #[test]
    fn test_manual_ticks_wrap() {
        let ticks = ManualTicks::new(u32::MAX);
        ticks.advance(2);
        assert_eq!(ticks.now(), 1);
    }

    #[test]
    fn test_closure_is_tick_source() {
        let source = || 42u32;
        assert_eq!(source.now(), 42);
    }

    #[test]
    fn test_monotonic_ticks_start_near_zero() {
        let ticks = MonotonicTicks::new();
        assert!(ticks.now() < 1_000);
    }
}

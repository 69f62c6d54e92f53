//! Accumulator step
//!
//! Folds the whole seconds elapsed since the stored anchor into the stored
//! moment and moves the anchor forward by exactly the milliseconds consumed.
//! The sub-second remainder stays between the anchor and the tick source, so
//! calling [`advance_state`] often never drifts the clock.
//!
//! The carry chain is the one [`project`] uses; the accumulator differs only
//! in that it commits the result.

use crate::clock::projection::project;
use crate::core::tick::{elapsed_seconds, Tick, TICKS_PER_SECOND};
use crate::error::ClockError;
use crate::models::ClockState;

/// Advance `state` to tick `now`
///
/// Returns the number of whole seconds folded in. Does nothing while the
/// state is unsynced or disabled; the gap is picked up by the first step
/// after the clock becomes readable again.
///
/// # Errors
/// - `NotSynchronized` if `max_catch_up_secs` is set and the gap exceeds it;
///   the state is desynchronized first
/// - `YearOutOfEncodableRange` if the step would pass 31 Dec 2199; the state
///   is left untouched
pub fn advance_state(
    state: &mut ClockState,
    now: Tick,
    max_catch_up_secs: Option<u32>,
) -> Result<u32, ClockError> {
    if !state.is_running() {
        return Ok(0);
    }

    let anchor_tick = state.anchor_tick();
    let elapsed_secs = elapsed_seconds(anchor_tick, now);
    if elapsed_secs == 0 {
        return Ok(0);
    }

    if let Some(limit) = max_catch_up_secs {
        if elapsed_secs > limit {
            tracing::warn!(
                elapsed_secs,
                limit,
                "advance gap exceeds catch-up window, dropping sync"
            );
            state.desync();
            return Err(ClockError::NotSynchronized);
        }
    }

    let current = state.moment()?;
    let next = project(&current, elapsed_secs)?;
    // elapsed_secs <= u32::MAX / 1000, so this cannot overflow
    let consumed = elapsed_secs * TICKS_PER_SECOND;
    state.store(&next, anchor_tick.wrapping_add(consumed));

    tracing::trace!(elapsed_secs, moment = %next, "accumulator advanced");
    Ok(elapsed_secs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Moment;

    fn running_state(moment: Moment, anchor_tick: Tick) -> ClockState {
        let mut state = ClockState::new();
        state.set_enabled(true);
        state.store(&moment, anchor_tick);
        state
    }

    #[test]
    fn test_keeps_sub_second_remainder() {
        let mut state = running_state(Moment::new(1, 1, 2024, 0, 0, 0).unwrap(), 0);

        assert_eq!(advance_state(&mut state, 1_700, None), Ok(1));
        assert_eq!(state.anchor_tick(), 1_000);
        // 700 ms left over plus 300 ms more makes the next second
        assert_eq!(advance_state(&mut state, 2_000, None), Ok(1));
        assert_eq!(state.moment().unwrap().second(), 2);
    }

    #[test]
    fn test_no_effect_when_disabled() {
        let mut state = running_state(Moment::new(1, 1, 2024, 0, 0, 0).unwrap(), 0);
        state.set_enabled(false);
        assert_eq!(advance_state(&mut state, 5_000, None), Ok(0));
        assert_eq!(state.anchor_tick(), 0);
    }

    #[test]
    fn test_gap_over_limit_drops_sync() {
        let mut state = running_state(Moment::new(1, 1, 2024, 0, 0, 0).unwrap(), 0);
        assert_eq!(
            advance_state(&mut state, 61_000, Some(60)),
            Err(ClockError::NotSynchronized)
        );
        assert!(!state.is_synced());
        assert!(state.is_enabled());
    }

    #[test]
    fn test_gap_at_limit_is_accepted() {
        let mut state = running_state(Moment::new(1, 1, 2024, 0, 0, 0).unwrap(), 0);
        assert_eq!(advance_state(&mut state, 60_999, Some(60)), Ok(60));
        assert_eq!(state.moment().unwrap().minute(), 1);
    }

    #[test]
    fn test_overflow_past_2199_leaves_state_untouched() {
        let mut state = running_state(Moment::new(31, 12, 2199, 23, 59, 59).unwrap(), 0);
        let before = state;
        assert!(advance_state(&mut state, 1_000, None).is_err());
        assert_eq!(state, before);
    }
}

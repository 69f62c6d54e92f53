//! Elapsed-time reconstruction
//!
//! Projects an anchor moment forward by a number of elapsed seconds without
//! touching stored state. This is the heart of the clock: every read in the
//! projection strategy and every accumulator step goes through [`project`].
//!
//! # Algorithm
//!
//! 1. Fold elapsed seconds into seconds, carry into minutes, then hours
//! 2. Whole days left after the hour carry are walked month by month
//!    ([`roll_forward`]), so cost grows with months crossed, not days
//! 3. Weekday is recomputed from the final date
//!
//! # Critical Invariants
//!
//! - **Idempotent**: same anchor and elapsed value, same result
//! - **Monotonic**: more elapsed seconds never yields an earlier moment
//! - **No wrap past 2199**: a result beyond the encodable range is an error

use crate::calendar::{roll_forward, MAX_YEAR};
use crate::core::tick::{elapsed_seconds, Tick};
use crate::error::ClockError;
use crate::models::Moment;

/// Moment reached `elapsed_secs` seconds after `anchor`
///
/// The hour mode of the anchor carries over to the result.
///
/// # Errors
/// `YearOutOfEncodableRange` if the result would fall after 31 Dec 2199.
///
/// # Example
/// ```
/// use soft_rtc_core::{clock::project, Moment};
///
/// let anchor = Moment::new(31, 12, 2024, 23, 59, 59).unwrap();
/// let now = project(&anchor, 2).unwrap();
/// assert_eq!(now, Moment::new(1, 1, 2025, 0, 0, 1).unwrap());
/// ```
pub fn project(anchor: &Moment, elapsed_secs: u32) -> Result<Moment, ClockError> {
    let total_seconds = u64::from(anchor.second()) + u64::from(elapsed_secs);
    let second = (total_seconds % 60) as u8;

    let total_minutes = u64::from(anchor.minute()) + total_seconds / 60;
    let minute = (total_minutes % 60) as u8;

    let total_hours = u64::from(anchor.hour24()) + total_minutes / 60;
    let hour = (total_hours % 24) as u8;

    // u32 seconds span under 50k days, so the day count always fits.
    let days_elapsed = (total_hours / 24) as u32;

    let (day, month, year) =
        roll_forward(anchor.day(), anchor.month(), anchor.year(), days_elapsed);
    if year > MAX_YEAR {
        return Err(ClockError::year_out_of_range(u32::from(year)));
    }

    Ok(Moment::from_validated(
        day,
        month,
        year,
        hour,
        minute,
        second,
        anchor.mode(),
    ))
}

/// Moment at tick `now` for an anchor captured at `anchor_tick`
///
/// Tick subtraction wraps, so one counter wraparound between the two
/// readings still gives the right answer.
pub fn project_at(anchor: &Moment, anchor_tick: Tick, now: Tick) -> Result<Moment, ClockError> {
    project(anchor, elapsed_seconds(anchor_tick, now))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{HourMode, Weekday};

    fn moment(day: u8, month: u8, year: u16, hour: u8, minute: u8, second: u8) -> Moment {
        Moment::new(day, month, year, hour, minute, second).unwrap()
    }

    #[test]
    fn test_zero_elapsed_is_identity() {
        let anchor = moment(15, 8, 2031, 7, 6, 5);
        assert_eq!(project(&anchor, 0), Ok(anchor));
    }

    #[test]
    fn test_minute_and_hour_carry() {
        let anchor = moment(1, 6, 2024, 10, 59, 30);
        assert_eq!(project(&anchor, 30), Ok(moment(1, 6, 2024, 11, 0, 0)));
        assert_eq!(project(&anchor, 3_600), Ok(moment(1, 6, 2024, 11, 59, 30)));
    }

    #[test]
    fn test_year_end_rollover() {
        let anchor = moment(31, 12, 2024, 23, 59, 59);
        let result = project(&anchor, 2).unwrap();
        assert_eq!(result, moment(1, 1, 2025, 0, 0, 1));
        assert_eq!(result.weekday(), Weekday::Wednesday);
    }

    #[test]
    fn test_keeps_anchor_mode() {
        let anchor = moment(1, 1, 2024, 11, 59, 59).with_mode(HourMode::Hour12);
        let result = project(&anchor, 1).unwrap();
        assert_eq!(result.mode(), HourMode::Hour12);
        assert_eq!(result.hour(), 12);
        assert!(result.is_pm());
    }

    #[test]
    fn test_past_last_encodable_year_is_error() {
        let anchor = moment(31, 12, 2199, 23, 59, 59);
        assert_eq!(
            project(&anchor, 1),
            Err(ClockError::year_out_of_range(2200))
        );
        assert!(project(&anchor, 0).is_ok());
    }

    #[test]
    fn test_project_at_wrapped_counter() {
        let anchor = moment(10, 10, 2040, 0, 0, 0);
        let anchor_tick = u32::MAX - 999;
        // 1000 ms to the wrap plus 59_000 ms after it
        assert_eq!(
            project_at(&anchor, anchor_tick, 59_000),
            Ok(moment(10, 10, 2040, 0, 1, 0))
        );
    }

    #[test]
    fn test_max_counter_span() {
        // A full u32 of milliseconds is 4_294_967 seconds: 49 days 17:02:47
        let anchor = moment(1, 1, 2024, 0, 0, 0);
        assert_eq!(
            project(&anchor, u32::MAX / 1000),
            Ok(moment(19, 2, 2024, 17, 2, 47))
        );
    }
}

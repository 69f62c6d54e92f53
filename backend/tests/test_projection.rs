//! Tests for elapsed-time reconstruction
//!
//! Covers the carry chain across every calendar boundary, leap-day handling
//! and tick counter wraparound.

use soft_rtc_core::clock::{project, project_at};
use soft_rtc_core::{ClockError, HourMode, Moment, Weekday};

fn moment(day: u8, month: u8, year: u16, hour: u8, minute: u8, second: u8) -> Moment {
    Moment::new(day, month, year, hour, minute, second).unwrap()
}

// ============================================================================
// Calendar boundaries
// ============================================================================

#[test]
fn test_minute_rollover() {
    let anchor = moment(10, 5, 2024, 14, 22, 59);
    assert_eq!(project(&anchor, 1), Ok(moment(10, 5, 2024, 14, 23, 0)));
}

#[test]
fn test_day_rollover() {
    let anchor = moment(10, 5, 2024, 23, 59, 59);
    let result = project(&anchor, 1).unwrap();
    assert_eq!(result, moment(11, 5, 2024, 0, 0, 0));
    assert_eq!(result.weekday(), Weekday::Saturday);
}

#[test]
fn test_month_rollover_thirty_day_month() {
    let anchor = moment(30, 4, 2024, 23, 59, 59);
    assert_eq!(project(&anchor, 1), Ok(moment(1, 5, 2024, 0, 0, 0)));
}

#[test]
fn test_year_rollover() {
    let anchor = moment(31, 12, 2024, 23, 59, 59);
    let result = project(&anchor, 1).unwrap();
    assert_eq!(result, moment(1, 1, 2025, 0, 0, 0));
    assert_eq!(result.weekday(), Weekday::Wednesday);
}

#[test]
fn test_century_rollover_sets_century_bit() {
    let anchor = moment(31, 12, 2099, 23, 59, 59);
    let result = project(&anchor, 1).unwrap();
    assert_eq!(result, moment(1, 1, 2100, 0, 0, 0));
    assert_eq!(result.weekday(), Weekday::Friday);
    assert!(result.short_year().century());
    assert_eq!(result.short_year().year(), 0);
}

// ============================================================================
// Leap days
// ============================================================================

#[test]
fn test_leap_year_enters_feb_29() {
    let anchor = moment(28, 2, 2024, 23, 59, 59);
    let result = project(&anchor, 1).unwrap();
    assert_eq!(result, moment(29, 2, 2024, 0, 0, 0));
    assert_eq!(result.weekday(), Weekday::Thursday);
}

#[test]
fn test_common_year_skips_feb_29() {
    let anchor = moment(28, 2, 2023, 23, 59, 59);
    assert_eq!(project(&anchor, 1), Ok(moment(1, 3, 2023, 0, 0, 0)));
}

#[test]
fn test_leap_day_rollover_two_seconds() {
    let leap = moment(28, 2, 2024, 23, 59, 59);
    assert_eq!(project(&leap, 2), Ok(moment(29, 2, 2024, 0, 0, 1)));

    let common = moment(28, 2, 2023, 23, 59, 59);
    assert_eq!(project(&common, 2), Ok(moment(1, 3, 2023, 0, 0, 1)));
}

#[test]
fn test_year_2100_is_not_leap() {
    let anchor = moment(28, 2, 2100, 23, 59, 59);
    let result = project(&anchor, 1).unwrap();
    assert_eq!(result, moment(1, 3, 2100, 0, 0, 0));
    assert_eq!(result.weekday(), Weekday::Monday);
}

#[test]
fn test_multi_day_span_across_february() {
    let anchor = moment(31, 1, 2024, 12, 0, 0);
    assert_eq!(
        project(&anchor, 30 * 86_400),
        Ok(moment(1, 3, 2024, 12, 0, 0))
    );
}

#[test]
fn test_long_span_lands_on_expected_moment() {
    let anchor = moment(15, 6, 2025, 8, 30, 0);
    let result = project(&anchor, 4_000_000).unwrap();
    assert_eq!(result, moment(31, 7, 2025, 15, 36, 40));
    assert_eq!(result.weekday(), Weekday::Thursday);
}

// ============================================================================
// Range and presentation
// ============================================================================

#[test]
fn test_projection_past_2199_is_error() {
    let anchor = moment(31, 12, 2199, 23, 59, 0);
    assert!(project(&anchor, 59).is_ok());
    assert!(matches!(
        project(&anchor, 60),
        Err(ClockError::YearOutOfEncodableRange { year: 2200, .. })
    ));
}

#[test]
fn test_twelve_hour_mode_survives_projection() {
    let anchor = Moment::from_input(1, 1, 2024, 11, 59, 59, false, HourMode::Hour12).unwrap();
    let result = project(&anchor, 1).unwrap();
    assert_eq!(result.to_string(), "01-01-2024 12:00:00 PM Mon");
}

#[test]
fn test_projection_is_idempotent() {
    let anchor = moment(3, 3, 2033, 3, 3, 3);
    assert_eq!(project(&anchor, 123_456), project(&anchor, 123_456));
}

// ============================================================================
// Tick wraparound
// ============================================================================

#[test]
fn test_project_at_without_wrap() {
    let anchor = moment(1, 1, 2024, 0, 0, 0);
    assert_eq!(
        project_at(&anchor, 5_000, 65_999),
        Ok(moment(1, 1, 2024, 0, 1, 0))
    );
}

#[test]
fn test_project_at_across_counter_wrap() {
    let anchor = moment(1, 1, 2024, 0, 0, 0);
    // 500 ms before the wrap, 2_500 ms after it: 3 whole seconds
    assert_eq!(
        project_at(&anchor, u32::MAX - 499, 2_500),
        Ok(moment(1, 1, 2024, 0, 0, 3))
    );
}

#[test]
fn test_sub_second_elapsed_does_not_advance() {
    let anchor = moment(1, 1, 2024, 0, 0, 0);
    assert_eq!(project_at(&anchor, 100, 1_099), Ok(anchor));
}

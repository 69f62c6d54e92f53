//! Calendar arithmetic
//!
//! Stateless Gregorian helpers shared by validation, projection and the
//! accumulator. Everything here is integer-only and bounded.
//!
//! # Critical Invariants
//!
//! 1. Years handled by the clock lie in [`MIN_YEAR`], [`MAX_YEAR`]
//! 2. Day rollover walks whole months, never single days
//! 3. A (Feb, 29) landing in a non-leap year is normalized to (Mar, 1)

pub mod hours;
pub mod weekday;
pub mod year;

pub use hours::{to_12h, to_24h, HourMode};
pub use weekday::{weekday, Weekday};
pub use year::{to_full_year, to_short_year, ShortYear};

/// First year representable by the short-year encoding
pub const MIN_YEAR: u16 = 2000;

/// Last year representable by the short-year encoding
pub const MAX_YEAR: u16 = 2199;

const DAYS_PER_MONTH: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Gregorian leap-year test
///
/// # Example
/// ```
/// use soft_rtc_core::calendar::is_leap_year;
///
/// assert!(is_leap_year(2000));
/// assert!(is_leap_year(2024));
/// assert!(!is_leap_year(2100));
/// ```
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-12) of `year`
///
/// # Panics
/// Panics if `month` is not in 1..=12. Callers validate months first.
pub fn days_in_month(month: u8, year: u16) -> u8 {
    assert!((1..=12).contains(&month), "month must be in 1..=12");
    if month == 2 && is_leap_year(year) {
        29
    } else {
        DAYS_PER_MONTH[usize::from(month - 1)]
    }
}

/// Walk `(day, month, year)` forward by `days` whole days
///
/// Consumes the remainder of each month in one step, so the cost is
/// proportional to the months crossed. The returned year may exceed
/// [`MAX_YEAR`]; range enforcement is the caller's job.
///
/// # Example
/// ```
/// use soft_rtc_core::calendar::roll_forward;
///
/// assert_eq!(roll_forward(31, 12, 2024, 1), (1, 1, 2025));
/// assert_eq!(roll_forward(28, 2, 2024, 1), (29, 2, 2024));
/// assert_eq!(roll_forward(28, 2, 2023, 1), (1, 3, 2023));
/// ```
pub fn roll_forward(day: u8, month: u8, year: u16, days: u32) -> (u8, u8, u16) {
    let mut day = u32::from(day);
    let mut month = month;
    let mut year = year;
    let mut days_left = days;

    while days_left > 0 {
        let month_len = u32::from(days_in_month(month, year));
        // A malformed day past the month end leaves nothing in this month.
        let remaining_in_month = (month_len + 1).saturating_sub(day);
        if days_left < remaining_in_month {
            day += days_left;
            break;
        }
        days_left -= remaining_in_month;
        day = 1;
        month += 1;
        if month > 12 {
            month = 1;
            year += 1;
        }
    }

    // `day` never exceeds 31 here: it is either the input or below month_len + 1.
    let mut day = day as u8;
    if month == 2 && day == 29 && !is_leap_year(year) {
        day = 1;
        month = 3;
    }
    (day, month, year)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_in_month_table() {
        let expected = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for (i, days) in expected.iter().enumerate() {
            assert_eq!(days_in_month(i as u8 + 1, 2023), *days);
        }
        assert_eq!(days_in_month(2, 2024), 29);
        assert_eq!(days_in_month(2, 2100), 28);
        assert_eq!(days_in_month(2, 2000), 29);
    }

    #[test]
    #[should_panic(expected = "month must be in 1..=12")]
    fn test_days_in_month_rejects_month_zero() {
        days_in_month(0, 2024);
    }

    #[test]
    fn test_roll_forward_zero_days_is_identity() {
        assert_eq!(roll_forward(15, 6, 2030, 0), (15, 6, 2030));
    }

    #[test]
    fn test_roll_forward_normalizes_malformed_leap_day() {
        assert_eq!(roll_forward(29, 2, 2023, 0), (1, 3, 2023));
        // Feb 29 of a non-leap year behaves as Mar 1 when walking
        assert_eq!(roll_forward(29, 2, 2023, 1), (2, 3, 2023));
    }

    #[test]
    fn test_roll_forward_full_years() {
        // 2024 is leap: 366 days from Jan 1 lands on Jan 1 next year
        assert_eq!(roll_forward(1, 1, 2024, 366), (1, 1, 2025));
        assert_eq!(roll_forward(1, 1, 2023, 365), (1, 1, 2024));
        // 2000-01-01 + 10_000 days = 2027-05-19
        assert_eq!(roll_forward(1, 1, 2000, 10_000), (19, 5, 2027));
    }

    #[test]
    fn test_roll_forward_crosses_century() {
        assert_eq!(roll_forward(31, 12, 2099, 1), (1, 1, 2100));
        // 2100 is not leap
        assert_eq!(roll_forward(28, 2, 2100, 1), (1, 3, 2100));
    }
}

//! Day-of-week computation
//!
//! Uses a Zeller-family congruence: January and February are treated as
//! months 13 and 14 of the previous year, which puts the leap day at the end
//! of the shifted year and makes the month term a simple `m0 * 31 / 12`.

use std::fmt;

/// Day of the week, numbered 1 (Sunday) through 7 (Saturday)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Weekday {
    Sunday = 1,
    Monday = 2,
    Tuesday = 3,
    Wednesday = 4,
    Thursday = 5,
    Friday = 6,
    Saturday = 7,
}

impl Weekday {
    /// Convert a 1-based index (1 = Sunday) into a weekday
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(Weekday::Sunday),
            2 => Some(Weekday::Monday),
            3 => Some(Weekday::Tuesday),
            4 => Some(Weekday::Wednesday),
            5 => Some(Weekday::Thursday),
            6 => Some(Weekday::Friday),
            7 => Some(Weekday::Saturday),
            _ => None,
        }
    }

    /// 1-based index (1 = Sunday)
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Three-letter name, as shown by the display sink
    pub fn short_name(self) -> &'static str {
        match self {
            Weekday::Sunday => "Sun",
            Weekday::Monday => "Mon",
            Weekday::Tuesday => "Tue",
            Weekday::Wednesday => "Wed",
            Weekday::Thursday => "Thu",
            Weekday::Friday => "Fri",
            Weekday::Saturday => "Sat",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Day of week for a Gregorian date
///
/// # Panics
/// Panics if `month` is not in 1..=12 or `year` is 0. Callers validate the
/// date first.
///
/// # Example
/// ```
/// use soft_rtc_core::calendar::{weekday, Weekday};
///
/// assert_eq!(weekday(1, 1, 2000), Weekday::Saturday);
/// assert_eq!(weekday(29, 2, 2024), Weekday::Thursday);
/// ```
pub fn weekday(day: u8, month: u8, year: u16) -> Weekday {
    assert!((1..=12).contains(&month), "month must be in 1..=12");
    assert!(year >= 1, "year must be at least 1");
    let early = month < 3;
    let y0 = u32::from(year) - u32::from(early);
    let x = y0 + y0 / 4 - y0 / 100 + y0 / 400;
    let m0 = u32::from(month) + if early { 12 } else { 0 } - 2;
    let index = (u32::from(day) + x + m0 * 31 / 12) % 7 + 1;
    match Weekday::from_index(index as u8) {
        Some(wd) => wd,
        None => unreachable!("congruence result is always in 1..=7"),
    }
}

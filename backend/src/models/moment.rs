//! Moment model
//!
//! A fully validated calendar moment: what `write` accepts and what `read`
//! hands to a display sink. The hour is stored 24-hour; the mode only changes
//! how [`Moment::hour`] and [`fmt::Display`] present it.
//!
//! # Critical Invariants
//!
//! - `1 <= day <= days_in_month(month, year)`, `1 <= month <= 12`
//! - `2000 <= year <= 2199`
//! - `hour <= 23`, `minute <= 59`, `second <= 59`
//! - `weekday` always matches `(day, month, year)`

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::calendar::{
    days_in_month, is_leap_year, to_12h, to_24h, to_short_year, weekday, HourMode, ShortYear,
    Weekday, MAX_YEAR, MIN_YEAR,
};
use crate::error::ClockError;

const SECONDS_PER_DAY: u64 = 86_400;

/// A validated calendar date and wall-clock time
///
/// # Example
/// ```
/// use soft_rtc_core::{HourMode, Moment, Weekday};
///
/// let moment = Moment::from_input(31, 12, 2024, 11, 59, 59, true, HourMode::Hour12).unwrap();
/// assert_eq!(moment.hour24(), 23);
/// assert_eq!(moment.hour(), 11);
/// assert!(moment.is_pm());
/// assert_eq!(moment.weekday(), Weekday::Tuesday);
/// assert_eq!(moment.to_string(), "31-12-2024 11:59:59 PM Tue");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "MomentParts", into = "MomentParts")]
pub struct Moment {
    day: u8,
    month: u8,
    year: u16,
    /// Canonical 24-hour value
    hour: u8,
    minute: u8,
    second: u8,
    /// Cached from (day, month, year)
    weekday: Weekday,
    mode: HourMode,
}

/// Plain field record used for (de)serialization
///
/// Deserialized parts go through full validation before becoming a [`Moment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MomentParts {
    pub day: u8,
    pub month: u8,
    pub year: u16,
    /// 24-hour value
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    #[serde(default)]
    pub mode: HourMode,
}

impl Moment {
    /// Build a moment from 24-hour fields
    ///
    /// # Errors
    /// - `YearOutOfEncodableRange` if `year` is outside 2000..=2199
    /// - `InvalidDate` for any other field out of range
    pub fn new(
        day: u8,
        month: u8,
        year: u16,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<Self, ClockError> {
        Self::from_input(day, month, year, hour, minute, second, false, HourMode::Hour24)
    }

    /// Build a moment from caller input in either hour mode
    ///
    /// In [`HourMode::Hour12`] the hour must be 1-12 and `is_pm` selects the
    /// half of the day; in [`HourMode::Hour24`] the hour must be 0-23 and
    /// `is_pm` is ignored. Validation is all-or-nothing.
    ///
    /// # Errors
    /// - `YearOutOfEncodableRange` if `year` is outside 2000..=2199
    /// - `InvalidDate` naming the first field that fails validation
    #[allow(clippy::too_many_arguments)]
    pub fn from_input(
        day: u8,
        month: u8,
        year: u16,
        hour: u8,
        minute: u8,
        second: u8,
        is_pm: bool,
        mode: HourMode,
    ) -> Result<Self, ClockError> {
        to_short_year(year)?;
        if !(1..=12).contains(&month) {
            return Err(ClockError::invalid_date("month", month));
        }
        if day == 0 || day > days_in_month(month, year) {
            return Err(ClockError::invalid_date("day", day));
        }
        if !mode.accepts(hour) {
            return Err(ClockError::invalid_date("hour", hour));
        }
        if minute > 59 {
            return Err(ClockError::invalid_date("minute", minute));
        }
        if second > 59 {
            return Err(ClockError::invalid_date("second", second));
        }

        let hour24 = match mode {
            HourMode::Hour12 => to_24h(hour, is_pm),
            HourMode::Hour24 => hour,
        };
        Ok(Self::from_validated(
            day, month, year, hour24, minute, second, mode,
        ))
    }

    /// Assemble a moment from fields already known to be in range
    pub(crate) fn from_validated(
        day: u8,
        month: u8,
        year: u16,
        hour: u8,
        minute: u8,
        second: u8,
        mode: HourMode,
    ) -> Self {
        debug_assert!((MIN_YEAR..=MAX_YEAR).contains(&year));
        debug_assert!(day >= 1 && day <= days_in_month(month, year));
        debug_assert!(hour <= 23 && minute <= 59 && second <= 59);
        Self {
            day,
            month,
            year,
            hour,
            minute,
            second,
            weekday: weekday(day, month, year),
            mode,
        }
    }

    /// Same instant presented in another hour mode
    pub fn with_mode(self, mode: HourMode) -> Self {
        Self { mode, ..self }
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    /// Full four-digit year
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Year in the compact two-digit plus century form
    pub fn short_year(&self) -> ShortYear {
        match to_short_year(self.year) {
            Ok(short) => short,
            Err(_) => unreachable!("moment years are validated on construction"),
        }
    }

    /// Hour as presented in the current mode (1-12 or 0-23)
    pub fn hour(&self) -> u8 {
        match self.mode {
            HourMode::Hour12 => to_12h(self.hour).0,
            HourMode::Hour24 => self.hour,
        }
    }

    /// Canonical 24-hour value
    pub fn hour24(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn second(&self) -> u8 {
        self.second
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// Three-letter weekday name
    pub fn weekday_name(&self) -> &'static str {
        self.weekday.short_name()
    }

    /// True from 12:00:00 through 23:59:59
    pub fn is_pm(&self) -> bool {
        self.hour >= 12
    }

    pub fn mode(&self) -> HourMode {
        self.mode
    }

    /// Seconds elapsed since 2000-01-01 00:00:00
    ///
    /// Gives moments a total chronological order independent of hour mode.
    pub fn seconds_since_2000(&self) -> u64 {
        let mut days: u64 = (MIN_YEAR..self.year)
            .map(|y| if is_leap_year(y) { 366u64 } else { 365 })
            .sum();
        days += (1..self.month)
            .map(|m| u64::from(days_in_month(m, self.year)))
            .sum::<u64>();
        days += u64::from(self.day - 1);

        days * SECONDS_PER_DAY
            + u64::from(self.hour) * 3_600
            + u64::from(self.minute) * 60
            + u64::from(self.second)
    }

    /// Compare two moments by the instant they denote, ignoring hour mode
    pub fn cmp_chronological(&self, other: &Self) -> Ordering {
        self.seconds_since_2000().cmp(&other.seconds_since_2000())
    }

    pub fn to_parts(&self) -> MomentParts {
        MomentParts {
            day: self.day,
            month: self.month,
            year: self.year,
            hour: self.hour,
            minute: self.minute,
            second: self.second,
            mode: self.mode,
        }
    }
}

impl TryFrom<MomentParts> for Moment {
    type Error = ClockError;

    fn try_from(parts: MomentParts) -> Result<Self, Self::Error> {
        Moment::new(
            parts.day,
            parts.month,
            parts.year,
            parts.hour,
            parts.minute,
            parts.second,
        )
        .map(|moment| moment.with_mode(parts.mode))
    }
}

impl From<Moment> for MomentParts {
    fn from(moment: Moment) -> Self {
        moment.to_parts()
    }
}

/// `DD-MM-YYYY HH:MM:SS {AM|PM|24H} Www`
impl fmt::Display for Moment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = match (self.mode, self.is_pm()) {
            (HourMode::Hour12, true) => "PM",
            (HourMode::Hour12, false) => "AM",
            (HourMode::Hour24, _) => "24H",
        };
        write!(
            f,
            "{:02}-{:02}-{:04} {:02}:{:02}:{:02} {} {}",
            self.day,
            self.month,
            self.year,
            self.hour(),
            self.minute,
            self.second,
            suffix,
            self.weekday_name()
        )
    }
}

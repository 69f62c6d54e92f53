//! Short-year encoding
//!
//! The clock stores a year as two decimal digits plus one century bit:
//! `full = 2000 + 100 * century + short`. This covers 2000 through 2199 and
//! nothing else, so conversion from a full year is fallible.

use super::{MAX_YEAR, MIN_YEAR};
use crate::error::ClockError;

/// Two-digit year within the active century, plus the century selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ShortYear {
    /// 0-99
    year: u8,
    /// false = 2000s, true = 2100s
    century: bool,
}

impl ShortYear {
    /// Build a short year from its raw parts
    ///
    /// # Errors
    /// `InvalidDate` if `year` is above 99.
    pub fn new(year: u8, century: bool) -> Result<Self, ClockError> {
        if year > 99 {
            return Err(ClockError::invalid_date("year_short", year));
        }
        Ok(Self { year, century })
    }

    pub fn year(&self) -> u8 {
        self.year
    }

    pub fn century(&self) -> bool {
        self.century
    }
}

/// Encode a full year as a short year
///
/// # Errors
/// `YearOutOfEncodableRange` outside 2000..=2199.
///
/// # Example
/// ```
/// use soft_rtc_core::calendar::{to_full_year, to_short_year};
///
/// let short = to_short_year(2124).unwrap();
/// assert_eq!(short.year(), 24);
/// assert!(short.century());
/// assert_eq!(to_full_year(short), 2124);
/// ```
pub fn to_short_year(full_year: u16) -> Result<ShortYear, ClockError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&full_year) {
        return Err(ClockError::year_out_of_range(u32::from(full_year)));
    }
    Ok(ShortYear {
        year: (full_year % 100) as u8,
        century: full_year >= 2100,
    })
}

/// Decode a short year back into the full calendar year
pub fn to_full_year(short: ShortYear) -> u16 {
    MIN_YEAR + 100 * u16::from(short.century) + u16::from(short.year)
}

//! Error types for clock operations
//!
//! Every error is local and recoverable: the caller re-supplies valid input
//! (`write`) or waits for the clock to be synchronized (`read`).

use thiserror::Error;

/// Errors that can occur during clock operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClockError {
    /// A date or time field failed range or calendar validation
    #[error("Invalid date & time: {field} = {value}")]
    InvalidDate { field: &'static str, value: u16 },

    /// The clock has not been written yet, or is disabled
    #[error("Not synchronized")]
    NotSynchronized,

    /// The full year cannot be represented by the two-digit year plus century bit
    #[error("Year {year} outside encodable range {min}..={max}")]
    YearOutOfEncodableRange { year: u32, min: u16, max: u16 },

    /// Clock configuration failed parsing or validation
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl ClockError {
    /// Create an invalid-date error naming the offending field
    pub fn invalid_date(field: &'static str, value: impl Into<u16>) -> Self {
        Self::InvalidDate {
            field,
            value: value.into(),
        }
    }

    /// Create a year-out-of-range error for the encodable window
    pub fn year_out_of_range(year: u32) -> Self {
        Self::YearOutOfEncodableRange {
            year,
            min: crate::calendar::MIN_YEAR,
            max: crate::calendar::MAX_YEAR,
        }
    }

    /// Returns true for errors caused by caller-supplied values
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidDate { .. } | Self::YearOutOfEncodableRange { .. }
        )
    }
}

//! 12-hour / 24-hour conversion
//!
//! Canonical storage is always 24-hour. The 12-hour form only exists at the
//! write and read boundary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Presentation mode for the hour field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HourMode {
    /// 1-12 with an AM/PM flag
    Hour12,
    /// 0-23
    #[default]
    Hour24,
}

impl HourMode {
    /// Valid input hour range for this mode
    pub fn accepts(self, hour: u8) -> bool {
        match self {
            HourMode::Hour12 => (1..=12).contains(&hour),
            HourMode::Hour24 => hour <= 23,
        }
    }

    pub fn is_12h(self) -> bool {
        self == HourMode::Hour12
    }
}

impl fmt::Display for HourMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HourMode::Hour12 => write!(f, "12H"),
            HourMode::Hour24 => write!(f, "24H"),
        }
    }
}

/// Convert a 24-hour value (0-23) to `(hour12, is_pm)`
///
/// # Example
/// ```
/// use soft_rtc_core::calendar::to_12h;
///
/// assert_eq!(to_12h(0), (12, false));
/// assert_eq!(to_12h(12), (12, true));
/// assert_eq!(to_12h(23), (11, true));
/// ```
pub fn to_12h(hour24: u8) -> (u8, bool) {
    let is_pm = hour24 >= 12;
    let hour12 = match hour24 {
        0 => 12,
        h if h > 12 => h - 12,
        h => h,
    };
    (hour12, is_pm)
}

/// Convert a 12-hour value (1-12) plus AM/PM flag to 24-hour
///
/// # Example
/// ```
/// use soft_rtc_core::calendar::to_24h;
///
/// assert_eq!(to_24h(12, false), 0);
/// assert_eq!(to_24h(12, true), 12);
/// assert_eq!(to_24h(1, true), 13);
/// ```
pub fn to_24h(hour12: u8, is_pm: bool) -> u8 {
    match (is_pm, hour12) {
        (true, h) if h < 12 => h + 12,
        (false, 12) => 0,
        (_, h) => h,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midnight_and_noon() {
        assert_eq!(to_12h(0), (12, false));
        assert_eq!(to_12h(11), (11, false));
        assert_eq!(to_12h(12), (12, true));
        assert_eq!(to_12h(13), (1, true));
        assert_eq!(to_24h(12, false), 0);
        assert_eq!(to_24h(11, false), 11);
        assert_eq!(to_24h(12, true), 12);
        assert_eq!(to_24h(11, true), 23);
    }

    #[test]
    fn test_mode_accepts() {
        assert!(!HourMode::Hour12.accepts(0));
        assert!(HourMode::Hour12.accepts(1));
        assert!(HourMode::Hour12.accepts(12));
        assert!(!HourMode::Hour12.accepts(13));
        assert!(HourMode::Hour24.accepts(0));
        assert!(HourMode::Hour24.accepts(23));
        assert!(!HourMode::Hour24.accepts(24));
    }
}

//! Clock state
//!
//! The only persistent entity of the clock: the last synchronized calendar
//! moment in its compact encoding, the tick reading that goes with it, and
//! the sync/enable flags.
//!
//! # Critical Invariants
//!
//! 1. **All-or-nothing writes**: fields only change through [`ClockState::store`],
//!    which takes an already validated [`Moment`]
//! 2. **Cached fields follow the date**: `weekday` and `pm` are recomputed on
//!    every store, never set independently
//! 3. **Unsynced means meaningless**: while `synced` is false (or the clock is
//!    disabled) the date fields are not reported
//! 4. **No truncation**: the packed image rejects out-of-range fields on
//!    unpack instead of masking them

use crate::calendar::{to_full_year, weekday, HourMode, ShortYear, Weekday};
use crate::core::Tick;
use crate::error::ClockError;
use crate::models::moment::Moment;

// Bit positions of the packed image, least significant first.
const DAY_SHIFT: u32 = 0;
const MONTH_SHIFT: u32 = 5;
const YEAR_SHIFT: u32 = 9;
const HOUR_SHIFT: u32 = 16;
const MINUTE_SHIFT: u32 = 21;
const SECOND_SHIFT: u32 = 27;
const WEEKDAY_SHIFT: u32 = 33;
const PM_BIT: u32 = 36;
const MODE12_BIT: u32 = 37;
const CENTURY_BIT: u32 = 38;
const ENABLED_BIT: u32 = 39;
const SYNCED_BIT: u32 = 40;

/// Number of meaningful bits in a packed image
pub const PACKED_BITS: u32 = 41;

/// Calendar state of one clock instance
///
/// Created zeroed, unsynced and disabled. The zero-state still satisfies the
/// calendar invariants (1 Jan 2000, 00:00:00, Saturday) so nothing ever holds
/// an impossible date, but it is never reported to readers.
///
/// # Example
/// ```
/// use soft_rtc_core::{ClockError, ClockState, Moment};
///
/// let mut state = ClockState::new();
/// assert_eq!(state.moment(), Err(ClockError::NotSynchronized));
///
/// state.set_enabled(true);
/// state.store(&Moment::new(1, 1, 2024, 8, 30, 0).unwrap(), 5_000);
/// assert_eq!(state.moment().unwrap().hour24(), 8);
/// assert_eq!(state.anchor_tick(), 5_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockState {
    /// 1-31
    day: u8,
    /// 1-12
    month: u8,
    /// 0-99 within the active century
    year_short: u8,
    /// false = 2000, true = 2100
    century: bool,
    /// 0-23, always canonical 24-hour
    hour: u8,
    /// 0-59
    minute: u8,
    /// 0-59
    second: u8,
    /// Cached from (day, month, full year)
    weekday: Weekday,
    /// Presentation mode at the read/write boundary
    mode: HourMode,
    /// Cached from the canonical hour
    pm: bool,
    synced: bool,
    enabled: bool,
    /// Tick reading paired with the stored moment
    anchor_tick: Tick,
}

impl ClockState {
    /// Zeroed, unsynced, disabled state
    pub fn new() -> Self {
        Self {
            day: 1,
            month: 1,
            year_short: 0,
            century: false,
            hour: 0,
            minute: 0,
            second: 0,
            weekday: weekday(1, 1, 2000),
            mode: HourMode::Hour24,
            pm: false,
            synced: false,
            enabled: false,
            anchor_tick: 0,
        }
    }

    /// Replace the stored moment and anchor, marking the state synced
    ///
    /// The enable flag is left alone.
    pub fn store(&mut self, moment: &Moment, anchor_tick: Tick) {
        let short = moment.short_year();
        self.day = moment.day();
        self.month = moment.month();
        self.year_short = short.year();
        self.century = short.century();
        self.hour = moment.hour24();
        self.minute = moment.minute();
        self.second = moment.second();
        self.weekday = weekday(self.day, self.month, to_full_year(short));
        self.mode = moment.mode();
        self.pm = self.hour >= 12;
        self.anchor_tick = anchor_tick;
        self.synced = true;
    }

    /// Reset to the zeroed, unsynced, disabled state
    pub fn flush(&mut self) {
        *self = Self::new();
    }

    /// Drop sync while keeping the enable flag
    pub(crate) fn desync(&mut self) {
        let enabled = self.enabled;
        self.flush();
        self.enabled = enabled;
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_synced(&self) -> bool {
        self.synced
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// True when reads are allowed: enabled and synced
    pub fn is_running(&self) -> bool {
        self.enabled && self.synced
    }

    pub fn anchor_tick(&self) -> Tick {
        self.anchor_tick
    }

    pub fn mode(&self) -> HourMode {
        self.mode
    }

    /// Stored moment exactly as last written or advanced
    ///
    /// # Errors
    /// `NotSynchronized` while unsynced or disabled.
    pub fn moment(&self) -> Result<Moment, ClockError> {
        if !self.is_running() {
            return Err(ClockError::NotSynchronized);
        }
        Ok(self.decode())
    }

    fn full_year(&self) -> u16 {
        to_full_year(self.short_year())
    }

    fn short_year(&self) -> ShortYear {
        match ShortYear::new(self.year_short, self.century) {
            Ok(short) => short,
            Err(_) => unreachable!("year_short is only set from a validated moment"),
        }
    }

    fn decode(&self) -> Moment {
        Moment::from_validated(
            self.day,
            self.month,
            self.full_year(),
            self.hour,
            self.minute,
            self.second,
            self.mode,
        )
    }

    // ========================================================================
    // Packed image
    // ========================================================================

    /// Bit-packed image of the calendar fields and flags
    ///
    /// Layout, least significant bit first: day 5, month 4, short year 7,
    /// hour 5, minute 6, second 6, weekday 3, pm 1, 12h mode 1, century 1,
    /// enabled 1, synced 1. The anchor tick is not part of the image.
    pub fn to_bits(&self) -> u64 {
        u64::from(self.day) << DAY_SHIFT
            | u64::from(self.month) << MONTH_SHIFT
            | u64::from(self.year_short) << YEAR_SHIFT
            | u64::from(self.hour) << HOUR_SHIFT
            | u64::from(self.minute) << MINUTE_SHIFT
            | u64::from(self.second) << SECOND_SHIFT
            | u64::from(self.weekday.index()) << WEEKDAY_SHIFT
            | u64::from(self.pm) << PM_BIT
            | u64::from(self.mode.is_12h()) << MODE12_BIT
            | u64::from(self.century) << CENTURY_BIT
            | u64::from(self.enabled) << ENABLED_BIT
            | u64::from(self.synced) << SYNCED_BIT
    }

    /// Rebuild a state from a packed image
    ///
    /// An unsynced image yields the zero-state (keeping its enable flag).
    /// A synced image must describe a valid moment with consistent cached
    /// weekday and pm bits.
    ///
    /// # Errors
    /// `InvalidDate` for reserved bits, out-of-range fields or stale cached
    /// fields.
    pub fn from_bits(bits: u64, anchor_tick: Tick) -> Result<Self, ClockError> {
        if bits >> PACKED_BITS != 0 {
            let reserved = u16::try_from(bits >> PACKED_BITS).unwrap_or(u16::MAX);
            return Err(ClockError::invalid_date("reserved_bits", reserved));
        }

        let field = |shift: u32, width: u32| ((bits >> shift) & ((1 << width) - 1)) as u8;
        let flag = |bit: u32| (bits >> bit) & 1 == 1;

        let mut state = Self::new();
        state.enabled = flag(ENABLED_BIT);
        if !flag(SYNCED_BIT) {
            return Ok(state);
        }

        let short = ShortYear::new(field(YEAR_SHIFT, 7), flag(CENTURY_BIT))?;
        let mode = if flag(MODE12_BIT) {
            HourMode::Hour12
        } else {
            HourMode::Hour24
        };
        let moment = Moment::new(
            field(DAY_SHIFT, 5),
            field(MONTH_SHIFT, 4),
            to_full_year(short),
            field(HOUR_SHIFT, 5),
            field(MINUTE_SHIFT, 6),
            field(SECOND_SHIFT, 6),
        )?
        .with_mode(mode);

        let packed_weekday = field(WEEKDAY_SHIFT, 3);
        if packed_weekday != moment.weekday().index() {
            return Err(ClockError::invalid_date("weekday", packed_weekday));
        }
        if flag(PM_BIT) != moment.is_pm() {
            return Err(ClockError::invalid_date("ampm", u8::from(flag(PM_BIT))));
        }

        state.store(&moment, anchor_tick);
        Ok(state)
    }
}

impl Default for ClockState {
    fn default() -> Self {
        Self::new()
    }
}

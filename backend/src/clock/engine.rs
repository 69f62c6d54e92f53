//! Soft clock engine
//!
//! [`SoftRtc`] owns one [`ClockState`], one tick source and a configuration,
//! and exposes the clock lifecycle:
//!
//! ```text
//! Disabled ──enable──▶ Enabled/Unsynced ──write ok──▶ Enabled/Synced
//!     ▲                                                     │
//!     └────────────────────── stop / flush ─────────────────┘
//! ```
//!
//! A failed `write` never changes state. `disable` hides the clock from
//! readers without dropping sync; `enable` makes it readable again.
//!
//! # Concurrency
//!
//! Single-threaded and non-blocking. An owner sharing a clock with an
//! interrupt or callback context must serialize access itself: `read`,
//! `write` and `advance` update several fields in sequence.

use crate::calendar::HourMode;
use crate::clock::accumulator::advance_state;
use crate::clock::config::{ClockConfig, UpdateStrategy};
use crate::clock::projection::project_at;
use crate::core::tick::TickSource;
use crate::error::ClockError;
use crate::models::{ClockState, Moment};

/// Software real-time clock driven by a millisecond tick source
///
/// # Example
/// ```
/// use soft_rtc_core::{HourMode, ManualTicks, SoftRtc};
///
/// let ticks = ManualTicks::new(0);
/// let mut rtc = SoftRtc::new(ticks.clone());
/// rtc.enable();
/// rtc.write(31, 12, 2024, 23, 59, 59, false, HourMode::Hour24).unwrap();
///
/// ticks.advance(2_000);
/// let now = rtc.read().unwrap();
/// assert_eq!(now.to_string(), "01-01-2025 00:00:01 24H Wed");
/// ```
#[derive(Debug, Clone)]
pub struct SoftRtc<T: TickSource> {
    state: ClockState,
    ticks: T,
    config: ClockConfig,
}

impl<T: TickSource> SoftRtc<T> {
    /// Create a disabled, unsynced clock with the default configuration
    pub fn new(ticks: T) -> Self {
        Self {
            state: ClockState::new(),
            ticks,
            config: ClockConfig::default(),
        }
    }

    /// Create a clock from an explicit configuration
    ///
    /// # Errors
    /// `InvalidConfig` if the configuration fails validation.
    pub fn with_config(ticks: T, config: ClockConfig) -> Result<Self, ClockError> {
        config.validate()?;
        let mut state = ClockState::new();
        state.set_enabled(config.start_enabled);
        Ok(Self {
            state,
            ticks,
            config,
        })
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Start the clock (reads succeed once it is also synced)
    pub fn enable(&mut self) {
        self.state.set_enabled(true);
        tracing::debug!(synced = self.state.is_synced(), "clock enabled");
    }

    /// Hide the clock from readers, keeping its sync and anchor
    pub fn disable(&mut self) {
        self.state.set_enabled(false);
        tracing::debug!("clock disabled");
    }

    /// Stop the clock: back to the disabled, unsynced zero-state
    pub fn stop(&mut self) {
        self.flush();
    }

    /// Reset to the disabled, unsynced zero-state
    pub fn flush(&mut self) {
        self.state.flush();
        tracing::debug!("clock flushed");
    }

    // ========================================================================
    // Write / Read
    // ========================================================================

    /// Set the clock from caller input
    ///
    /// In 12-hour mode `hour` is 1-12 and `is_pm` picks the half of the day;
    /// in 24-hour mode `hour` is 0-23 and `is_pm` is ignored.
    ///
    /// # Errors
    /// - `YearOutOfEncodableRange` for a year outside 2000..=2199
    /// - `InvalidDate` for any other field out of range
    ///
    /// The state is unchanged on error.
    #[allow(clippy::too_many_arguments)]
    pub fn write(
        &mut self,
        day: u8,
        month: u8,
        year: u16,
        hour: u8,
        minute: u8,
        second: u8,
        is_pm: bool,
        mode: HourMode,
    ) -> Result<(), ClockError> {
        let moment = Moment::from_input(day, month, year, hour, minute, second, is_pm, mode)
            .inspect_err(|err| tracing::warn!(error = %err, "rejected clock write"))?;
        self.write_moment(&moment);
        Ok(())
    }

    /// Set the clock from an already validated moment
    pub fn write_moment(&mut self, moment: &Moment) {
        let anchor_tick = self.ticks.now();
        self.state.store(moment, anchor_tick);
        tracing::debug!(
            moment = %moment,
            mode = %moment.mode(),
            anchor_tick,
            "clock written"
        );
    }

    /// Current moment
    ///
    /// With [`UpdateStrategy::Projection`] this reconstructs the moment from
    /// the elapsed ticks without mutating anything. With
    /// [`UpdateStrategy::Accumulator`] it returns the stored moment as of the
    /// last [`advance`](Self::advance).
    ///
    /// # Errors
    /// - `NotSynchronized` while unsynced or disabled
    /// - `YearOutOfEncodableRange` if the projection runs past 2199
    pub fn read(&self) -> Result<Moment, ClockError> {
        let stored = self.state.moment().inspect_err(|_| {
            tracing::trace!(
                enabled = self.state.is_enabled(),
                synced = self.state.is_synced(),
                "read refused: not synchronized"
            )
        })?;

        match self.config.strategy {
            UpdateStrategy::Projection => {
                project_at(&stored, self.state.anchor_tick(), self.ticks.now())
            }
            UpdateStrategy::Accumulator => Ok(stored),
        }
    }

    /// Text rendering of [`read`](Self::read) for a display sink
    pub fn render(&self) -> Result<String, ClockError> {
        self.read().map(|moment| moment.to_string())
    }

    /// Accumulator step: fold elapsed whole seconds into the stored moment
    ///
    /// Returns the seconds applied. Under the projection strategy this only
    /// re-anchors the stored moment, so later reads project from the new
    /// anchor to the same result. The catch-up window applies to the
    /// accumulator strategy alone.
    ///
    /// # Errors
    /// See [`advance_state`].
    pub fn advance(&mut self) -> Result<u32, ClockError> {
        let now = self.ticks.now();
        let max_catch_up_secs = match self.config.strategy {
            UpdateStrategy::Accumulator => self.config.max_catch_up_secs,
            UpdateStrategy::Projection => None,
        };
        advance_state(&mut self.state, now, max_catch_up_secs)
    }

    // ========================================================================
    // Status
    // ========================================================================

    /// True when reads succeed: enabled and synced
    pub fn sync_status(&self) -> bool {
        self.state.is_running()
    }

    pub fn is_synced(&self) -> bool {
        self.state.is_synced()
    }

    pub fn is_enabled(&self) -> bool {
        self.state.is_enabled()
    }

    pub fn state(&self) -> &ClockState {
        &self.state
    }

    pub fn config(&self) -> &ClockConfig {
        &self.config
    }
}

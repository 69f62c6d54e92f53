//! Clock configuration
//!
//! Every field has a default, so an empty JSON object is a valid config.

use serde::{Deserialize, Serialize};

use crate::error::ClockError;

/// How a clock turns elapsed ticks into the current moment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateStrategy {
    /// Each read recomputes the moment from the anchor; stored state never
    /// changes between writes
    #[default]
    Projection,
    /// `advance` folds elapsed seconds into the stored moment; reads return
    /// the stored fields as of the last `advance`
    Accumulator,
}

/// Configuration for a [`SoftRtc`](crate::clock::SoftRtc)
///
/// # Example
/// ```
/// use soft_rtc_core::clock::{ClockConfig, UpdateStrategy};
///
/// let json = r#"{"strategy": "accumulator", "max_catch_up_secs": 60}"#;
/// let config = ClockConfig::from_json(json).unwrap();
/// assert_eq!(config.strategy, UpdateStrategy::Accumulator);
/// assert!(!config.start_enabled);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClockConfig {
    /// Reconstruction strategy (default: projection)
    pub strategy: UpdateStrategy,

    /// Start in the enabled state instead of requiring `enable()` (default: false)
    pub start_enabled: bool,

    /// Accumulator only: largest gap in whole seconds that one `advance` may
    /// fold in. A larger gap drops sync. `None` accepts any gap.
    pub max_catch_up_secs: Option<u32>,
}

impl ClockConfig {
    /// Parse and validate a JSON configuration
    ///
    /// # Errors
    /// `InvalidConfig` on malformed JSON, unknown fields or failed validation.
    pub fn from_json(json: &str) -> Result<Self, ClockError> {
        let config: ClockConfig =
            serde_json::from_str(json).map_err(|e| ClockError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check field combinations
    pub fn validate(&self) -> Result<(), ClockError> {
        if self.max_catch_up_secs == Some(0) {
            return Err(ClockError::InvalidConfig(
                "max_catch_up_secs must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn with_strategy(mut self, strategy: UpdateStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_start_enabled(mut self, start_enabled: bool) -> Self {
        self.start_enabled = start_enabled;
        self
    }

    pub fn with_max_catch_up_secs(mut self, secs: Option<u32>) -> Self {
        self.max_catch_up_secs = secs;
        self
    }
}

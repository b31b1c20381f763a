use crate::config::RespawnConfig;
use crate::error::{ConfigError, Result};
use std::ops::RangeInclusive;

/// Accepted debounce windows, in milliseconds (up to ten minutes).
pub const DEBOUNCE_RANGE: RangeInclusive<u64> = 1..=600_000;

impl RespawnConfig {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if !DEBOUNCE_RANGE.contains(&self.debounce_ms) {
            return Err(ConfigError::InvalidValue {
                field: "debounce_ms".to_string(),
                value: self.debounce_ms.to_string(),
                hint: format!(
                    "Use a window between {} and {} milliseconds",
                    DEBOUNCE_RANGE.start(),
                    DEBOUNCE_RANGE.end()
                ),
            }
            .into());
        }

        Ok(())
    }
}

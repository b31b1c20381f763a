//! Configuration for the `respawn` binary.
//!
//! Sources, highest priority first:
//!
//! 1. Command-line flags
//! 2. `RESPAWN_*` environment variables
//! 3. `respawn.toml` in the working directory, or the file given by `--config`
//! 4. Built-in defaults
//!
//! ```toml
//! # respawn.toml
//! debounce_ms = 500
//! clear_screen = false
//! ```

mod defaults;
mod loading;
mod validation;


pub use defaults::{default_clear_screen, default_debounce_ms, CONFIG_FILE_NAME, ENV_PREFIX};

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RespawnConfig {
    /// Cool-down after each start during which change events are dropped.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Clear the terminal before each start.
    #[serde(default = "default_clear_screen")]
    pub clear_screen: bool,
}

impl RespawnConfig {
    /// Debounce window as a [`Duration`].
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub(crate) fn default_config() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            clear_screen: default_clear_screen(),
        }
    }
}

impl Default for RespawnConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

/// Values set explicitly on the command line.
///
/// Only the `Some` fields are merged, so an absent flag never masks a value
/// from the file or the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debounce_ms: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub clear_screen: Option<bool>,
}

//! Default values for configuration fields.

/// File picked up from the working directory when `--config` is absent.
pub const CONFIG_FILE_NAME: &str = "respawn.toml";

/// Prefix for environment overrides, e.g. `RESPAWN_DEBOUNCE_MS`.
pub const ENV_PREFIX: &str = "RESPAWN_";

pub fn default_debounce_ms() -> u64 {
    respawn_core::DEFAULT_DEBOUNCE.as_millis() as u64
}

pub fn default_clear_screen() -> bool {
    true
}

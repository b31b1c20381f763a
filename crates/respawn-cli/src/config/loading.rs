use crate::config::{ConfigOverrides, RespawnConfig, CONFIG_FILE_NAME, ENV_PREFIX};
use crate::error::{ConfigError, Result};
use figment::{
    providers::{Env, Format as _, Serialized, Toml},
    Figment,
};
use std::path::{Path, PathBuf};

impl RespawnConfig {
    /// Load configuration from every source.
    /// Priority: CLI flags > environment variables > config file > defaults
    pub fn load(overrides: &ConfigOverrides, config_path: Option<&Path>) -> Result<Self> {
        Self::load_from(overrides, config_path, Path::new("."))
    }

    /// Like [`load`](Self::load), looking for `respawn.toml` under `dir`.
    pub fn load_from(
        overrides: &ConfigOverrides,
        config_path: Option<&Path>,
        dir: &Path,
    ) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default_config()));

        if let Some(path) = config_file(config_path, dir)? {
            tracing::debug!("Loading configuration from {}", path.display());
            figment = figment.merge(Toml::file(path));
        }

        // RESPAWN_DEBOUNCE_MS, RESPAWN_CLEAR_SCREEN
        figment = figment.merge(Env::prefixed(ENV_PREFIX));

        figment = figment.merge(Serialized::defaults(overrides));

        let config: Self = figment.extract().map_err(|e| ConfigError::InvalidValue {
            field: "configuration".to_string(),
            value: e.to_string(),
            hint: format!("Check {CONFIG_FILE_NAME} syntax and {ENV_PREFIX}* variables"),
        })?;

        config.validate()?;
        Ok(config)
    }
}

/// An explicit `--config` must exist; the implicit file is optional.
fn config_file(explicit: Option<&Path>, dir: &Path) -> Result<Option<PathBuf>> {
    match explicit {
        Some(path) if path.is_file() => Ok(Some(path.to_path_buf())),
        Some(path) => Err(ConfigError::NotFound(path.to_path_buf()).into()),
        None => {
            let implicit = dir.join(CONFIG_FILE_NAME);
            Ok(implicit.is_file().then_some(implicit))
        }
    }
}

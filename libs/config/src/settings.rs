//! Client settings loading
//!
//! Sources, later ones winning:
//! 1. Built-in defaults
//! 2. TOML file (`config/client.toml` unless a path is given)
//! 3. `CSP_`-prefixed environment variables, sections split by `__`
//!    (`CSP_CODEC__MAX_TEXT_LEN=4000`)

use crate::logging::LoggingSettings;
use anyhow::{anyhow, Context, Result};
use config::{Config, Environment, File};
use csp_codec::{CodecLimits, ReplayGuardSettings};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

pub const DEFAULT_CONFIG_PATH: &str = "config/client.toml";
pub const ENV_PREFIX: &str = "CSP";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientSettings {
    pub codec: CodecLimits,
    pub replay: ReplayGuardSettings,
    pub logging: LoggingSettings,
}

impl ClientSettings {
    /// Load with the standard environment prefix
    ///
    /// An explicit `path` must exist; the default path is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_prefix(path, ENV_PREFIX)
    }

    pub fn load_with_prefix(path: Option<&Path>, env_prefix: &str) -> Result<Self> {
        let (file, required) = match path {
            Some(path) => (path, true),
            None => (Path::new(DEFAULT_CONFIG_PATH), false),
        };
        debug!(path = %file.display(), required, env_prefix, "loading client settings");

        let config = Config::builder()
            .add_source(File::from(file).required(required))
            .add_source(
                Environment::with_prefix(env_prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to build configuration from {}", file.display()))?;

        let settings: Self = config
            .try_deserialize()
            .context("Failed to deserialize client settings")?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        self.codec
            .validate()
            .map_err(|reason| anyhow!("Invalid codec limits: {reason}"))?;
        if self.replay.capacity == 0 {
            return Err(anyhow!("Invalid replay settings: capacity must be positive"));
        }
        Ok(())
    }

    /// Defaults rendered as a TOML file
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize client settings")
    }
}

/// Load from the default locations
pub fn load_settings(path: Option<&Path>) -> Result<ClientSettings> {
    ClientSettings::load(path)
}

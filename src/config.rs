//! Driver configuration
//!
//! Only ambient settings live here. The credential pair and the driver's
//! inputs are compiled in and cannot be overridden.

use std::path::Path;

use config::{Config, File, FileFormat, Source};
use serde::Deserialize;

use crate::error::DriverError;

/// Settings file looked up in the working directory as `auth_check.toml`.
/// Only TOML is read.
pub const DEFAULT_CONFIG_NAME: &str = "auth_check";

const DEFAULT_LOG_LEVEL: &str = "warn";
const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct DriverConfig {
    /// Filter passed to the logger, e.g. `info` or `debug`
    pub log_level: String,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl DriverConfig {
    /// Load defaults overlaid with `auth_check.toml` if one is present
    pub fn load() -> Result<Self, DriverError> {
        Self::build(File::new(DEFAULT_CONFIG_NAME, FileFormat::Toml).required(false))
    }

    /// Load defaults overlaid with the given file, which must exist
    pub fn load_from(path: &Path) -> Result<Self, DriverError> {
        Self::build(File::from(path))
    }

    fn build<S>(source: S) -> Result<Self, DriverError>
    where
        S: Source + Send + Sync + 'static,
    {
        let settings = Config::builder()
            .set_default("log_level", DEFAULT_LOG_LEVEL)?
            .add_source(source)
            .build()?;

        let config: DriverConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), DriverError> {
        let level = self.log_level.trim();
        if level.is_empty() {
            return Err(DriverError::InvalidSetting(
                "log_level cannot be empty".into(),
            ));
        }

        if !LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
            return Err(DriverError::InvalidSetting(format!(
                "unknown log_level: {}",
                self.log_level
            )));
        }

        Ok(())
    }
}

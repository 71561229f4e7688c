//! Error types

use std::fmt;

/// Driver setup errors
#[derive(Debug)]
pub enum DriverError {
    Config(config::ConfigError),
    InvalidSetting(String),
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverError::Config(e) => write!(f, "Configuration error: {}", e),
            DriverError::InvalidSetting(s) => write!(f, "Invalid setting: {}", s),
        }
    }
}

impl std::error::Error for DriverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DriverError::Config(e) => Some(e),
            DriverError::InvalidSetting(_) => None,
        }
    }
}

impl From<config::ConfigError> for DriverError {
    fn from(error: config::ConfigError) -> Self {
        DriverError::Config(error)
    }
}

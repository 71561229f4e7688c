//! Logging utilities
//!
//! Sets up `env_logger` from the configured filter. The environment is not
//! consulted and records go to stderr, leaving stdout to the driver.

use env_logger::{Builder, Target};

/// Setup logging for the driver
pub fn setup_logging(filter: &str) {
    let mut builder = Builder::new();
    builder.parse_filters(filter).target(Target::Stderr);
    // A logger may already be installed (e.g. by a test harness)
    let _ = builder.try_init();
}

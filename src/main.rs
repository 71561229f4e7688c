//! Auth Check - Entry Point
//!
//! Verifies the compiled-in test credentials and reports the result.

use std::process::ExitCode;

use log::{info, warn};

use auth_check::auth;
use auth_check::config::DriverConfig;
use auth_check::utils::logging::setup_logging;

const TEST_USERNAME: &str = "admin";
const TEST_PASSWORD: &str = "12345";

fn main() -> ExitCode {
    let (config, load_error) = match DriverConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (DriverConfig::default(), Some(e)),
    };

    setup_logging(config.log_level.trim());
    if let Some(e) = load_error {
        warn!("Falling back to default settings: {}", e);
    }

    info!("Checking credentials for user {:?}", TEST_USERNAME);
    let outcome = auth::verify(TEST_USERNAME, TEST_PASSWORD);
    println!("{}", outcome);

    outcome.into()
}

//! Authentication validator
//!
//! Compares the supplied username and password with the built-in pair.
//! Comparison is byte-for-byte: no trimming, no case folding.

use log::debug;

use super::credentials::{ADMIN_PASSWORD, ADMIN_USERNAME};
use super::results::AuthOutcome;

/// Returns true only for the exact built-in username and password.
pub fn authenticate_user(username: &str, password: &str) -> bool {
    username == ADMIN_USERNAME && password == ADMIN_PASSWORD
}

/// Same check as [`authenticate_user`], reported as an [`AuthOutcome`].
pub fn verify(username: &str, password: &str) -> AuthOutcome {
    let outcome = AuthOutcome::from(authenticate_user(username, password));
    debug!("Authentication for user {:?}: {:?}", username, outcome);
    outcome
}

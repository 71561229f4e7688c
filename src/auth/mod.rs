//! Authentication
//!
//! Checks a username/password pair against the single built-in credential.

pub mod credentials;
pub mod results;
pub mod validator;

pub use results::AuthOutcome;
pub use validator::{authenticate_user, verify};

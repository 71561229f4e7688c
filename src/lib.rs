pub mod auth;
pub mod config;
pub mod error;
pub mod utils;

pub use auth::{AuthOutcome, authenticate_user, verify};

//! Built-in credential pair
//!
//! Demo values only. There is no store behind these.

/// The only username accepted.
pub const ADMIN_USERNAME: &str = "admin";

/// The password paired with [`ADMIN_USERNAME`].
pub const ADMIN_PASSWORD: &str = "12345";

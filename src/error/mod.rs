//! Error handling
//!
//! Errors from the driver's ambient setup. Authentication itself never fails.

pub mod types;

pub use types::*;

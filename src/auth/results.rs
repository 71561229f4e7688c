//! Authentication result types
//!
//! Defines the outcome returned by the validator and how the driver reports it.

use std::fmt;
use std::process::ExitCode;

/// Outcome of a credential check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOutcome {
    Success,
    Failure,
}

impl AuthOutcome {
    pub fn is_success(self) -> bool {
        self == AuthOutcome::Success
    }

    /// Line printed by the driver
    pub fn message(self) -> &'static str {
        match self {
            AuthOutcome::Success => "Autenticacion exitosa",
            AuthOutcome::Failure => "Fallo en la autenticacion",
        }
    }

    /// Process status: 0 on success, 1 on failure
    pub fn exit_code(self) -> u8 {
        match self {
            AuthOutcome::Success => 0,
            AuthOutcome::Failure => 1,
        }
    }
}

impl From<bool> for AuthOutcome {
    fn from(authenticated: bool) -> Self {
        if authenticated {
            AuthOutcome::Success
        } else {
            AuthOutcome::Failure
        }
    }
}

impl From<AuthOutcome> for ExitCode {
    fn from(outcome: AuthOutcome) -> Self {
        ExitCode::from(outcome.exit_code())
    }
}

impl fmt::Display for AuthOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

//! CLI error handling with user-friendly messages.
//!
//! Centralizes error formatting and exit codes for the binary.

use std::fmt;
use std::process;

use libshelf::manager::ManagerError;

/// Exit code for ordinary failures.
pub const EXIT_FAILURE: i32 = 1;
/// Exit code for an invocation with nothing actionable to do.
pub const EXIT_BAD_CALL: i32 = 2;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(String),
    /// A library operation failed
    Libraries(ManagerError),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        if let CliError::Libraries(ManagerError::RecoveryFailed { path, .. }) = self {
            eprintln!();
            eprintln!(
                "The libraries directory '{}' could not be read.",
                path.display()
            );
            eprintln!("Check that it exists and is a readable directory.");
        }

        process::exit(EXIT_FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "failed to initialize logging: {}", msg),
            CliError::Config(msg) => write!(f, "configuration error: {}", msg),
            CliError::Libraries(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Libraries(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ManagerError> for CliError {
    fn from(e: ManagerError) -> Self {
        CliError::Libraries(e)
    }
}

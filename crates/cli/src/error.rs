//! CLI error types.

use datekeeper_core::calendar::DateError;
use thiserror::Error;

/// Result type alias for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur while running a command.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] DateError),

    #[error("Count must be at least 1")]
    EmptyCount,
}

//! datekeeper_cli - command-line harness for the datekeeper core.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;

pub use error::{CliError, Result};

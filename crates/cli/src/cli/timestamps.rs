//! Timestamp CLI commands.

use clap::{Parser, Subcommand};

/// Timestamp commands.
#[derive(Debug, Parser)]
pub struct TimestampsCommand {
    #[command(subcommand)]
    pub action: TimestampsAction,
}

/// Available timestamp actions.
#[derive(Debug, Subcommand)]
pub enum TimestampsAction {
    /// Generate timestamps for the current time.
    Generate {
        /// Number of timestamps to generate.
        #[arg(long, short = 'n', default_value = "1")]
        count: usize,
    },
    /// Check that a value has the generated timestamp format.
    Check {
        /// Value to check.
        value: String,
    },
}

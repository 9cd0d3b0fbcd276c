//! Duration CLI commands.

use clap::{Parser, Subcommand};

/// Elapsed time commands.
#[derive(Debug, Parser)]
pub struct DurationsCommand {
    #[command(subcommand)]
    pub action: DurationsAction,
}

/// Available duration actions.
#[derive(Debug, Subcommand)]
pub enum DurationsAction {
    /// Signed seconds from the first value to the second.
    Measure {
        /// Start value.
        from: String,
        /// End value.
        to: String,
    },
    /// Seconds spanned by the whole valid range.
    Max,
}

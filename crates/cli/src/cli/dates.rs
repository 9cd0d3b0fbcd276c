//! Date CLI commands.

use clap::{Parser, Subcommand};

/// Date validation and comparison commands.
#[derive(Debug, Parser)]
pub struct DatesCommand {
    #[command(subcommand)]
    pub action: DatesAction,
}

/// Available date actions.
#[derive(Debug, Subcommand)]
pub enum DatesAction {
    /// Parse and range-check a value (YYYY-MM-DD or YYYY-MM-DD HH:MM:SS).
    Validate {
        /// Value to validate.
        value: String,
        /// Require a time part.
        #[arg(long)]
        time: bool,
    },
    /// Compare two values.
    Compare {
        /// First value.
        a: String,
        /// Second value.
        b: String,
    },
    /// Check whether a value lies within an inclusive range.
    Between {
        /// Value to test.
        value: String,
        /// Range start.
        lo: String,
        /// Range end.
        hi: String,
        /// Compare full date-times instead of calendar dates.
        #[arg(long)]
        time: bool,
    },
}

//! Event window CLI commands.

use clap::{Parser, Subcommand};

/// Event window commands.
#[derive(Debug, Parser)]
pub struct WindowsCommand {
    #[command(subcommand)]
    pub action: WindowsAction,
}

/// Available window actions.
#[derive(Debug, Subcommand)]
pub enum WindowsAction {
    /// Accept a start/end pair the way an event form does.
    Accept {
        /// Event start.
        start: String,
        /// Event end.
        end: String,
        /// Require both values to carry a time part.
        #[arg(long)]
        time: bool,
    },
}

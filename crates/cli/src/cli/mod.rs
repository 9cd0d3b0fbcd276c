//! CLI command definitions.

pub mod dates;
pub mod durations;
pub mod timestamps;
pub mod windows;

use clap::{Parser, Subcommand, ValueEnum};

/// Validate, compare and measure calendar date/time values.
#[derive(Debug, Parser)]
#[command(name = "datekeeper")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format.
    #[arg(long, env = "DATEKEEPER_FORMAT", default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Date and date-time validation and comparison.
    Dates(dates::DatesCommand),
    /// Elapsed time between date-times.
    Durations(durations::DurationsCommand),
    /// Timestamp generation and format checks.
    Timestamps(timestamps::TimestampsCommand),
    /// Event start/end acceptance.
    Windows(windows::WindowsCommand),
}

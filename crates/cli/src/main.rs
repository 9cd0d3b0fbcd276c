//! datekeeper CLI entry point.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use datekeeper_cli::cli::dates::DatesAction;
use datekeeper_cli::cli::durations::DurationsAction;
use datekeeper_cli::cli::timestamps::TimestampsAction;
use datekeeper_cli::cli::windows::WindowsAction;
use datekeeper_cli::cli::{Cli, Commands};
use datekeeper_cli::commands::{dates, durations, timestamps, windows};
use datekeeper_cli::output::{format_output, pretty};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Diagnostics go to stderr so stdout stays machine-readable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "datekeeper=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let format = cli.format;

    let accepted = match cli.command {
        Commands::Dates(dates_cmd) => match dates_cmd.action {
            DatesAction::Validate { value, time } => {
                let outcome = dates::validate(&value, time);
                println!(
                    "{}",
                    format_output(&outcome, format, pretty::format_validation)
                );
                outcome.accepted
            }
            DatesAction::Compare { a, b } => {
                let outcome = dates::compare(&a, &b)?;
                println!(
                    "{}",
                    format_output(&outcome, format, pretty::format_comparison)
                );
                true
            }
            DatesAction::Between {
                value,
                lo,
                hi,
                time,
            } => {
                let outcome = dates::between(&value, &lo, &hi, time);
                println!("{}", format_output(&outcome, format, pretty::format_between));
                true
            }
        },
        Commands::Durations(durations_cmd) => match durations_cmd.action {
            DurationsAction::Measure { from, to } => {
                let outcome = durations::measure(&from, &to)?;
                println!("{}", format_output(&outcome, format, pretty::format_measure));
                true
            }
            DurationsAction::Max => {
                let outcome = durations::max();
                println!("{}", format_output(&outcome, format, pretty::format_max));
                true
            }
        },
        Commands::Timestamps(timestamps_cmd) => match timestamps_cmd.action {
            TimestampsAction::Generate { count } => {
                let generated = timestamps::generate(count)?;
                println!(
                    "{}",
                    format_output(&generated, format, |t| pretty::format_timestamps(t))
                );
                true
            }
            TimestampsAction::Check { value } => {
                let outcome = timestamps::check(&value);
                println!("{}", format_output(&outcome, format, pretty::format_check));
                outcome.well_formed
            }
        },
        Commands::Windows(windows_cmd) => match windows_cmd.action {
            WindowsAction::Accept { start, end, time } => {
                let outcome = windows::accept(&start, &end, time);
                println!("{}", format_output(&outcome, format, pretty::format_window));
                outcome.accepted
            }
        },
    };

    if accepted {
        Ok(ExitCode::SUCCESS)
    } else {
        if !cli.quiet {
            tracing::info!("input rejected");
        }
        Ok(ExitCode::FAILURE)
    }
}

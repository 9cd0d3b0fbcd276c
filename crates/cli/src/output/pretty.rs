//! Pretty output formatting.

use crate::commands::dates::{BetweenOutcome, ComparisonOutcome, ValidationOutcome};
use crate::commands::durations::{MaxOutcome, MeasureOutcome};
use crate::commands::timestamps::CheckOutcome;
use crate::commands::windows::WindowOutcome;

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

/// Format a validation outcome for display.
pub fn format_validation(outcome: &ValidationOutcome) -> String {
    match (&outcome.value, &outcome.reason) {
        (Some(value), _) => format!("ACCEPTED {}", value),
        (None, Some(reason)) => format!("REJECTED '{}'\n  Reason: {}", outcome.input, reason),
        (None, None) => format!("REJECTED '{}'", outcome.input),
    }
}

/// Format a comparison for display.
pub fn format_comparison(outcome: &ComparisonOutcome) -> String {
    format!(
        "{} vs {}\n  Before: {}\n  After: {}\n  Same day: {}\n  Same hour: {}",
        outcome.a,
        outcome.b,
        yes_no(outcome.before),
        yes_no(outcome.after),
        yes_no(outcome.same_day),
        yes_no(outcome.same_hour)
    )
}

/// Format a range membership check for display.
pub fn format_between(outcome: &BetweenOutcome) -> String {
    let verdict = if outcome.between { "within" } else { "not within" };
    format!(
        "'{}' is {} ['{}', '{}']",
        outcome.value, verdict, outcome.lo, outcome.hi
    )
}

/// Format a measured duration for display.
pub fn format_measure(outcome: &MeasureOutcome) -> String {
    let mut output = format!(
        "{} -> {}\n  Seconds: {}\n  Days: {}",
        outcome.from, outcome.to, outcome.seconds, outcome.report.day_delta
    );
    if outcome.report.fallback {
        output.push_str(&format!(
            "\n  Fallback: primary reported {}s, day count used",
            outcome.report.primary_seconds
        ));
    }
    output
}

/// Format the valid range span for display.
pub fn format_max(outcome: &MaxOutcome) -> String {
    format!(
        "{} -> {}\n  Seconds: {}",
        outcome.from, outcome.to, outcome.seconds
    )
}

/// Format generated timestamps for display.
pub fn format_timestamps(timestamps: &[String]) -> String {
    timestamps.join("\n")
}

/// Format a timestamp format check for display.
pub fn format_check(outcome: &CheckOutcome) -> String {
    let verdict = if outcome.well_formed {
        "well formed"
    } else {
        "malformed"
    };
    format!("'{}' is {}", outcome.value, verdict)
}

/// Format an event window outcome for display.
pub fn format_window(outcome: &WindowOutcome) -> String {
    match (&outcome.window, &outcome.reason) {
        (Some(window), _) => {
            let mut output = format!("ACCEPTED {} -> {}", window.start(), window.end());
            if let Some(seconds) = outcome.duration_seconds {
                output.push_str(&format!("\n  Seconds: {}", seconds));
            }
            output
        }
        (None, Some(reason)) => format!("REJECTED\n  Reason: {}", reason),
        (None, None) => "REJECTED".to_string(),
    }
}

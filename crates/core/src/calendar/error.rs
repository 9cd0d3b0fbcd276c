use std::fmt;

use thiserror::Error;

/// A component group of a [`CalendarValue`](super::CalendarValue).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    /// The (year, month, day) triple.
    Date,
    /// The (hour, minute, second) triple.
    Time,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Date => f.write_str("date"),
            Component::Time => f.write_str("time"),
        }
    }
}

/// Errors that can occur when parsing, validating or measuring calendar values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("Cannot parse '{input}': {reason}")]
    Parse { input: String, reason: String },
    #[error("Required {0} part is missing")]
    ComponentMissing(Component),
    #[error("{value} is outside the valid range 1970-01-01 to 2200-01-01")]
    OutOfRange { value: String },
    #[error("Range start {lo} is after range end {hi}")]
    InvertedRange { lo: String, hi: String },
}

impl DateError {
    pub(crate) fn parse(input: &str, reason: impl Into<String>) -> Self {
        DateError::Parse {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

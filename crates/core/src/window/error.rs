use std::fmt;

use thiserror::Error;

use crate::calendar::DateError;

/// Which bound of an event window a value was supplied for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Start,
    End,
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Start => f.write_str("start"),
            Bound::End => f.write_str("end"),
        }
    }
}

/// Errors that can occur when accepting an event window.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WindowError {
    #[error("Invalid {bound}: {source}")]
    InvalidBound {
        bound: Bound,
        #[source]
        source: DateError,
    },
    #[error("End {end} is before start {start}")]
    EndBeforeStart { start: String, end: String },
}

//! Command implementations backing the CLI definitions.

pub mod dates;
pub mod durations;
pub mod timestamps;
pub mod windows;

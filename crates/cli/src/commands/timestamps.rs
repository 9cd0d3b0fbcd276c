//! Timestamp commands.

use datekeeper_core::timestamp::{generate as generate_timestamp, is_well_formed};
use serde::Serialize;

use crate::error::{CliError, Result};

/// Format check result for a single value.
#[derive(Debug, Clone, Serialize)]
pub struct CheckOutcome {
    pub value: String,
    pub well_formed: bool,
}

/// Generates `count` timestamps for the current time.
pub fn generate(count: usize) -> Result<Vec<String>> {
    if count == 0 {
        return Err(CliError::EmptyCount);
    }
    Ok((0..count).map(|_| generate_timestamp()).collect())
}

pub fn check(value: &str) -> CheckOutcome {
    CheckOutcome {
        value: value.to_string(),
        well_formed: is_well_formed(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_count() {
        let timestamps = generate(5).unwrap();
        assert_eq!(timestamps.len(), 5);
        assert!(timestamps.iter().all(|t| is_well_formed(t)));
    }

    #[test]
    fn test_generate_zero() {
        assert!(matches!(generate(0), Err(CliError::EmptyCount)));
    }

    #[test]
    fn test_check() {
        assert!(check("2013-05-01 12:00:00.5000").well_formed);
        assert!(!check("2013-05-01 12:00:00").well_formed);
    }
}

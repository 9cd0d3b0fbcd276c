//! Date validation and comparison commands.

use datekeeper_core::calendar::{parse, CalendarValue};
use datekeeper_core::validation::{
    check_date_only, check_date_time, compare_before, is_date_between, is_time_between,
    same_calendar_day, same_hour,
};
use serde::Serialize;

use crate::error::Result;

/// Result of running a value through a validation pipeline.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationOutcome {
    pub input: String,
    pub accepted: bool,
    pub value: Option<CalendarValue>,
    pub reason: Option<String>,
}

/// Relationship between two parsed values.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonOutcome {
    pub a: CalendarValue,
    pub b: CalendarValue,
    pub before: bool,
    pub after: bool,
    pub same_day: bool,
    pub same_hour: bool,
}

/// Inclusive range membership.
#[derive(Debug, Clone, Serialize)]
pub struct BetweenOutcome {
    pub value: String,
    pub lo: String,
    pub hi: String,
    pub between: bool,
}

/// Runs the date-only or date-time pipeline on `input`.
pub fn validate(input: &str, require_time: bool) -> ValidationOutcome {
    let result = if require_time {
        check_date_time(input)
    } else {
        check_date_only(input)
    };

    match result {
        Ok(value) => ValidationOutcome {
            input: input.to_string(),
            accepted: true,
            value: Some(value),
            reason: None,
        },
        Err(err) => ValidationOutcome {
            input: input.to_string(),
            accepted: false,
            value: None,
            reason: Some(err.to_string()),
        },
    }
}

/// Parses both values and compares them.
pub fn compare(a: &str, b: &str) -> Result<ComparisonOutcome> {
    let a = parse(a)?;
    let b = parse(b)?;
    Ok(ComparisonOutcome {
        a,
        b,
        before: compare_before(&a, &b),
        after: compare_before(&b, &a),
        same_day: same_calendar_day(&a, &b),
        same_hour: same_hour(&a, &b),
    })
}

/// Checks `lo <= value <= hi`, by calendar date or, with `by_time`, by instant.
pub fn between(value: &str, lo: &str, hi: &str, by_time: bool) -> BetweenOutcome {
    let between = if by_time {
        is_time_between(value, lo, hi)
    } else {
        is_date_between(value, lo, hi)
    };
    BetweenOutcome {
        value: value.to_string(),
        lo: lo.to_string(),
        hi: hi.to_string(),
        between,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;

    #[test]
    fn test_validate_accepts() {
        let outcome = validate("2000-02-19", false);
        assert!(outcome.accepted);
        assert_eq!(outcome.value.unwrap().to_string(), "2000-02-19");
        assert!(outcome.reason.is_none());
    }

    #[test]
    fn test_validate_rejects_with_reason() {
        let outcome = validate("2013-02-29", false);
        assert!(!outcome.accepted);
        assert!(outcome.value.is_none());
        assert_eq!(
            outcome.reason.as_deref(),
            Some("Cannot parse '2013-02-29': day 29 does not exist in 2013-02")
        );
    }

    #[test]
    fn test_validate_requires_time() {
        assert!(!validate("2000-02-19", true).accepted);
        assert!(validate("2000-02-19 10:00:00", true).accepted);
    }

    #[test]
    fn test_compare() {
        let outcome = compare("2000-03-04", "2010-02-21").unwrap();
        assert!(outcome.before);
        assert!(!outcome.after);
        assert!(!outcome.same_day);
        assert!(!outcome.same_hour);
    }

    #[test]
    fn test_compare_invalid_input() {
        assert!(matches!(
            compare("", "2010-02-21"),
            Err(CliError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_between() {
        assert!(between("2006-05-04", "1999-02-21", "2010-03-12", false).between);
        assert!(!between("2019-05-04", "1999-02-21", "2010-03-12", false).between);
        assert!(
            between(
                "2006-05-04 12:00:00",
                "2006-05-04 09:00:00",
                "2006-05-04 17:00:00",
                true
            )
            .between
        );
    }
}

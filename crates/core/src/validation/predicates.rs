use std::fmt::Display;

use chrono::NaiveDateTime;

use super::pipeline::{check_date_only, check_date_time, value_accepted};
use crate::calendar::{CalendarValue, DateError};

/// Returns true if `a` strictly precedes `b`.
///
/// Both values are expected to have been validated. A value without a date
/// part compares as not-before.
pub fn compare_before(a: &CalendarValue, b: &CalendarValue) -> bool {
    match (a.instant(), b.instant()) {
        (Ok(a), Ok(b)) => a < b,
        _ => false,
    }
}

/// Returns true if `lo <= x <= hi`.
///
/// All three values must pass the validation pipeline, and an inverted range
/// (`hi` before `lo`) is rejected rather than swapped.
///
/// # Examples
///
/// ```
/// use datekeeper_core::calendar::parse;
/// use datekeeper_core::validation::is_between;
///
/// let lo = parse("1999-02-21").unwrap();
/// let hi = parse("2010-03-12").unwrap();
///
/// assert!(is_between(&parse("2006-05-04").unwrap(), &lo, &hi));
/// assert!(!is_between(&parse("2019-05-04").unwrap(), &lo, &hi));
/// assert!(!is_between(&parse("2006-05-04").unwrap(), &hi, &lo));
/// ```
pub fn is_between(x: &CalendarValue, lo: &CalendarValue, hi: &CalendarValue) -> bool {
    let (Some(x), Some(lo_at), Some(hi_at)) = (
        value_accepted(x, false),
        value_accepted(lo, false),
        value_accepted(hi, false),
    ) else {
        return false;
    };

    within(x, lo_at, hi_at, lo, hi)
}

/// Returns true if both values have a date part with equal year, month and day.
pub fn same_calendar_day(a: &CalendarValue, b: &CalendarValue) -> bool {
    match (a.date(), b.date()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Returns true if both values have a time part with the same hour.
/// Minutes and seconds are ignored.
pub fn same_hour(a: &CalendarValue, b: &CalendarValue) -> bool {
    match (a.hour(), b.hour()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Returns true if both strings pass the date-only pipeline and the
/// candidate's calendar date is strictly later than the reference's.
pub fn is_date_after(candidate: &str, reference: &str) -> bool {
    match (day_of(candidate), day_of(reference)) {
        (Some(candidate), Some(reference)) => candidate > reference,
        _ => false,
    }
}

/// Returns true if both strings pass the date-time pipeline and the
/// candidate instant is strictly later than the reference.
pub fn is_time_after(candidate: &str, reference: &str) -> bool {
    match (instant_of(candidate), instant_of(reference)) {
        (Some(candidate), Some(reference)) => candidate > reference,
        _ => false,
    }
}

/// Date-only pipeline form of [`is_between`]; compares calendar dates,
/// ignoring any time part.
pub fn is_date_between(x: &str, lo: &str, hi: &str) -> bool {
    let (Some(x), Some(lo_at), Some(hi_at)) = (day_of(x), day_of(lo), day_of(hi)) else {
        return false;
    };
    within(x, lo_at, hi_at, lo, hi)
}

/// Date-time pipeline form of [`is_between`]; compares instants.
pub fn is_time_between(x: &str, lo: &str, hi: &str) -> bool {
    let (Some(x), Some(lo_at), Some(hi_at)) = (instant_of(x), instant_of(lo), instant_of(hi))
    else {
        return false;
    };
    within(x, lo_at, hi_at, lo, hi)
}

fn within<T: PartialOrd>(x: T, lo_at: T, hi_at: T, lo: impl Display, hi: impl Display) -> bool {
    if hi_at < lo_at {
        let err = DateError::InvertedRange {
            lo: lo.to_string(),
            hi: hi.to_string(),
        };
        tracing::debug!(error = %err, "range rejected");
        return false;
    }
    lo_at <= x && x <= hi_at
}

/// Calendar date (as midnight) of a string that passes the date-only pipeline.
fn day_of(s: &str) -> Option<NaiveDateTime> {
    let value = logged(check_date_only(s), s)?;
    value.without_time().instant().ok()
}

fn instant_of(s: &str) -> Option<NaiveDateTime> {
    logged(check_date_time(s), s)?.instant().ok()
}

fn logged(result: Result<CalendarValue, DateError>, input: &str) -> Option<CalendarValue> {
    result
        .inspect_err(|err| tracing::debug!(input, error = %err, "input rejected"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::parse;

    fn value(s: &str) -> CalendarValue {
        parse(s).unwrap()
    }

    #[test]
    fn test_compare_before() {
        assert!(compare_before(&value("2000-03-04"), &value("2010-02-21")));
        assert!(!compare_before(&value("2010-02-21"), &value("2000-03-04")));
        assert!(!compare_before(&value("2000-03-04"), &value("2000-03-04")));
    }

    #[test]
    fn test_compare_before_uses_time_part() {
        assert!(compare_before(
            &value("2000-03-04 10:00:00"),
            &value("2000-03-04 10:00:01")
        ));
        // Date-only values sit at midnight.
        assert!(compare_before(&value("2000-03-04"), &value("2000-03-04 00:00:01")));
        assert!(!compare_before(&value("2000-03-04"), &value("2000-03-04 00:00:00")));
    }

    #[test]
    fn test_is_between() {
        let lo = value("1999-02-21");
        let hi = value("2010-03-12");
        assert!(is_between(&value("2006-05-04"), &lo, &hi));
        assert!(!is_between(&value("2019-05-04"), &lo, &hi));
        assert!(!is_between(&value("1999-02-20"), &lo, &hi));
    }

    #[test]
    fn test_is_between_is_inclusive() {
        let lo = value("1999-02-21");
        let hi = value("2010-03-12");
        assert!(is_between(&lo, &lo, &hi));
        assert!(is_between(&hi, &lo, &hi));
        assert!(is_between(&lo, &lo, &lo));
    }

    #[test]
    fn test_is_between_rejects_inverted_range() {
        let lo = value("1999-02-21");
        let hi = value("2010-03-12");
        for x in ["1980-01-01", "1999-02-21", "2006-05-04", "2010-03-12", "2020-01-01"] {
            assert!(!is_between(&value(x), &hi, &lo));
        }
    }

    #[test]
    fn test_is_between_rejects_out_of_range_inputs() {
        let lo = value("1960-01-01");
        let hi = value("2010-03-12");
        assert!(!is_between(&value("2006-05-04"), &lo, &hi));
        assert!(!is_between(&value("2300-01-01"), &value("2000-01-01"), &value("2100-01-01")));
    }

    #[test]
    fn test_same_calendar_day() {
        assert!(same_calendar_day(
            &value("2006-05-04 08:00:00"),
            &value("2006-05-04 23:00:00")
        ));
        assert!(same_calendar_day(&value("2006-05-04"), &value("2006-05-04 23:00:00")));
        assert!(!same_calendar_day(&value("2006-05-04"), &value("2006-05-05")));
    }

    #[test]
    fn test_same_hour() {
        assert!(same_hour(
            &value("2006-05-04 08:00:00"),
            &value("2010-01-01 08:59:59")
        ));
        assert!(!same_hour(
            &value("2006-05-04 08:00:00"),
            &value("2006-05-04 09:00:00")
        ));
        // No time part, no hour to compare.
        assert!(!same_hour(&value("2006-05-04"), &value("2006-05-04")));
    }

    #[test]
    fn test_is_date_after() {
        assert!(is_date_after("2010-02-21", "2000-03-04"));
        assert!(!is_date_after("2000-03-04", "2010-02-21"));
        assert!(!is_date_after("2000-03-04 23:00:00", "2000-03-04 01:00:00"));
        assert!(!is_date_after("", "2000-03-04"));
        assert!(!is_date_after("2010-02-30", "2000-03-04"));
    }

    #[test]
    fn test_is_time_after() {
        assert!(is_time_after("2000-03-04 23:00:00", "2000-03-04 01:00:00"));
        assert!(!is_time_after("2000-03-04 01:00:00", "2000-03-04 01:00:00"));
        // Date-only strings fail the date-time pipeline.
        assert!(!is_time_after("2010-02-21", "2000-03-04 01:00:00"));
    }

    #[test]
    fn test_is_date_between() {
        assert!(is_date_between("2006-05-04", "1999-02-21", "2010-03-12"));
        assert!(is_date_between("2010-03-12 18:00:00", "1999-02-21", "2010-03-12"));
        assert!(!is_date_between("2019-05-04", "1999-02-21", "2010-03-12"));
        assert!(!is_date_between("2006-05-04", "2010-03-12", "1999-02-21"));
        assert!(!is_date_between("2006-05-04", "", "2010-03-12"));
    }

    #[test]
    fn test_is_time_between() {
        assert!(is_time_between(
            "2006-05-04 12:00:00",
            "2006-05-04 09:00:00",
            "2006-05-04 17:00:00"
        ));
        assert!(is_time_between(
            "2006-05-04 17:00:00",
            "2006-05-04 09:00:00",
            "2006-05-04 17:00:00"
        ));
        assert!(!is_time_between(
            "2006-05-04 17:00:01",
            "2006-05-04 09:00:00",
            "2006-05-04 17:00:00"
        ));
        assert!(!is_time_between(
            "2006-05-04 12:00:00",
            "2006-05-04 17:00:00",
            "2006-05-04 09:00:00"
        ));
    }
}

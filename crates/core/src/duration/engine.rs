use chrono::{Datelike, NaiveDateTime};
use serde::Serialize;

use crate::calendar::{CalendarValue, DateError, ValidRange};
use crate::validation::{check_value, compare_before};

pub const SECONDS_PER_DAY: i64 = 86_400;

/// How a duration was arrived at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DurationReport {
    /// Magnitude reported by the seconds-based subtraction.
    pub primary_seconds: i64,
    /// Magnitude of the whole-day difference between the two dates.
    pub day_delta: i64,
    /// The selected magnitude.
    pub seconds: i64,
    /// True when the primary result was discarded in favour of the day count.
    pub fallback: bool,
}

/// Elapsed seconds between two values, as an unsigned magnitude.
///
/// Both values must have a date part and lie within the valid range. A value
/// without a time part counts from midnight.
///
/// # Examples
///
/// ```
/// use datekeeper_core::calendar::parse;
/// use datekeeper_core::duration::duration;
///
/// let a = parse("2000-01-01").unwrap();
/// let b = parse("2000-01-02").unwrap();
/// assert_eq!(duration(&a, &b), Ok(86_400));
/// assert_eq!(duration(&b, &a), Ok(86_400));
/// ```
pub fn duration(a: &CalendarValue, b: &CalendarValue) -> Result<i64, DateError> {
    duration_report(a, b).map(|report| report.seconds)
}

/// Like [`duration`], returning the cross-check detail.
pub fn duration_report(a: &CalendarValue, b: &CalendarValue) -> Result<DurationReport, DateError> {
    let a = check_value(a, false)?;
    let b = check_value(b, false)?;
    Ok(cross_check(a, b, elapsed_seconds))
}

/// Elapsed seconds from `a` to `b`: positive when `a` precedes `b`,
/// negative when `b` precedes `a`.
pub fn signed_duration(a: &CalendarValue, b: &CalendarValue) -> Result<i64, DateError> {
    let magnitude = duration(a, b)?;
    if compare_before(b, a) {
        Ok(-magnitude)
    } else {
        Ok(magnitude)
    }
}

/// The largest legal elapsed time, from the start to the end of the valid range.
pub fn max_duration() -> i64 {
    let range = ValidRange::global();
    cross_check(range.min(), range.max(), elapsed_seconds).seconds
}

/// Seconds-based subtraction, `b - a`.
pub fn elapsed_seconds(a: NaiveDateTime, b: NaiveDateTime) -> i64 {
    (b - a).num_seconds()
}

/// Difference in calendar days between the dates of `a` and `b`, ignoring
/// the time of day.
pub fn elapsed_whole_days(a: NaiveDateTime, b: NaiveDateTime) -> i64 {
    i64::from(b.date().num_days_from_ce()) - i64::from(a.date().num_days_from_ce())
}

/// Takes the magnitude from `primary` unless it disagrees with the whole-day
/// count by more than one day, in which case the day count wins.
pub(crate) fn cross_check<F>(a: NaiveDateTime, b: NaiveDateTime, primary: F) -> DurationReport
where
    F: Fn(NaiveDateTime, NaiveDateTime) -> i64,
{
    let primary_seconds = primary(a, b).saturating_abs();
    let day_delta = elapsed_whole_days(a, b).abs();
    let disagreement = (day_delta - primary_seconds / SECONDS_PER_DAY).abs();

    if disagreement > 1 {
        let seconds = day_delta * SECONDS_PER_DAY;
        tracing::warn!(
            from = %a,
            to = %b,
            primary_seconds,
            day_delta,
            seconds,
            "elapsed seconds disagree with day count, using day count"
        );
        DurationReport {
            primary_seconds,
            day_delta,
            seconds,
            fallback: true,
        }
    } else {
        DurationReport {
            primary_seconds,
            day_delta,
            seconds: primary_seconds,
            fallback: false,
        }
    }
}

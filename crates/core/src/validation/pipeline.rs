use chrono::NaiveDateTime;

use crate::calendar::{parse, CalendarValue, Component, DateError, ValidRange};

/// Returns true if the value carries a (year, month, day) triple.
pub fn has_date_part(value: &CalendarValue) -> bool {
    value.has_date()
}

/// Returns true if the value carries an (hour, minute, second) triple.
pub fn has_time_part(value: &CalendarValue) -> bool {
    value.has_time()
}

/// Returns true if the date part is present and, when `require_time` is set,
/// the time part is present as well.
pub fn is_complete(value: &CalendarValue, require_time: bool) -> bool {
    completeness(value, require_time).is_ok()
}

/// Returns true if `MIN <= value <= MAX`.
///
/// Values outside the range, or without a date part, are reported through a
/// debug log record and yield `false`.
pub fn in_range(value: &CalendarValue) -> bool {
    match ValidRange::global().check(value) {
        Ok(_) => true,
        Err(err) => {
            tracing::debug!(value = %value, error = %err, "value rejected by range check");
            false
        }
    }
}

/// Runs the date-only pipeline: parse, require a date part, range-check.
///
/// A string with a time part passes as long as its date part does.
pub fn check_date_only(s: &str) -> Result<CalendarValue, DateError> {
    check(s, false)
}

/// Runs the date-time pipeline: parse, require both parts, range-check.
pub fn check_date_time(s: &str) -> Result<CalendarValue, DateError> {
    check(s, true)
}

/// Returns true if `s` passes [`check_date_only`].
///
/// # Examples
///
/// ```
/// use datekeeper_core::validation::validate_date_only;
///
/// assert!(validate_date_only("2000-02-19"));
/// assert!(!validate_date_only("2013-02-29"));
/// assert!(!validate_date_only(""));
/// ```
pub fn validate_date_only(s: &str) -> bool {
    accepted(check_date_only(s), s)
}

/// Returns true if `s` passes [`check_date_time`].
pub fn validate_date_time(s: &str) -> bool {
    accepted(check_date_time(s), s)
}

/// Validates an already-parsed value and positions it on the timeline.
pub(crate) fn check_value(
    value: &CalendarValue,
    require_time: bool,
) -> Result<NaiveDateTime, DateError> {
    completeness(value, require_time)?;
    ValidRange::global().check(value)
}

/// Boolean form of [`check_value`], logging the rejection.
pub(crate) fn value_accepted(value: &CalendarValue, require_time: bool) -> Option<NaiveDateTime> {
    match check_value(value, require_time) {
        Ok(instant) => Some(instant),
        Err(err) => {
            tracing::debug!(value = %value, error = %err, "value rejected");
            None
        }
    }
}

fn check(s: &str, require_time: bool) -> Result<CalendarValue, DateError> {
    let value = parse(s)?;
    check_value(&value, require_time)?;
    Ok(value)
}

fn completeness(value: &CalendarValue, require_time: bool) -> Result<(), DateError> {
    if !value.has_date() {
        return Err(DateError::ComponentMissing(Component::Date));
    }
    if require_time && !value.has_time() {
        return Err(DateError::ComponentMissing(Component::Time));
    }
    Ok(())
}

fn accepted(result: Result<CalendarValue, DateError>, input: &str) -> bool {
    match result {
        Ok(_) => true,
        Err(err) => {
            tracing::debug!(input, error = %err, "input rejected");
            false
        }
    }
}

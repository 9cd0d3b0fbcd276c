use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};

use super::error::DateError;
use super::value::CalendarValue;

/// Parses `YYYY-MM-DD` or `YYYY-MM-DD HH:MM:SS`.
///
/// Every field must have its exact width. Values a numeric range check alone
/// would let through, such as `2013-02-29` or `2001-04-31`, are rejected.
///
/// # Examples
///
/// ```
/// use datekeeper_core::calendar::parse;
///
/// let value = parse("2000-02-19 08:30:00").unwrap();
/// assert_eq!(value.day(), Ok(19));
/// assert_eq!(value.minute(), Ok(30));
///
/// assert!(parse("2013-02-29").is_err());
/// assert!(parse("").is_err());
/// ```
pub fn parse(s: &str) -> Result<CalendarValue, DateError> {
    if s.is_empty() {
        return Err(DateError::parse(s, "input is empty"));
    }

    let (date_text, time_text) = match s.split_once(' ') {
        Some((date, time)) => (date, Some(time)),
        None => (s, None),
    };

    let date = parse_date(s, date_text)?;
    let value = CalendarValue::from_date(date);

    match time_text {
        Some(text) => Ok(value.with_time(parse_time(s, text)?)),
        None => Ok(value),
    }
}

impl FromStr for CalendarValue {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

fn parse_date(input: &str, text: &str) -> Result<NaiveDate, DateError> {
    let fields: Vec<&str> = text.split('-').collect();
    let [year, month, day] = fields.as_slice() else {
        return Err(DateError::parse(input, "expected YYYY-MM-DD"));
    };

    let year = numeric_field(input, year, 4, "year")?;
    let month = numeric_field(input, month, 2, "month")?;
    let day = numeric_field(input, day, 2, "day")?;

    if !(1..=12).contains(&month) {
        return Err(DateError::parse(input, format!("month {month} is out of bounds")));
    }
    if !(1..=31).contains(&day) {
        return Err(DateError::parse(input, format!("day {day} is out of bounds")));
    }

    // Year fits in four digits, so the cast cannot truncate.
    NaiveDate::from_ymd_opt(year as i32, month, day).ok_or_else(|| {
        DateError::parse(
            input,
            format!("day {day} does not exist in {year:04}-{month:02}"),
        )
    })
}

fn parse_time(input: &str, text: &str) -> Result<NaiveTime, DateError> {
    let fields: Vec<&str> = text.split(':').collect();
    let [hour, minute, second] = fields.as_slice() else {
        return Err(DateError::parse(input, "expected HH:MM:SS"));
    };

    let hour = numeric_field(input, hour, 2, "hour")?;
    let minute = numeric_field(input, minute, 2, "minute")?;
    let second = numeric_field(input, second, 2, "second")?;

    if hour > 23 {
        return Err(DateError::parse(input, format!("hour {hour} is out of bounds")));
    }
    if minute > 59 {
        return Err(DateError::parse(input, format!("minute {minute} is out of bounds")));
    }
    // Leap seconds are not representable in the stored formats.
    if second > 59 {
        return Err(DateError::parse(input, format!("second {second} is out of bounds")));
    }

    NaiveTime::from_hms_opt(hour, minute, second)
        .ok_or_else(|| DateError::parse(input, "time does not exist"))
}

fn numeric_field(input: &str, field: &str, width: usize, name: &str) -> Result<u32, DateError> {
    if field.len() != width || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DateError::parse(
            input,
            format!("{name} must be {width} digits, got '{field}'"),
        ));
    }
    field
        .parse()
        .map_err(|_| DateError::parse(input, format!("{name} is not a number")))
}

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime};

use super::error::DateError;
use super::value::CalendarValue;

/// The application-wide window of acceptable date-times, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidRange {
    min: NaiveDateTime,
    max: NaiveDateTime,
}

static VALID_RANGE: LazyLock<ValidRange> = LazyLock::new(|| ValidRange {
    min: midnight(1970, 1, 1),
    max: midnight(2200, 1, 1),
});

fn midnight(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .expect("valid range bounds are real calendar dates")
}

impl ValidRange {
    /// Returns the process-wide range.
    pub fn global() -> &'static ValidRange {
        &VALID_RANGE
    }

    /// 1970-01-01 00:00:00
    pub fn min(&self) -> NaiveDateTime {
        self.min
    }

    /// 2200-01-01 00:00:00
    pub fn max(&self) -> NaiveDateTime {
        self.max
    }

    pub fn min_value(&self) -> CalendarValue {
        CalendarValue::from_date_time(self.min)
    }

    pub fn max_value(&self) -> CalendarValue {
        CalendarValue::from_date_time(self.max)
    }

    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.min <= instant && instant <= self.max
    }

    /// Positions `value` on the timeline and checks it lies within the range.
    pub fn check(&self, value: &CalendarValue) -> Result<NaiveDateTime, DateError> {
        let instant = value.instant()?;
        if self.contains(instant) {
            Ok(instant)
        } else {
            Err(DateError::OutOfRange {
                value: value.to_string(),
            })
        }
    }
}

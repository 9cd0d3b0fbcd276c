use std::fmt;

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use super::error::{Component, DateError};

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";
pub(crate) const TIME_FORMAT: &str = "%H:%M:%S";
pub(crate) const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A point in time whose date part and time part are each optionally present.
///
/// Both parts are stored as already-validated chrono values, so a
/// `CalendarValue` can never hold Feb 30 or hour 24. Absent components are
/// reported through [`DateError::ComponentMissing`] by the accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarValue {
    date: Option<NaiveDate>,
    time: Option<NaiveTime>,
}

impl CalendarValue {
    /// Creates a value with only a date part.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            time: None,
        }
    }

    /// Creates a value with only a time part.
    ///
    /// Sub-second precision is dropped.
    pub fn from_time(time: NaiveTime) -> Self {
        Self {
            date: None,
            time: Some(truncate_seconds(time)),
        }
    }

    /// Creates a value with both parts present.
    ///
    /// Sub-second precision is dropped.
    pub fn from_date_time(date_time: NaiveDateTime) -> Self {
        Self {
            date: Some(date_time.date()),
            time: Some(truncate_seconds(date_time.time())),
        }
    }

    /// Captures the local wall clock at whole-second resolution.
    pub fn now() -> Self {
        Self::from_date_time(Local::now().naive_local())
    }

    /// Returns a copy without the time part.
    pub fn without_time(self) -> Self {
        Self {
            date: self.date,
            time: None,
        }
    }

    /// Returns a copy with the time part replaced.
    pub fn with_time(self, time: NaiveTime) -> Self {
        Self {
            date: self.date,
            time: Some(truncate_seconds(time)),
        }
    }

    pub fn has_date(&self) -> bool {
        self.date.is_some()
    }

    pub fn has_time(&self) -> bool {
        self.time.is_some()
    }

    /// Returns the date part.
    pub fn date(&self) -> Result<NaiveDate, DateError> {
        self.date.ok_or(DateError::ComponentMissing(Component::Date))
    }

    /// Returns the time part.
    pub fn time(&self) -> Result<NaiveTime, DateError> {
        self.time.ok_or(DateError::ComponentMissing(Component::Time))
    }

    pub fn year(&self) -> Result<i32, DateError> {
        self.date().map(|d| d.year())
    }

    pub fn month(&self) -> Result<u32, DateError> {
        self.date().map(|d| d.month())
    }

    pub fn day(&self) -> Result<u32, DateError> {
        self.date().map(|d| d.day())
    }

    pub fn hour(&self) -> Result<u32, DateError> {
        self.time().map(|t| t.hour())
    }

    pub fn minute(&self) -> Result<u32, DateError> {
        self.time().map(|t| t.minute())
    }

    pub fn second(&self) -> Result<u32, DateError> {
        self.time().map(|t| t.second())
    }

    /// Positions the value on the timeline.
    /// A value without a time part sits at midnight of its date.
    pub fn instant(&self) -> Result<NaiveDateTime, DateError> {
        let date = self.date()?;
        Ok(date.and_time(self.time.unwrap_or(NaiveTime::MIN)))
    }
}

impl fmt::Display for CalendarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.date, self.time) {
            (Some(date), Some(time)) => {
                write!(f, "{}", date.and_time(time).format(DATE_TIME_FORMAT))
            }
            (Some(date), None) => write!(f, "{}", date.format(DATE_FORMAT)),
            (None, Some(time)) => write!(f, "{}", time.format(TIME_FORMAT)),
            (None, None) => Ok(()),
        }
    }
}

impl From<NaiveDate> for CalendarValue {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}

impl From<NaiveDateTime> for CalendarValue {
    fn from(date_time: NaiveDateTime) -> Self {
        Self::from_date_time(date_time)
    }
}

fn truncate_seconds(time: NaiveTime) -> NaiveTime {
    time.with_nanosecond(0).unwrap_or(time)
}

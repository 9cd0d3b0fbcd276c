use chrono::NaiveDateTime;
use serde::Serialize;

use super::error::{Bound, WindowError};
use crate::calendar::{CalendarValue, DateError};
use crate::duration::{cross_check, elapsed_seconds};
use crate::validation::{check_date_only, check_date_time, is_between};

/// The accepted start and end of an event.
///
/// Only [`EventWindow::accept`] builds one, so both bounds are complete,
/// in range, and ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EventWindow {
    start: CalendarValue,
    end: CalendarValue,
    #[serde(skip)]
    start_at: NaiveDateTime,
    #[serde(skip)]
    end_at: NaiveDateTime,
}

impl EventWindow {
    /// Accepts raw start and end strings from an event form.
    ///
    /// With `require_time` both strings must carry a time part; otherwise
    /// date-only strings are accepted and sit at midnight. An end equal to
    /// the start is allowed.
    ///
    /// # Examples
    ///
    /// ```
    /// use datekeeper_core::window::EventWindow;
    ///
    /// let window = EventWindow::accept("2024-01-15 09:00:00", "2024-01-15 10:30:00", true).unwrap();
    /// assert_eq!(window.duration_seconds(), 5_400);
    ///
    /// assert!(EventWindow::accept("2024-01-15", "2024-01-14", false).is_err());
    /// ```
    pub fn accept(start: &str, end: &str, require_time: bool) -> Result<Self, WindowError> {
        let check: fn(&str) -> Result<CalendarValue, DateError> = if require_time {
            check_date_time
        } else {
            check_date_only
        };

        let start = check(start).map_err(|source| invalid(Bound::Start, source))?;
        let end = check(end).map_err(|source| invalid(Bound::End, source))?;
        let start_at = start.instant().map_err(|source| invalid(Bound::Start, source))?;
        let end_at = end.instant().map_err(|source| invalid(Bound::End, source))?;

        if end_at < start_at {
            return Err(WindowError::EndBeforeStart {
                start: start.to_string(),
                end: end.to_string(),
            });
        }

        Ok(Self {
            start,
            end,
            start_at,
            end_at,
        })
    }

    pub fn start(&self) -> CalendarValue {
        self.start
    }

    pub fn end(&self) -> CalendarValue {
        self.end
    }

    /// Elapsed seconds from start to end, never negative.
    pub fn duration_seconds(&self) -> i64 {
        cross_check(self.start_at, self.end_at, elapsed_seconds).seconds
    }

    /// Returns true if `value` lies within the window, bounds included.
    pub fn contains(&self, value: &CalendarValue) -> bool {
        is_between(value, &self.start, &self.end)
    }

    /// Returns true if the two windows share at least one instant.
    pub fn overlaps(&self, other: &EventWindow) -> bool {
        self.start_at <= other.end_at && other.start_at <= self.end_at
    }

    pub(crate) fn sort_key(&self) -> (NaiveDateTime, NaiveDateTime) {
        (self.start_at, self.end_at)
    }
}

fn invalid(bound: Bound, source: DateError) -> WindowError {
    WindowError::InvalidBound { bound, source }
}

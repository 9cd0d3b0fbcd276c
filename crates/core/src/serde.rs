//! Serde support for calendar values.
//!
//! A [`CalendarValue`] travels as its display string, the same text
//! [`parse`](crate::calendar::parse) accepts.

use serde::{Serialize, Serializer};

use crate::calendar::CalendarValue;

impl Serialize for CalendarValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

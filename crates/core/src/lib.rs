//! datekeeper_core - date/time validation and arithmetic.
//!
//! Untrusted strings become [`calendar::CalendarValue`]s through
//! [`calendar::parse`]; [`validation`] range-checks and orders them,
//! [`duration`] measures the time between them, and [`timestamp`] mints
//! practically-unique timestamp strings. [`window`] is the start/end pair an
//! event form produces from those pieces.

pub mod calendar;
pub mod duration;
pub mod serde;
pub mod timestamp;
pub mod validation;
pub mod window;

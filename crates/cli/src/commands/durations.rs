//! Duration commands.

use datekeeper_core::calendar::{parse, CalendarValue, ValidRange};
use datekeeper_core::duration::{duration_report, max_duration, signed_duration, DurationReport};
use serde::Serialize;

use crate::error::Result;

/// Signed duration between two values, with the cross-check detail.
#[derive(Debug, Clone, Serialize)]
pub struct MeasureOutcome {
    pub from: CalendarValue,
    pub to: CalendarValue,
    pub seconds: i64,
    pub report: DurationReport,
}

/// Span of the whole valid range.
#[derive(Debug, Clone, Serialize)]
pub struct MaxOutcome {
    pub from: CalendarValue,
    pub to: CalendarValue,
    pub seconds: i64,
}

/// Parses both values and measures the signed seconds between them.
pub fn measure(from: &str, to: &str) -> Result<MeasureOutcome> {
    let from = parse(from)?;
    let to = parse(to)?;
    let report = duration_report(&from, &to)?;
    let seconds = signed_duration(&from, &to)?;
    Ok(MeasureOutcome {
        from,
        to,
        seconds,
        report,
    })
}

pub fn max() -> MaxOutcome {
    let range = ValidRange::global();
    MaxOutcome {
        from: range.min_value(),
        to: range.max_value(),
        seconds: max_duration(),
    }
}

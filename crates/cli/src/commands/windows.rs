//! Event window commands.

use datekeeper_core::window::EventWindow;
use serde::Serialize;

/// Result of accepting a start/end pair.
#[derive(Debug, Clone, Serialize)]
pub struct WindowOutcome {
    pub accepted: bool,
    pub window: Option<EventWindow>,
    pub duration_seconds: Option<i64>,
    pub reason: Option<String>,
}

pub fn accept(start: &str, end: &str, require_time: bool) -> WindowOutcome {
    match EventWindow::accept(start, end, require_time) {
        Ok(window) => WindowOutcome {
            accepted: true,
            duration_seconds: Some(window.duration_seconds()),
            window: Some(window),
            reason: None,
        },
        Err(err) => WindowOutcome {
            accepted: false,
            window: None,
            duration_seconds: None,
            reason: Some(err.to_string()),
        },
    }
}

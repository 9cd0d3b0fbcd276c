use super::types::EventWindow;

/// Sorts windows chronologically by start, then by end.
pub fn sort_windows(windows: &mut [EventWindow]) {
    windows.sort_by_key(EventWindow::sort_key);
}

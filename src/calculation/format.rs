//! Timesheet display formatting.
//!
//! Durations render as `H:MM`: hours without padding, minutes padded to two
//! digits. Unknown worked time renders as an em dash.

use chrono::{NaiveDateTime, Timelike};

use crate::models::{BreakdownDisplay, TimeBreakdown};

/// Placeholder shown for unknown values.
pub const UNKNOWN_DISPLAY: &str = "—";

/// Formats a minute count as `H:MM`.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::format_minutes;
///
/// assert_eq!(format_minutes(0), "0:00");
/// assert_eq!(format_minutes(65), "1:05");
/// assert_eq!(format_minutes(1500), "25:00");
/// ```
pub fn format_minutes(minutes: u32) -> String {
    format!("{}:{:02}", minutes / 60, minutes % 60)
}

/// Formats worked time, showing `—` when it is unknown.
pub fn format_worked(worked_minutes: Option<u32>) -> String {
    worked_minutes.map_or_else(|| UNKNOWN_DISPLAY.to_string(), format_minutes)
}

/// Formats the wall-clock time of a timestamp as `H:MM`.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::format_clock_time;
/// use chrono::NaiveDateTime;
///
/// let t = NaiveDateTime::parse_from_str("2025-06-02 09:05:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(format_clock_time(Some(t)), "9:05");
/// assert_eq!(format_clock_time(None), "—");
/// ```
pub fn format_clock_time(timestamp: Option<NaiveDateTime>) -> String {
    timestamp.map_or_else(
        || UNKNOWN_DISPLAY.to_string(),
        |t| format!("{}:{:02}", t.hour(), t.minute()),
    )
}

impl From<&TimeBreakdown> for BreakdownDisplay {
    fn from(breakdown: &TimeBreakdown) -> Self {
        Self {
            worked: format_worked(breakdown.worked_minutes),
            overtime: format_minutes(breakdown.overtime_minutes),
            standard_overtime: format_minutes(breakdown.standard_overtime_minutes),
            excess_overtime: format_minutes(breakdown.excess_overtime_minutes),
            night: format_minutes(breakdown.night_minutes),
            late_early: format_minutes(breakdown.late_early_minutes),
        }
    }
}

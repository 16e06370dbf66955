//! Clock-in/clock-out interval model.
//!
//! This module defines the [`TimeInterval`] value handed to the time
//! accountant, together with the lenient timestamp parsing used to build it
//! from the raw ISO-8601 strings the attendance backend returns.

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Offset-less layouts accepted in addition to RFC 3339.
const LOCAL_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// A clock-in/clock-out pair in local wall-clock time.
///
/// Either end may be absent: an employee who is still on shift has no
/// clock-out yet. Nothing here enforces `clock_out >= clock_in`; the
/// accountant treats an out-of-order pair as unknown.
///
/// # Example
///
/// ```
/// use attendance_engine::models::TimeInterval;
/// use chrono::FixedOffset;
///
/// let jst = FixedOffset::east_opt(9 * 3600).unwrap();
/// let interval = TimeInterval::parse(
///     Some("2025-06-02T00:00:00Z"),
///     Some("2025-06-02T18:00:00"),
///     jst,
/// );
///
/// // The UTC clock-in is shifted to 09:00 local time.
/// assert_eq!(interval.clock_in.unwrap().to_string(), "2025-06-02 09:00:00");
/// assert!(interval.span().is_some());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimeInterval {
    /// When the employee clocked in, if known.
    pub clock_in: Option<NaiveDateTime>,
    /// When the employee clocked out, if known.
    pub clock_out: Option<NaiveDateTime>,
}

impl TimeInterval {
    /// Creates an interval from already-parsed local timestamps.
    pub fn new(clock_in: Option<NaiveDateTime>, clock_out: Option<NaiveDateTime>) -> Self {
        Self {
            clock_in,
            clock_out,
        }
    }

    /// Builds an interval from raw timestamp strings.
    ///
    /// Values that are missing, blank or unparseable become `None`. Strings
    /// carrying an offset are converted into `offset`; strings without one
    /// are taken to already be local time.
    pub fn parse(clock_in: Option<&str>, clock_out: Option<&str>, offset: FixedOffset) -> Self {
        Self {
            clock_in: clock_in.and_then(|raw| parse_timestamp(raw, offset)),
            clock_out: clock_out.and_then(|raw| parse_timestamp(raw, offset)),
        }
    }

    /// Returns `(clock_in, clock_out)` when both are present and in order.
    pub fn span(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        match (self.clock_in, self.clock_out) {
            (Some(start), Some(end)) if end >= start => Some((start, end)),
            _ => None,
        }
    }
}

/// Parses a backend timestamp into local wall-clock time.
///
/// # Example
///
/// ```
/// use attendance_engine::models::parse_timestamp;
/// use chrono::FixedOffset;
///
/// let jst = FixedOffset::east_opt(9 * 3600).unwrap();
/// let local = parse_timestamp("2025-06-02T13:30:00.000Z", jst).unwrap();
/// assert_eq!(local.to_string(), "2025-06-02 22:30:00");
///
/// assert!(parse_timestamp("not a time", jst).is_none());
/// assert!(parse_timestamp("", jst).is_none());
/// ```
pub fn parse_timestamp(raw: &str, offset: FixedOffset) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.with_timezone(&offset).naive_local());
    }

    LOCAL_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
}

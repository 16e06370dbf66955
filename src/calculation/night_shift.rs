//! Night work measurement.
//!
//! Night minutes are counted by walking the worked interval one minute at a
//! time and checking the local hour of each minute against the night
//! window. The scan only runs over intervals the policy accepts as a shift,
//! so it stays bounded by `max_shift_minutes`.

use chrono::{Duration, Timelike};

use crate::config::TimePolicy;
use crate::models::TimeInterval;

use super::shift_minutes;

/// Default first hour of the night window (Labour Standards Act article 37).
pub const DEFAULT_NIGHT_START_HOUR: u32 = 22;

/// Default end hour of the night window, exclusive.
pub const DEFAULT_NIGHT_END_HOUR: u32 = 5;

/// Counts the worked minutes that start inside the night window.
///
/// Only whole worked minutes are scanned, so the result never exceeds
/// [`shift_minutes`]. Unknown and overlong intervals have no night minutes.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::night_minutes;
/// use attendance_engine::config::TimePolicy;
/// use attendance_engine::models::TimeInterval;
/// use chrono::NaiveDateTime;
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
/// let interval = TimeInterval::new(Some(at("2025-06-02 20:00:00")), Some(at("2025-06-03 06:00:00")));
///
/// // 22:00-24:00 plus 00:00-05:00
/// assert_eq!(night_minutes(&interval, &TimePolicy::default()), 420);
/// ```
pub fn night_minutes(interval: &TimeInterval, policy: &TimePolicy) -> u32 {
    let (Some((start, _)), Some(worked)) = (interval.span(), shift_minutes(interval, policy)) else {
        return 0;
    };

    let mut count = 0;
    for minute in 0..i64::from(worked) {
        let at = start + Duration::minutes(minute);
        if policy.is_night_hour(at.hour()) {
            count += 1;
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn make_datetime(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn night(start: &str, end: &str) -> u32 {
        let interval = TimeInterval::new(Some(make_datetime(start)), Some(make_datetime(end)));
        night_minutes(&interval, &TimePolicy::default())
    }

    // ==========================================================================
    // NS-001: day shift has no night minutes
    // ==========================================================================
    #[test]
    fn test_ns_001_day_shift() {
        assert_eq!(night("2025-06-02 09:00:00", "2025-06-02 18:00:00"), 0);
    }

    // ==========================================================================
    // NS-002: evening into early morning
    // ==========================================================================
    #[test]
    fn test_ns_002_overnight() {
        assert_eq!(night("2025-06-02 20:00:00", "2025-06-03 06:00:00"), 420);
    }

    // ==========================================================================
    // NS-003: window edges
    // ==========================================================================
    #[test]
    fn test_ns_003_window_edges() {
        // 21:59 is day, 22:00 is night
        assert_eq!(night("2025-06-02 21:59:00", "2025-06-02 22:01:00"), 1);
        // 04:59 is night, 05:00 is day
        assert_eq!(night("2025-06-03 04:58:00", "2025-06-03 05:02:00"), 2);
    }

    #[test]
    fn test_whole_interval_inside_day_window() {
        assert_eq!(night("2025-06-02 05:00:00", "2025-06-02 22:00:00"), 0);
    }

    #[test]
    fn test_sub_minute_interval_counts_nothing() {
        assert_eq!(night("2025-06-02 22:00:00", "2025-06-02 22:00:30"), 0);
    }

    #[test]
    fn test_seconds_offset_start() {
        // Minutes start at 22:00:30, 22:01:30, ...; the last partial minute is dropped.
        assert_eq!(night("2025-06-02 22:00:30", "2025-06-02 22:10:00"), 9);
    }

    #[test]
    fn test_unknown_interval_has_no_night() {
        assert_eq!(night("2025-06-03 06:00:00", "2025-06-02 20:00:00"), 0);
        let open = TimeInterval::new(Some(make_datetime("2025-06-02 22:00:00")), None);
        assert_eq!(night_minutes(&open, &TimePolicy::default()), 0);
    }

    #[test]
    fn test_full_night_shift() {
        assert_eq!(night("2025-06-02 22:00:00", "2025-06-03 05:00:00"), 420);
    }

    #[test]
    fn test_custom_window() {
        let policy = TimePolicy {
            night_start_hour: 23,
            night_end_hour: 4,
            ..TimePolicy::default()
        };
        let interval = TimeInterval::new(
            Some(make_datetime("2025-06-02 20:00:00")),
            Some(make_datetime("2025-06-03 06:00:00")),
        );
        assert_eq!(night_minutes(&interval, &policy), 300);
    }

    #[test]
    fn test_overlong_interval_is_not_scanned() {
        assert_eq!(night("1900-01-01 00:00:00", "2025-01-01 00:00:00"), 0);
        // Exactly two days is still a shift: two full night windows.
        assert_eq!(night("2025-06-02 12:00:00", "2025-06-04 12:00:00"), 840);
    }
}

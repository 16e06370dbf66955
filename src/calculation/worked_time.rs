//! Worked time measurement.
//!
//! Worked time is the whole number of minutes between clock-in and
//! clock-out. Seconds past the last whole minute are dropped, never rounded.
//! Intervals longer than the policy's maximum shift are treated as unknown.

use crate::config::TimePolicy;
use crate::models::TimeInterval;

/// Default longest interval accepted as a single shift: two days.
pub const DEFAULT_MAX_SHIFT_MINUTES: u32 = 2 * 24 * 60;

/// Measures an interval in whole minutes.
///
/// Returns `None` (displayed as `—`) when either endpoint is missing or the
/// clock-out precedes the clock-in.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::worked_minutes;
/// use attendance_engine::models::TimeInterval;
/// use chrono::NaiveDateTime;
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
///
/// let interval = TimeInterval::new(Some(at("2025-06-02 09:00:00")), Some(at("2025-06-02 18:00:59")));
/// assert_eq!(worked_minutes(&interval), Some(540));
///
/// let open = TimeInterval::new(Some(at("2025-06-02 09:00:00")), None);
/// assert_eq!(worked_minutes(&open), None);
/// ```
pub fn worked_minutes(interval: &TimeInterval) -> Option<u32> {
    let (start, end) = interval.span()?;
    u32::try_from((end - start).num_minutes()).ok()
}

/// Worked minutes of an interval the policy accepts as one shift.
///
/// Like [`worked_minutes`], but an interval longer than
/// `policy.max_shift_minutes` is unknown too.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::shift_minutes;
/// use attendance_engine::config::TimePolicy;
/// use attendance_engine::models::TimeInterval;
/// use chrono::NaiveDateTime;
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
/// let policy = TimePolicy::default();
///
/// let shift = TimeInterval::new(Some(at("2025-06-02 09:00:00")), Some(at("2025-06-02 18:00:00")));
/// assert_eq!(shift_minutes(&shift, &policy), Some(540));
///
/// let decades = TimeInterval::new(Some(at("1900-01-01 00:00:00")), Some(at("2025-01-01 00:00:00")));
/// assert_eq!(shift_minutes(&decades, &policy), None);
/// ```
pub fn shift_minutes(interval: &TimeInterval, policy: &TimePolicy) -> Option<u32> {
    worked_minutes(interval).filter(|worked| policy.accepts_shift(*worked))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn make_datetime(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn interval(start: &str, end: &str) -> TimeInterval {
        TimeInterval::new(Some(make_datetime(start)), Some(make_datetime(end)))
    }

    // ==========================================================================
    // WT-001: nine hour day
    // ==========================================================================
    #[test]
    fn test_wt_001_nine_hour_day() {
        let i = interval("2025-06-02 09:00:00", "2025-06-02 18:00:00");
        assert_eq!(worked_minutes(&i), Some(540));
    }

    // ==========================================================================
    // WT-002: overnight shift
    // ==========================================================================
    #[test]
    fn test_wt_002_overnight_shift() {
        let i = interval("2025-06-02 20:00:00", "2025-06-03 06:00:00");
        assert_eq!(worked_minutes(&i), Some(600));
    }

    // ==========================================================================
    // WT-003: partial minutes truncate
    // ==========================================================================
    #[test]
    fn test_wt_003_partial_minutes_truncate() {
        let i = interval("2025-06-02 09:00:30", "2025-06-02 09:01:29");
        assert_eq!(worked_minutes(&i), Some(0));

        let i = interval("2025-06-02 09:00:30", "2025-06-02 09:01:30");
        assert_eq!(worked_minutes(&i), Some(1));
    }

    #[test]
    fn test_zero_length_interval() {
        let i = interval("2025-06-02 09:00:00", "2025-06-02 09:00:00");
        assert_eq!(worked_minutes(&i), Some(0));
    }

    #[test]
    fn test_reversed_interval_is_unknown() {
        let i = interval("2025-06-02 18:00:00", "2025-06-02 09:00:00");
        assert_eq!(worked_minutes(&i), None);
    }

    #[test]
    fn test_missing_endpoints_are_unknown() {
        let start = Some(make_datetime("2025-06-02 09:00:00"));
        assert_eq!(worked_minutes(&TimeInterval::new(start, None)), None);
        assert_eq!(worked_minutes(&TimeInterval::new(None, start)), None);
        assert_eq!(worked_minutes(&TimeInterval::default()), None);
    }

    // ==========================================================================
    // WT-004: intervals longer than the maximum shift are unknown
    // ==========================================================================
    #[test]
    fn test_wt_004_overlong_interval_is_unknown() {
        let policy = TimePolicy::default();

        let two_days = interval("2025-06-02 09:00:00", "2025-06-04 09:00:00");
        assert_eq!(shift_minutes(&two_days, &policy), Some(2880));

        let just_over = interval("2025-06-02 09:00:00", "2025-06-04 09:01:00");
        assert_eq!(worked_minutes(&just_over), Some(2881));
        assert_eq!(shift_minutes(&just_over, &policy), None);

        let century = interval("1900-01-01 00:00:00", "2025-01-01 00:00:00");
        assert_eq!(shift_minutes(&century, &policy), None);
    }

    #[test]
    fn test_custom_max_shift() {
        let policy = TimePolicy {
            max_shift_minutes: 600,
            ..TimePolicy::default()
        };
        let i = interval("2025-06-02 09:00:00", "2025-06-02 19:00:00");
        assert_eq!(shift_minutes(&i, &policy), Some(600));
        let i = interval("2025-06-02 09:00:00", "2025-06-02 19:01:00");
        assert_eq!(shift_minutes(&i, &policy), None);
    }
}

//! Overtime split.
//!
//! Worked time past the standard day is overtime. The first part, up to the
//! width of the legal band, is standard (legal) overtime; anything after the
//! band is excess overtime, the highest premium tier. The two always add up
//! to the total overtime.

use serde::{Deserialize, Serialize};

use crate::config::TimePolicy;

/// Default standard working day in minutes.
///
/// Per the Labour Standards Act article 32, ordinary hours are up to 8 hours per day.
pub const DEFAULT_STANDARD_DAY_MINUTES: u32 = 480;

/// Default width of the legal overtime band in minutes (8:00 to 10:30).
pub const DEFAULT_LEGAL_OVERTIME_BAND_MINUTES: u32 = 150;

/// Overtime minutes split into premium tiers.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::split_overtime;
/// use attendance_engine::config::TimePolicy;
///
/// let split = split_overtime(Some(700), &TimePolicy::default());
/// assert_eq!(split.overtime_minutes, 220);
/// assert_eq!(split.standard_overtime_minutes, 150);
/// assert_eq!(split.excess_overtime_minutes, 70);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OvertimeSplit {
    /// Minutes past the standard day.
    pub overtime_minutes: u32,
    /// Minutes inside the legal band.
    pub standard_overtime_minutes: u32,
    /// Minutes past the legal band.
    pub excess_overtime_minutes: u32,
}

/// Splits worked minutes into overtime tiers.
///
/// Unknown worked time has no overtime.
pub fn split_overtime(worked_minutes: Option<u32>, policy: &TimePolicy) -> OvertimeSplit {
    let Some(worked) = worked_minutes else {
        return OvertimeSplit::default();
    };

    let overtime = worked.saturating_sub(policy.standard_day_minutes);
    let standard = overtime.min(policy.legal_overtime_band_minutes);
    let excess = worked.saturating_sub(policy.excess_threshold_minutes());

    OvertimeSplit {
        overtime_minutes: overtime,
        standard_overtime_minutes: standard,
        excess_overtime_minutes: excess,
    }
}

/// Overtime inside the legal band: `min(max(0, w - 480), 150)`.
pub fn standard_overtime(worked_minutes: Option<u32>, policy: &TimePolicy) -> u32 {
    split_overtime(worked_minutes, policy).standard_overtime_minutes
}

/// Overtime past the legal band: `max(0, w - 630)`.
pub fn excess_overtime(worked_minutes: Option<u32>, policy: &TimePolicy) -> u32 {
    split_overtime(worked_minutes, policy).excess_overtime_minutes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> TimePolicy {
        TimePolicy::default()
    }

    // ==========================================================================
    // OT-001: under the standard day
    // ==========================================================================
    #[test]
    fn test_ot_001_under_standard_day() {
        let split = split_overtime(Some(420), &policy());
        assert_eq!(split, OvertimeSplit::default());
    }

    // ==========================================================================
    // OT-002: exactly eight hours
    // ==========================================================================
    #[test]
    fn test_ot_002_exactly_standard_day() {
        let split = split_overtime(Some(480), &policy());
        assert_eq!(split.overtime_minutes, 0);
        assert_eq!(split.standard_overtime_minutes, 0);
    }

    // ==========================================================================
    // OT-003: nine hours, inside the band
    // ==========================================================================
    #[test]
    fn test_ot_003_inside_band() {
        let split = split_overtime(Some(540), &policy());
        assert_eq!(split.overtime_minutes, 60);
        assert_eq!(split.standard_overtime_minutes, 60);
        assert_eq!(split.excess_overtime_minutes, 0);
    }

    // ==========================================================================
    // OT-004: exactly at the end of the band
    // ==========================================================================
    #[test]
    fn test_ot_004_band_boundary() {
        let split = split_overtime(Some(630), &policy());
        assert_eq!(split.standard_overtime_minutes, 150);
        assert_eq!(split.excess_overtime_minutes, 0);

        let split = split_overtime(Some(631), &policy());
        assert_eq!(split.standard_overtime_minutes, 150);
        assert_eq!(split.excess_overtime_minutes, 1);
    }

    // ==========================================================================
    // OT-005: long day past the band
    // ==========================================================================
    #[test]
    fn test_ot_005_past_band() {
        let split = split_overtime(Some(780), &policy());
        assert_eq!(split.overtime_minutes, 300);
        assert_eq!(split.standard_overtime_minutes, 150);
        assert_eq!(split.excess_overtime_minutes, 150);
    }

    #[test]
    fn test_unknown_worked_time_has_no_overtime() {
        assert_eq!(standard_overtime(None, &policy()), 0);
        assert_eq!(excess_overtime(None, &policy()), 0);
    }

    #[test]
    fn test_tiers_add_up_to_total() {
        for worked in [0, 479, 481, 629, 630, 900, 1439] {
            let split = split_overtime(Some(worked), &policy());
            assert_eq!(
                split.standard_overtime_minutes + split.excess_overtime_minutes,
                split.overtime_minutes,
                "worked {}",
                worked
            );
        }
    }

    #[test]
    fn test_custom_policy() {
        let policy = TimePolicy {
            standard_day_minutes: 450,
            legal_overtime_band_minutes: 120,
            ..TimePolicy::default()
        };
        let split = split_overtime(Some(600), &policy);
        assert_eq!(split.overtime_minutes, 150);
        assert_eq!(split.standard_overtime_minutes, 120);
        assert_eq!(split.excess_overtime_minutes, 30);
    }
}

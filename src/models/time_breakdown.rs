//! Time breakdown models.
//!
//! This module contains the [`TimeBreakdown`] produced by the time accountant
//! and its display form, [`BreakdownDisplay`].

use serde::{Deserialize, Serialize};

/// Minute-level breakdown of one attendance interval.
///
/// `worked_minutes` is `None` when the interval is unknown (a missing or
/// unparseable endpoint, or a clock-out before the clock-in). Every other
/// figure derived from the interval is then zero; `late_early_minutes` is
/// supplied from outside and is kept regardless.
///
/// # Example
///
/// ```
/// use attendance_engine::models::TimeBreakdown;
///
/// let breakdown = TimeBreakdown::unknown(15);
/// assert!(!breakdown.is_known());
/// assert_eq!(breakdown.night_minutes, 0);
/// assert_eq!(breakdown.late_early_minutes, 15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimeBreakdown {
    /// Whole minutes between clock-in and clock-out, or `None` if unknown.
    pub worked_minutes: Option<u32>,
    /// All minutes past the standard day (`standard + excess`).
    pub overtime_minutes: u32,
    /// Overtime inside the legal band, capped at the band width.
    pub standard_overtime_minutes: u32,
    /// Overtime beyond the end of the legal band.
    pub excess_overtime_minutes: u32,
    /// Worked minutes falling in the night window.
    pub night_minutes: u32,
    /// Late arrival plus early departure minutes.
    pub late_early_minutes: u32,
}

impl TimeBreakdown {
    /// The breakdown of an interval that cannot be measured.
    pub fn unknown(late_early_minutes: u32) -> Self {
        Self {
            late_early_minutes,
            ..Self::default()
        }
    }

    /// Whether the worked time could be measured.
    pub fn is_known(&self) -> bool {
        self.worked_minutes.is_some()
    }

    /// Renders every figure as `H:MM`, with `—` for unknown worked time.
    pub fn display(&self) -> BreakdownDisplay {
        BreakdownDisplay::from(self)
    }
}

/// Display strings for a [`TimeBreakdown`], one per column of the timesheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownDisplay {
    /// Worked time, or `—` when unknown.
    pub worked: String,
    /// Total overtime.
    pub overtime: String,
    /// Legal overtime band.
    pub standard_overtime: String,
    /// Excess overtime.
    pub excess_overtime: String,
    /// Night minutes.
    pub night: String,
    /// Late plus early.
    pub late_early: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_breakdown_is_zeroed() {
        let breakdown = TimeBreakdown::unknown(0);
        assert_eq!(breakdown.worked_minutes, None);
        assert_eq!(breakdown.overtime_minutes, 0);
        assert_eq!(breakdown.standard_overtime_minutes, 0);
        assert_eq!(breakdown.excess_overtime_minutes, 0);
        assert_eq!(breakdown.night_minutes, 0);
        assert!(!breakdown.is_known());
    }

    #[test]
    fn test_display_of_known_breakdown() {
        let breakdown = TimeBreakdown {
            worked_minutes: Some(545),
            overtime_minutes: 65,
            standard_overtime_minutes: 65,
            excess_overtime_minutes: 0,
            night_minutes: 0,
            late_early_minutes: 5,
        };

        let display = breakdown.display();
        assert_eq!(display.worked, "9:05");
        assert_eq!(display.overtime, "1:05");
        assert_eq!(display.standard_overtime, "1:05");
        assert_eq!(display.excess_overtime, "0:00");
        assert_eq!(display.night, "0:00");
        assert_eq!(display.late_early, "0:05");
    }

    #[test]
    fn test_display_of_unknown_breakdown() {
        let display = TimeBreakdown::unknown(75).display();
        assert_eq!(display.worked, "—");
        assert_eq!(display.night, "0:00");
        assert_eq!(display.late_early, "1:15");
    }

    #[test]
    fn test_breakdown_serialization() {
        let json = serde_json::to_value(TimeBreakdown::unknown(0)).unwrap();
        assert!(json["worked_minutes"].is_null());
        assert_eq!(json["night_minutes"], 0);

        let back: TimeBreakdown = serde_json::from_value(json).unwrap();
        assert_eq!(back, TimeBreakdown::unknown(0));
    }
}

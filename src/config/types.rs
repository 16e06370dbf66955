//! Configuration types for attendance accounting.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::collections::BTreeMap;

use chrono::{Datelike, FixedOffset, NaiveDate, Offset, Utc};
use serde::{Deserialize, Serialize};

use crate::calculation::{
    DEFAULT_LEGAL_OVERTIME_BAND_MINUTES, DEFAULT_MAX_SHIFT_MINUTES, DEFAULT_NIGHT_END_HOUR,
    DEFAULT_NIGHT_START_HOUR, DEFAULT_STANDARD_DAY_MINUTES, DEFAULT_UTC_OFFSET_MINUTES,
};
use crate::error::{EngineError, EngineResult};

/// The labour-time policy applied by the time accountant.
///
/// Loaded from `policy.yaml`. Every field is optional in the file and
/// defaults to the Japanese statutory values.
///
/// # Example
///
/// ```
/// use attendance_engine::config::TimePolicy;
///
/// let policy = TimePolicy::default();
/// assert_eq!(policy.standard_day_minutes, 480);
/// assert_eq!(policy.excess_threshold_minutes(), 630);
/// assert!(policy.is_night_hour(23));
/// assert!(!policy.is_night_hour(5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimePolicy {
    /// Offset of local wall-clock time from UTC, in minutes.
    pub utc_offset_minutes: i32,
    /// Length of the standard working day.
    pub standard_day_minutes: u32,
    /// Width of the legal overtime band that follows the standard day.
    pub legal_overtime_band_minutes: u32,
    /// First hour of the night window.
    pub night_start_hour: u32,
    /// Hour at which the night window closes (exclusive).
    pub night_end_hour: u32,
    /// Longest interval accepted as one shift; longer ones are unknown.
    pub max_shift_minutes: u32,
}

impl Default for TimePolicy {
    fn default() -> Self {
        Self {
            utc_offset_minutes: DEFAULT_UTC_OFFSET_MINUTES,
            standard_day_minutes: DEFAULT_STANDARD_DAY_MINUTES,
            legal_overtime_band_minutes: DEFAULT_LEGAL_OVERTIME_BAND_MINUTES,
            night_start_hour: DEFAULT_NIGHT_START_HOUR,
            night_end_hour: DEFAULT_NIGHT_END_HOUR,
            max_shift_minutes: DEFAULT_MAX_SHIFT_MINUTES,
        }
    }
}

impl TimePolicy {
    /// The local UTC offset. Falls back to UTC for an out-of-range value.
    pub fn offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_minutes.saturating_mul(60))
            .unwrap_or_else(|| Utc.fix())
    }

    /// Worked minutes after which overtime counts as excess.
    pub fn excess_threshold_minutes(&self) -> u32 {
        self.standard_day_minutes
            .saturating_add(self.legal_overtime_band_minutes)
    }

    /// Whether a local hour of day lies in the night window.
    ///
    /// A window whose start is after its end wraps past midnight.
    pub fn is_night_hour(&self, hour: u32) -> bool {
        if self.night_start_hour > self.night_end_hour {
            hour >= self.night_start_hour || hour < self.night_end_hour
        } else {
            hour >= self.night_start_hour && hour < self.night_end_hour
        }
    }

    /// Whether an interval of `minutes` counts as a single shift.
    pub fn accepts_shift(&self, minutes: u32) -> bool {
        minutes <= self.max_shift_minutes
    }

    /// Checks that every value is in range.
    pub fn validate(&self) -> EngineResult<()> {
        if FixedOffset::east_opt(self.utc_offset_minutes.saturating_mul(60)).is_none() {
            return Err(EngineError::InvalidPolicy {
                field: "utc_offset_minutes".to_string(),
                message: format!("{} is not a valid UTC offset", self.utc_offset_minutes),
            });
        }
        if self.standard_day_minutes == 0 {
            return Err(EngineError::InvalidPolicy {
                field: "standard_day_minutes".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        if self.max_shift_minutes == 0 {
            return Err(EngineError::InvalidPolicy {
                field: "max_shift_minutes".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        for (field, hour) in [
            ("night_start_hour", self.night_start_hour),
            ("night_end_hour", self.night_end_hour),
        ] {
            if hour > 23 {
                return Err(EngineError::InvalidPolicy {
                    field: field.to_string(),
                    message: format!("{} is not an hour of the day", hour),
                });
            }
        }
        Ok(())
    }
}

/// A hand-authored holiday table, one file per year under `holidays/`.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayTableConfig {
    /// The year the table describes.
    pub year: i32,
    /// Holiday names keyed by date, substitute holidays included.
    pub holidays: BTreeMap<NaiveDate, String>,
}

impl HolidayTableConfig {
    /// Checks that every date lies in the declared year.
    pub fn validate(&self) -> EngineResult<()> {
        if let Some(stray) = self.holidays.keys().find(|d| d.year() != self.year) {
            return Err(EngineError::InvalidHolidayTable {
                year: self.year,
                message: format!("{} lies outside the table year", stray),
            });
        }
        if let Some((date, _)) = self.holidays.iter().find(|(_, name)| name.trim().is_empty()) {
            return Err(EngineError::InvalidHolidayTable {
                year: self.year,
                message: format!("{} has an empty name", date),
            });
        }
        Ok(())
    }
}

/// The complete engine configuration.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// Labour-time policy.
    policy: TimePolicy,
    /// Authoritative holiday tables by year.
    holiday_tables: BTreeMap<i32, BTreeMap<NaiveDate, String>>,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(
        policy: TimePolicy,
        holiday_tables: BTreeMap<i32, BTreeMap<NaiveDate, String>>,
    ) -> Self {
        Self {
            policy,
            holiday_tables,
        }
    }

    /// Returns the labour-time policy.
    pub fn policy(&self) -> &TimePolicy {
        &self.policy
    }

    /// Returns the configured holiday tables.
    pub fn holiday_tables(&self) -> &BTreeMap<i32, BTreeMap<NaiveDate, String>> {
        &self.holiday_tables
    }
}

//! Attendance record model.
//!
//! Attendance rows are owned by the external backend; this crate only reads
//! them. The `late` and `early` fields arrive untyped, so they are decoded
//! leniently into non-negative minute counts.

use chrono::{FixedOffset, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

use crate::calculation::minutes_from_json;

use super::TimeInterval;

/// One attendance row for one employee on one day, as returned by the backend.
///
/// # Example
///
/// ```
/// use attendance_engine::models::AttendanceRecord;
///
/// let record: AttendanceRecord = serde_json::from_str(r#"{
///     "employee_id": 7,
///     "clock_in": "2025-06-02T09:00:00",
///     "clock_out": null,
///     "late": "-5",
///     "early": 12.7
/// }"#).unwrap();
///
/// assert_eq!(record.late, 0);
/// assert_eq!(record.early, 12);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Backend row id.
    #[serde(default)]
    pub id: Option<i64>,
    /// The employee this row belongs to.
    pub employee_id: i64,
    /// Explicit work date; when absent the local date of the clock-in is used.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Raw clock-in timestamp.
    #[serde(default)]
    pub clock_in: Option<String>,
    /// Raw clock-out timestamp.
    #[serde(default)]
    pub clock_out: Option<String>,
    /// Late-arrival minutes decided upstream.
    #[serde(default, deserialize_with = "lenient_minutes")]
    pub late: u32,
    /// Early-departure minutes decided upstream.
    #[serde(default, deserialize_with = "lenient_minutes")]
    pub early: u32,
    /// Free-form remark.
    #[serde(default)]
    pub note: Option<String>,
}

impl AttendanceRecord {
    /// Parses the raw timestamps into a local [`TimeInterval`].
    pub fn interval(&self, offset: FixedOffset) -> TimeInterval {
        TimeInterval::parse(self.clock_in.as_deref(), self.clock_out.as_deref(), offset)
    }

    /// The calendar day this record counts towards.
    pub fn work_date(&self, offset: FixedOffset) -> Option<NaiveDate> {
        self.date
            .or_else(|| self.interval(offset).clock_in.map(|t| t.date()))
    }
}

/// Decodes an untyped minute count, clamping anything unusable to zero.
pub(crate) fn lenient_minutes<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(minutes_from_json(&value))
}

//! Request types for the Attendance Engine API.
//!
//! This module defines the JSON bodies for `/breakdown` and `/summary` and the
//! query string for `/holidays`.

use serde::{Deserialize, Serialize};

use crate::models::{AttendanceRecord, lenient_minutes};

/// Request body for the `/breakdown` endpoint.
///
/// Timestamps are passed through untouched; missing or unparseable values
/// produce an "unknown" breakdown rather than an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BreakdownRequest {
    /// Raw clock-in timestamp.
    #[serde(default)]
    pub clock_in: Option<String>,
    /// Raw clock-out timestamp.
    #[serde(default)]
    pub clock_out: Option<String>,
    /// Late-arrival minutes; numbers and numeric strings are accepted.
    #[serde(default, deserialize_with = "lenient_minutes")]
    pub late: u32,
    /// Early-departure minutes; numbers and numeric strings are accepted.
    #[serde(default, deserialize_with = "lenient_minutes")]
    pub early: u32,
}

/// Request body for the `/summary` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRequest {
    /// Calendar year of the month to total.
    pub year: i32,
    /// Month to total (1-12).
    pub month: u32,
    /// When set, only this employee's records are totalled.
    #[serde(default)]
    pub employee_id: Option<i64>,
    /// Attendance rows as returned by the backend.
    #[serde(default)]
    pub records: Vec<AttendanceRecord>,
}

/// Query string for the `/holidays` endpoint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HolidaysQuery {
    /// Calendar year to list.
    pub year: i32,
    /// Restricts the listing to one month.
    #[serde(default)]
    pub month: Option<u32>,
}

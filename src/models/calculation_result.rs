//! Calculation result models for the Attendance Engine.
//!
//! This module contains the [`BreakdownResult`] returned for a single
//! attendance interval, the [`PeriodSummary`] aggregated over a month or week,
//! and the audit trace types that record how each figure was derived.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{BreakdownDisplay, TimeBreakdown, TimeInterval};

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Reference to the statute the rule models.
    pub statute_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag input that was degraded rather than rejected, such as an
/// employee who has not clocked out yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

impl AuditWarning {
    /// Creates a warning.
    pub fn new(code: &str, message: impl Into<String>, severity: &str) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            severity: severity.to_string(),
        }
    }
}

/// The complete audit trace for a calculation.
///
/// # Example
///
/// ```
/// use attendance_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 12,
/// };
/// assert!(trace.steps.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of breaking down one attendance interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The local interval the figures were computed from.
    pub interval: TimeInterval,
    /// The computed minute counts.
    pub breakdown: TimeBreakdown,
    /// The same figures rendered for a timesheet.
    pub display: BreakdownDisplay,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

/// Attendance totals over a date range, typically one month.
///
/// Only days with a measurable worked time count; late and early minutes of
/// other days are ignored.
///
/// # Example
///
/// ```
/// use attendance_engine::models::PeriodSummary;
/// use chrono::NaiveDate;
///
/// let summary = PeriodSummary::empty(
///     NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
/// );
/// assert_eq!(summary.work_days, 0);
/// assert!(summary.worked_hours.is_zero());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodSummary {
    /// First day of the range (inclusive).
    pub start: NaiveDate,
    /// Last day of the range (inclusive).
    pub end: NaiveDate,
    /// Days with a complete clock-in/clock-out pair.
    pub work_days: u32,
    /// Work days that fell on a holiday or weekend.
    pub holiday_work_days: u32,
    /// Total worked minutes.
    pub worked_minutes: u64,
    /// Total overtime minutes.
    pub overtime_minutes: u64,
    /// Total legal-band overtime minutes.
    pub standard_overtime_minutes: u64,
    /// Total excess overtime minutes.
    pub excess_overtime_minutes: u64,
    /// Total night minutes.
    pub night_minutes: u64,
    /// Total late-arrival minutes.
    pub late_minutes: u64,
    /// Total early-departure minutes.
    pub early_minutes: u64,
    /// Worked time in hours, rounded to two decimal places.
    pub worked_hours: Decimal,
}

impl PeriodSummary {
    /// A summary with no worked days.
    pub fn empty(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end,
            work_days: 0,
            holiday_work_days: 0,
            worked_minutes: 0,
            overtime_minutes: 0,
            standard_overtime_minutes: 0,
            excess_overtime_minutes: 0,
            night_minutes: 0,
            late_minutes: 0,
            early_minutes: 0,
            worked_hours: Decimal::ZERO,
        }
    }
}

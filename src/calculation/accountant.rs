//! The time accountant.
//!
//! [`TimeAccountant`] applies a [`TimePolicy`] to attendance intervals and
//! produces a [`TimeBreakdown`]. It never fails: missing, unparseable or
//! out-of-order timestamps give the "unknown" breakdown, because a timesheet
//! must render even while an employee is still clocked in. Intervals longer
//! than the policy's maximum shift are unknown as well.

use std::time::Instant;

use chrono::{NaiveDate, NaiveDateTime, Utc};
use uuid::Uuid;

use crate::config::TimePolicy;
use crate::holidays::HolidayService;
use crate::models::{
    AttendanceRecord, AuditStep, AuditTrace, AuditWarning, BreakdownResult, PeriodSummary,
    TimeBreakdown, TimeInterval,
};

use super::{
    clamp_minutes, format_clock_time, format_minutes, format_worked, late_early_total, night_minutes,
    shift_minutes, split_overtime, summarize_period, worked_minutes,
};

/// Default local offset from UTC in minutes (Japan Standard Time).
pub const DEFAULT_UTC_OFFSET_MINUTES: i32 = 9 * 60;

/// Applies a labour-time policy to clock-in/clock-out intervals.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::TimeAccountant;
///
/// let accountant = TimeAccountant::default();
/// let interval = accountant.interval(Some("2025-06-02T09:00:00"), Some("2025-06-02T18:00:00"));
/// let breakdown = accountant.breakdown(&interval, 0, 0);
///
/// assert_eq!(breakdown.worked_minutes, Some(540));
/// assert_eq!(breakdown.standard_overtime_minutes, 60);
/// assert_eq!(breakdown.excess_overtime_minutes, 0);
/// assert_eq!(breakdown.night_minutes, 0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeAccountant {
    policy: TimePolicy,
}

impl TimeAccountant {
    /// Creates an accountant for the given policy.
    pub fn new(policy: TimePolicy) -> Self {
        Self { policy }
    }

    /// Returns the policy in force.
    pub fn policy(&self) -> &TimePolicy {
        &self.policy
    }

    /// Parses raw timestamps into a local interval using the policy's offset.
    pub fn interval(&self, clock_in: Option<&str>, clock_out: Option<&str>) -> TimeInterval {
        TimeInterval::parse(clock_in, clock_out, self.policy.offset())
    }

    /// Whole worked minutes, or `None` when unknown or longer than a shift.
    pub fn worked_minutes(&self, interval: &TimeInterval) -> Option<u32> {
        shift_minutes(interval, &self.policy)
    }

    /// Overtime inside the legal band.
    pub fn standard_overtime(&self, interval: &TimeInterval) -> u32 {
        split_overtime(self.worked_minutes(interval), &self.policy).standard_overtime_minutes
    }

    /// Overtime past the legal band.
    pub fn excess_overtime(&self, interval: &TimeInterval) -> u32 {
        split_overtime(self.worked_minutes(interval), &self.policy).excess_overtime_minutes
    }

    /// All overtime past the standard day.
    pub fn overtime(&self, interval: &TimeInterval) -> u32 {
        split_overtime(self.worked_minutes(interval), &self.policy).overtime_minutes
    }

    /// Worked minutes inside the night window.
    pub fn night_minutes(&self, interval: &TimeInterval) -> u32 {
        night_minutes(interval, &self.policy)
    }

    /// Computes the full breakdown of one interval.
    pub fn breakdown(&self, interval: &TimeInterval, late_minutes: u32, early_minutes: u32) -> TimeBreakdown {
        let late_early = late_early_total(late_minutes, early_minutes);
        let Some(worked) = self.worked_minutes(interval) else {
            return TimeBreakdown::unknown(late_early);
        };

        let split = split_overtime(Some(worked), &self.policy);
        TimeBreakdown {
            worked_minutes: Some(worked),
            overtime_minutes: split.overtime_minutes,
            standard_overtime_minutes: split.standard_overtime_minutes,
            excess_overtime_minutes: split.excess_overtime_minutes,
            night_minutes: night_minutes(interval, &self.policy),
            late_early_minutes: late_early,
        }
    }

    /// Computes a breakdown straight from raw backend values.
    ///
    /// Negative late/early counts are clamped to zero.
    pub fn breakdown_raw(
        &self,
        clock_in: Option<&str>,
        clock_out: Option<&str>,
        late_minutes: Option<i64>,
        early_minutes: Option<i64>,
    ) -> TimeBreakdown {
        let interval = self.interval(clock_in, clock_out);
        self.breakdown(
            &interval,
            clamp_minutes(late_minutes),
            clamp_minutes(early_minutes),
        )
    }

    /// Computes a breakdown and records every rule applied.
    ///
    /// Degraded input is reported as warnings in the trace rather than as
    /// errors.
    pub fn breakdown_with_audit(
        &self,
        clock_in: Option<&str>,
        clock_out: Option<&str>,
        late_minutes: u32,
        early_minutes: u32,
    ) -> BreakdownResult {
        let started = Instant::now();
        let interval = self.interval(clock_in, clock_out);
        let breakdown = self.breakdown(&interval, late_minutes, early_minutes);

        let mut warnings = Vec::new();
        check_endpoint(&mut warnings, "clock-in", "MISSING_CLOCK_IN", clock_in, interval.clock_in);
        check_endpoint(&mut warnings, "clock-out", "MISSING_CLOCK_OUT", clock_out, interval.clock_out);
        if let (Some(start), Some(end)) = (interval.clock_in, interval.clock_out) {
            if end < start {
                warnings.push(AuditWarning::new(
                    "CLOCK_OUT_BEFORE_CLOCK_IN",
                    format!("clock-out {} precedes clock-in {}", end, start),
                    "high",
                ));
            }
        }
        if let Some(span) = worked_minutes(&interval).filter(|m| !self.policy.accepts_shift(*m)) {
            warnings.push(AuditWarning::new(
                "SHIFT_TOO_LONG",
                format!(
                    "{} minutes between clock-in and clock-out exceeds the {} minute maximum shift",
                    span, self.policy.max_shift_minutes
                ),
                "high",
            ));
        }

        let steps = self.audit_steps(&interval, &breakdown, late_minutes, early_minutes);

        BreakdownResult {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            interval,
            breakdown,
            display: breakdown.display(),
            audit_trace: AuditTrace {
                steps,
                warnings,
                duration_us: started.elapsed().as_micros() as u64,
            },
        }
    }

    /// Totals the records worked between `start` and `end` inclusive.
    ///
    /// See [`summarize_period`](super::summarize_period).
    pub fn summarize(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        records: &[AttendanceRecord],
        calendar: Option<&HolidayService>,
    ) -> PeriodSummary {
        summarize_period(self, start, end, records, calendar)
    }

    fn audit_steps(
        &self,
        interval: &TimeInterval,
        breakdown: &TimeBreakdown,
        late_minutes: u32,
        early_minutes: u32,
    ) -> Vec<AuditStep> {
        let policy = &self.policy;

        let worked_reasoning = match breakdown.worked_minutes {
            Some(worked) => format!(
                "{} whole minutes ({}) between clock-in and clock-out",
                worked,
                format_minutes(worked)
            ),
            None => "worked time unknown: clock-in or clock-out missing, unparseable, out of order or longer than a shift"
                .to_string(),
        };

        let overtime_reasoning = match breakdown.worked_minutes {
            Some(worked) if breakdown.overtime_minutes > 0 => format!(
                "{} minutes worked exceeds {} minute standard day by {}; {} fall in the {} minute legal band, {} beyond it",
                worked,
                policy.standard_day_minutes,
                breakdown.overtime_minutes,
                breakdown.standard_overtime_minutes,
                policy.legal_overtime_band_minutes,
                breakdown.excess_overtime_minutes
            ),
            Some(worked) => format!(
                "{} minutes worked is within the {} minute standard day, no overtime",
                worked, policy.standard_day_minutes
            ),
            None => "no overtime for unknown worked time".to_string(),
        };

        vec![
            AuditStep {
                step_number: 1,
                rule_id: "worked_time".to_string(),
                rule_name: "Worked Time".to_string(),
                statute_ref: "LSA Art. 32".to_string(),
                input: serde_json::json!({
                    "clock_in": interval.clock_in.map(iso),
                    "clock_out": interval.clock_out.map(iso),
                }),
                output: serde_json::json!({
                    "worked_minutes": breakdown.worked_minutes,
                    "display": format_worked(breakdown.worked_minutes),
                    "clock_in_display": format_clock_time(interval.clock_in),
                    "clock_out_display": format_clock_time(interval.clock_out),
                }),
                reasoning: worked_reasoning,
            },
            AuditStep {
                step_number: 2,
                rule_id: "overtime_split".to_string(),
                rule_name: "Overtime Split".to_string(),
                statute_ref: "LSA Art. 32, 36".to_string(),
                input: serde_json::json!({
                    "worked_minutes": breakdown.worked_minutes,
                    "standard_day_minutes": policy.standard_day_minutes,
                    "legal_overtime_band_minutes": policy.legal_overtime_band_minutes,
                }),
                output: serde_json::json!({
                    "overtime_minutes": breakdown.overtime_minutes,
                    "standard_overtime_minutes": breakdown.standard_overtime_minutes,
                    "excess_overtime_minutes": breakdown.excess_overtime_minutes,
                }),
                reasoning: overtime_reasoning,
            },
            AuditStep {
                step_number: 3,
                rule_id: "night_shift".to_string(),
                rule_name: "Night Work".to_string(),
                statute_ref: "LSA Art. 37(4)".to_string(),
                input: serde_json::json!({
                    "night_start_hour": policy.night_start_hour,
                    "night_end_hour": policy.night_end_hour,
                }),
                output: serde_json::json!({
                    "night_minutes": breakdown.night_minutes,
                }),
                reasoning: format!(
                    "{} worked minutes start between {}:00 and {}:00",
                    breakdown.night_minutes, policy.night_start_hour, policy.night_end_hour
                ),
            },
            AuditStep {
                step_number: 4,
                rule_id: "late_early".to_string(),
                rule_name: "Late Arrival and Early Departure".to_string(),
                statute_ref: "Work rules".to_string(),
                input: serde_json::json!({
                    "late_minutes": late_minutes,
                    "early_minutes": early_minutes,
                }),
                output: serde_json::json!({
                    "late_early_minutes": breakdown.late_early_minutes,
                }),
                reasoning: format!(
                    "{} late + {} early = {}",
                    late_minutes,
                    early_minutes,
                    format_minutes(breakdown.late_early_minutes)
                ),
            },
        ]
    }
}

fn iso(t: NaiveDateTime) -> String {
    t.format("%Y-%m-%dT%H:%M:%S").to_string()
}

fn check_endpoint(
    warnings: &mut Vec<AuditWarning>,
    label: &str,
    missing_code: &str,
    raw: Option<&str>,
    parsed: Option<NaiveDateTime>,
) {
    match raw.map(str::trim) {
        None | Some("") => warnings.push(AuditWarning::new(
            missing_code,
            format!("no {} recorded", label),
            "low",
        )),
        Some(value) if parsed.is_none() => warnings.push(AuditWarning::new(
            "UNPARSEABLE_TIMESTAMP",
            format!("{} '{}' is not a valid timestamp", label, value),
            "medium",
        )),
        Some(_) => {}
    }
}

/// Computes a breakdown under the default policy.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::compute_time_breakdown;
///
/// let day = compute_time_breakdown(Some("2025-06-02T09:00:00"), Some("2025-06-02T18:00:00"), None, None);
/// assert_eq!(day.worked_minutes, Some(540));
/// assert_eq!(day.standard_overtime_minutes, 60);
///
/// let still_on_shift = compute_time_breakdown(Some("2025-06-02T09:00:00"), None, Some(10), Some(-5));
/// assert_eq!(still_on_shift.worked_minutes, None);
/// assert_eq!(still_on_shift.late_early_minutes, 10);
/// ```
pub fn compute_time_breakdown(
    clock_in: Option<&str>,
    clock_out: Option<&str>,
    late_minutes: Option<i64>,
    early_minutes: Option<i64>,
) -> TimeBreakdown {
    TimeAccountant::default().breakdown_raw(clock_in, clock_out, late_minutes, early_minutes)
}

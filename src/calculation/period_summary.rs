//! Period totals for a timesheet footer.
//!
//! Each record is broken down independently and the per-day figures are
//! summed, so the totals always agree with the rows shown above them.

use std::collections::BTreeSet;

use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::holidays::HolidayService;
use crate::models::{AttendanceRecord, DayType, PeriodSummary};

use super::TimeAccountant;

/// Sums the attendance records whose work date lies in `start..=end`.
///
/// Records with unknown worked time, or without any work date, are skipped.
/// Several records on the same date count as one work day. Days worked on a
/// holiday or weekend are only counted when a calendar is given.
pub fn summarize_period(
    accountant: &TimeAccountant,
    start: NaiveDate,
    end: NaiveDate,
    records: &[AttendanceRecord],
    calendar: Option<&HolidayService>,
) -> PeriodSummary {
    let offset = accountant.policy().offset();
    let mut summary = PeriodSummary::empty(start, end);
    let mut work_dates = BTreeSet::new();

    for record in records {
        let Some(date) = record.work_date(offset) else {
            continue;
        };
        if date < start || date > end {
            continue;
        }

        let breakdown = accountant.breakdown(&record.interval(offset), record.late, record.early);
        let Some(worked) = breakdown.worked_minutes else {
            continue;
        };

        work_dates.insert(date);
        summary.worked_minutes += u64::from(worked);
        summary.overtime_minutes += u64::from(breakdown.overtime_minutes);
        summary.standard_overtime_minutes += u64::from(breakdown.standard_overtime_minutes);
        summary.excess_overtime_minutes += u64::from(breakdown.excess_overtime_minutes);
        summary.night_minutes += u64::from(breakdown.night_minutes);
        summary.late_minutes += u64::from(record.late);
        summary.early_minutes += u64::from(record.early);
    }

    summary.work_days = work_dates.len() as u32;
    if let Some(calendar) = calendar {
        summary.holiday_work_days = work_dates
            .iter()
            .filter(|date| calendar.day_type(**date) != DayType::Workday)
            .count() as u32;
    }
    let mut worked_hours =
        (Decimal::from(summary.worked_minutes) / Decimal::from(60)).round_dp(2);
    worked_hours.rescale(2);
    summary.worked_hours = worked_hours;

    debug!(
        start = %start,
        end = %end,
        work_days = summary.work_days,
        worked_minutes = summary.worked_minutes,
        "Summarized attendance period"
    );

    summary
}

/// Sums the records of one calendar month.
///
/// # Errors
///
/// Returns [`EngineError::InvalidMonth`] unless `month` is 1-12.
pub fn summarize_month(
    accountant: &TimeAccountant,
    year: i32,
    month: u32,
    records: &[AttendanceRecord],
    calendar: Option<&HolidayService>,
) -> EngineResult<PeriodSummary> {
    let (start, end) = month_bounds(year, month)?;
    Ok(summarize_period(accountant, start, end, records, calendar))
}

/// First and last day of a month.
pub fn month_bounds(year: i32, month: u32) -> EngineResult<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or(EngineError::InvalidMonth { month })?;
    let end = start
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .ok_or(EngineError::InvalidMonth { month })?;
    Ok((start, end))
}

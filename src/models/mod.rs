//! Core data models for the Attendance Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod calculation_result;
mod holiday;
mod time_breakdown;
mod time_interval;

pub use attendance::AttendanceRecord;
pub(crate) use attendance::lenient_minutes;
pub use calculation_result::{
    AuditStep, AuditTrace, AuditWarning, BreakdownResult, PeriodSummary,
};
pub use holiday::{DayType, HolidaySource, HolidayTable, YearSource};
pub use time_breakdown::{BreakdownDisplay, TimeBreakdown};
pub use time_interval::{TimeInterval, parse_timestamp};

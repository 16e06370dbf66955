//! Calculation logic for the Attendance Engine.
//!
//! This module contains the time accounting functions: worked time, the
//! overtime split into legal-band and excess tiers, night work, late and
//! early minutes, timesheet formatting, and period totals.

mod accountant;
mod format;
mod late_early;
mod night_shift;
mod overtime;
mod period_summary;
mod worked_time;

pub use accountant::{DEFAULT_UTC_OFFSET_MINUTES, TimeAccountant, compute_time_breakdown};
pub use format::{UNKNOWN_DISPLAY, format_clock_time, format_minutes, format_worked};
pub use late_early::{clamp_minutes, late_early_total, minutes_from_json};
pub use night_shift::{DEFAULT_NIGHT_END_HOUR, DEFAULT_NIGHT_START_HOUR, night_minutes};
pub use overtime::{
    DEFAULT_LEGAL_OVERTIME_BAND_MINUTES, DEFAULT_STANDARD_DAY_MINUTES, OvertimeSplit,
    excess_overtime, split_overtime, standard_overtime,
};
pub use period_summary::{month_bounds, summarize_month, summarize_period};
pub use worked_time::{DEFAULT_MAX_SHIFT_MINUTES, shift_minutes, worked_minutes};

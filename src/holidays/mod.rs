//! Japanese national holiday calendar.
//!
//! Years with a hand-authored table (built in, or loaded from configuration)
//! use it verbatim. Every other year is generated from the general rules:
//! fixed dates, Monday holidays, approximated equinoxes and a substitute
//! holiday for each holiday falling on a Sunday.

mod rules;
mod service;
mod tables;

pub use rules::{
    SUBSTITUTE_HOLIDAY, autumnal_equinox_day, nth_monday, rule_based_holidays,
    substitute_holidays, vernal_equinox_day,
};
pub use service::{DEFAULT_CACHE_CAPACITY, HolidayService, japanese_day_name, parse_date};
pub use tables::{BUILTIN_YEARS, builtin_table, year_source};

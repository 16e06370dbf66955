//! Attendance Engine for Japanese timesheets
//!
//! This crate breaks clock-in/clock-out intervals down into worked, overtime,
//! night and late/early minutes under the Labour Standards Act, and provides
//! the Japanese national holiday calendar used to highlight dates.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod holidays;
pub mod models;

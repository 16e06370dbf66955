//! Application state for the Attendance Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calculation::TimeAccountant;
use crate::config::ConfigLoader;
use crate::holidays::HolidayService;

/// Shared application state.
///
/// The holiday calendar is shared behind an `Arc` so every request reuses one
/// year cache.
#[derive(Clone)]
pub struct AppState {
    accountant: TimeAccountant,
    holidays: Arc<HolidayService>,
}

impl AppState {
    /// Creates the state from a loaded configuration.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            accountant: TimeAccountant::new(*config.policy()),
            holidays: Arc::new(HolidayService::from_config(config.config())),
        }
    }

    /// Returns the time accountant.
    pub fn accountant(&self) -> &TimeAccountant {
        &self.accountant
    }

    /// Returns the holiday calendar.
    pub fn holidays(&self) -> &HolidayService {
        &self.holidays
    }
}

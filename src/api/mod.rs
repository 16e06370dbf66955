//! HTTP API module for the Attendance Engine.
//!
//! This module provides the REST API endpoints for time breakdowns, monthly
//! totals and holiday lookups.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{BreakdownRequest, HolidaysQuery, SummaryRequest};
pub use response::{
    ApiError, ApiErrorResponse, HealthResponse, HolidayCheckResponse, HolidayListResponse,
};
pub use state::AppState;

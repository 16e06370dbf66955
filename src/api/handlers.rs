//! HTTP request handlers for the Attendance Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::summarize_month;
use crate::holidays::parse_date;
use crate::models::AttendanceRecord;

use super::request::{BreakdownRequest, HolidaysQuery, SummaryRequest};
use super::response::{
    ApiError, ApiErrorResponse, HealthResponse, HolidayCheckResponse, HolidayListResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/breakdown", post(breakdown_handler))
        .route("/summary", post(summary_handler))
        .route("/holidays", get(holidays_handler))
        .route("/holidays/:date", get(holiday_check_handler))
        .with_state(state)
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn json_rejection_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::bad_request(error)
}

/// Handler for GET /health.
async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Handler for POST /breakdown.
///
/// Returns the time breakdown of one attendance interval with its audit trace.
async fn breakdown_handler(
    State(state): State<AppState>,
    payload: Result<Json<BreakdownRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing breakdown request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_error(correlation_id, rejection).into_response(),
    };

    let result = state.accountant().breakdown_with_audit(
        request.clock_in.as_deref(),
        request.clock_out.as_deref(),
        request.late,
        request.early,
    );

    info!(
        correlation_id = %correlation_id,
        worked_minutes = ?result.breakdown.worked_minutes,
        night_minutes = result.breakdown.night_minutes,
        warnings = result.audit_trace.warnings.len(),
        duration_us = result.audit_trace.duration_us,
        "Breakdown completed"
    );

    json_response(StatusCode::OK, result)
}

/// Handler for POST /summary.
///
/// Totals one month of attendance rows.
async fn summary_handler(
    State(state): State<AppState>,
    payload: Result<Json<SummaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing summary request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_error(correlation_id, rejection).into_response(),
    };

    let records: Vec<AttendanceRecord> = match request.employee_id {
        Some(employee_id) => request
            .records
            .into_iter()
            .filter(|r| r.employee_id == employee_id)
            .collect(),
        None => request.records,
    };

    let start_time = Instant::now();
    match summarize_month(
        state.accountant(),
        request.year,
        request.month,
        &records,
        Some(state.holidays()),
    ) {
        Ok(summary) => {
            info!(
                correlation_id = %correlation_id,
                records = records.len(),
                work_days = summary.work_days,
                worked_hours = %summary.worked_hours,
                duration_us = start_time.elapsed().as_micros(),
                "Summary completed"
            );
            json_response(StatusCode::OK, summary)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Summary failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /holidays?year=&month=.
async fn holidays_handler(
    State(state): State<AppState>,
    query: Result<Query<HolidaysQuery>, QueryRejection>,
) -> Response {
    let query = match query {
        Ok(Query(q)) => q,
        Err(rejection) => {
            warn!(error = %rejection, "Invalid holidays query");
            return ApiErrorResponse::bad_request(ApiError::validation_error(rejection.body_text()))
                .into_response();
        }
    };

    // The month is checked before the year table is built or cached.
    let calendar = state.holidays();
    let holidays = match query.month {
        Some(month) => match calendar.holidays_for_month(query.year, month) {
            Ok(entries) => entries
                .into_iter()
                .map(|(date, name)| (date.format("%Y-%m-%d").to_string(), name))
                .collect(),
            Err(err) => {
                warn!(year = query.year, month, "Invalid month in holidays query");
                return ApiErrorResponse::from(err).into_response();
            }
        },
        None => calendar.holidays_for_year(query.year).to_iso_map(),
    };
    let table = calendar.holidays_for_year(query.year);

    json_response(
        StatusCode::OK,
        HolidayListResponse {
            ok: true,
            year: query.year,
            month: query.month,
            source: table.source,
            count: holidays.len(),
            holidays,
        },
    )
}

/// Handler for GET /holidays/{date}.
async fn holiday_check_handler(State(state): State<AppState>, Path(raw): Path<String>) -> Response {
    let date = match parse_date(&raw) {
        Ok(date) => date,
        Err(err) => {
            warn!(date = %raw, "Invalid date in holiday check");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let calendar = state.holidays();
    json_response(
        StatusCode::OK,
        HolidayCheckResponse {
            ok: true,
            date: date.format("%Y-%m-%d").to_string(),
            is_holiday: calendar.is_holiday(date),
            holiday_name: calendar.holiday_name(date),
            is_weekend: calendar.is_weekend(date),
            is_working_day: calendar.is_working_day(date),
            day_type: calendar.day_type(date),
            day_name: calendar.japanese_day_name(date).to_string(),
        },
    )
}

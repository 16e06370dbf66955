//! Response types for the Attendance Engine API.
//!
//! This module defines the success bodies for the holiday endpoints, the
//! error response structures, and the mapping from [`EngineError`].

use std::collections::BTreeMap;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{DayType, HolidaySource};

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the process is serving.
    pub status: String,
    /// Engine version.
    pub version: String,
}

/// Body of `GET /holidays`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayListResponse {
    /// Always `true`.
    pub ok: bool,
    /// Year listed.
    pub year: i32,
    /// Month listed, when the listing was restricted to one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
    /// Whether the year came from a table or from the rules.
    pub source: HolidaySource,
    /// Number of holidays listed.
    pub count: usize,
    /// Holiday names keyed by `YYYY-MM-DD`.
    pub holidays: BTreeMap<String, String>,
}

/// Body of `GET /holidays/{date}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayCheckResponse {
    /// Always `true`.
    pub ok: bool,
    /// The date checked, `YYYY-MM-DD`.
    pub date: String,
    /// National or substitute holiday.
    pub is_holiday: bool,
    /// The holiday name, if any.
    pub holiday_name: Option<String>,
    /// Saturday or Sunday.
    pub is_weekend: bool,
    /// Neither weekend nor holiday.
    pub is_working_day: bool,
    /// Highlight classification.
    pub day_type: DayType,
    /// Japanese weekday character.
    pub day_name: String,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A `400 Bad Request` carrying `error`.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidPolicy { field, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    format!("Invalid policy field '{}'", field),
                    message,
                ),
            },
            EngineError::InvalidHolidayTable { year, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    format!("Invalid holiday table for {}", year),
                    message,
                ),
            },
            EngineError::InvalidDate { value } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "INVALID_DATE",
                    format!("Invalid date '{}'", value),
                    "Dates must be formatted as YYYY-MM-DD",
                ),
            ),
            EngineError::InvalidMonth { month } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "INVALID_MONTH",
                    format!("Invalid month {}", month),
                    "Months are numbered 1 to 12",
                ),
            ),
        }
    }
}

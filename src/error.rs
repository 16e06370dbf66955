//! Error types for the Attendance Engine.
//!
//! The time accountant and the holiday calendar never fail: bad input degrades
//! to an "unknown" or zero result. Errors only arise while loading
//! configuration and while decoding HTTP requests, and are modelled here with
//! the `thiserror` crate.

use thiserror::Error;

/// The main error type for the Attendance Engine.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/policy.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/policy.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A labour policy value was out of range.
    #[error("Invalid policy field '{field}': {message}")]
    InvalidPolicy {
        /// The offending policy field.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// A configured holiday table was inconsistent.
    #[error("Invalid holiday table for {year}: {message}")]
    InvalidHolidayTable {
        /// The year the table was declared for.
        year: i32,
        /// A description of the inconsistency.
        message: String,
    },

    /// A date string could not be parsed as `YYYY-MM-DD`.
    #[error("Invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate {
        /// The rejected input.
        value: String,
    },

    /// A month number was outside 1..=12.
    #[error("Invalid month {month}: expected 1-12")]
    InvalidMonth {
        /// The rejected month.
        month: u32,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/policy.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/policy.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_policy_displays_field_and_message() {
        let error = EngineError::InvalidPolicy {
            field: "night_start_hour".to_string(),
            message: "must be below 24".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid policy field 'night_start_hour': must be below 24"
        );
    }

    #[test]
    fn test_invalid_holiday_table_displays_year() {
        let error = EngineError::InvalidHolidayTable {
            year: 2027,
            message: "2028-01-01 lies outside the table year".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid holiday table for 2027: 2028-01-01 lies outside the table year"
        );
    }

    #[test]
    fn test_invalid_date_and_month_display() {
        let date = EngineError::InvalidDate {
            value: "2025-13-01".to_string(),
        };
        assert_eq!(
            date.to_string(),
            "Invalid date '2025-13-01': expected YYYY-MM-DD"
        );

        let month = EngineError::InvalidMonth { month: 0 };
        assert_eq!(month.to_string(), "Invalid month 0: expected 1-12");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_config_not_found() -> EngineResult<()> {
            Err(EngineError::ConfigNotFound {
                path: "/test".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_config_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}

//! Late arrival and early departure minutes.
//!
//! These counts are decided by upstream business rules, not derived from the
//! clock timestamps. They arrive as loosely typed values and are clamped into
//! non-negative whole minutes before being summed.

use serde_json::Value;

/// Clamps an optional signed minute count into a non-negative one.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::clamp_minutes;
///
/// assert_eq!(clamp_minutes(Some(12)), 12);
/// assert_eq!(clamp_minutes(Some(-3)), 0);
/// assert_eq!(clamp_minutes(None), 0);
/// ```
pub fn clamp_minutes(value: Option<i64>) -> u32 {
    match value {
        Some(minutes) if minutes > 0 => u32::try_from(minutes).unwrap_or(u32::MAX),
        _ => 0,
    }
}

/// Reads a minute count from an arbitrary JSON value.
///
/// Numbers and numeric strings are accepted and truncated to whole minutes.
/// Negative, non-finite and non-numeric values all read as zero.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::minutes_from_json;
/// use serde_json::json;
///
/// assert_eq!(minutes_from_json(&json!(15)), 15);
/// assert_eq!(minutes_from_json(&json!("20")), 20);
/// assert_eq!(minutes_from_json(&json!(7.9)), 7);
/// assert_eq!(minutes_from_json(&json!(-1)), 0);
/// assert_eq!(minutes_from_json(&json!("n/a")), 0);
/// assert_eq!(minutes_from_json(&json!(null)), 0);
/// ```
pub fn minutes_from_json(value: &Value) -> u32 {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                clamp_minutes(Some(i))
            } else if let Some(u) = n.as_u64() {
                u32::try_from(u).unwrap_or(u32::MAX)
            } else {
                n.as_f64().map_or(0, minutes_from_float)
            }
        }
        Value::String(s) => s.trim().parse::<f64>().map_or(0, minutes_from_float),
        _ => 0,
    }
}

fn minutes_from_float(value: f64) -> u32 {
    if value.is_finite() && value > 0.0 {
        // float-to-int `as` saturates at u32::MAX
        value.trunc() as u32
    } else {
        0
    }
}

/// Sums late and early minutes for the combined timesheet column.
pub fn late_early_total(late_minutes: u32, early_minutes: u32) -> u32 {
    late_minutes.saturating_add(early_minutes)
}

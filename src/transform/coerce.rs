//! Field coercion helpers
//!
//! Convert loosely-typed JSON values into the fixed column types. Missing or
//! `null` values become `None`; unusable values are reported per record.

use crate::error::TransformError;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

/// Name of a JSON value's type, for error messages
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn invalid(index: usize, field: &'static str, message: String) -> TransformError {
    TransformError::InvalidField {
        index,
        field,
        message,
    }
}

/// Integer column: accepts integers, integral floats, and integer strings
pub(crate) fn to_i64(
    index: usize,
    field: &'static str,
    value: Option<&Value>,
) -> Result<Option<i64>, TransformError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                return Ok(Some(i));
            }
            match n.as_f64() {
                Some(f) if f.fract() == 0.0 && f.abs() < 9.0e15 => Ok(Some(f as i64)),
                _ => Err(invalid(index, field, format!("{n} is not an integer"))),
            }
        }
        Some(Value::String(s)) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| invalid(index, field, format!("'{s}' is not an integer"))),
        Some(other) => Err(invalid(
            index,
            field,
            format!("expected integer, found {}", json_type_name(other)),
        )),
    }
}

/// Text column: strings verbatim, scalars stringified
pub(crate) fn to_string(
    index: usize,
    field: &'static str,
    value: Option<&Value>,
) -> Result<Option<String>, TransformError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(v @ (Value::Number(_) | Value::Bool(_))) => Ok(Some(v.to_string())),
        Some(other) => Err(invalid(
            index,
            field,
            format!("expected string, found {}", json_type_name(other)),
        )),
    }
}

/// Boolean column: booleans, 0/1, and "true"/"false"/"1"/"0" strings
pub(crate) fn to_bool(
    index: usize,
    field: &'static str,
    value: Option<&Value>,
) -> Result<Option<bool>, TransformError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(Value::Number(n)) => match n.as_i64() {
            Some(0) => Ok(Some(false)),
            Some(1) => Ok(Some(true)),
            _ => Err(invalid(index, field, format!("{n} is not a boolean"))),
        },
        Some(Value::String(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => Ok(Some(true)),
            "false" | "0" => Ok(Some(false)),
            _ => Err(invalid(index, field, format!("'{s}' is not a boolean"))),
        },
        Some(other) => Err(invalid(
            index,
            field,
            format!("expected boolean, found {}", json_type_name(other)),
        )),
    }
}

/// Parse a date-time string
///
/// Offsets are normalized to UTC; values without one are kept as-is.
pub fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }

    let datetime_formats = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ];
    for fmt in datetime_formats {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(ndt);
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(nd) = NaiveDate::parse_from_str(s, fmt) {
            return nd.and_hms_opt(0, 0, 0);
        }
    }

    None
}

/// Date-time column: never fails, unparseable input becomes `None`
pub(crate) fn to_datetime(value: Option<&Value>) -> Option<NaiveDateTime> {
    match value {
        Some(Value::String(s)) => parse_datetime(s),
        _ => None,
    }
}

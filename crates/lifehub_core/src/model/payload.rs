//! Raw payload field extraction and coercion.
//!
//! # Responsibility
//! - Turn untrusted JSON payload fields into typed values.
//! - Report every rejection as a structured `ValidationError`.
//!
//! # Invariants
//! - Helpers are pure: no I/O, no logging of payload contents.
//! - Numeric fields accept JSON numbers or numeric strings; nothing else.
//! - Enum values are matched exactly, case-sensitive.

use serde_json::{Map, Value};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Structured rejection for a creation/update payload.
///
/// The resource layer collapses all variants into one generic client
/// message; the variant detail exists for logs and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Payload root was not a JSON object.
    NotAnObject,
    /// Required field absent or null.
    MissingField(&'static str),
    /// Required string field present but empty.
    EmptyField(&'static str),
    /// Field must be a string.
    NotText(&'static str),
    /// Field must be a boolean.
    NotABoolean(&'static str),
    /// Field could not be coerced to a finite number.
    NotNumeric(&'static str),
    /// Numeric field must be a whole number.
    NotAWholeNumber(&'static str),
    /// Numeric field violated its stated bounds.
    OutOfRange(&'static str),
    /// Enum field did not match any allowed value.
    UnknownVariant {
        field: &'static str,
        value: String,
    },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAnObject => write!(f, "payload must be a JSON object"),
            Self::MissingField(field) => write!(f, "field `{field}` is required"),
            Self::EmptyField(field) => write!(f, "field `{field}` must not be empty"),
            Self::NotText(field) => write!(f, "field `{field}` must be a string"),
            Self::NotABoolean(field) => write!(f, "field `{field}` must be a boolean"),
            Self::NotNumeric(field) => write!(f, "field `{field}` must be numeric"),
            Self::NotAWholeNumber(field) => {
                write!(f, "field `{field}` must be a whole number")
            }
            Self::OutOfRange(field) => write!(f, "field `{field}` is out of range"),
            Self::UnknownVariant { field, value } => {
                write!(f, "field `{field}` has unknown value `{value}`")
            }
        }
    }
}

impl Error for ValidationError {}

/// Views the payload root as an object map.
pub fn object(raw: &Value) -> Result<&Map<String, Value>, ValidationError> {
    raw.as_object().ok_or(ValidationError::NotAnObject)
}

/// Extracts a required, non-empty string field.
pub fn required_text(
    map: &Map<String, Value>,
    field: &'static str,
) -> Result<String, ValidationError> {
    match map.get(field) {
        None | Some(Value::Null) => Err(ValidationError::MissingField(field)),
        Some(Value::String(text)) if text.is_empty() => Err(ValidationError::EmptyField(field)),
        Some(Value::String(text)) => Ok(text.clone()),
        Some(_) => Err(ValidationError::NotText(field)),
    }
}

/// Extracts an optional string field. Absent or null means `None`.
pub fn optional_text(
    map: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<String>, ValidationError> {
    match map.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.clone())),
        Some(_) => Err(ValidationError::NotText(field)),
    }
}

/// Extracts an optional boolean field with a default for absence.
pub fn optional_bool(
    map: &Map<String, Value>,
    field: &'static str,
    default: bool,
) -> Result<bool, ValidationError> {
    match map.get(field) {
        None | Some(Value::Null) => Ok(default),
        Some(Value::Bool(flag)) => Ok(*flag),
        Some(_) => Err(ValidationError::NotABoolean(field)),
    }
}

/// Coerces an optional numeric field from a JSON number or numeric string.
///
/// Absent and null are `None`. A blank string is not numeric-looking and
/// fails, unlike JS `Number("")`.
pub fn coerce_number(
    map: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<f64>, ValidationError> {
    match map.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => coerce_value(value, field).map(Some),
    }
}

/// Coerces a required numeric field.
pub fn required_number(
    map: &Map<String, Value>,
    field: &'static str,
) -> Result<f64, ValidationError> {
    match map.get(field) {
        None | Some(Value::Null) => Err(ValidationError::MissingField(field)),
        Some(value) => coerce_value(value, field),
    }
}

/// Coerces an optional whole-number field.
pub fn coerce_integer(
    map: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<i64>, ValidationError> {
    match coerce_number(map, field)? {
        None => Ok(None),
        Some(number) => as_whole(number, field).map(Some),
    }
}

/// Coerces a required whole-number field.
pub fn required_integer(
    map: &Map<String, Value>,
    field: &'static str,
) -> Result<i64, ValidationError> {
    as_whole(required_number(map, field)?, field)
}

fn coerce_value(value: &Value, field: &'static str) -> Result<f64, ValidationError> {
    let number = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    match number {
        Some(number) if number.is_finite() => Ok(number),
        _ => Err(ValidationError::NotNumeric(field)),
    }
}

fn as_whole(number: f64, field: &'static str) -> Result<i64, ValidationError> {
    if number.fract() != 0.0 || number < i64::MIN as f64 || number > i64::MAX as f64 {
        return Err(ValidationError::NotAWholeNumber(field));
    }
    Ok(number as i64)
}

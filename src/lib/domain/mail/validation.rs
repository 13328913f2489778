//! Field validators shared by the mail model.
//!
//! Each validator receives the field name and the raw value, where `None`
//! means the field was not supplied at all. A JSON `null` is a supplied value
//! and is checked like any other.

use serde_json::{Map, Value};
use tracing::trace;

use super::errors::{Expected, ValidationError};

/// Fail unless the field was supplied.
pub(crate) fn required<'a>(
    field: &'static str,
    value: Option<&'a Value>,
) -> Result<&'a Value, ValidationError> {
    value.ok_or_else(|| ValidationError::new(field, Expected::Present))
}

/// Accept an absent field, otherwise require a string.
pub(crate) fn optional_string<'a>(
    field: &'static str,
    value: Option<&'a Value>,
) -> Result<Option<&'a str>, ValidationError> {
    trace!(field, "checking optional string");

    match value {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(_) => Err(ValidationError::new(field, Expected::String)),
    }
}

/// Whether a supplied value counts as not set: `null`, `false`, zero or `""`.
pub(crate) fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Require an object.
pub(crate) fn object<'a>(
    field: &'static str,
    value: &'a Value,
) -> Result<&'a Map<String, Value>, ValidationError> {
    value
        .as_object()
        .ok_or_else(|| ValidationError::new(field, Expected::Object))
}

/// Require an array of objects.
pub(crate) fn array_of_objects<'a>(
    field: &'static str,
    value: &'a Value,
) -> Result<&'a Vec<Value>, ValidationError> {
    let items = value
        .as_array()
        .ok_or_else(|| ValidationError::new(field, Expected::Array))?;

    if !items.iter().all(Value::is_object) {
        return Err(ValidationError::new(field, Expected::ArrayOfObjects));
    }

    Ok(items)
}

/// Require an object whose values are all strings.
pub(crate) fn string_map(
    field: &'static str,
    value: &Value,
) -> Result<Map<String, Value>, ValidationError> {
    let map = value
        .as_object()
        .ok_or_else(|| ValidationError::new(field, Expected::StringMap))?;

    if !map.values().all(Value::is_string) {
        return Err(ValidationError::new(field, Expected::StringMap));
    }

    Ok(map.clone())
}

/// Require a non-negative integer.
pub(crate) fn unsigned(field: &'static str, value: &Value) -> Result<u64, ValidationError> {
    value
        .as_u64()
        .ok_or_else(|| ValidationError::new(field, Expected::UnsignedInteger))
}

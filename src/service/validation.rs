//! Request body validation into typed payloads.

use crate::error::ValidationError;
use serde_json::{Map, Value};

/// Field name reported when the body itself is unusable.
pub const BODY_FIELD: &str = "body";

/// Turns an untyped request body into a validated payload, or reports the first bad field.
/// Implementations never build a partial payload.
pub trait Validate: Sized {
    fn validate(body: Value) -> Result<Self, ValidationError>;
}

/// Parse raw bytes as JSON. Empty and malformed bodies are validation failures.
pub fn parse_body(bytes: &[u8]) -> Result<Value, ValidationError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(ValidationError::new(BODY_FIELD, "request body is required"));
    }
    serde_json::from_slice(bytes)
        .map_err(|e| ValidationError::new(BODY_FIELD, format!("invalid JSON: {}", e)))
}

pub fn require_object(body: Value) -> Result<Map<String, Value>, ValidationError> {
    match body {
        Value::Object(m) => Ok(m),
        other => Err(ValidationError::new(
            BODY_FIELD,
            format!("must be a JSON object, got {}", json_type_name(&other)),
        )),
    }
}

/// Take `field` out of `map`; absent is an error, explicit null is left for the caller to reject.
pub fn require_field(map: &mut Map<String, Value>, field: &str) -> Result<Value, ValidationError> {
    map.remove(field).ok_or_else(|| ValidationError::missing(field))
}

pub fn json_type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

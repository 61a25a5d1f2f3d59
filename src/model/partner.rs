use crate::error::ValidationError;
use crate::service::validation::{json_type_name, require_field, require_object, Validate};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const DATA_FIELD: &str = "data";

/// A persisted partner. `data` is any JSON object; nested values are unconstrained.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Partner {
    pub id: i64,
    pub data: Map<String, Value>,
}

/// Validated create/replace body. Replacing overwrites the whole `data` object.
#[derive(Clone, Debug, PartialEq)]
pub struct PartnerIn {
    pub data: Map<String, Value>,
}

impl Validate for PartnerIn {
    fn validate(body: Value) -> Result<Self, ValidationError> {
        let mut map = require_object(body)?;
        match require_field(&mut map, DATA_FIELD)? {
            Value::Object(data) => Ok(PartnerIn { data }),
            other => Err(ValidationError::new(
                DATA_FIELD,
                format!("must be a JSON object, got {}", json_type_name(&other)),
            )),
        }
    }
}

use crate::error::ValidationError;
use crate::service::validation::{json_type_name, require_field, require_object, Validate};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

const STATUS_FIELD: &str = "status";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
}

impl UserStatus {
    pub const ALL: [UserStatus; 2] = [UserStatus::Active, UserStatus::Inactive];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserStatus {
    type Err = ValidationError;

    /// Case-sensitive: "Active" is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(UserStatus::Active),
            "inactive" => Ok(UserStatus::Inactive),
            _ => Err(ValidationError::new(
                STATUS_FIELD,
                "must be one of 'active', 'inactive'",
            )),
        }
    }
}

/// A persisted user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub status: UserStatus,
}

/// Validated create/replace body. Any `id` in the request is dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserIn {
    pub status: UserStatus,
}

impl Validate for UserIn {
    fn validate(body: Value) -> Result<Self, ValidationError> {
        let mut map = require_object(body)?;
        let status = match require_field(&mut map, STATUS_FIELD)? {
            Value::String(s) => s.parse()?,
            other => {
                return Err(ValidationError::new(
                    STATUS_FIELD,
                    format!("must be a string, got {}", json_type_name(&other)),
                ))
            }
        };
        Ok(UserIn { status })
    }
}

//! Typed errors and HTTP mapping.

use crate::response::{ErrorBody, ErrorDetail};
use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// A request body or path segment that failed schema checks.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {reason}")]
pub struct ValidationError {
    pub field: String,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn missing(field: &str) -> Self {
        Self::new(field, "field required")
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{resource} with id={id} not found")]
    NotFound { resource: &'static str, id: i64 },
    #[error("validation: {0}")]
    Validation(#[from] ValidationError),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("stored payload is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
    #[error(transparent)]
    Body(#[from] BytesRejection),
}

impl AppError {
    pub fn not_found(resource: &'static str, id: i64) -> Self {
        AppError::NotFound { resource, id }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            // Oversized or unreadable body: keep axum's status (413, 400).
            AppError::Body(rejection) => (rejection.status(), "bad_body"),
            AppError::NotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
            AppError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "validation_error"),
            AppError::Db(e) => {
                tracing::error!(error = %e, "storage failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "database_error")
            }
            AppError::Decode(e) => {
                tracing::error!(error = %e, "stored payload failed to decode");
                (StatusCode::INTERNAL_SERVER_ERROR, "decode_error")
            }
        };
        let details = match &self {
            AppError::Validation(v) => Some(serde_json::json!({
                "field": v.field,
                "reason": v.reason,
            })),
            _ => None,
        };
        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
                details,
            },
        };
        (status, Json(body)).into_response()
    }
}

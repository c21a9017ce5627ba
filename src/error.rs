//! Error types for the record service

use std::fmt;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;
use utoipa::ToSchema;
use validator::{ValidationError, ValidationErrors};

/// Plain-text body of every 404 response
pub const NOT_FOUND_MESSAGE: &str = "Entry id not found.";

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// The requested id matches no live record. The payload is for logs only,
    /// clients always receive [`NOT_FOUND_MESSAGE`].
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(ValidationFailure),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Structured body of a 400 response
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ValidationFailure {
    /// All detail messages joined together
    pub message: String,
    pub details: Vec<ValidationDetail>,
}

/// One violated constraint
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ValidationDetail {
    pub message: String,
    /// Path to the offending field, empty when the whole body was rejected
    pub path: Vec<String>,
    /// Constraint kind: `any.required`, `string.base`, `string.empty`,
    /// `string.min` or `body.invalid`
    #[serde(rename = "type")]
    pub kind: String,
    #[schema(value_type = Object)]
    pub context: Map<String, Value>,
}

impl ValidationDetail {
    fn from_field_error(field: &str, error: &ValidationError) -> Self {
        let kind = match error.code.as_ref() {
            "required" => "any.required",
            other => other,
        };

        let message = error
            .message
            .as_ref()
            .map(|m| m.to_string())
            .unwrap_or_else(|| format!("\"{}\" is invalid", field));

        let mut context = Map::new();
        context.insert("key".to_string(), Value::String(field.to_string()));
        context.insert("label".to_string(), Value::String(field.to_string()));
        for (param, value) in &error.params {
            context.insert(param.to_string(), value.clone());
        }

        Self {
            message,
            path: vec![field.to_string()],
            kind: kind.to_string(),
            context,
        }
    }
}

impl ValidationFailure {
    fn from_details(details: Vec<ValidationDetail>) -> Self {
        let message = details
            .iter()
            .map(|d| d.message.as_str())
            .collect::<Vec<_>>()
            .join(". ");
        Self { message, details }
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<ValidationErrors> for ValidationFailure {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        let details = fields
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter()
                    .map(move |e| ValidationDetail::from_field_error(&field, e))
            })
            .collect();

        Self::from_details(details)
    }
}

impl From<JsonRejection> for ValidationFailure {
    fn from(rejection: JsonRejection) -> Self {
        Self::from_details(vec![ValidationDetail {
            message: rejection.body_text(),
            path: Vec::new(),
            kind: "body.invalid".to_string(),
            context: Map::new(),
        }])
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Validation(errors.into())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.into())
    }
}

/// Error response body for unexpected failures
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(what) => {
                tracing::debug!("Lookup failed: {}", what);
                (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE).into_response()
            }
            AppError::Validation(failure) => {
                tracing::debug!("Validation failed: {}", failure);
                (StatusCode::BAD_REQUEST, Json(failure)).into_response()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                let body = Json(ErrorResponse {
                    error: "Internal".to_string(),
                    message: "Internal server error".to_string(),
                });
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

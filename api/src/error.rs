//! Unified error types for the Storefront API
//!
//! - `ValidationFailure`: every rule an order payload violated (domain layer)
//! - `AppError`: HTTP-facing errors, converted into JSON responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::domain::validation::{FieldError, ValidationFailure};

/// Application layer errors - used by HTTP handlers and middleware
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationFailure),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Payload too large")]
    PayloadTooLarge,

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Error response body for JSON responses
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<Vec<FieldError>>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details, errors) = match self {
            AppError::Validation(failure) => (
                StatusCode::BAD_REQUEST,
                "Validation error",
                None,
                Some(failure.errors),
            ),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "Bad request", Some(msg), None),
            AppError::PayloadTooLarge => {
                (StatusCode::PAYLOAD_TOO_LARGE, "Payload too large", None, None)
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "Not found", Some(msg), None),
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
            errors,
        });

        (status, body).into_response()
    }
}

//! Order-creation validation middleware
//!
//! Buffers the request body, runs the order rules over it and either rejects
//! the request with every violation or forwards it unchanged with the
//! validated `NewOrder` attached to its extensions.

use axum::{
    body::{to_bytes, Body},
    extract::State,
    http::{header, HeaderMap, Request},
    middleware::Next,
    response::Response,
};
use http_body_util::LengthLimitError;

use crate::domain::validation::{validate_payload, Locale};
use crate::error::AppError;
use crate::AppState;

/// Resolve the message locale from the `Accept-Language` header
pub fn request_locale(headers: &HeaderMap) -> Locale {
    headers
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok())
        .map(Locale::from_accept_language)
        .unwrap_or_default()
}

fn declared_length(headers: &HeaderMap) -> Option<usize> {
    headers
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
}

/// Map a body-read failure: only the length limit is a 413
fn body_read_error(err: axum::Error) -> AppError {
    if err.into_inner().is::<LengthLimitError>() {
        AppError::PayloadTooLarge
    } else {
        AppError::BadRequest("Failed to read request body".to_string())
    }
}

/// Validation middleware for `POST /orders`
///
/// Malformed JSON is a structural error (400 with `details`); rule violations
/// come back as a 400 listing every offending field.
pub async fn validate_order(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let limit = state.config.max_body_bytes;
    let locale = request_locale(request.headers());

    if declared_length(request.headers()).is_some_and(|len| len > limit) {
        return Err(AppError::PayloadTooLarge);
    }

    let (mut parts, body) = request.into_parts();
    let bytes = to_bytes(body, limit).await.map_err(body_read_error)?;

    let payload: serde_json::Value = serde_json::from_slice(&bytes)
        .map_err(|e| AppError::BadRequest(format!("Invalid JSON body: {}", e)))?;

    let order = validate_payload(&payload, locale).map_err(|failure| {
        tracing::debug!(
            errors = failure.errors.len(),
            locale = %locale,
            "Order payload rejected"
        );
        failure
    })?;

    parts.extensions.insert(order);

    let request = Request::from_parts(parts, Body::from(bytes));
    Ok(next.run(request).await)
}

//! Order handlers
//!
//! Endpoints for order creation. Payload validation happens in
//! `middleware::validate_order` before these handlers run.

use axum::{extract::State, http::StatusCode, http::Uri, Extension, Json};

use crate::domain::entities::{NewOrder, OrderReceipt};
use crate::error::AppError;
use crate::AppState;

/// POST /orders
///
/// Accept an order that already passed validation.
pub async fn create_order(
    State(state): State<AppState>,
    Extension(order): Extension<NewOrder>,
) -> (StatusCode, Json<OrderReceipt>) {
    let receipt = state.order_service.place(order);
    (StatusCode::CREATED, Json(receipt))
}

/// Fallback for unknown routes
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}

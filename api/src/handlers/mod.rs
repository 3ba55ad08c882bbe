//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod orders;

pub use orders::{create_order, not_found};

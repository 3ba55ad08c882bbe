//! Application layer
//!
//! Contains use cases and service orchestration.

pub mod order_service;

pub use order_service::OrderService;

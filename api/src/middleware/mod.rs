//! Request middleware

pub mod order_validation;

pub use order_validation::validate_order;

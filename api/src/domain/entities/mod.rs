//! Domain entities
//!
//! Pure domain models representing core business concepts.

pub mod order;

pub use order::{NewOrder, OrderId, OrderReceipt};

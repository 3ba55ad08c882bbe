//! Order service
//!
//! Accepts validated orders and acknowledges them with a receipt.

use chrono::Utc;

use crate::domain::entities::{NewOrder, OrderId, OrderReceipt};

/// Service for accepting validated orders
#[derive(Debug, Default)]
pub struct OrderService;

impl OrderService {
    pub fn new() -> Self {
        Self
    }

    /// Accept a validated order and issue its receipt
    pub fn place(&self, order: NewOrder) -> OrderReceipt {
        let id = OrderId::new();
        let total_quantity = order.total_quantity();

        tracing::info!(
            order_id = %id,
            lines = order.lines.len(),
            total_quantity,
            "Order accepted"
        );

        OrderReceipt {
            id,
            shipping_address: order.shipping_address,
            payment_method: order.payment_method,
            items: order.lines,
            total_quantity,
            received_at: Utc::now(),
        }
    }
}

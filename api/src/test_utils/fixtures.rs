//! Test fixtures
//!
//! Factory functions for creating test payloads and orders with sensible defaults.

use serde_json::{json, Value};

use crate::domain::entities::order::OrderLine;
use crate::domain::entities::NewOrder;

/// A well-formed order-creation payload with two items
pub fn valid_payload() -> Value {
    json!({
        "shipping_address": "Calle 1",
        "payment_method": "card",
        "items": [
            {"product_id": 1, "quantity": 2},
            {"product_id": 2, "quantity": 1}
        ]
    })
}

/// A valid payload with the given field replaced
pub fn payload_with(field: &str, value: Value) -> Value {
    let mut payload = valid_payload();
    payload[field] = value;
    payload
}

/// A validated order matching `valid_payload`
pub fn test_order() -> NewOrder {
    NewOrder {
        shipping_address: "Calle 1".to_string(),
        payment_method: "card".to_string(),
        lines: vec![
            OrderLine {
                product_id: 1,
                quantity: 2,
            },
            OrderLine {
                product_id: 2,
                quantity: 1,
            },
        ],
    }
}

//! Order domain entity
//!
//! A `NewOrder` is the validated form of an order-creation payload. It can
//! only be produced by running the order rules over a candidate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::validation::{validate, Locale, OrderCandidate, ValidationFailure};

/// Unique identifier for an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub Uuid);

impl OrderId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for OrderId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for OrderId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One product line of a validated order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: i64,
    pub quantity: i64,
}

/// An order that passed every creation rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewOrder {
    pub shipping_address: String,
    pub payment_method: String,
    pub lines: Vec<OrderLine>,
}

impl NewOrder {
    /// Validate a candidate and convert it into an order.
    ///
    /// Text fields are trimmed. All violations are returned together.
    pub fn try_from_candidate(
        candidate: OrderCandidate,
        locale: Locale,
    ) -> Result<Self, ValidationFailure> {
        validate(&candidate, locale)?;

        // The rules guarantee every field below is present and positive.
        let lines = candidate
            .items
            .unwrap_or_default()
            .into_iter()
            .map(|item| OrderLine {
                product_id: item.product_id.unwrap_or_default(),
                quantity: item.quantity.unwrap_or_default(),
            })
            .collect();

        Ok(Self {
            shipping_address: candidate
                .shipping_address
                .unwrap_or_default()
                .trim()
                .to_string(),
            payment_method: candidate
                .payment_method
                .unwrap_or_default()
                .trim()
                .to_string(),
            lines,
        })
    }

    /// Total number of units across all lines, saturating at `i64::MAX`
    pub fn total_quantity(&self) -> i64 {
        self.lines
            .iter()
            .fold(0i64, |total, line| total.saturating_add(line.quantity))
    }
}

/// Acknowledgement returned once an order has been accepted
#[derive(Debug, Clone, Serialize)]
pub struct OrderReceipt {
    pub id: OrderId,
    pub shipping_address: String,
    pub payment_method: String,
    pub items: Vec<OrderLine>,
    pub total_quantity: i64,
    pub received_at: DateTime<Utc>,
}

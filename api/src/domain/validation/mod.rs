//! Order-creation validation
//!
//! Pure, synchronous checks applied to an incoming order payload before it
//! reaches the order service. Nothing here performs I/O or logs.
//! - `candidate`: lenient parsing of the wire payload into typed optionals
//! - `rules`: the independent rule set and the `validate` entry point
//! - `locale`: message catalog and `Accept-Language` negotiation

pub mod candidate;
pub mod locale;
pub mod rules;

pub use candidate::OrderCandidate;
pub use locale::Locale;
pub use rules::{validate, FieldError, ValidationFailure};

use serde_json::Value;

use crate::domain::entities::NewOrder;

/// Parse, validate, and convert a raw payload in one step
pub fn validate_payload(payload: &Value, locale: Locale) -> Result<NewOrder, ValidationFailure> {
    NewOrder::try_from_candidate(OrderCandidate::from_value(payload), locale)
}

//! Order-creation rules
//!
//! Each rule is a predicate over the candidate paired with a message. Rules
//! are independent: all of them run, and every violation is collected.

use serde::Serialize;
use thiserror::Error;

use super::candidate::{ItemCandidate, OrderCandidate};
use super::locale::{Locale, Message};

/// A single violated rule, naming the offending field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// All rules an order payload violated
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} validation error(s)", .errors.len())]
pub struct ValidationFailure {
    pub errors: Vec<FieldError>,
}

impl ValidationFailure {
    /// True when some error was reported against `field`
    #[cfg(test)]
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

/// Where a rule looks in the candidate
enum Scope {
    /// A top-level field
    Order(fn(&OrderCandidate) -> bool),
    /// A field on every element of `items`
    Item(fn(&ItemCandidate) -> bool),
}

struct Rule {
    field: &'static str,
    message: Message,
    scope: Scope,
}

const RULES: &[Rule] = &[
    Rule {
        field: "shipping_address",
        message: Message::ShippingAddressRequired,
        scope: Scope::Order(has_shipping_address),
    },
    Rule {
        field: "payment_method",
        message: Message::PaymentMethodRequired,
        scope: Scope::Order(has_payment_method),
    },
    Rule {
        field: "items",
        message: Message::EmptyCart,
        scope: Scope::Order(has_items),
    },
    Rule {
        field: "product_id",
        message: Message::InvalidProductId,
        scope: Scope::Item(has_valid_product_id),
    },
    Rule {
        field: "quantity",
        message: Message::InvalidQuantity,
        scope: Scope::Item(has_valid_quantity),
    },
];

fn has_shipping_address(candidate: &OrderCandidate) -> bool {
    is_present(candidate.shipping_address.as_deref())
}

fn has_payment_method(candidate: &OrderCandidate) -> bool {
    is_present(candidate.payment_method.as_deref())
}

fn has_items(candidate: &OrderCandidate) -> bool {
    candidate.items.as_ref().is_some_and(|items| !items.is_empty())
}

fn has_valid_product_id(item: &ItemCandidate) -> bool {
    is_positive(item.product_id)
}

fn has_valid_quantity(item: &ItemCandidate) -> bool {
    is_positive(item.quantity)
}

fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|s| !s.trim().is_empty())
}

fn is_positive(value: Option<i64>) -> bool {
    value.is_some_and(|n| n > 0)
}

/// Validate a candidate against every order rule.
///
/// Errors come back in rule order, with per-item errors grouped by index.
pub fn validate(candidate: &OrderCandidate, locale: Locale) -> Result<(), ValidationFailure> {
    let mut errors = Vec::new();

    for rule in RULES {
        if let Scope::Order(holds) = rule.scope {
            if !holds(candidate) {
                errors.push(FieldError {
                    field: rule.field.to_string(),
                    message: rule.message.text(locale).to_string(),
                });
            }
        }
    }

    let items = candidate.items.as_deref().unwrap_or_default();
    for (index, item) in items.iter().enumerate() {
        for rule in RULES {
            if let Scope::Item(holds) = rule.scope {
                if !holds(item) {
                    errors.push(FieldError {
                        field: format!("items[{}].{}", index, rule.field),
                        message: rule.message.text(locale).to_string(),
                    });
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationFailure { errors })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn check(payload: serde_json::Value) -> Result<(), ValidationFailure> {
        validate(&OrderCandidate::from_value(&payload), Locale::Es)
    }

    fn fields(failure: &ValidationFailure) -> Vec<&str> {
        failure.errors.iter().map(|e| e.field.as_str()).collect()
    }

    #[test]
    fn valid_order_passes() {
        let result = check(json!({
            "shipping_address": "Calle 1",
            "payment_method": "card",
            "items": [
                {"product_id": 1, "quantity": 2},
                {"product_id": 5, "quantity": 1}
            ]
        }));
        assert!(result.is_ok());
    }

    #[test]
    fn empty_shipping_address_is_the_only_error() {
        let failure = check(json!({
            "shipping_address": "",
            "payment_method": "card",
            "items": [{"product_id": 1, "quantity": 2}]
        }))
        .unwrap_err();

        assert_eq!(
            failure.errors,
            vec![FieldError {
                field: "shipping_address".to_string(),
                message: "La dirección de envío es obligatoria.".to_string(),
            }]
        );
    }

    #[test]
    fn whitespace_only_strings_are_empty() {
        let failure = check(json!({
            "shipping_address": "   ",
            "payment_method": "\t\n",
            "items": [{"product_id": 1, "quantity": 1}]
        }))
        .unwrap_err();

        assert_eq!(fields(&failure), vec!["shipping_address", "payment_method"]);
    }

    #[test]
    fn empty_cart_is_the_only_error() {
        let failure = check(json!({
            "shipping_address": "Calle 1",
            "payment_method": "card",
            "items": []
        }))
        .unwrap_err();

        assert_eq!(failure.errors.len(), 1);
        assert_eq!(failure.errors[0].field, "items");
        assert_eq!(failure.errors[0].message, "El carrito no puede estar vacío.");
    }

    #[test]
    fn item_errors_are_reported_per_element() {
        let failure = check(json!({
            "shipping_address": "Calle 1",
            "payment_method": "card",
            "items": [
                {"product_id": 0, "quantity": 1},
                {"product_id": 2, "quantity": -1}
            ]
        }))
        .unwrap_err();

        assert_eq!(
            fields(&failure),
            vec!["items[0].product_id", "items[1].quantity"]
        );
        assert_eq!(failure.errors[0].message, "El ID del producto no es válido.");
        assert_eq!(
            failure.errors[1].message,
            "La cantidad del producto no es válida."
        );
    }

    #[test]
    fn repeated_item_violations_are_not_deduplicated() {
        let failure = check(json!({
            "shipping_address": "Calle 1",
            "payment_method": "card",
            "items": [
                {"product_id": -3, "quantity": 1},
                {"product_id": 0, "quantity": 1},
                {"product_id": "x", "quantity": 1}
            ]
        }))
        .unwrap_err();

        assert_eq!(
            fields(&failure),
            vec![
                "items[0].product_id",
                "items[1].product_id",
                "items[2].product_id"
            ]
        );
    }

    #[test]
    fn every_rule_is_evaluated() {
        let failure = check(json!({
            "items": [{"product_id": 0}]
        }))
        .unwrap_err();

        assert_eq!(
            fields(&failure),
            vec![
                "shipping_address",
                "payment_method",
                "items[0].product_id",
                "items[0].quantity"
            ]
        );
    }

    #[test]
    fn malformed_payload_reports_without_panicking() {
        let failure = check(json!("just a string")).unwrap_err();
        assert_eq!(
            fields(&failure),
            vec!["shipping_address", "payment_method", "items"]
        );

        let failure = check(json!({"items": {"product_id": 1}})).unwrap_err();
        assert!(failure.has_field("items"));
        assert!(!failure.has_field("items[0].product_id"));
    }

    #[test]
    fn shipping_error_appears_once_regardless_of_other_fields() {
        let payloads = [
            json!({}),
            json!({"shipping_address": null, "items": []}),
            json!({"shipping_address": "", "payment_method": "", "items": [{}]}),
        ];

        for payload in payloads {
            let failure = check(payload).unwrap_err();
            let count = failure
                .errors
                .iter()
                .filter(|e| e.field == "shipping_address")
                .count();
            assert_eq!(count, 1);
        }
    }

    #[test]
    fn validation_is_idempotent() {
        let candidate = OrderCandidate::from_value(&json!({
            "shipping_address": "",
            "items": [{"product_id": 0, "quantity": 0}]
        }));

        let first = validate(&candidate, Locale::Es);
        let second = validate(&candidate, Locale::Es);
        assert_eq!(first, second);
    }

    #[test]
    fn messages_follow_locale() {
        let candidate = OrderCandidate::from_value(&json!({
            "shipping_address": "Main St 1",
            "payment_method": "card",
            "items": []
        }));

        let failure = validate(&candidate, Locale::En).unwrap_err();
        assert_eq!(failure.errors[0].message, "The cart cannot be empty.");
    }
}

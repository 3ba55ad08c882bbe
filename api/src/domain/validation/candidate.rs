//! Lenient order candidate
//!
//! The wire payload is parsed into a typed candidate whose fields are all
//! optional. Parsing never fails: a field that is missing or has the wrong
//! JSON type simply becomes `None`, and the rules report it.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A single cart line as received over the wire
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ItemCandidate {
    #[serde(default, deserialize_with = "lenient_int")]
    pub product_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub quantity: Option<i64>,
}

/// An order-creation payload as received over the wire
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct OrderCandidate {
    #[serde(default, deserialize_with = "lenient_string")]
    pub shipping_address: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub payment_method: Option<String>,
    #[serde(default, deserialize_with = "lenient_items")]
    pub items: Option<Vec<ItemCandidate>>,
}

impl OrderCandidate {
    /// Build a candidate from any JSON value.
    ///
    /// Anything other than a JSON object yields an empty candidate.
    pub fn from_value(value: &Value) -> Self {
        if !value.is_object() {
            return Self::default();
        }
        Self::deserialize(value).unwrap_or_default()
    }
}

impl ItemCandidate {
    fn from_value(value: &Value) -> Self {
        if !value.is_object() {
            return Self::default();
        }
        Self::deserialize(value).unwrap_or_default()
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Accepts JSON integers and base-10 integer strings; floats are rejected.
fn lenient_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    })
}

fn lenient_items<'de, D>(deserializer: D) -> Result<Option<Vec<ItemCandidate>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(elements) => Some(elements.iter().map(ItemCandidate::from_value).collect()),
        _ => None,
    })
}

//! Locales and user-facing validation messages

use serde::{Deserialize, Serialize};

/// Locale used to render validation messages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Es,
    En,
}

impl Locale {
    /// Pick the best supported locale from an `Accept-Language` header value.
    ///
    /// Tags are ranked by their `q` weight (ties keep header order). Tags with
    /// `q=0` or a malformed weight (non-finite or above 1) are ignored. Falls
    /// back to Spanish when nothing matches.
    pub fn from_accept_language(header: &str) -> Self {
        let mut ranked: Vec<(f32, Locale)> = header
            .split(',')
            .filter_map(|entry| {
                let mut parts = entry.split(';');
                let tag = parts.next()?.trim();
                let weight = parts
                    .filter_map(|p| p.trim().strip_prefix("q="))
                    .find_map(|q| q.trim().parse::<f32>().ok())
                    .unwrap_or(1.0);
                if !weight.is_finite() || weight <= 0.0 || weight > 1.0 {
                    return None;
                }
                let primary = tag.split('-').next()?;
                primary.parse::<Locale>().ok().map(|locale| (weight, locale))
            })
            .collect();

        // sort_by is stable, so equal weights keep their header order
        ranked.sort_by(|a, b| b.0.total_cmp(&a.0));
        ranked
            .first()
            .map(|(_, locale)| *locale)
            .unwrap_or_default()
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Locale::Es => write!(f, "es"),
            Locale::En => write!(f, "en"),
        }
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "es" => Ok(Locale::Es),
            "en" => Ok(Locale::En),
            _ => Err(format!("Unsupported locale: {}", s)),
        }
    }
}

/// A validation message, one per order rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Message {
    ShippingAddressRequired,
    PaymentMethodRequired,
    EmptyCart,
    InvalidProductId,
    InvalidQuantity,
}

impl Message {
    /// Render the message in the given locale
    pub fn text(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Message::ShippingAddressRequired, Locale::Es) => {
                "La dirección de envío es obligatoria."
            }
            (Message::ShippingAddressRequired, Locale::En) => "The shipping address is required.",
            (Message::PaymentMethodRequired, Locale::Es) => "El método de pago es obligatorio.",
            (Message::PaymentMethodRequired, Locale::En) => "The payment method is required.",
            (Message::EmptyCart, Locale::Es) => "El carrito no puede estar vacío.",
            (Message::EmptyCart, Locale::En) => "The cart cannot be empty.",
            (Message::InvalidProductId, Locale::Es) => "El ID del producto no es válido.",
            (Message::InvalidProductId, Locale::En) => "The product ID is not valid.",
            (Message::InvalidQuantity, Locale::Es) => "La cantidad del producto no es válida.",
            (Message::InvalidQuantity, Locale::En) => "The product quantity is not valid.",
        }
    }
}

//! Storefront product projection.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Read-only product projection for the storefront grid.
///
/// Only published/active products for the resolved site are returned by the
/// store; this subsystem never writes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Price in minor units (e.g. cents).
    #[serde(default)]
    pub price_amount: i64,
    /// ISO 4217 currency code.
    #[serde(default = "default_currency")]
    pub price_currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,
}

fn default_currency() -> String {
    "USD".to_owned()
}

impl Product {
    /// Format the price for display (`$12.34` for USD, `12.34 EUR` otherwise).
    #[must_use]
    pub fn formatted_price(&self) -> String {
        let whole = self.price_amount / 100;
        let cents = (self.price_amount % 100).abs();
        if self.price_currency.eq_ignore_ascii_case("usd") {
            format!("${whole}.{cents:02}")
        } else {
            format!("{whole}.{cents:02} {}", self.price_currency)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn product(amount: i64, currency: &str) -> Product {
        serde_json::from_value(json!({
            "id": "33333333-3333-3333-3333-333333333333",
            "title": "Course",
            "price_amount": amount,
            "price_currency": currency
        }))
        .unwrap()
    }

    #[test]
    fn test_formatted_price_usd() {
        assert_eq!(product(4999, "USD").formatted_price(), "$49.99");
    }

    #[test]
    fn test_formatted_price_other_currency() {
        assert_eq!(product(1200, "EUR").formatted_price(), "12.00 EUR");
    }

    #[test]
    fn test_formatted_price_sub_dollar() {
        assert_eq!(product(5, "USD").formatted_price(), "$0.05");
    }

    #[test]
    fn test_default_currency() {
        let p: Product = serde_json::from_value(json!({
            "id": "33333333-3333-3333-3333-333333333333",
            "title": "Course"
        }))
        .unwrap();

        assert_eq!(p.price_currency, "USD");
    }
}

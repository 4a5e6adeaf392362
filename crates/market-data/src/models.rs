use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price observation for one symbol at a point in time.
///
/// `change` and `change_percent` describe the move over the trailing 24 hours
/// as reported by the originating source; the engine passes them through to
/// asset records without reinterpreting them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Exchange ticker, uppercase.
    pub symbol: String,

    /// Last traded/indicative price. Non-negative.
    pub price: Decimal,

    /// Absolute 24h change in quote currency.
    pub change: Decimal,

    /// Relative 24h change, in percent.
    pub change_percent: Decimal,

    /// When the observation was made.
    pub timestamp: DateTime<Utc>,
}

impl Quote {
    /// Create a quote with a flat 24h change.
    pub fn flat(symbol: impl Into<String>, price: Decimal, timestamp: DateTime<Utc>) -> Self {
        Self {
            symbol: symbol.into(),
            price,
            change: Decimal::ZERO,
            change_percent: Decimal::ZERO,
            timestamp,
        }
    }

    /// True when the quoted price is usable for valuation.
    pub fn has_valid_price(&self) -> bool {
        !self.price.is_sign_negative()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_flat_quote() {
        let quote = Quote::flat("AAPL", dec!(150.25), Utc::now());
        assert_eq!(quote.symbol, "AAPL");
        assert_eq!(quote.price, dec!(150.25));
        assert_eq!(quote.change, Decimal::ZERO);
        assert!(quote.has_valid_price());
    }

    #[test]
    fn test_negative_price_is_invalid() {
        let mut quote = Quote::flat("AAPL", dec!(10), Utc::now());
        quote.price = dec!(-1);
        assert!(!quote.has_valid_price());
    }

    #[test]
    fn test_quote_serde_round_trip() {
        let quote = Quote {
            symbol: "MSFT".to_string(),
            price: dec!(421.5),
            change: dec!(-2.25),
            change_percent: dec!(-0.53),
            timestamp: Utc::now(),
        };
        let json = serde_json::to_string(&quote).unwrap();
        assert!(json.contains("changePercent"));
        let back: Quote = serde_json::from_str(&json).unwrap();
        assert_eq!(back, quote);
    }
}

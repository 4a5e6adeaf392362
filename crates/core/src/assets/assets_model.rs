//! Asset domain model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use foliotrack_market_data::Quote;

/// A tradeable instrument known to the portfolio.
///
/// Created when a transaction references a previously unseen symbol and
/// refreshed in place when new quotes arrive. Holdings and transactions embed
/// their own copy; a price-refresh pass rewrites every embedded copy for a
/// symbol from the same quote, so no two holdings of one symbol can disagree
/// on price within a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    /// Exchange ticker, uppercase, unique within a portfolio.
    pub symbol: String,
    pub name: Option<String>,
    /// Latest known price. Non-negative.
    pub current_price: Decimal,
    pub currency: String,
    pub change_24h: Decimal,
    pub change_percent_24h: Decimal,
}

impl Asset {
    /// Build an asset from a live quote.
    pub fn from_quote(quote: &Quote, currency: impl Into<String>) -> Self {
        let symbol = quote.symbol.to_uppercase();
        Asset {
            id: symbol.clone(),
            symbol,
            name: None,
            current_price: quote.price,
            currency: currency.into(),
            change_24h: quote.change,
            change_percent_24h: quote.change_percent,
        }
    }

    /// Build an asset for a symbol with no resolvable quote, priced at the
    /// trade's execution price. Change fields start flat.
    pub fn from_trade_price(
        symbol: impl Into<String>,
        price: Decimal,
        currency: impl Into<String>,
    ) -> Self {
        let symbol = symbol.into().to_uppercase();
        Asset {
            id: symbol.clone(),
            symbol,
            name: None,
            current_price: price,
            currency: currency.into(),
            change_24h: Decimal::ZERO,
            change_percent_24h: Decimal::ZERO,
        }
    }

    /// Replace price and 24h change fields from a quote.
    pub fn apply_quote(&mut self, quote: &Quote) {
        self.current_price = quote.price;
        self.change_24h = quote.change;
        self.change_percent_24h = quote.change_percent;
    }
}

//! Asset resolution against the latest known quotes.

use std::collections::HashMap;
use std::sync::RwLock;

use log::debug;

use foliotrack_market_data::{MarketDataError, Quote};

use crate::assets::Asset;
use crate::errors::Result;

/// Resolves a symbol to an [`Asset`] priced from its live quote.
///
/// The orchestrator calls this when a transaction references a symbol with no
/// existing holding. Resolution is synchronous: implementations serve from
/// state the surrounding application has already fetched, never from the
/// network.
pub trait AssetResolverTrait: Send + Sync {
    fn resolve(&self, symbol: &str) -> Result<Asset>;
}

/// Resolver backed by a book of latest quotes per symbol.
///
/// The surrounding application absorbs provider batches into the book; the
/// engine reads from it when constructing assets for unseen symbols.
pub struct QuoteBookResolver {
    quotes: RwLock<HashMap<String, Quote>>,
    currency: String,
}

impl QuoteBookResolver {
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            quotes: RwLock::new(HashMap::new()),
            currency: currency.into(),
        }
    }

    /// Merge a quote batch into the book. Later entries win per symbol.
    pub fn absorb(&self, batch: &[Quote]) {
        let mut book = self.quotes.write().unwrap();
        for quote in batch {
            book.insert(quote.symbol.to_uppercase(), quote.clone());
        }
        debug!("Quote book now holds {} symbols", book.len());
    }
}

impl AssetResolverTrait for QuoteBookResolver {
    fn resolve(&self, symbol: &str) -> Result<Asset> {
        let key = symbol.to_uppercase();
        let book = self.quotes.read().unwrap();
        match book.get(&key) {
            Some(quote) => Ok(Asset::from_quote(quote, self.currency.clone())),
            None => Err(MarketDataError::SymbolNotFound(key).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    #[test]
    fn test_resolves_known_symbol_from_book() {
        let resolver = QuoteBookResolver::new("USD");
        resolver.absorb(&[Quote::flat("aapl", dec!(187.5), Utc::now())]);

        let asset = resolver.resolve("AAPL").unwrap();
        assert_eq!(asset.symbol, "AAPL");
        assert_eq!(asset.current_price, dec!(187.5));
        assert_eq!(asset.currency, "USD");
    }

    #[test]
    fn test_unknown_symbol_errors() {
        let resolver = QuoteBookResolver::new("USD");
        assert!(resolver.resolve("ZZZZ").is_err());
    }

    #[test]
    fn test_absorb_replaces_per_symbol() {
        let resolver = QuoteBookResolver::new("USD");
        resolver.absorb(&[Quote::flat("MSFT", dec!(400), Utc::now())]);
        resolver.absorb(&[Quote::flat("MSFT", dec!(410), Utc::now())]);

        let asset = resolver.resolve("MSFT").unwrap();
        assert_eq!(asset.current_price, dec!(410));
    }
}

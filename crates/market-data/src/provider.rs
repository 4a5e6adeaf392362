//! Quote provider trait and the manual in-memory implementation.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use log::debug;

use crate::errors::MarketDataError;
use crate::models::Quote;

/// Trait for quote sources.
///
/// Implementations own their transport, caching, rate limiting, and retry
/// concerns; the reconciliation engine only ever sees the returned batch.
/// A partial result (some requested symbols missing) is a valid response,
/// not an error.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Unique identifier for this provider, e.g. "MANUAL".
    /// Used for logging and error attribution.
    fn id(&self) -> &'static str;

    /// Fetch the latest known quotes for the given symbols.
    ///
    /// Symbols with no available quote are simply absent from the result.
    async fn fetch_quotes(&self, symbols: &[String]) -> Result<Vec<Quote>, MarketDataError>;
}

/// Quote provider backed by an in-memory table.
///
/// Prices are entered by the surrounding application (user input, file
/// import, a previous provider run) and served without any I/O. Later entries
/// for a symbol replace earlier ones.
#[derive(Default)]
pub struct ManualQuoteProvider {
    quotes: RwLock<HashMap<String, Quote>>,
}

impl ManualQuoteProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the quote for its symbol.
    pub fn set_quote(&self, quote: Quote) {
        let mut table = self.quotes.write().unwrap();
        table.insert(quote.symbol.clone(), quote);
    }

    /// Insert or replace a batch of quotes.
    pub fn set_quotes(&self, quotes: Vec<Quote>) {
        let mut table = self.quotes.write().unwrap();
        for quote in quotes {
            table.insert(quote.symbol.clone(), quote);
        }
    }

    /// Number of symbols with a stored quote.
    pub fn len(&self) -> usize {
        self.quotes.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.read().unwrap().is_empty()
    }
}

#[async_trait]
impl QuoteProvider for ManualQuoteProvider {
    fn id(&self) -> &'static str {
        "MANUAL"
    }

    async fn fetch_quotes(&self, symbols: &[String]) -> Result<Vec<Quote>, MarketDataError> {
        let table = self.quotes.read().unwrap();
        let found: Vec<Quote> = symbols
            .iter()
            .filter_map(|symbol| table.get(symbol).cloned())
            .collect();
        debug!(
            "Manual provider served {}/{} requested symbols",
            found.len(),
            symbols.len()
        );
        Ok(found)
    }
}

//! Portfolio event types.

use serde::{Deserialize, Serialize};

/// Events emitted by the reconciliation service after a successful
/// operation.
///
/// Each event marks that a new portfolio snapshot exists; subscribers
/// re-read the snapshot rather than deriving state from the event payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PortfolioEvent {
    /// A transaction was validated and appended to the ledger.
    TransactionRecorded {
        portfolio_id: String,
        transaction_id: String,
        symbol: String,
    },

    /// A quote batch was applied. Holdings without a matching quote kept
    /// their previous valuation.
    PricesRefreshed {
        portfolio_id: String,
        updated_symbols: Vec<String>,
        stale_symbols: Vec<String>,
    },

    /// A holding's quantity/cost basis was edited in place.
    HoldingEdited {
        portfolio_id: String,
        holding_id: String,
    },

    /// A holding was removed. Its transactions stay in the ledger.
    HoldingDeleted {
        portfolio_id: String,
        holding_id: String,
    },
}

impl PortfolioEvent {
    /// Creates a TransactionRecorded event.
    pub fn transaction_recorded(
        portfolio_id: String,
        transaction_id: String,
        symbol: String,
    ) -> Self {
        Self::TransactionRecorded {
            portfolio_id,
            transaction_id,
            symbol,
        }
    }

    /// Creates a PricesRefreshed event.
    pub fn prices_refreshed(
        portfolio_id: String,
        updated_symbols: Vec<String>,
        stale_symbols: Vec<String>,
    ) -> Self {
        Self::PricesRefreshed {
            portfolio_id,
            updated_symbols,
            stale_symbols,
        }
    }

    /// Creates a HoldingEdited event.
    pub fn holding_edited(portfolio_id: String, holding_id: String) -> Self {
        Self::HoldingEdited {
            portfolio_id,
            holding_id,
        }
    }

    /// Creates a HoldingDeleted event.
    pub fn holding_deleted(portfolio_id: String, holding_id: String) -> Self {
        Self::HoldingDeleted {
            portfolio_id,
            holding_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serialization() {
        let event = PortfolioEvent::prices_refreshed(
            "pf1".to_string(),
            vec!["AAPL".to_string()],
            vec!["MSFT".to_string()],
        );

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("prices_refreshed"));

        let deserialized: PortfolioEvent = serde_json::from_str(&json).unwrap();
        match deserialized {
            PortfolioEvent::PricesRefreshed {
                portfolio_id,
                updated_symbols,
                stale_symbols,
            } => {
                assert_eq!(portfolio_id, "pf1");
                assert_eq!(updated_symbols, vec!["AAPL"]);
                assert_eq!(stale_symbols, vec!["MSFT"]);
            }
            _ => panic!("Expected PricesRefreshed"),
        }
    }
}

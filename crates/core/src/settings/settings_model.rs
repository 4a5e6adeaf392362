//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CURRENCY, DEFAULT_PORTFOLIO_NAME};

/// What to do with a sell transaction whose symbol has no covering holding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnmatchedSellPolicy {
    /// Record the transaction in the ledger but leave holdings untouched.
    /// Logged as a warning.
    #[default]
    Ignore,
    /// Reject the transaction with an error; nothing is applied.
    Reject,
}

/// Engine configuration carried by the reconciliation service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSettings {
    #[serde(default = "default_portfolio_name")]
    pub portfolio_name: String,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub unmatched_sell_policy: UnmatchedSellPolicy,
}

impl Default for PortfolioSettings {
    fn default() -> Self {
        PortfolioSettings {
            portfolio_name: default_portfolio_name(),
            currency: default_currency(),
            unmatched_sell_policy: UnmatchedSellPolicy::default(),
        }
    }
}

fn default_portfolio_name() -> String {
    DEFAULT_PORTFOLIO_NAME.to_string()
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

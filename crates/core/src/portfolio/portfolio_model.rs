//! Portfolio snapshot model.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::portfolio::holdings_model::Holding;
use crate::portfolio::totals_calculator::PortfolioTotals;
use crate::transactions::TransactionLedger;

/// The root aggregate: a fully-formed, immutable snapshot of holdings, the
/// transaction ledger, and derived totals.
///
/// Reconciling operations take the previous snapshot plus new input and
/// return a wholly new snapshot; concurrent readers see either the old or
/// the new value, never an interleaving. Totals are always the exact
/// derivation over `holdings` - they are never adjusted independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub id: String,
    pub name: String,
    /// Unique by uppercase asset symbol.
    pub holdings: HashMap<String, Holding>,
    pub transactions: TransactionLedger,
    pub total_value: Decimal,
    pub total_cost: Decimal,
    pub total_gain_loss: Decimal,
    pub total_gain_loss_percent: Decimal,
    /// Timestamp of the last recomputation.
    pub last_updated: DateTime<Utc>,
}

impl Portfolio {
    /// Create an empty portfolio.
    pub fn new(name: impl Into<String>) -> Self {
        Portfolio {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            holdings: HashMap::new(),
            transactions: TransactionLedger::new(),
            total_value: Decimal::ZERO,
            total_cost: Decimal::ZERO,
            total_gain_loss: Decimal::ZERO,
            total_gain_loss_percent: Decimal::ZERO,
            last_updated: Utc::now(),
        }
    }

    /// Look up a holding by its id rather than its symbol key.
    pub fn holding_by_id(&self, holding_id: &str) -> Option<&Holding> {
        self.holdings.values().find(|h| h.id == holding_id)
    }

    pub(crate) fn apply_totals(&mut self, totals: PortfolioTotals) {
        self.total_value = totals.total_value;
        self.total_cost = totals.total_cost;
        self.total_gain_loss = totals.total_gain_loss;
        self.total_gain_loss_percent = totals.total_gain_loss_percent;
    }
}

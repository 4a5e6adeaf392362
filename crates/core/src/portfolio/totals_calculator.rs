//! Portfolio-level totals.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::portfolio::holdings_model::Holding;
use crate::portfolio::valuation_calculator;

/// Derived portfolio totals. Always the exact sum over the holdings they
/// were computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioTotals {
    pub total_value: Decimal,
    pub total_cost: Decimal,
    pub total_gain_loss: Decimal,
    pub total_gain_loss_percent: Decimal,
}

impl PortfolioTotals {
    pub fn zero() -> Self {
        PortfolioTotals {
            total_value: Decimal::ZERO,
            total_cost: Decimal::ZERO,
            total_gain_loss: Decimal::ZERO,
            total_gain_loss_percent: Decimal::ZERO,
        }
    }
}

/// Sum holdings into portfolio totals.
///
/// Decimal addition is exact and commutative here, so the map's iteration
/// order cannot affect the result.
pub fn recompute_totals(holdings: &HashMap<String, Holding>) -> PortfolioTotals {
    let total_value: Decimal = holdings.values().map(|h| h.current_value).sum();
    let total_cost: Decimal = holdings.values().map(|h| h.total_cost).sum();
    let total_gain_loss = valuation_calculator::gain_loss(total_value, total_cost);
    let total_gain_loss_percent =
        valuation_calculator::gain_loss_percent(total_gain_loss, total_cost);

    PortfolioTotals {
        total_value,
        total_cost,
        total_gain_loss,
        total_gain_loss_percent,
    }
}

//! Holding domain model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use chrono::{DateTime, Utc};

use crate::assets::Asset;
use crate::constants::QUANTITY_THRESHOLD;
use crate::portfolio::valuation_calculator;
use crate::transactions::Transaction;

/// True when a quantity is above the dust threshold.
pub fn is_quantity_significant(quantity: &Decimal) -> bool {
    let threshold =
        Decimal::from_str_radix(QUANTITY_THRESHOLD, 10).unwrap_or_else(|_| Decimal::new(1, 8));
    quantity.abs() >= threshold
}

/// An aggregate position in one asset, derived from transaction history.
///
/// `current_value`, `gain_loss`, and `gain_loss_percent` are always exactly
/// recomputable from `quantity`, `total_cost`, and `asset.current_price`;
/// [`revalue`](Self::revalue) is the only place they are written.
/// A holding with non-positive quantity must not exist - the aggregator
/// removes it instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub id: String,
    pub asset: Asset,
    /// Units held. Positive while the holding exists.
    pub quantity: Decimal,
    /// Cost-basis per unit, weighted across all buys net of sells.
    pub average_price: Decimal,
    /// `quantity * average_price`, inclusive of fees attributed to buys.
    pub total_cost: Decimal,
    pub current_value: Decimal,
    pub gain_loss: Decimal,
    pub gain_loss_percent: Decimal,
    pub notes: Option<String>,
    /// First acquisition date. Informational only.
    pub purchase_date: Option<DateTime<Utc>>,
    /// Most recent buy execution price. Informational only.
    pub purchase_price: Option<Decimal>,
}

impl Holding {
    /// Open a new holding from the first buy of a symbol.
    ///
    /// Cost basis includes the transaction's fees; valuation comes from the
    /// embedded asset's live price, which may differ from the trade price.
    pub fn open(transaction: &Transaction) -> Self {
        let total_cost = transaction.cost_with_fees();
        let mut holding = Holding {
            id: format!("HLD-{}", transaction.asset.symbol),
            asset: transaction.asset.clone(),
            quantity: transaction.quantity,
            average_price: total_cost / transaction.quantity,
            total_cost,
            current_value: Decimal::ZERO,
            gain_loss: Decimal::ZERO,
            gain_loss_percent: Decimal::ZERO,
            notes: None,
            purchase_date: Some(transaction.date),
            purchase_price: Some(transaction.price),
        };
        holding.revalue();
        holding
    }

    /// Recompute the derived valuation fields from the asset's live price.
    pub fn revalue(&mut self) {
        self.current_value =
            valuation_calculator::current_value(self.quantity, self.asset.current_price);
        self.gain_loss = valuation_calculator::gain_loss(self.current_value, self.total_cost);
        self.gain_loss_percent =
            valuation_calculator::gain_loss_percent(self.gain_loss, self.total_cost);
    }
}

/// User-submitted changes to one holding.
///
/// Absent fields keep their current values. `quantity` and `purchase_price`
/// rebuild the cost basis; `notes` replaces the holding's note.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingEdit {
    pub quantity: Option<Decimal>,
    pub purchase_price: Option<Decimal>,
    pub notes: Option<String>,
}

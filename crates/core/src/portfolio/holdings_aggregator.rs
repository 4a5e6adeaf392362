//! Applies transactions to the holdings collection.
//!
//! Average-price cost basis: buys blend into one weighted per-unit cost,
//! sells reduce quantity and cost proportionally at that average without
//! recording realized gain per lot.

use std::collections::HashMap;

use log::{debug, warn};

use crate::errors::{CalculatorError, Result};
use crate::portfolio::holdings_model::{is_quantity_significant, Holding};
use crate::settings::UnmatchedSellPolicy;
use crate::transactions::{Transaction, TransactionType};

/// Apply one transaction to the holdings collection, returning the updated
/// collection. The input collection is never mutated; on error it is
/// untouched and no partial state escapes.
pub fn apply_transaction(
    holdings: &HashMap<String, Holding>,
    transaction: &Transaction,
    unmatched_sell_policy: UnmatchedSellPolicy,
) -> Result<HashMap<String, Holding>> {
    if transaction.quantity.is_zero() || transaction.quantity.is_sign_negative() {
        return Err(CalculatorError::InvalidTransaction(format!(
            "quantity must be positive, got {}",
            transaction.quantity
        ))
        .into());
    }
    if transaction.price.is_sign_negative() {
        return Err(CalculatorError::InvalidTransaction(format!(
            "price must not be negative, got {}",
            transaction.price
        ))
        .into());
    }

    let mut next = holdings.clone();
    match transaction.transaction_type {
        TransactionType::Buy => apply_buy(&mut next, transaction),
        TransactionType::Sell => apply_sell(&mut next, transaction, unmatched_sell_policy)?,
    }
    Ok(next)
}

fn apply_buy(holdings: &mut HashMap<String, Holding>, transaction: &Transaction) {
    let symbol = transaction.asset.symbol.clone();
    match holdings.get_mut(&symbol) {
        Some(existing) => {
            let new_quantity = existing.quantity + transaction.quantity;
            let new_total_cost = existing.total_cost + transaction.cost_with_fees();
            existing.quantity = new_quantity;
            existing.total_cost = new_total_cost;
            existing.average_price = new_total_cost / new_quantity;
            // The transaction carries the freshest asset snapshot for the symbol.
            existing.asset = transaction.asset.clone();
            existing.purchase_price = Some(transaction.price);
            existing.revalue();
            debug!(
                "Averaged {} into {} units of {} at {}",
                transaction.quantity, new_quantity, symbol, existing.average_price
            );
        }
        None => {
            holdings.insert(symbol, Holding::open(transaction));
        }
    }
}

fn apply_sell(
    holdings: &mut HashMap<String, Holding>,
    transaction: &Transaction,
    policy: UnmatchedSellPolicy,
) -> Result<()> {
    let symbol = transaction.asset.symbol.clone();
    let Some(existing) = holdings.get_mut(&symbol) else {
        return match policy {
            UnmatchedSellPolicy::Ignore => {
                warn!(
                    "Sell of {} via transaction {} has no covering holding. Ignored.",
                    symbol, transaction.id
                );
                Ok(())
            }
            UnmatchedSellPolicy::Reject => {
                Err(CalculatorError::UnmatchedSell { symbol }.into())
            }
        };
    };

    let new_quantity = existing.quantity - transaction.quantity;
    if new_quantity.is_sign_negative()
        || new_quantity.is_zero()
        || !is_quantity_significant(&new_quantity)
    {
        if transaction.quantity > existing.quantity {
            warn!(
                "Sell quantity {} exceeds held {} for {}. Closing the position.",
                transaction.quantity, existing.quantity, symbol
            );
        }
        holdings.remove(&symbol);
        return Ok(());
    }

    // Cost basis leaves at the existing average, not the sale price.
    existing.total_cost -= transaction.quantity * existing.average_price;
    existing.quantity = new_quantity;
    existing.revalue();
    Ok(())
}

/// Replay a transaction log through the same aggregation cases, deriving the
/// holdings collection from scratch. The incremental path and this replay
/// must agree for any buy/sell history.
pub fn derive_holdings(
    transactions: &[Transaction],
    unmatched_sell_policy: UnmatchedSellPolicy,
) -> Result<HashMap<String, Holding>> {
    let mut holdings = HashMap::new();
    for transaction in transactions {
        holdings = apply_transaction(&holdings, transaction, unmatched_sell_policy)?;
    }
    Ok(holdings)
}

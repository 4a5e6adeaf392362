//! Pure valuation functions.
//!
//! Every derived money field on a holding or portfolio comes from these
//! three functions, so the derived values stay exactly recomputable from
//! quantity, cost, and the asset's live price.

use rust_decimal::Decimal;

use crate::constants::PERCENT_DECIMAL_PRECISION;

/// Market value of a position: `quantity * price`.
pub fn current_value(quantity: Decimal, price: Decimal) -> Decimal {
    quantity * price
}

/// Unrealized gain: `current_value - total_cost`.
pub fn gain_loss(current_value: Decimal, total_cost: Decimal) -> Decimal {
    current_value - total_cost
}

/// Unrealized gain relative to cost, in percent.
///
/// Defined as zero when `total_cost` is not positive.
pub fn gain_loss_percent(gain_loss: Decimal, total_cost: Decimal) -> Decimal {
    if total_cost > Decimal::ZERO {
        (gain_loss / total_cost * Decimal::ONE_HUNDRED).round_dp(PERCENT_DECIMAL_PRECISION)
    } else {
        Decimal::ZERO
    }
}

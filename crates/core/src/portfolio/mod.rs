//! Portfolio module - holdings aggregation, valuation, totals, and the
//! reconciliation service.

mod holdings_aggregator;
mod holdings_model;
mod portfolio_model;
mod reconciliation_service;
mod totals_calculator;
pub mod valuation_calculator;

pub use holdings_aggregator::{apply_transaction, derive_holdings};
pub use holdings_model::{is_quantity_significant, Holding, HoldingEdit};
pub use portfolio_model::Portfolio;
pub use reconciliation_service::ReconciliationService;
pub use totals_calculator::{recompute_totals, PortfolioTotals};

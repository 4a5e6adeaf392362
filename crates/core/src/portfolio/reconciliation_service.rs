//! Reconciliation service - the top-level operations invoked on user
//! actions and price refreshes.
//!
//! Every operation takes the previous portfolio snapshot plus new input and
//! returns a wholly new snapshot. Callers serialize invocations; two
//! derivations started from the same base snapshot resolve last-write-wins.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use log::{debug, warn};
use rust_decimal::Decimal;
use uuid::Uuid;

use foliotrack_market_data::Quote;

use crate::assets::{Asset, AssetResolverTrait};
use crate::errors::{CalculatorError, Result, ValidationError};
use crate::events::{PortfolioEvent, PortfolioEventSink};
use crate::portfolio::holdings_aggregator::apply_transaction;
use crate::portfolio::holdings_model::HoldingEdit;
use crate::portfolio::portfolio_model::Portfolio;
use crate::portfolio::totals_calculator::recompute_totals;
use crate::settings::PortfolioSettings;
use crate::transactions::{NewTransaction, Transaction};

pub struct ReconciliationService {
    asset_resolver: Arc<dyn AssetResolverTrait>,
    event_sink: Arc<dyn PortfolioEventSink>,
    settings: PortfolioSettings,
}

impl ReconciliationService {
    pub fn new(
        asset_resolver: Arc<dyn AssetResolverTrait>,
        event_sink: Arc<dyn PortfolioEventSink>,
        settings: PortfolioSettings,
    ) -> Self {
        Self {
            asset_resolver,
            event_sink,
            settings,
        }
    }

    /// Record one trade and reconcile holdings and totals around it.
    ///
    /// Validation happens before anything is built; a rejected input leaves
    /// the previous snapshot untouched and the error names the failing
    /// field.
    pub fn add_transaction(
        &self,
        portfolio: &Portfolio,
        input: NewTransaction,
    ) -> Result<Portfolio> {
        input.validate()?;
        let date = input.parsed_date()?;
        let symbol = input.normalized_symbol();

        // Existing holdings already carry the live asset record; unseen
        // symbols go through the resolver.
        let asset = match portfolio.holdings.get(&symbol) {
            Some(holding) => holding.asset.clone(),
            None => self.resolve_or_fallback(&symbol, input.price),
        };

        let transaction = Transaction {
            id: Uuid::new_v4().to_string(),
            asset,
            transaction_type: input.transaction_type,
            quantity: input.quantity,
            price: input.price,
            total_amount: input.quantity * input.price,
            date,
            fees: input.fees,
            notes: input.notes,
        };

        let holdings = apply_transaction(
            &portfolio.holdings,
            &transaction,
            self.settings.unmatched_sell_policy,
        )?;
        let transactions = portfolio.transactions.append(transaction.clone());

        let mut next = portfolio.clone();
        next.holdings = holdings;
        next.transactions = transactions;
        let totals = recompute_totals(&next.holdings);
        next.apply_totals(totals);
        next.last_updated = Utc::now();

        debug!(
            "Recorded {} {} x {} @ {} into portfolio {}",
            transaction.transaction_type.as_str(),
            transaction.quantity,
            symbol,
            transaction.price,
            next.id
        );
        self.event_sink.emit(PortfolioEvent::transaction_recorded(
            next.id.clone(),
            transaction.id.clone(),
            symbol,
        ));
        Ok(next)
    }

    /// Apply a quote batch to all matching holdings.
    ///
    /// Holdings with no matching quote keep their previous valuation - a
    /// degraded but valid state, whether the cause is a transient provider
    /// failure or a genuinely unlisted symbol. One bad quote never blocks
    /// the rest of the batch.
    pub fn refresh_prices(&self, portfolio: &Portfolio, quotes: &[Quote]) -> Portfolio {
        let mut by_symbol: HashMap<String, &Quote> = HashMap::new();
        for quote in quotes {
            if !quote.has_valid_price() {
                warn!(
                    "Skipping quote for {} with negative price {}",
                    quote.symbol, quote.price
                );
                continue;
            }
            // Later entries for a symbol win.
            by_symbol.insert(quote.symbol.to_uppercase(), quote);
        }

        let mut next = portfolio.clone();
        let mut updated_symbols: Vec<String> = Vec::new();
        let mut stale_symbols: Vec<String> = Vec::new();

        for (symbol, holding) in next.holdings.iter_mut() {
            match by_symbol.get(symbol) {
                Some(quote) => {
                    holding.asset.apply_quote(quote);
                    holding.revalue();
                    updated_symbols.push(symbol.clone());
                }
                None => stale_symbols.push(symbol.clone()),
            }
        }
        updated_symbols.sort();
        stale_symbols.sort();

        if !stale_symbols.is_empty() {
            debug!(
                "Price refresh left {} of {} holdings stale: {:?}",
                stale_symbols.len(),
                next.holdings.len(),
                stale_symbols
            );
        }

        let totals = recompute_totals(&next.holdings);
        next.apply_totals(totals);
        next.last_updated = Utc::now();

        self.event_sink.emit(PortfolioEvent::prices_refreshed(
            next.id.clone(),
            updated_symbols,
            stale_symbols,
        ));
        next
    }

    /// Rebuild one holding's cost basis from user-edited quantity and
    /// purchase price, leaving other holdings untouched.
    pub fn edit_holding(
        &self,
        portfolio: &Portfolio,
        holding_id: &str,
        changes: HoldingEdit,
    ) -> Result<Portfolio> {
        if let Some(quantity) = changes.quantity {
            if quantity.is_zero() || quantity.is_sign_negative() {
                return Err(ValidationError::NonPositiveQuantity(quantity).into());
            }
        }
        if let Some(price) = changes.purchase_price {
            if price.is_sign_negative() {
                return Err(ValidationError::NegativePrice(price).into());
            }
        }

        let mut next = portfolio.clone();
        let holding = next
            .holdings
            .values_mut()
            .find(|h| h.id == holding_id)
            .ok_or_else(|| CalculatorError::HoldingNotFound {
                holding_id: holding_id.to_string(),
            })?;

        let quantity = changes.quantity.unwrap_or(holding.quantity);
        let unit_cost = changes.purchase_price.unwrap_or(holding.average_price);
        holding.quantity = quantity;
        holding.average_price = unit_cost;
        holding.total_cost = quantity * unit_cost;
        if changes.purchase_price.is_some() {
            holding.purchase_price = changes.purchase_price;
        }
        if let Some(notes) = changes.notes {
            holding.notes = Some(notes);
        }
        holding.revalue();

        let totals = recompute_totals(&next.holdings);
        next.apply_totals(totals);
        next.last_updated = Utc::now();

        self.event_sink.emit(PortfolioEvent::holding_edited(
            next.id.clone(),
            holding_id.to_string(),
        ));
        Ok(next)
    }

    /// Remove a holding and recompute totals. The ledger keeps the
    /// holding's transactions.
    pub fn delete_holding(&self, portfolio: &Portfolio, holding_id: &str) -> Result<Portfolio> {
        let symbol = portfolio
            .holdings
            .iter()
            .find(|(_, h)| h.id == holding_id)
            .map(|(symbol, _)| symbol.clone())
            .ok_or_else(|| CalculatorError::HoldingNotFound {
                holding_id: holding_id.to_string(),
            })?;

        let mut next = portfolio.clone();
        next.holdings.remove(&symbol);

        let totals = recompute_totals(&next.holdings);
        next.apply_totals(totals);
        next.last_updated = Utc::now();

        self.event_sink.emit(PortfolioEvent::holding_deleted(
            next.id.clone(),
            holding_id.to_string(),
        ));
        Ok(next)
    }

    fn resolve_or_fallback(&self, symbol: &str, trade_price: Decimal) -> Asset {
        match self.asset_resolver.resolve(symbol) {
            Ok(asset) => asset,
            Err(err) => {
                warn!(
                    "No live quote for {}: {}. Valuing at the trade price until a quote arrives.",
                    symbol, err
                );
                Asset::from_trade_price(symbol, trade_price, self.settings.currency.clone())
            }
        }
    }
}

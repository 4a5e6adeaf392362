//! Transactions module - immutable trade records and the append-only ledger.

mod transactions_ledger;
mod transactions_model;


#[cfg(test)]
mod transactions_ledger_tests;

pub use transactions_ledger::TransactionLedger;
pub use transactions_model::{NewTransaction, Transaction, TransactionType};

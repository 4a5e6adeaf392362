//! Append-only transaction ledger.

use serde::{Deserialize, Serialize};

use crate::transactions::Transaction;

/// Ordered-by-creation log of transactions, the source of truth from which
/// holdings are derivable.
///
/// The ledger has value semantics: [`append`](Self::append) returns a new
/// ledger and leaves the receiver untouched, so a portfolio snapshot never
/// shares mutable state with its successor. Entries are never updated or
/// removed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionLedger {
    entries: Vec<Transaction>,
}

impl TransactionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy the ledger and append one transaction to the copy.
    pub fn append(&self, transaction: Transaction) -> TransactionLedger {
        let mut entries = self.entries.clone();
        entries.push(transaction);
        TransactionLedger { entries }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All transactions touching one symbol, in creation order.
    pub fn for_symbol(&self, symbol: &str) -> Vec<&Transaction> {
        let key = symbol.to_uppercase();
        self.entries
            .iter()
            .filter(|tx| tx.asset.symbol == key)
            .collect()
    }

    /// The most recently recorded transaction, if any.
    pub fn latest(&self) -> Option<&Transaction> {
        self.entries.last()
    }

    pub fn as_slice(&self) -> &[Transaction] {
        &self.entries
    }
}

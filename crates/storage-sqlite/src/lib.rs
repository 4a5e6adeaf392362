//! SQLite-backed snapshot store.
//!
//! Implements the core crate's [`SnapshotStoreTrait`] as a key-value blob
//! table: one row per portfolio id, the serialized snapshot as JSON. The
//! engine's persistence contract is value equality across a save/load round
//! trip; layout beyond that is this crate's concern.

use std::path::Path;
use std::sync::Mutex;

use log::debug;
use rusqlite::{Connection, OptionalExtension};

use foliotrack_core::errors::{Error, Result};
use foliotrack_core::persistence::SnapshotStoreTrait;
use foliotrack_core::portfolio::Portfolio;

/// Key-value snapshot store over a SQLite file.
///
/// The connection is serialized behind a mutex; the engine's single-writer
/// model never needs concurrent statements.
pub struct SqliteSnapshotStore {
    conn: Mutex<Connection>,
    portfolio_id: String,
}

impl SqliteSnapshotStore {
    /// Open (or create) the store at `path` for one portfolio id.
    pub fn open(path: &Path, portfolio_id: impl Into<String>) -> Result<Self> {
        let conn = Connection::open(path).map_err(|e| Error::Storage(e.to_string()))?;
        Self::with_connection(conn, portfolio_id)
    }

    /// In-memory database. For tests and ephemeral sessions.
    pub fn open_in_memory(portfolio_id: impl Into<String>) -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|e| Error::Storage(e.to_string()))?;
        Self::with_connection(conn, portfolio_id)
    }

    fn with_connection(conn: Connection, portfolio_id: impl Into<String>) -> Result<Self> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS portfolio_snapshots (
                portfolio_id TEXT PRIMARY KEY,
                payload TEXT NOT NULL,
                saved_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
            );
            "#,
        )
        .map_err(|e| Error::Storage(e.to_string()))?;

        Ok(Self {
            conn: Mutex::new(conn),
            portfolio_id: portfolio_id.into(),
        })
    }
}

impl SnapshotStoreTrait for SqliteSnapshotStore {
    fn load(&self) -> Result<Option<Portfolio>> {
        let conn = self.conn.lock().unwrap();
        let payload: Option<String> = conn
            .query_row(
                "SELECT payload FROM portfolio_snapshots WHERE portfolio_id = ?1",
                [&self.portfolio_id],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| Error::Storage(e.to_string()))?;

        match payload {
            Some(json) => {
                let portfolio: Portfolio = serde_json::from_str(&json)?;
                Ok(Some(portfolio))
            }
            None => Ok(None),
        }
    }

    fn save(&self, portfolio: &Portfolio) -> Result<()> {
        let json = serde_json::to_string(portfolio)?;
        let conn = self.conn.lock().unwrap();
        conn.execute(
            r#"
            INSERT INTO portfolio_snapshots (portfolio_id, payload, saved_at)
            VALUES (?1, ?2, strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
            ON CONFLICT(portfolio_id) DO UPDATE SET
                payload = excluded.payload,
                saved_at = excluded.saved_at
            "#,
            [&self.portfolio_id, &json],
        )
        .map_err(|e| Error::Storage(e.to_string()))?;
        debug!(
            "Saved snapshot for portfolio {} ({} bytes)",
            self.portfolio_id,
            json.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use foliotrack_core::assets::Asset;
    use foliotrack_core::portfolio::{apply_transaction, recompute_totals, Portfolio};
    use foliotrack_core::settings::UnmatchedSellPolicy;
    use foliotrack_core::transactions::{Transaction, TransactionType};
    use rust_decimal_macros::dec;

    fn populated_portfolio() -> Portfolio {
        let transaction = Transaction {
            id: "tx-1".to_string(),
            asset: Asset::from_trade_price("AAPL", dec!(187.5), "USD"),
            transaction_type: TransactionType::Buy,
            quantity: dec!(8),
            price: dec!(187.5),
            total_amount: dec!(1500),
            date: Utc::now(),
            fees: Some(dec!(2.5)),
            notes: None,
        };

        let mut portfolio = Portfolio::new("Durable");
        portfolio.holdings = apply_transaction(
            &portfolio.holdings,
            &transaction,
            UnmatchedSellPolicy::Ignore,
        )
        .unwrap();
        portfolio.transactions = portfolio.transactions.append(transaction);
        let totals = recompute_totals(&portfolio.holdings);
        portfolio.total_value = totals.total_value;
        portfolio.total_cost = totals.total_cost;
        portfolio.total_gain_loss = totals.total_gain_loss;
        portfolio.total_gain_loss_percent = totals.total_gain_loss_percent;
        portfolio
    }

    #[test]
    fn test_fresh_store_loads_none() {
        let store = SqliteSnapshotStore::open_in_memory("pf1").unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let store = SqliteSnapshotStore::open_in_memory("pf1").unwrap();
        let portfolio = populated_portfolio();

        store.save(&portfolio).unwrap();
        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, portfolio);
    }

    #[test]
    fn test_save_upserts_single_row() {
        let store = SqliteSnapshotStore::open_in_memory("pf1").unwrap();
        let first = populated_portfolio();
        let mut second = first.clone();
        second.name = "Renamed".to_string();

        store.save(&first).unwrap();
        store.save(&second).unwrap();
        assert_eq!(store.load().unwrap().unwrap().name, "Renamed");
    }

    #[test]
    fn test_reopening_file_preserves_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshots.db");
        let portfolio = populated_portfolio();

        {
            let store = SqliteSnapshotStore::open(&path, "pf1").unwrap();
            store.save(&portfolio).unwrap();
        }

        let store = SqliteSnapshotStore::open(&path, "pf1").unwrap();
        assert_eq!(store.load().unwrap().unwrap(), portfolio);
    }

    #[test]
    fn test_stores_are_scoped_by_portfolio_id() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshots.db");
        let portfolio = populated_portfolio();

        {
            let store = SqliteSnapshotStore::open(&path, "pf1").unwrap();
            store.save(&portfolio).unwrap();
        }

        let other = SqliteSnapshotStore::open(&path, "pf2").unwrap();
        assert!(other.load().unwrap().is_none());
    }
}

//! Snapshot store trait and the in-memory implementation.

use std::sync::Mutex;

use crate::errors::Result;
use crate::portfolio::Portfolio;

/// Storage seam for the current portfolio snapshot.
///
/// The engine's only persistence contract: a saved-then-loaded portfolio
/// must be value-equal to the original, date fields included. Layout,
/// durability, and encoding are the implementation's concern.
pub trait SnapshotStoreTrait: Send + Sync {
    /// The last saved snapshot, if any.
    fn load(&self) -> Result<Option<Portfolio>>;

    /// Replace the stored snapshot.
    fn save(&self, portfolio: &Portfolio) -> Result<()>;
}

/// Keeps the snapshot in memory. For tests and ephemeral sessions.
#[derive(Default)]
pub struct MemorySnapshotStore {
    slot: Mutex<Option<Portfolio>>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStoreTrait for MemorySnapshotStore {
    fn load(&self) -> Result<Option<Portfolio>> {
        Ok(self.slot.lock().unwrap().clone())
    }

    fn save(&self, portfolio: &Portfolio) -> Result<()> {
        *self.slot.lock().unwrap() = Some(portfolio.clone());
        Ok(())
    }
}

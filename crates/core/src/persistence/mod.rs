//! Persistence module - the snapshot store seam.

mod snapshot_store;


pub use snapshot_store::{MemorySnapshotStore, SnapshotStoreTrait};

//! Event sink trait and implementations.

use std::sync::{Arc, Mutex};

use log::debug;
use tokio::sync::broadcast;

use super::PortfolioEvent;

/// Trait for receiving portfolio events.
///
/// The reconciliation service emits events through this trait after each
/// successful operation.
///
/// # Design Rules
///
/// - `emit()` must be fast and non-blocking (no network calls, no disk writes)
/// - Implementations should queue events for async processing
/// - Failure to emit must not affect the reconciliation result (best-effort)
pub trait PortfolioEventSink: Send + Sync {
    /// Emit a single event.
    fn emit(&self, event: PortfolioEvent);

    /// Emit multiple events.
    ///
    /// Default implementation calls `emit()` for each event.
    fn emit_batch(&self, events: Vec<PortfolioEvent>) {
        for event in events {
            self.emit(event);
        }
    }
}

/// No-op implementation for tests or contexts that don't need events.
#[derive(Clone, Default)]
pub struct NoOpEventSink;

impl PortfolioEventSink for NoOpEventSink {
    fn emit(&self, _event: PortfolioEvent) {
        // Intentionally empty - events are discarded
    }
}

/// Mock sink for testing - collects emitted events.
#[derive(Clone, Default)]
pub struct MockEventSink {
    events: Arc<Mutex<Vec<PortfolioEvent>>>,
}

impl MockEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all collected events.
    pub fn events(&self) -> Vec<PortfolioEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Clears collected events.
    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }

    /// Returns the number of collected events.
    pub fn len(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    /// Returns true if no events have been collected.
    pub fn is_empty(&self) -> bool {
        self.events.lock().unwrap().is_empty()
    }
}

impl PortfolioEventSink for MockEventSink {
    fn emit(&self, event: PortfolioEvent) {
        self.events.lock().unwrap().push(event);
    }
}

/// Sink that fans events out over a tokio broadcast channel.
///
/// Dropped receivers or an empty subscriber list are not errors; the send
/// result is discarded per the best-effort contract.
pub struct BroadcastEventSink {
    sender: broadcast::Sender<PortfolioEvent>,
}

impl BroadcastEventSink {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Open a new subscription to future events.
    pub fn subscribe(&self) -> broadcast::Receiver<PortfolioEvent> {
        self.sender.subscribe()
    }
}

impl PortfolioEventSink for BroadcastEventSink {
    fn emit(&self, event: PortfolioEvent) {
        if let Err(err) = self.sender.send(event) {
            debug!("No subscribers for portfolio event: {}", err);
        }
    }
}

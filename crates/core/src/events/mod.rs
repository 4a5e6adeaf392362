//! Events module.
//!
//! Provides the portfolio event type and the sink trait for broadcasting
//! new snapshots after successful reconciliation. Subscribers (UI, the
//! persistence collaborator) react to events instead of polling.

mod portfolio_event;
mod sink;

pub use portfolio_event::*;
pub use sink::*;

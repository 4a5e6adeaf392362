//! Settings module - engine configuration.

mod settings_model;

pub use settings_model::{PortfolioSettings, UnmatchedSellPolicy};

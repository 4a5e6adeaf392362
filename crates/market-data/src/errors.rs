//! Error types for the market data crate.

use thiserror::Error;

/// Errors that can occur during quote operations.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The requested symbol was not found by the provider.
    /// Terminal for this symbol; retrying won't help.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// A provider-specific failure occurred.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The provider returned data that failed validation checks.
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}

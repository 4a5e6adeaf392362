//! Core error types for the reconciliation engine.
//!
//! This module defines storage-agnostic error types. Collaborator-specific
//! errors (market data, persistence backends) are converted into these types
//! at the boundary.

use chrono::ParseError as ChronoParseError;
use rust_decimal::Decimal;
use thiserror::Error;

use foliotrack_market_data::MarketDataError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the reconciliation engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Holdings calculation failed: {0}")]
    Calculation(#[from] CalculatorError),

    #[error("Market data operation failed: {0}")]
    MarketData(#[from] MarketDataError),

    #[error("Snapshot store operation failed: {0}")]
    Storage(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Validation errors for transaction input.
///
/// Raised at the orchestrator boundary before any derived structure is
/// built; a rejected input leaves the previous snapshot untouched. Each
/// variant names the field that failed.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Field 'quantity' must be positive, got {0}")]
    NonPositiveQuantity(Decimal),

    #[error("Field 'price' must not be negative, got {0}")]
    NegativePrice(Decimal),

    #[error("Field 'fees' must not be negative, got {0}")]
    NegativeFees(Decimal),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] ChronoParseError),
}

/// Errors that occur while applying transactions to holdings.
#[derive(Error, Debug)]
pub enum CalculatorError {
    #[error("Invalid transaction data: {0}")]
    InvalidTransaction(String),

    #[error("Sell of {symbol} has no covering holding")]
    UnmatchedSell { symbol: String },

    #[error("Holding not found: {holding_id}")]
    HoldingNotFound { holding_id: String },

    #[error("Calculation failed: {0}")]
    Calculation(String),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Storage(err.to_string())
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}

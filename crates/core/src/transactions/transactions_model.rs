//! Transaction domain models.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::assets::Asset;
use crate::errors::ValidationError;

/// Direction of a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Buy,
    Sell,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Buy => "BUY",
            TransactionType::Sell => "SELL",
        }
    }
}

/// An immutable record of one buy or sell event.
///
/// Once created a transaction is never mutated or deleted; removing a holding
/// leaves its contributing transactions in the ledger. The embedded asset is
/// a snapshot taken at recording time, not a reference to the live record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub asset: Asset,
    pub transaction_type: TransactionType,
    /// Units traded. Positive.
    pub quantity: Decimal,
    /// Per-unit execution price. Non-negative.
    pub price: Decimal,
    /// `quantity * price`.
    pub total_amount: Decimal,
    pub date: DateTime<Utc>,
    /// Added to cost basis on buys; recorded but excluded from cost math on
    /// sells.
    pub fees: Option<Decimal>,
    pub notes: Option<String>,
}

impl Transaction {
    /// Get fees, defaulting to zero if not set
    pub fn fee_amt(&self) -> Decimal {
        self.fees.unwrap_or(Decimal::ZERO)
    }

    /// Execution amount plus fees. The cost-basis contribution of a buy.
    pub fn cost_with_fees(&self) -> Decimal {
        self.total_amount + self.fee_amt()
    }
}

/// Input model for recording a new transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub symbol: String,
    pub transaction_type: TransactionType,
    pub quantity: Decimal,
    pub price: Decimal,
    /// ISO 8601/RFC3339 timestamp or a plain YYYY-MM-DD date.
    pub date: String,
    pub fees: Option<Decimal>,
    pub notes: Option<String>,
}

impl NewTransaction {
    /// Validates the input, naming the first field that fails.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        if self.symbol.trim().is_empty() {
            return Err(ValidationError::MissingField("symbol".to_string()));
        }
        if !self.quantity.is_sign_positive() || self.quantity.is_zero() {
            return Err(ValidationError::NonPositiveQuantity(self.quantity));
        }
        if self.price.is_sign_negative() {
            return Err(ValidationError::NegativePrice(self.price));
        }
        if let Some(fees) = self.fees {
            if fees.is_sign_negative() {
                return Err(ValidationError::NegativeFees(fees));
            }
        }
        self.parsed_date().map(|_| ())
    }

    /// Parses the submitted date, accepting RFC3339 or YYYY-MM-DD (taken as
    /// midnight UTC).
    pub fn parsed_date(&self) -> std::result::Result<DateTime<Utc>, ValidationError> {
        if let Ok(ts) = DateTime::parse_from_rfc3339(&self.date) {
            return Ok(ts.with_timezone(&Utc));
        }
        let day = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")?;
        Ok(DateTime::from_naive_utc_and_offset(
            day.and_hms_opt(0, 0, 0).unwrap(),
            Utc,
        ))
    }

    /// Uppercased, trimmed ticker used as the holdings key.
    pub fn normalized_symbol(&self) -> String {
        self.symbol.trim().to_uppercase()
    }
}

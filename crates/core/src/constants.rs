/// Quantity threshold below which a residual position counts as dust
pub const QUANTITY_THRESHOLD: &str = "0.00000001";

/// Decimal precision for gain/loss percentages
pub const PERCENT_DECIMAL_PRECISION: u32 = 4;

/// Currency assumed when input does not carry one
pub const DEFAULT_CURRENCY: &str = "USD";

/// Name given to a portfolio created without one
pub const DEFAULT_PORTFOLIO_NAME: &str = "My Portfolio";

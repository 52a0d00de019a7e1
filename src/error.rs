//! Error types for marketfolio

use thiserror::Error;

/// Main error type for marketfolio
#[derive(Error, Debug)]
pub enum MarketfolioError {
    #[error("Invalid holding: {0}")]
    InvalidHolding(String),

    #[error("No exchange rate for {0}")]
    MissingRate(String),

    #[error("Invalid rate: {0}")]
    InvalidRate(String),

    #[error("Calendar error: {0}")]
    CalendarError(String),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

/// Result type alias for marketfolio operations
pub type Result<T> = std::result::Result<T, MarketfolioError>;

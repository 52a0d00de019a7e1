//! Portfolio engine - holdings, exchange rates, valuation

pub mod holding;
pub mod ledger;
pub mod rates;

pub use holding::{Holding, ProfitLoss};
pub use ledger::{PortfolioLedger, PortfolioSummary, PRICE_JITTER};
pub use rates::{RateTable, RATE_JITTER};

//! # Marketfolio
//!
//! Market-hours tracking for global stock exchanges and a simulated
//! multi-currency portfolio ledger.
//!
//! Two engines carry the logic: [`clock::MarketClock`] answers whether a
//! venue is open at a given instant (timezone, weekday, multi-session),
//! and [`portfolio::PortfolioLedger`] values a mixed-currency holding set
//! with conversion and profit/loss. Everything a host renders is exposed
//! as plain payloads in [`view`] and [`export`]; recurring refresh work is
//! an explicit cancellable [`schedule::RefreshSchedule`].
//!
//! ## Example
//!
//! ```rust
//! use marketfolio::prelude::*;
//! use chrono::Utc;
//!
//! let mut ledger = PortfolioLedger::new();
//! ledger.add_holding("AAPL", 10.0, 150.0, Currency::USD)?;
//!
//! let summary = ledger.summary(Currency::USD)?;
//! assert_eq!(summary.count, 1);
//!
//! let clock = MarketClock::with_builtin();
//! let open_now = clock.is_open("NYSE", Utc::now());
//! let _ = open_now;
//! # Ok::<(), MarketfolioError>(())
//! ```

pub mod app;
pub mod clock;
pub mod currency;
pub mod error;
pub mod exchange;
pub mod export;
pub mod noise;
pub mod portfolio;
pub mod schedule;
pub mod types;
pub mod view;

pub mod prelude {
    //! Commonly used types and traits
    pub use crate::app::Tracker;
    pub use crate::clock::MarketClock;
    pub use crate::currency::Currency;
    pub use crate::error::{MarketfolioError, Result};
    pub use crate::exchange::{builtin_exchanges, ExchangeSpec, Session};
    pub use crate::export::{export_json, PortfolioExport};
    pub use crate::noise::{FixedNoise, NoiseSource, RandomNoise};
    pub use crate::portfolio::{
        Holding, PortfolioLedger, PortfolioSummary, ProfitLoss, RateTable,
    };
    pub use crate::schedule::{RefreshKind, RefreshSchedule, TaskId};
    pub use crate::types::*;
    pub use crate::view::{market_overview, portfolio_view, ExchangeStatus, HoldingView};
}

//! Application root - explicit ownership of engines and schedule
//!
//! The host owns a single `Tracker` and passes it to its event callbacks;
//! nothing hangs off ambient globals. Teardown goes through `shutdown`,
//! which releases every recurring refresh task.

use crate::clock::MarketClock;
use crate::error::Result;
use crate::export;
use crate::portfolio::PortfolioLedger;
use crate::schedule::{RefreshKind, RefreshSchedule};
use crate::types::Timestamp;
use crate::view::{self, ExchangeStatus, HoldingView};

/// Owns both engines and the refresh schedule.
#[derive(Debug)]
pub struct Tracker {
    clock: MarketClock,
    ledger: PortfolioLedger,
    schedule: RefreshSchedule,
}

impl Tracker {
    /// Tracker over the built-in exchange table with standard cadences.
    pub fn new(now: Timestamp) -> Self {
        Self::with_parts(
            MarketClock::with_builtin(),
            PortfolioLedger::new(),
            RefreshSchedule::standard(now),
        )
    }

    /// Tracker assembled from caller-supplied parts.
    pub fn with_parts(
        clock: MarketClock,
        ledger: PortfolioLedger,
        schedule: RefreshSchedule,
    ) -> Self {
        Self {
            clock,
            ledger,
            schedule,
        }
    }

    pub fn clock(&self) -> &MarketClock {
        &self.clock
    }

    pub fn ledger(&self) -> &PortfolioLedger {
        &self.ledger
    }

    /// Mutable ledger access for the input collaborator's callbacks.
    pub fn ledger_mut(&mut self) -> &mut PortfolioLedger {
        &mut self.ledger
    }

    pub fn schedule(&self) -> &RefreshSchedule {
        &self.schedule
    }

    pub fn schedule_mut(&mut self) -> &mut RefreshSchedule {
        &mut self.schedule
    }

    /// Run every refresh due at `now`.
    ///
    /// Returns the kinds that fired so the host knows which views to
    /// re-render. Market status has no state to mutate; the host re-queries
    /// `market_overview` when it sees that kind.
    pub fn tick(&mut self, now: Timestamp) -> Vec<RefreshKind> {
        let fired = self.schedule.due(now);
        for kind in &fired {
            match kind {
                RefreshKind::MarketStatus => {}
                RefreshKind::Prices => self.ledger.refresh_simulated_prices(),
                RefreshKind::Rates => self.ledger.refresh_exchange_rates(),
            }
        }
        fired
    }

    /// Exchange-card payloads at the given instant.
    pub fn market_overview(&self, as_of: Timestamp) -> Vec<ExchangeStatus> {
        view::market_overview(&self.clock, as_of)
    }

    /// Holding-row payloads in the ledger's base currency.
    pub fn portfolio_view(&self) -> Result<Vec<HoldingView>> {
        view::portfolio_view(&self.ledger, self.ledger.base_currency())
    }

    /// Export document for the download surface.
    pub fn export_json(&self, now: Timestamp) -> Result<String> {
        export::export_json(&self.ledger, now)
    }

    /// Teardown: cancel all recurring refresh work.
    pub fn shutdown(&mut self) {
        self.schedule.clear();
        log::debug!("tracker shut down, schedule cleared");
    }
}

//! Presentation-boundary snapshots
//!
//! The render collaborator owns all markup; it is handed these plain
//! payloads and no business logic.

use crate::clock::MarketClock;
use crate::currency::Currency;
use crate::error::Result;
use crate::portfolio::{Holding, PortfolioLedger, ProfitLoss};
use crate::types::{Cash, Timestamp};
use serde::Serialize;

/// Per-exchange card payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeStatus {
    pub id: String,
    pub name: String,
    pub country: String,
    pub is_open: bool,
    /// Local wall clock "HH:MM", or "N/A" when unresolvable
    pub local_time: String,
    /// Upcoming-session hint, shown only while closed
    pub next_session: Option<String>,
}

/// Status snapshot for every configured exchange, in table order.
pub fn market_overview(clock: &MarketClock, as_of: Timestamp) -> Vec<ExchangeStatus> {
    clock
        .exchanges()
        .iter()
        .map(|spec| {
            let id = spec.id.as_str();
            let is_open = clock.is_open(id, as_of);
            ExchangeStatus {
                id: spec.id.clone(),
                name: spec.name.clone(),
                country: spec.country.clone(),
                is_open,
                local_time: clock
                    .local_time(id, as_of)
                    .unwrap_or_else(|| "N/A".to_string()),
                next_session: if is_open {
                    None
                } else {
                    clock.next_session_description(id, as_of)
                },
            }
        })
        .collect()
}

/// Per-holding row payload with values converted to the display currency.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingView {
    pub holding: Holding,
    /// Profit/loss in the holding's own currency
    pub profit_loss: ProfitLoss,
    pub current_value_display: Cash,
    pub purchase_value_display: Cash,
    pub profit_loss_display: Cash,
}

/// Row payloads for every holding, in display order.
pub fn portfolio_view(ledger: &PortfolioLedger, display: Currency) -> Result<Vec<HoldingView>> {
    ledger
        .holdings()
        .iter()
        .map(|holding| {
            let profit_loss = holding.profit_loss();
            let current_value_display =
                ledger.convert(profit_loss.current_value, holding.currency, display)?;
            let purchase_value_display =
                ledger.convert(profit_loss.purchase_value, holding.currency, display)?;
            Ok(HoldingView {
                holding: holding.clone(),
                profit_loss,
                current_value_display,
                purchase_value_display,
                profit_loss_display: current_value_display - purchase_value_display,
            })
        })
        .collect()
}

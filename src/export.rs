//! Portfolio export surface
//!
//! Serializes the ledger into the JSON document the download button hands
//! to the browser. The key set (`portfolio`, `baseCurrency`, `exportDate`,
//! `summary`) is a stable contract.

use crate::currency::Currency;
use crate::error::Result;
use crate::portfolio::{Holding, PortfolioLedger, PortfolioSummary};
use crate::types::Timestamp;
use serde::Serialize;

/// Export document shape.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioExport {
    pub portfolio: Vec<Holding>,
    pub base_currency: Currency,
    /// ISO-8601 timestamp of the snapshot
    pub export_date: String,
    pub summary: PortfolioSummary,
}

impl PortfolioExport {
    /// Snapshot the ledger at `now`, summarized in its base currency.
    pub fn snapshot(ledger: &PortfolioLedger, now: Timestamp) -> Result<Self> {
        Ok(Self {
            portfolio: ledger.holdings().to_vec(),
            base_currency: ledger.base_currency(),
            export_date: now.to_rfc3339(),
            summary: ledger.summary(ledger.base_currency())?,
        })
    }

    /// Pretty-printed JSON document.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Snapshot and serialize in one step.
pub fn export_json(ledger: &PortfolioLedger, now: Timestamp) -> Result<String> {
    PortfolioExport::snapshot(ledger, now)?.to_json()
}

/// Suggested download file name, `portfolio_YYYY-MM-DD.json`.
pub fn export_file_name(now: Timestamp) -> String {
    format!("portfolio_{}.json", now.format("%Y-%m-%d"))
}

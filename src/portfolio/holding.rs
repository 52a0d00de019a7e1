//! Portfolio positions and per-position profit/loss

use crate::currency::Currency;
use crate::types::{Cash, HoldingId, Price, Quantity, Timestamp};
use serde::{Deserialize, Serialize};

/// One portfolio position.
///
/// Owned exclusively by the ledger: created by `add_holding`, removed by
/// `remove_holding`, and only the simulated price refresh mutates it.
/// Field names are part of the export document contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub id: HoldingId,
    pub symbol: String,
    pub quantity: Quantity,
    pub purchase_price: Price,
    pub currency: Currency,
    /// Simulated current price, redrawn around the purchase anchor on refresh
    pub current_price: Price,
    #[serde(rename = "dateAdded")]
    pub added_at: Timestamp,
}

impl Holding {
    /// Market value at the simulated current price, in the holding currency.
    pub fn current_value(&self) -> Cash {
        self.current_price * self.quantity
    }

    /// Cost basis, in the holding currency.
    pub fn purchase_value(&self) -> Cash {
        self.purchase_price * self.quantity
    }

    /// Profit/loss breakdown in the holding's own currency.
    pub fn profit_loss(&self) -> ProfitLoss {
        let current_value = self.current_value();
        let purchase_value = self.purchase_value();
        let absolute = current_value - purchase_value;
        let percentage = if purchase_value > 0.0 {
            absolute / purchase_value * 100.0
        } else {
            0.0
        };
        ProfitLoss {
            absolute,
            percentage,
            current_value,
            purchase_value,
        }
    }
}

/// Per-holding profit/loss breakdown, in the holding's own currency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitLoss {
    pub absolute: Cash,
    pub percentage: f64,
    pub current_value: Cash,
    pub purchase_value: Cash,
}

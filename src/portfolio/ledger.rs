//! Portfolio ledger - holding collection, valuation, simulated refresh

use crate::currency::Currency;
use crate::error::{MarketfolioError, Result};
use crate::noise::{NoiseSource, RandomNoise};
use crate::portfolio::holding::{Holding, ProfitLoss};
use crate::portfolio::rates::RateTable;
use crate::types::{Cash, HoldingId, Price, Quantity};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Simulated price movement stays within ±10% of the purchase anchor.
pub const PRICE_JITTER: f64 = 0.10;

/// Aggregate portfolio valuation in a display currency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub total_value: Cash,
    pub total_cost: Cash,
    pub total_profit_loss: Cash,
    pub total_profit_loss_percentage: f64,
    pub count: usize,
}

/// Ordered collection of holdings plus the exchange-rate table.
///
/// Append order is display order. Monetary math is plain f64 with no
/// internal rounding; two-decimal display rounding belongs to the
/// presentation layer.
pub struct PortfolioLedger {
    holdings: Vec<Holding>,
    rates: RateTable,
    noise: Box<dyn NoiseSource>,
    next_id: HoldingId,
}

impl PortfolioLedger {
    /// Ledger with entropy-backed price/rate noise.
    pub fn new() -> Self {
        Self::with_noise(Box::new(RandomNoise))
    }

    /// Ledger with a caller-supplied randomness source.
    pub fn with_noise(noise: Box<dyn NoiseSource>) -> Self {
        Self {
            holdings: Vec::new(),
            rates: RateTable::new(),
            noise,
            next_id: 1,
        }
    }

    /// Holdings in append (display) order.
    pub fn holdings(&self) -> &[Holding] {
        &self.holdings
    }

    /// Look up a holding by id.
    pub fn get(&self, id: HoldingId) -> Option<&Holding> {
        self.holdings.iter().find(|h| h.id == id)
    }

    pub fn len(&self) -> usize {
        self.holdings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    /// The exchange-rate table.
    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// The currency aggregates are expressed in by default.
    pub fn base_currency(&self) -> Currency {
        self.rates.base()
    }

    /// Move the rate table onto a new base currency.
    pub fn set_base_currency(&mut self, currency: Currency) -> Result<()> {
        self.rates.rebase(currency)
    }

    /// Extend or override a baseline exchange rate.
    pub fn set_baseline_rate(&mut self, currency: Currency, rate: f64) -> Result<()> {
        self.rates.set_baseline(currency, rate)
    }

    /// Validate and append a holding; returns its assigned id.
    ///
    /// Rejects an empty symbol and non-positive quantity or price without
    /// touching the collection. The initial simulated price is drawn from
    /// the purchase anchor like any later refresh.
    pub fn add_holding(
        &mut self,
        symbol: &str,
        quantity: Quantity,
        purchase_price: Price,
        currency: Currency,
    ) -> Result<HoldingId> {
        let symbol = symbol.trim().to_uppercase();
        if symbol.is_empty() {
            return Err(MarketfolioError::InvalidHolding(
                "symbol must not be empty".to_string(),
            ));
        }
        if quantity <= 0.0 || !quantity.is_finite() {
            return Err(MarketfolioError::InvalidHolding(format!(
                "quantity must be positive, got {quantity}"
            )));
        }
        if purchase_price <= 0.0 || !purchase_price.is_finite() {
            return Err(MarketfolioError::InvalidHolding(format!(
                "purchase price must be positive, got {purchase_price}"
            )));
        }

        let id = self.next_id;
        self.next_id += 1;

        let current_price = self.simulated_price(purchase_price);
        self.holdings.push(Holding {
            id,
            symbol: symbol.clone(),
            quantity,
            purchase_price,
            currency,
            current_price,
            added_at: Utc::now(),
        });
        log::debug!("added holding {id} ({symbol}, {quantity} @ {purchase_price} {currency})");
        Ok(id)
    }

    /// Remove a holding by id; silent no-op when absent.
    pub fn remove_holding(&mut self, id: HoldingId) {
        self.holdings.retain(|h| h.id != id);
    }

    /// Redraw every holding's current price from its purchase anchor.
    ///
    /// Each call discards the previous draw, so prices oscillate around the
    /// anchor instead of random-walking.
    pub fn refresh_simulated_prices(&mut self) {
        for index in 0..self.holdings.len() {
            let anchor = self.holdings[index].purchase_price;
            let price = self.simulated_price(anchor);
            self.holdings[index].current_price = price;
        }
    }

    /// Replace the rate table contents with freshly perturbed baselines.
    pub fn refresh_exchange_rates(&mut self) {
        self.rates.refresh(&mut *self.noise);
        log::debug!("exchange rates refreshed ({} currencies)", self.rates.len());
    }

    /// Convert an amount between currencies via the rate table.
    pub fn convert(&self, amount: Cash, from: Currency, to: Currency) -> Result<Cash> {
        self.rates.convert(amount, from, to)
    }

    /// Profit/loss breakdown for a holding, in its own currency.
    pub fn profit_loss(&self, holding: &Holding) -> ProfitLoss {
        holding.profit_loss()
    }

    /// Aggregate valuation with every holding converted to `display`.
    ///
    /// An empty portfolio sums to zero with a zero percentage.
    pub fn summary(&self, display: Currency) -> Result<PortfolioSummary> {
        let mut total_value = 0.0;
        let mut total_cost = 0.0;

        for holding in &self.holdings {
            total_value += self
                .rates
                .convert(holding.current_value(), holding.currency, display)?;
            total_cost += self
                .rates
                .convert(holding.purchase_value(), holding.currency, display)?;
        }

        let total_profit_loss = total_value - total_cost;
        let total_profit_loss_percentage = if total_cost > 0.0 {
            total_profit_loss / total_cost * 100.0
        } else {
            0.0
        };

        Ok(PortfolioSummary {
            total_value,
            total_cost,
            total_profit_loss,
            total_profit_loss_percentage,
            count: self.holdings.len(),
        })
    }

    /// Seed a few well-known positions for demos and tests.
    pub fn load_sample_holdings(&mut self) -> Result<()> {
        self.add_holding("AAPL", 10.0, 150.0, Currency::USD)?;
        self.add_holding("GOOGL", 5.0, 2800.0, Currency::USD)?;
        self.add_holding("TSLA", 15.0, 800.0, Currency::USD)?;
        Ok(())
    }

    fn simulated_price(&mut self, anchor: Price) -> Price {
        anchor * (1.0 + self.noise.uniform(-PRICE_JITTER, PRICE_JITTER))
    }
}

impl Default for PortfolioLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PortfolioLedger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PortfolioLedger")
            .field("holdings", &self.holdings)
            .field("rates", &self.rates)
            .field("next_id", &self.next_id)
            .finish()
    }
}

//! Exchange-rate table with simulated refresh

use crate::currency::Currency;
use crate::error::{MarketfolioError, Result};
use crate::noise::NoiseSource;
use std::collections::HashMap;

/// Simulated rate movement stays within ±1% of the baseline anchor.
pub const RATE_JITTER: f64 = 0.01;

/// Default baseline anchors, expressed in units per one USD.
const DEFAULT_BASELINES: &[(Currency, f64)] = &[
    (Currency::USD, 1.0),
    (Currency::EUR, 0.85),
    (Currency::GBP, 0.73),
    (Currency::JPY, 110.0),
    (Currency::SGD, 1.35),
    (Currency::HKD, 7.8),
];

/// Mapping from currency to its value in units of the base currency.
///
/// The base-currency identity travels with the table: `rebase` re-expresses
/// every entry (and every baseline anchor) so the 1.0 entry moves with it.
/// `refresh` replaces the live rates wholesale from the anchors; entries are
/// never partially mutated.
#[derive(Debug, Clone)]
pub struct RateTable {
    base: Currency,
    rates: HashMap<Currency, f64>,
    baselines: HashMap<Currency, f64>,
}

impl RateTable {
    /// Table seeded with the default USD-relative baselines.
    pub fn new() -> Self {
        let baselines: HashMap<Currency, f64> = DEFAULT_BASELINES.iter().copied().collect();
        Self {
            base: Currency::USD,
            rates: baselines.clone(),
            baselines,
        }
    }

    /// The currency whose entry is pinned at 1.0.
    pub fn base(&self) -> Currency {
        self.base
    }

    /// Live rate for a currency, in base-currency units.
    pub fn rate(&self, currency: Currency) -> Result<f64> {
        self.rates
            .get(&currency)
            .copied()
            .ok_or_else(|| MarketfolioError::MissingRate(currency.code().to_string()))
    }

    /// Whether a live rate exists for the currency.
    pub fn has_rate(&self, currency: Currency) -> bool {
        self.rates.contains_key(&currency)
    }

    /// Number of currencies carried by the table.
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Extend or override a baseline anchor; the live rate starts at the anchor.
    pub fn set_baseline(&mut self, currency: Currency, rate: f64) -> Result<()> {
        if rate <= 0.0 || !rate.is_finite() {
            return Err(MarketfolioError::InvalidRate(format!(
                "baseline for {} must be positive, got {rate}",
                currency.code()
            )));
        }
        self.baselines.insert(currency, rate);
        self.rates.insert(currency, rate);
        Ok(())
    }

    /// Convert an amount between currencies through the base.
    ///
    /// Identity when the currencies match; otherwise divides out the source
    /// rate and applies the target rate. Fails if either side has no entry.
    pub fn convert(&self, amount: f64, from: Currency, to: Currency) -> Result<f64> {
        if from == to {
            return Ok(amount);
        }
        let from_rate = self.rate(from)?;
        let to_rate = self.rate(to)?;
        Ok(amount / from_rate * to_rate)
    }

    /// Replace every live rate with its baseline perturbed by ±1%.
    /// The base currency stays pinned at 1.0.
    pub fn refresh(&mut self, noise: &mut dyn NoiseSource) {
        let mut next = HashMap::with_capacity(self.baselines.len());
        for (&currency, &anchor) in &self.baselines {
            let rate = if currency == self.base {
                1.0
            } else {
                anchor * (1.0 + noise.uniform(-RATE_JITTER, RATE_JITTER))
            };
            next.insert(currency, rate);
        }
        self.rates = next;
    }

    /// Change the base currency, re-expressing every entry so the table's
    /// own 1.0 entry moves with it. Baseline anchors are rebased too, so
    /// subsequent refreshes oscillate around the new base.
    pub fn rebase(&mut self, new_base: Currency) -> Result<()> {
        if new_base == self.base {
            return Ok(());
        }
        let rate_pivot = self.rate(new_base)?;
        let anchor_pivot = self
            .baselines
            .get(&new_base)
            .copied()
            .ok_or_else(|| MarketfolioError::MissingRate(new_base.code().to_string()))?;

        for value in self.rates.values_mut() {
            *value /= rate_pivot;
        }
        for value in self.baselines.values_mut() {
            *value /= anchor_pivot;
        }
        // Pin exactly 1.0 rather than leaving division residue.
        self.rates.insert(new_base, 1.0);
        self.baselines.insert(new_base, 1.0);
        self.base = new_base;
        Ok(())
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::new()
    }
}

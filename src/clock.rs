//! Market-hours evaluation engine

use crate::exchange::{builtin_exchanges, ExchangeSpec};
use crate::types::{MinuteOfDay, Timestamp};
use chrono::{Datelike, Timelike};

/// Answers "is this exchange open" questions against a static venue table.
///
/// Every query is a pure function of the table and the supplied instant;
/// there is no internal clock and no mutable state.
#[derive(Debug, Clone)]
pub struct MarketClock {
    exchanges: Vec<ExchangeSpec>,
}

impl MarketClock {
    /// Clock over a caller-supplied venue table. Order is preserved for display.
    pub fn new(exchanges: Vec<ExchangeSpec>) -> Self {
        Self { exchanges }
    }

    /// Clock over the built-in venue table.
    pub fn with_builtin() -> Self {
        Self::new(builtin_exchanges())
    }

    /// All configured venues, in table order.
    pub fn exchanges(&self) -> &[ExchangeSpec] {
        &self.exchanges
    }

    /// Look up a venue by identifier.
    pub fn get(&self, id: &str) -> Option<&ExchangeSpec> {
        self.exchanges.iter().find(|e| e.id == id)
    }

    /// Whether the exchange is open at the given instant.
    ///
    /// Resolves the instant to the venue's local wall clock, gates on the
    /// trading weekday set, then checks each session's closed [open, close]
    /// interval at minute granularity. Unknown ids are closed, not errors.
    pub fn is_open(&self, id: &str, as_of: Timestamp) -> bool {
        let spec = match self.get(id) {
            Some(spec) => spec,
            None => {
                log::debug!("is_open: unknown exchange id {id}");
                return false;
            }
        };

        let local = as_of.with_timezone(&spec.timezone);
        if !spec.trades_on(local.weekday()) {
            return false;
        }

        let minute = minute_of_day(local.hour(), local.minute());
        spec.sessions.iter().any(|s| s.contains(minute))
    }

    /// Local wall-clock time at the venue, formatted "HH:MM" (24-hour).
    /// `None` for unknown ids.
    pub fn local_time(&self, id: &str, as_of: Timestamp) -> Option<String> {
        let spec = self.get(id)?;
        let local = as_of.with_timezone(&spec.timezone);
        Some(local.format("%H:%M").to_string())
    }

    /// Human-readable description of the next session opening.
    ///
    /// Scans today's sessions for the first one opening strictly after the
    /// current local minute; otherwise falls back to tomorrow's first
    /// session. The fallback does not check whether tomorrow is a trading
    /// day, so a Friday evening reports Saturday. `None` for unknown ids.
    pub fn next_session_description(&self, id: &str, as_of: Timestamp) -> Option<String> {
        let spec = self.get(id)?;
        let local = as_of.with_timezone(&spec.timezone);
        let minute = minute_of_day(local.hour(), local.minute());

        for session in &spec.sessions {
            if session.open_minute() > minute {
                return Some(format!("Opens at {}", session.open.format("%H:%M")));
            }
        }

        let first = spec.sessions.first()?;
        Some(format!("Opens tomorrow at {}", first.open.format("%H:%M")))
    }
}

impl Default for MarketClock {
    fn default() -> Self {
        Self::with_builtin()
    }
}

fn minute_of_day(hour: u32, minute: u32) -> MinuteOfDay {
    hour * 60 + minute
}

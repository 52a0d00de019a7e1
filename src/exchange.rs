//! Exchange metadata - venues, trading sessions, weekday masks

use crate::error::{MarketfolioError, Result};
use crate::types::MinuteOfDay;
use chrono::{NaiveTime, Timelike, Weekday};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// A contiguous open/close interval within a single trading day.
///
/// Boundaries are inclusive at minute granularity: a local clock reading
/// anywhere inside the open minute or the close minute counts as open.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub open: NaiveTime,
    pub close: NaiveTime,
}

impl Session {
    /// Create a session from open/close hour and minute.
    pub fn new(open_hour: u32, open_min: u32, close_hour: u32, close_min: u32) -> Result<Self> {
        let open = NaiveTime::from_hms_opt(open_hour, open_min, 0).ok_or_else(|| {
            MarketfolioError::CalendarError(format!("invalid open time {open_hour:02}:{open_min:02}"))
        })?;
        let close = NaiveTime::from_hms_opt(close_hour, close_min, 0).ok_or_else(|| {
            MarketfolioError::CalendarError(format!(
                "invalid close time {close_hour:02}:{close_min:02}"
            ))
        })?;
        if close < open {
            return Err(MarketfolioError::CalendarError(format!(
                "session closes before it opens: {open} > {close}"
            )));
        }
        Ok(Self { open, close })
    }

    /// Open time as minutes past local midnight.
    pub fn open_minute(&self) -> MinuteOfDay {
        self.open.hour() * 60 + self.open.minute()
    }

    /// Close time as minutes past local midnight.
    pub fn close_minute(&self) -> MinuteOfDay {
        self.close.hour() * 60 + self.close.minute()
    }

    /// Whether a local minute-of-day falls inside the closed [open, close] range.
    pub fn contains(&self, minute: MinuteOfDay) -> bool {
        self.open_minute() <= minute && minute <= self.close_minute()
    }
}

/// Immutable metadata for one trading venue.
///
/// Loaded once at startup and never mutated. The timezone is resolved to a
/// `chrono_tz::Tz` here, so later local-time conversion cannot fail.
#[derive(Debug, Clone)]
pub struct ExchangeSpec {
    /// Short identifier, e.g. "NYSE"
    pub id: String,
    /// Display name
    pub name: String,
    /// Country flag shown on the exchange card
    pub country: String,
    /// IANA timezone of the venue
    pub timezone: Tz,
    /// Trading sessions, ascending and non-overlapping
    pub sessions: Vec<Session>,
    /// Weekdays on which the venue trades
    pub weekdays: Vec<Weekday>,
}

impl ExchangeSpec {
    /// Build a spec, resolving the IANA timezone name.
    pub fn new(
        id: &str,
        name: &str,
        country: &str,
        timezone: &str,
        sessions: Vec<Session>,
        weekdays: Vec<Weekday>,
    ) -> Result<Self> {
        let tz: Tz = timezone.parse().map_err(|_| {
            MarketfolioError::CalendarError(format!("unknown timezone: {timezone}"))
        })?;
        Self::with_timezone(id, name, country, tz, sessions, weekdays)
    }

    /// Build a spec from an already-resolved timezone.
    pub fn with_timezone(
        id: &str,
        name: &str,
        country: &str,
        timezone: Tz,
        sessions: Vec<Session>,
        weekdays: Vec<Weekday>,
    ) -> Result<Self> {
        if sessions.is_empty() {
            return Err(MarketfolioError::CalendarError(format!(
                "exchange {id} has no trading sessions"
            )));
        }
        for pair in sessions.windows(2) {
            if pair[1].open_minute() <= pair[0].close_minute() {
                return Err(MarketfolioError::CalendarError(format!(
                    "exchange {id} has overlapping or unordered sessions"
                )));
            }
        }
        Ok(Self {
            id: id.to_string(),
            name: name.to_string(),
            country: country.to_string(),
            timezone,
            sessions,
            weekdays,
        })
    }

    /// Whether the venue trades on the given weekday.
    pub fn trades_on(&self, day: Weekday) -> bool {
        self.weekdays.contains(&day)
    }
}

fn mon_fri() -> Vec<Weekday> {
    vec![
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
    ]
}

/// The exchange table the tracker ships with.
pub fn builtin_exchanges() -> Vec<ExchangeSpec> {
    // Static known-good data; construction cannot fail.
    vec![
        ExchangeSpec::with_timezone(
            "NYSE",
            "New York Stock Exchange",
            "🇺🇸",
            chrono_tz::America::New_York,
            vec![Session::new(9, 30, 16, 0).unwrap()],
            mon_fri(),
        )
        .unwrap(),
        ExchangeSpec::with_timezone(
            "NASDAQ",
            "NASDAQ",
            "🇺🇸",
            chrono_tz::America::New_York,
            vec![Session::new(9, 30, 16, 0).unwrap()],
            mon_fri(),
        )
        .unwrap(),
        ExchangeSpec::with_timezone(
            "LSE",
            "London Stock Exchange",
            "🇬🇧",
            chrono_tz::Europe::London,
            vec![Session::new(8, 0, 16, 30).unwrap()],
            mon_fri(),
        )
        .unwrap(),
        ExchangeSpec::with_timezone(
            "HKEX",
            "Hong Kong Exchange",
            "🇭🇰",
            chrono_tz::Asia::Hong_Kong,
            vec![
                Session::new(9, 30, 12, 0).unwrap(),
                Session::new(13, 0, 16, 0).unwrap(),
            ],
            mon_fri(),
        )
        .unwrap(),
        ExchangeSpec::with_timezone(
            "TSE",
            "Tokyo Stock Exchange",
            "🇯🇵",
            chrono_tz::Asia::Tokyo,
            vec![
                Session::new(9, 0, 11, 30).unwrap(),
                Session::new(12, 30, 15, 25).unwrap(),
            ],
            mon_fri(),
        )
        .unwrap(),
        ExchangeSpec::with_timezone(
            "SSE",
            "Shanghai Stock Exchange",
            "🇨🇳",
            chrono_tz::Asia::Shanghai,
            vec![
                Session::new(9, 30, 11, 30).unwrap(),
                Session::new(13, 0, 14, 57).unwrap(),
            ],
            mon_fri(),
        )
        .unwrap(),
        ExchangeSpec::with_timezone(
            "ASX",
            "Australian Securities Exchange",
            "🇦🇺",
            chrono_tz::Australia::Sydney,
            vec![Session::new(10, 0, 16, 0).unwrap()],
            mon_fri(),
        )
        .unwrap(),
        ExchangeSpec::with_timezone(
            "BSE",
            "Bombay Stock Exchange",
            "🇮🇳",
            chrono_tz::Asia::Kolkata,
            vec![Session::new(9, 15, 15, 30).unwrap()],
            mon_fri(),
        )
        .unwrap(),
    ]
}

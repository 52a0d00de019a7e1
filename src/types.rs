//! Core types and constants

use chrono::{DateTime, Utc};

/// Timestamp type used throughout the library
pub type Timestamp = DateTime<Utc>;

/// Ticker symbol for a holding
pub type Symbol = String;

/// Price type
pub type Price = f64;

/// Quantity type
pub type Quantity = f64;

/// Money/cash type
pub type Cash = f64;

/// Unique identifier for holdings, assigned monotonically
pub type HoldingId = u64;

/// Minutes past local midnight (0..=1439)
pub type MinuteOfDay = u32;

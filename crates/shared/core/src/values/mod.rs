use chrono::{DateTime, Utc};

/// Price value - the exchange quotes whole integer prices
pub type Price = i64;

/// Order quantity
pub type Quantity = i64;

/// Traded volume reported by the exchange
pub type Volume = i64;

/// Exchange order identifier assigned by the order sequencer
pub type OrderId = u64;

/// Elapsed whole seconds since session start
pub type TickId = u64;

/// Timestamp in UTC
pub type Timestamp = DateTime<Utc>;

/// Symbol identifier for a tradeable instrument (always upper case on the wire)
pub type Symbol = String;

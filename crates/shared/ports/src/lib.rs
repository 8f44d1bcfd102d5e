//! Ports
//!
//! Port definitions (traits) for the trading bot.
//! These define the boundaries between domain logic and infrastructure.

mod clock;

pub use clock::Clock;

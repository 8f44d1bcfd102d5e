//! Core Domain
//!
//! Pure domain types shared by every component of the trading bot.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod universe;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{OrderIntent, Side, SymbolQuote, TickSnapshot, TradeUpdate, WireOrder};
pub use universe::SymbolUniverse;
pub use values::{OrderId, Price, Quantity, Symbol, TickId, Timestamp, Volume};

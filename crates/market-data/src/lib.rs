//! Market Data Aggregation
//!
//! Turns the stream of trade updates into one immutable snapshot per
//! one-second tick:
//!
//! ```text
//! TradeUpdate ──► TickAggregator ──(elapsed advanced)──► TickSnapshot ──► Strategy
//!                   │ per-symbol                                 │
//!                   │ SymbolAccumulator                          ▼
//!                   │                                     SnapshotHistory ──► report
//! ```
//!
//! Price is last-write-wins and carries over from one tick to the next;
//! volume is summed within a tick and reset at each boundary.

pub mod accumulator;
pub mod aggregator;
pub mod history;

pub use accumulator::SymbolAccumulator;
pub use aggregator::{Absorbed, AggregatorState, TickAggregator};
pub use history::SnapshotHistory;

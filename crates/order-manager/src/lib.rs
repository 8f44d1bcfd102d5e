//! Order Manager
//!
//! Sits between the strategy engine and the gateway. Every evaluation pass
//! hands its intents to the [`OrderSequencer`], which assigns exchange order
//! ids and produces wire orders ready for encoding.
//!
//! ## Architecture
//!
//! ```text
//! Strategy ──► Vec<OrderIntent> ──► ┌──────────────────────────┐
//!                                   │ OrderSequencer           │
//!                                   │  - one id block per pass │
//!                                   │  - ids 1, 3, 5, ...      │
//!                                   └────────────┬─────────────┘
//!                                                │ Vec<WireOrder>
//!                                                ▼
//!                                           Gateway Out
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use etc_order_manager::OrderSequencer;
//!
//! let mut sequencer = OrderSequencer::new();
//! let orders = sequencer.sequence(intents);
//! ```

pub mod sequencer;

pub use sequencer::{OrderSequencer, ID_STRIDE};

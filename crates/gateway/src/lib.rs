//! Gateway
//!
//! Gateway layer between the trading bot and the exchange. Provides:
//! - Line transport over a byte stream (TCP in production, in-memory in tests)
//! - The text wire codec for trade updates, handshakes and order commands
//! - Exchange target selection (production vs. named test environments)
//!
//! ## Architecture
//!
//! ```text
//!        Exchange
//!           │  "TRADE VALE 120 5\n"      ▲  "ADD 1 VALE SELL 120 2\n"
//!      ┌────▼──────────────────────────────┴────┐
//!      │ LineStream (receive_line / send_line)  │
//!      └────┬──────────────────────────────▲────┘
//!           │ raw line                     │ raw line (upper-cased)
//!      ┌────▼────┐                    ┌────┴────┐
//!      │ decode  │                    │ encode  │
//!      └────┬────┘                    └────▲────┘
//!           │ InboundMessage               │ OutboundCommand
//!           ▼                              │
//!        Session ──────────────────────────┘
//! ```
//!
//! ## Transport
//!
//! `LineStream` is generic over any `AsyncRead + AsyncWrite` stream. The
//! `LineTransport` trait lets the session run against a scripted exchange in
//! tests.

pub mod error;
pub mod messages;
pub mod transport;

// Re-export commonly used types
pub use error::{ConnectionError, ProtocolParseError, TransportError};
pub use messages::{
    market_data::{InboundMessage, decode},
    order::{OutboundCommand, decode_command, encode},
};
pub use transport::{
    LineTransport, MAX_LINE_LEN,
    config::{Endpoint, ExchangeConfig, TestExchange},
    stream::LineStream,
};

//! Transport abstraction layer
//!
//! Line-oriented, bidirectional byte stream to the exchange. No knowledge of
//! message semantics lives here; see `messages` for the wire grammar.

pub mod config;
pub mod stream;

pub use config::{Endpoint, ExchangeConfig, TestExchange};

use crate::error::TransportError;
use async_trait::async_trait;

/// Longest inbound line accepted, excluding the newline
pub const MAX_LINE_LEN: usize = 10_000;

/// Blocking line send/receive primitives
#[async_trait]
pub trait LineTransport: Send {
    /// Send one line; it is upper-cased and newline-terminated on the wire
    async fn send_line(&mut self, text: &str) -> Result<(), TransportError>;

    /// Wait for the next line, without its terminating newline
    async fn receive_line(&mut self) -> Result<String, TransportError>;
}

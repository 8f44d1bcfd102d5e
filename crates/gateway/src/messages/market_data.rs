//! Inbound market data messages

use crate::error::ProtocolParseError;
use crate::messages::parse_int;
use etc_core::TradeUpdate;

/// First token of a trade update line
pub const TRADE: &str = "TRADE";

/// A decoded inbound line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundMessage {
    /// `TRADE <SYMBOL> <price> <volume>`
    Trade(TradeUpdate),
    /// Any other message type, kept opaque
    Unrecognized { kind: String, raw: String },
}

impl InboundMessage {
    /// The message type token
    pub fn kind(&self) -> &str {
        match self {
            Self::Trade(_) => TRADE,
            Self::Unrecognized { kind, .. } => kind,
        }
    }
}

/// Decode one inbound line (newline already stripped)
///
/// Only `TRADE` lines are interpreted. Tokens after the volume are ignored.
pub fn decode(line: &str) -> Result<InboundMessage, ProtocolParseError> {
    let mut tokens = line.split_whitespace();
    let kind = tokens.next().ok_or(ProtocolParseError::Empty)?;

    if kind != TRADE {
        return Ok(InboundMessage::Unrecognized {
            kind: kind.to_string(),
            raw: line.to_string(),
        });
    }

    let missing = |field: &'static str| ProtocolParseError::MissingField {
        message: TRADE,
        field,
    };
    let symbol = tokens.next().ok_or_else(|| missing("symbol"))?;
    let price = parse_int(tokens.next().ok_or_else(|| missing("price"))?, "price")?;
    let volume = parse_int(tokens.next().ok_or_else(|| missing("volume"))?, "volume")?;

    Ok(InboundMessage::Trade(TradeUpdate::new(symbol, price, volume)))
}

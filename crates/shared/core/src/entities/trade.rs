use serde::{Deserialize, Serialize};

use crate::values::{Price, Symbol, Volume};

/// A single executed trade reported by the exchange
///
/// Ephemeral: decoded from one inbound line and folded straight into the
/// tick aggregator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeUpdate {
    pub symbol: Symbol,
    pub price: Price,
    pub volume: Volume,
}

impl TradeUpdate {
    pub fn new(symbol: impl Into<Symbol>, price: Price, volume: Volume) -> Self {
        Self {
            symbol: symbol.into(),
            price,
            volume,
        }
    }
}

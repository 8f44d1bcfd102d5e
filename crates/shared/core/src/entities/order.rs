use serde::{Deserialize, Serialize};

use super::Side;
use crate::values::{OrderId, Price, Quantity, Symbol};

/// A strategy's desire to trade, before an exchange id is assigned
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderIntent {
    pub symbol: Symbol,
    pub side: Side,
    pub price: Price,
    pub quantity: Quantity,
}

impl OrderIntent {
    /// Create a buy intent
    pub fn buy(symbol: impl Into<Symbol>, price: Price, quantity: Quantity) -> Self {
        Self {
            symbol: symbol.into(),
            side: Side::Buy,
            price,
            quantity,
        }
    }

    /// Create a sell intent
    pub fn sell(symbol: impl Into<Symbol>, price: Price, quantity: Quantity) -> Self {
        Self {
            symbol: symbol.into(),
            side: Side::Sell,
            price,
            quantity,
        }
    }

    /// Attach an exchange id, producing the order ready for transmission
    pub fn into_wire(self, id: OrderId) -> WireOrder {
        WireOrder {
            id,
            symbol: self.symbol,
            side: self.side,
            price: self.price,
            quantity: self.quantity,
        }
    }
}

/// Fully addressed order command ready for the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireOrder {
    pub id: OrderId,
    pub symbol: Symbol,
    pub side: Side,
    pub price: Price,
    pub quantity: Quantity,
}

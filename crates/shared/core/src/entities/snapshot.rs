use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::values::{Price, Symbol, TickId, Volume};

/// Aggregated state of one symbol over a completed tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SymbolQuote {
    /// Last traded price seen so far in the session (None until the first trade)
    pub price: Option<Price>,
    /// Volume traded during the tick
    pub volume: Volume,
}

impl SymbolQuote {
    pub fn new(price: Option<Price>, volume: Volume) -> Self {
        Self { price, volume }
    }
}

/// Immutable per-symbol state published when a tick completes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickSnapshot {
    tick_id: TickId,
    quotes: BTreeMap<Symbol, SymbolQuote>,
}

impl TickSnapshot {
    /// Build a snapshot from per-symbol quotes
    pub fn new(tick_id: TickId, quotes: impl IntoIterator<Item = (Symbol, SymbolQuote)>) -> Self {
        Self {
            tick_id,
            quotes: quotes.into_iter().collect(),
        }
    }

    /// The tick this snapshot describes (elapsed seconds before the advance)
    pub fn tick_id(&self) -> TickId {
        self.tick_id
    }

    /// Quote for a symbol, if the symbol is part of the snapshot
    pub fn quote(&self, symbol: &str) -> Option<&SymbolQuote> {
        self.quotes.get(symbol)
    }

    /// Last price for a symbol (None if unknown or never traded)
    pub fn price(&self, symbol: &str) -> Option<Price> {
        self.quotes.get(symbol).and_then(|q| q.price)
    }

    /// Volume traded in this tick for a symbol (zero if unknown)
    pub fn volume(&self, symbol: &str) -> Volume {
        self.quotes.get(symbol).map(|q| q.volume).unwrap_or(0)
    }

    /// Iterate over all quotes in symbol order
    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, &SymbolQuote)> {
        self.quotes.iter()
    }

    /// Number of symbols with a known price
    pub fn priced_count(&self) -> usize {
        self.quotes.values().filter(|q| q.price.is_some()).count()
    }
}

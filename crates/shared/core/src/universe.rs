//! The fixed set of symbols traded during a session

use serde::{Deserialize, Serialize};

use crate::values::Symbol;

/// Symbols of the reference deployment, in report order
pub const DEFAULT_SYMBOLS: [&str; 7] = ["MS", "BOND", "VALBZ", "VALE", "GS", "WFC", "XLF"];

/// Ordered, duplicate-free set of upper-case symbols
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Symbol>", into = "Vec<Symbol>")]
pub struct SymbolUniverse {
    symbols: Vec<Symbol>,
}

impl SymbolUniverse {
    /// Build a universe, upper-casing symbols and dropping duplicates
    pub fn new<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out: Vec<Symbol> = Vec::new();
        for symbol in symbols {
            let symbol = symbol.as_ref().trim().to_ascii_uppercase();
            if !symbol.is_empty() && !out.contains(&symbol) {
                out.push(symbol);
            }
        }
        Self { symbols: out }
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.symbols.iter().any(|s| s == symbol)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl Default for SymbolUniverse {
    fn default() -> Self {
        Self::new(DEFAULT_SYMBOLS)
    }
}

impl From<Vec<Symbol>> for SymbolUniverse {
    fn from(symbols: Vec<Symbol>) -> Self {
        Self::new(symbols)
    }
}

impl From<SymbolUniverse> for Vec<Symbol> {
    fn from(universe: SymbolUniverse) -> Self {
        universe.symbols
    }
}

use etc_core::{Price, SymbolQuote, Volume};

/// Mutable per-symbol state for the tick in progress
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SymbolAccumulator {
    last_price: Option<Price>,
    volume_sum: Volume,
}

impl SymbolAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one trade: overwrite the price, add the volume
    pub fn observe(&mut self, price: Price, volume: Volume) {
        self.last_price = Some(price);
        self.volume_sum = self.volume_sum.saturating_add(volume);
    }

    /// Start a new tick. The last price is kept.
    pub fn reset_volume(&mut self) {
        self.volume_sum = 0;
    }

    pub fn last_price(&self) -> Option<Price> {
        self.last_price
    }

    pub fn volume_sum(&self) -> Volume {
        self.volume_sum
    }

    pub fn quote(&self) -> SymbolQuote {
        SymbolQuote::new(self.last_price, self.volume_sum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unpriced() {
        let acc = SymbolAccumulator::new();
        assert_eq!(acc.last_price(), None);
        assert_eq!(acc.volume_sum(), 0);
    }

    #[test]
    fn test_last_write_wins_and_volume_sums() {
        let mut acc = SymbolAccumulator::new();
        acc.observe(100, 3);
        acc.observe(105, 4);
        acc.observe(98, 1);

        assert_eq!(acc.last_price(), Some(98));
        assert_eq!(acc.volume_sum(), 8);
    }

    #[test]
    fn test_reset_keeps_price() {
        let mut acc = SymbolAccumulator::new();
        acc.observe(100, 3);
        acc.reset_volume();

        assert_eq!(acc.quote(), SymbolQuote::new(Some(100), 0));
    }
}

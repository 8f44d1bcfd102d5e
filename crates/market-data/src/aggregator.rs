//! Tick Aggregator - time-bucketed state machine
//!
//! ```text
//! Accumulating(0) ──► Accumulating(k) ──► ... ──► Done
//!        elapsed > current: publish snapshot, reset volumes, jump to elapsed
//! ```
//!
//! Gaps are not filled: if several seconds pass between two checks, the
//! aggregator jumps straight to the new elapsed value and publishes a single
//! snapshot for the tick that was in progress.

use crate::accumulator::SymbolAccumulator;
use etc_core::{Symbol, SymbolUniverse, TickId, TickSnapshot, TradeUpdate};
use log::{debug, trace};
use std::collections::HashMap;

/// Where the aggregator is in the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregatorState {
    /// Folding trades into the given tick
    Accumulating { tick_id: TickId },
    /// The tick budget has been reached
    Done,
}

/// Outcome of absorbing one trade update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Absorbed {
    Applied,
    /// Symbol is not part of the session's universe
    UnknownSymbol,
    /// Session already finished; the update was ignored
    Finished,
}

/// Per-symbol accumulation keyed by elapsed whole seconds
pub struct TickAggregator {
    universe: SymbolUniverse,
    accumulators: HashMap<Symbol, SymbolAccumulator>,
    tick_budget: TickId,
    state: AggregatorState,
}

impl TickAggregator {
    /// Start at tick 0 with an accumulator per symbol in the universe
    pub fn new(universe: SymbolUniverse, tick_budget: TickId) -> Self {
        let accumulators = universe
            .iter()
            .map(|symbol| (symbol.clone(), SymbolAccumulator::new()))
            .collect();
        let state = if tick_budget == 0 {
            AggregatorState::Done
        } else {
            AggregatorState::Accumulating { tick_id: 0 }
        };

        Self {
            universe,
            accumulators,
            tick_budget,
            state,
        }
    }

    pub fn state(&self) -> AggregatorState {
        self.state
    }

    /// The tick in progress, if the session is still running
    pub fn current_tick(&self) -> Option<TickId> {
        match self.state {
            AggregatorState::Accumulating { tick_id } => Some(tick_id),
            AggregatorState::Done => None,
        }
    }

    pub fn is_done(&self) -> bool {
        self.state == AggregatorState::Done
    }

    pub fn tick_budget(&self) -> TickId {
        self.tick_budget
    }

    pub fn universe(&self) -> &SymbolUniverse {
        &self.universe
    }

    /// Accumulated state for a symbol in the tick in progress
    pub fn accumulator(&self, symbol: &str) -> Option<&SymbolAccumulator> {
        self.accumulators.get(symbol)
    }

    /// Fold a trade into the tick in progress
    pub fn absorb(&mut self, update: &TradeUpdate) -> Absorbed {
        if self.is_done() {
            return Absorbed::Finished;
        }
        match self.accumulators.get_mut(&update.symbol) {
            Some(acc) => {
                acc.observe(update.price, update.volume);
                Absorbed::Applied
            }
            None => Absorbed::UnknownSymbol,
        }
    }

    /// Check the elapsed-second counter and publish a snapshot if it advanced
    ///
    /// The snapshot is tagged with the tick that just completed. A counter
    /// that did not move forward (or moved backward) publishes nothing.
    pub fn advance(&mut self, elapsed: TickId) -> Option<TickSnapshot> {
        let AggregatorState::Accumulating { tick_id } = self.state else {
            return None;
        };
        if elapsed <= tick_id {
            if elapsed < tick_id {
                trace!("Clock reads {}s, behind tick {}; ignoring", elapsed, tick_id);
            }
            return None;
        }

        let snapshot = self.snapshot(tick_id);
        for acc in self.accumulators.values_mut() {
            acc.reset_volume();
        }

        if elapsed - tick_id > 1 {
            debug!(
                "Skipped {} empty tick(s) between {} and {}",
                elapsed - tick_id - 1,
                tick_id,
                elapsed
            );
        }

        self.state = if elapsed >= self.tick_budget {
            debug!("Tick budget {} reached", self.tick_budget);
            AggregatorState::Done
        } else {
            AggregatorState::Accumulating { tick_id: elapsed }
        };

        Some(snapshot)
    }

    fn snapshot(&self, tick_id: TickId) -> TickSnapshot {
        TickSnapshot::new(
            tick_id,
            self.accumulators
                .iter()
                .map(|(symbol, acc)| (symbol.clone(), acc.quote())),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use etc_core::SymbolQuote;

    fn aggregator() -> TickAggregator {
        TickAggregator::new(SymbolUniverse::default(), 300)
    }

    #[test]
    fn test_starts_at_tick_zero() {
        let agg = aggregator();
        assert_eq!(agg.state(), AggregatorState::Accumulating { tick_id: 0 });
        assert_eq!(agg.current_tick(), Some(0));
    }

    #[test]
    fn test_zero_budget_is_done() {
        let agg = TickAggregator::new(SymbolUniverse::default(), 0);
        assert!(agg.is_done());
    }

    #[test]
    fn test_folds_within_tick() {
        let mut agg = aggregator();
        agg.absorb(&TradeUpdate::new("MS", 30, 4));
        agg.absorb(&TradeUpdate::new("MS", 32, 6));
        assert!(agg.advance(0).is_none());

        let acc = agg.accumulator("MS").unwrap();
        assert_eq!(acc.last_price(), Some(32));
        assert_eq!(acc.volume_sum(), 10);
    }

    #[test]
    fn test_unknown_symbol_ignored() {
        let mut agg = aggregator();
        assert_eq!(agg.absorb(&TradeUpdate::new("AAPL", 150, 1)), Absorbed::UnknownSymbol);
        assert!(agg.accumulator("AAPL").is_none());
    }

    #[test]
    fn test_publishes_completed_tick() {
        let mut agg = aggregator();
        agg.absorb(&TradeUpdate::new("VALE", 120, 5));

        let snap = agg.advance(1).unwrap();
        assert_eq!(snap.tick_id(), 0);
        assert_eq!(snap.quote("VALE"), Some(&SymbolQuote::new(Some(120), 5)));
        assert_eq!(snap.quote("GS"), Some(&SymbolQuote::new(None, 0)));
        assert_eq!(agg.current_tick(), Some(1));

        // Volume reset, price carried over
        let acc = agg.accumulator("VALE").unwrap();
        assert_eq!(acc.volume_sum(), 0);
        assert_eq!(acc.last_price(), Some(120));
    }

    #[test]
    fn test_gap_jumps_without_synthesizing() {
        let mut agg = aggregator();
        assert_eq!(agg.advance(1).map(|s| s.tick_id()), Some(0));
        assert_eq!(agg.advance(5).map(|s| s.tick_id()), Some(1));
        assert_eq!(agg.current_tick(), Some(5));
        assert_eq!(agg.advance(6).map(|s| s.tick_id()), Some(5));
    }

    #[test]
    fn test_backward_clock_does_not_publish() {
        let mut agg = aggregator();
        agg.advance(3);
        assert!(agg.advance(2).is_none());
        assert_eq!(agg.current_tick(), Some(3));
    }

    #[test]
    fn test_done_at_budget() {
        let mut agg = TickAggregator::new(SymbolUniverse::default(), 3);
        assert_eq!(agg.advance(2).map(|s| s.tick_id()), Some(0));
        let last = agg.advance(3).unwrap();
        assert_eq!(last.tick_id(), 2);
        assert!(agg.is_done());

        assert!(agg.advance(4).is_none());
        assert_eq!(agg.absorb(&TradeUpdate::new("MS", 1, 1)), Absorbed::Finished);
    }

    #[test]
    fn test_overshooting_budget_finishes() {
        let mut agg = TickAggregator::new(SymbolUniverse::default(), 300);
        assert_eq!(agg.advance(450).map(|s| s.tick_id()), Some(0));
        assert!(agg.is_done());
    }
}

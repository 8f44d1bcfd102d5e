//! Integration test: strategy output through the sequencer
//!
//! Runs several evaluation passes of the default rule book and checks the ids
//! stay strictly increasing with one block per pass.

use etc_core::{SymbolQuote, TickSnapshot};
use etc_order_manager::OrderSequencer;
use etc_strategy::{RuleBook, Strategy, StrategyConfig};

fn snapshot(tick_id: u64, prices: &[(&str, i64)]) -> TickSnapshot {
    TickSnapshot::new(
        tick_id,
        prices
            .iter()
            .map(|(symbol, price)| (symbol.to_string(), SymbolQuote::new(Some(*price), 1))),
    )
}

#[test]
fn test_ids_across_passes() {
    let _ = env_logger::try_init();

    let rules = RuleBook::from_config(&StrategyConfig::default());
    let mut sequencer = OrderSequencer::new();

    let passes = [
        snapshot(0, &[("VALE", 120), ("VALBZ", 100)]),
        snapshot(1, &[("VALE", 100), ("VALBZ", 100)]),
        snapshot(
            2,
            &[("XLF", 50), ("BOND", 10), ("MS", 10), ("GS", 10), ("WFC", 10)],
        ),
        snapshot(3, &[("VALE", 100), ("VALBZ", 120)]),
    ];

    let mut ids = Vec::new();
    for snapshot in &passes {
        let orders = sequencer.sequence(rules.evaluate(snapshot));
        ids.extend(orders.iter().map(|o| o.id));
    }

    // pass 1 (quiet) still consumed ids 3 and 4
    assert_eq!(ids, vec![1, 2, 5, 7, 8]);
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
}

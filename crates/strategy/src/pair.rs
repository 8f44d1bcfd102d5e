//! Pair rule
//!
//! Two listings of the same underlying should trade close together. When one
//! is more than `threshold` above the other, sell the rich leg and buy the
//! cheap one.

use crate::config::PairRuleConfig;
use crate::strategy::Strategy;
use etc_core::{OrderIntent, TickSnapshot};

pub struct PairRule {
    config: PairRuleConfig,
}

impl PairRule {
    pub fn new(config: PairRuleConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PairRuleConfig {
        &self.config
    }
}

impl Strategy for PairRule {
    fn name(&self) -> &str {
        "PairRule"
    }

    fn evaluate(&self, snapshot: &TickSnapshot) -> Vec<OrderIntent> {
        let PairRuleConfig {
            leg_a,
            leg_b,
            threshold,
            quantity,
            ..
        } = &self.config;

        // Both legs need a price before the gap means anything
        let (Some(price_a), Some(price_b)) = (snapshot.price(leg_a), snapshot.price(leg_b)) else {
            return Vec::new();
        };

        if price_a > price_b.saturating_add(*threshold) {
            log::debug!(
                "[PairRule] {} {} > {} {} + {}",
                leg_a, price_a, leg_b, price_b, threshold
            );
            vec![
                OrderIntent::sell(leg_a.as_str(), price_a, *quantity),
                OrderIntent::buy(leg_b.as_str(), price_b, *quantity),
            ]
        } else if price_a.saturating_add(*threshold) < price_b {
            log::debug!(
                "[PairRule] {} {} + {} < {} {}",
                leg_a, price_a, threshold, leg_b, price_b
            );
            vec![
                OrderIntent::sell(leg_b.as_str(), price_b, *quantity),
                OrderIntent::buy(leg_a.as_str(), price_a, *quantity),
            ]
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use etc_core::SymbolQuote;

    fn snapshot(vale: Option<i64>, valbz: Option<i64>) -> TickSnapshot {
        TickSnapshot::new(
            0,
            [
                ("VALE".to_string(), SymbolQuote::new(vale, 0)),
                ("VALBZ".to_string(), SymbolQuote::new(valbz, 0)),
            ],
        )
    }

    fn rule() -> PairRule {
        PairRule::new(PairRuleConfig::default())
    }

    #[test]
    fn test_sells_rich_leg_a() {
        let intents = rule().evaluate(&snapshot(Some(120), Some(100)));
        assert_eq!(
            intents,
            vec![
                OrderIntent::sell("VALE", 120, 2),
                OrderIntent::buy("VALBZ", 100, 2),
            ]
        );
    }

    #[test]
    fn test_sells_rich_leg_b() {
        let intents = rule().evaluate(&snapshot(Some(100), Some(111)));
        assert_eq!(
            intents,
            vec![
                OrderIntent::sell("VALBZ", 111, 2),
                OrderIntent::buy("VALE", 100, 2),
            ]
        );
    }

    #[test]
    fn test_threshold_is_strict() {
        assert!(rule().evaluate(&snapshot(Some(110), Some(100))).is_empty());
        assert!(rule().evaluate(&snapshot(Some(100), Some(110))).is_empty());
        assert!(rule().evaluate(&snapshot(Some(105), Some(100))).is_empty());
    }

    #[test]
    fn test_unpriced_leg_never_fires() {
        assert!(rule().evaluate(&snapshot(Some(500), None)).is_empty());
        assert!(rule().evaluate(&snapshot(None, Some(500))).is_empty());
    }
}

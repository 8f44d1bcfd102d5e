//! Strategy trait and the rule book that combines rules

use crate::basket::BasketRule;
use crate::config::StrategyConfig;
use crate::pair::PairRule;
use etc_core::{OrderIntent, TickSnapshot};

/// A trading rule evaluated once per completed tick
///
/// Implementations must be deterministic: the same snapshot always yields the
/// same intents, in the same order.
pub trait Strategy: Send {
    /// Rule name for logging
    fn name(&self) -> &str;

    /// Order intents for a completed tick
    fn evaluate(&self, snapshot: &TickSnapshot) -> Vec<OrderIntent>;
}

/// Ordered set of rules; all of them run on every snapshot
#[derive(Default)]
pub struct RuleBook {
    rules: Vec<Box<dyn Strategy>>,
}

impl RuleBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the enabled rules, pair rule first
    pub fn from_config(config: &StrategyConfig) -> Self {
        let mut book = Self::new();
        if config.pair.enabled {
            book = book.with_rule(PairRule::new(config.pair.clone()));
        }
        if config.basket.enabled {
            book = book.with_rule(BasketRule::new(config.basket.clone()));
        }
        book
    }

    pub fn with_rule(mut self, rule: impl Strategy + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Strategy for RuleBook {
    fn name(&self) -> &str {
        "RuleBook"
    }

    fn evaluate(&self, snapshot: &TickSnapshot) -> Vec<OrderIntent> {
        self.rules
            .iter()
            .flat_map(|rule| {
                let intents = rule.evaluate(snapshot);
                if !intents.is_empty() {
                    log::debug!(
                        "[{}] tick {}: {} intent(s)",
                        rule.name(),
                        snapshot.tick_id(),
                        intents.len()
                    );
                }
                intents
            })
            .collect()
    }
}

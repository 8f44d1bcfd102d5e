//! Basket rule
//!
//! `target_weight` units of the target should be worth the weighted sum of
//! its components. When the target is rich by more than `offset`, sell it;
//! when it is cheap by more than `offset`, buy it.

use crate::config::{BasketRuleConfig, HedgePolicy};
use crate::strategy::Strategy;
use etc_core::{OrderIntent, Price, Quantity, Side, TickSnapshot};

pub struct BasketRule {
    config: BasketRuleConfig,
}

impl BasketRule {
    pub fn new(config: BasketRuleConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BasketRuleConfig {
        &self.config
    }

    /// Weighted sum of component prices, None if any component is unpriced
    pub fn basket_value(&self, snapshot: &TickSnapshot) -> Option<i64> {
        self.config
            .components
            .iter()
            .try_fold(0i64, |sum, component| {
                let price = snapshot.price(&component.symbol)?;
                Some(sum.saturating_add(component.weight.saturating_mul(price)))
            })
    }

    /// Component quantity offsetting `quantity` units of the target, rounded up
    fn hedge_quantity(&self, weight: i64) -> Quantity {
        let units = weight.saturating_mul(self.config.quantity);
        let per = self.config.target_weight.max(1);
        units / per + i64::from(units % per != 0)
    }

    fn orders(&self, side: Side, target_price: Price, snapshot: &TickSnapshot) -> Vec<OrderIntent> {
        let target = &self.config.target;
        let mut intents = vec![match side {
            Side::Buy => OrderIntent::buy(target.as_str(), target_price, self.config.quantity),
            Side::Sell => OrderIntent::sell(target.as_str(), target_price, self.config.quantity),
        }];

        if self.config.hedge == HedgePolicy::Complete {
            for component in &self.config.components {
                // basket_value already checked every component is priced
                let Some(price) = snapshot.price(&component.symbol) else {
                    continue;
                };
                intents.push(OrderIntent {
                    symbol: component.symbol.clone(),
                    side: side.opposite(),
                    price,
                    quantity: self.hedge_quantity(component.weight),
                });
            }
        }

        intents
    }
}

impl Strategy for BasketRule {
    fn name(&self) -> &str {
        "BasketRule"
    }

    fn evaluate(&self, snapshot: &TickSnapshot) -> Vec<OrderIntent> {
        let Some(target_price) = snapshot.price(&self.config.target) else {
            return Vec::new();
        };
        let Some(basket) = self.basket_value(snapshot) else {
            return Vec::new();
        };

        let weighted_target = self.config.target_weight.saturating_mul(target_price);
        let offset = self.config.offset;

        if weighted_target > basket.saturating_add(offset) {
            log::debug!(
                "[BasketRule] {} rich: {} > {} + {}",
                self.config.target, weighted_target, basket, offset
            );
            self.orders(Side::Sell, target_price, snapshot)
        } else if weighted_target.saturating_add(offset) < basket {
            log::debug!(
                "[BasketRule] {} cheap: {} + {} < {}",
                self.config.target, weighted_target, offset, basket
            );
            self.orders(Side::Buy, target_price, snapshot)
        } else {
            Vec::new()
        }
    }
}

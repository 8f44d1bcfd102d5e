//! Rule parameters
//!
//! Defaults reproduce the reference deployment: VALE/VALBZ pair with a
//! spread threshold of 10, and XLF against 3 BOND + 3 MS + 2 GS + 2 WFC
//! with an offset of 100.

use crate::error::StrategyConfigError;
use etc_core::{Price, Quantity, Symbol, SymbolUniverse};
use serde::{Deserialize, Serialize};

/// Two related symbols expected to trade at roughly the same price
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PairRuleConfig {
    pub enabled: bool,
    pub leg_a: Symbol,
    pub leg_b: Symbol,
    /// Price gap that must be exceeded before trading
    pub threshold: Price,
    pub quantity: Quantity,
}

impl Default for PairRuleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            leg_a: "VALE".to_string(),
            leg_b: "VALBZ".to_string(),
            threshold: 10,
            quantity: 2,
        }
    }
}

/// One constituent of the basket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasketComponent {
    pub symbol: Symbol,
    pub weight: i64,
}

impl BasketComponent {
    pub fn new(symbol: impl Into<Symbol>, weight: i64) -> Self {
        Self {
            symbol: symbol.into(),
            weight,
        }
    }
}

/// What the basket rule sends when it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HedgePolicy {
    /// Only the priced symbol is traded
    #[default]
    SingleLeg,
    /// The priced symbol plus an opposite order on every component
    Complete,
}

/// A symbol priced against a weighted basket of other symbols
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BasketRuleConfig {
    pub enabled: bool,
    pub target: Symbol,
    /// Multiplier applied to the target's price
    pub target_weight: i64,
    pub components: Vec<BasketComponent>,
    /// Margin the weighted prices must differ by
    pub offset: i64,
    pub quantity: Quantity,
    pub hedge: HedgePolicy,
}

impl Default for BasketRuleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            target: "XLF".to_string(),
            target_weight: 10,
            components: vec![
                BasketComponent::new("BOND", 3),
                BasketComponent::new("MS", 3),
                BasketComponent::new("GS", 2),
                BasketComponent::new("WFC", 2),
            ],
            offset: 100,
            quantity: 2,
            hedge: HedgePolicy::SingleLeg,
        }
    }
}

/// All rule parameters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyConfig {
    pub pair: PairRuleConfig,
    pub basket: BasketRuleConfig,
}

impl StrategyConfig {
    /// Upper-case every symbol, matching the wire and the universe
    pub fn normalize(&mut self) {
        self.pair.leg_a.make_ascii_uppercase();
        self.pair.leg_b.make_ascii_uppercase();
        self.basket.target.make_ascii_uppercase();
        for component in &mut self.basket.components {
            component.symbol.make_ascii_uppercase();
        }
    }

    /// Check the enabled rules against the session's symbol universe
    pub fn validate(&self, universe: &SymbolUniverse) -> Result<(), StrategyConfigError> {
        let known = |rule: &'static str, symbol: &str| {
            if universe.contains(symbol) {
                Ok(())
            } else {
                Err(StrategyConfigError::UnknownSymbol {
                    rule,
                    symbol: symbol.to_string(),
                })
            }
        };

        if self.pair.enabled {
            let pair = &self.pair;
            known("Pair", &pair.leg_a)?;
            known("Pair", &pair.leg_b)?;
            if pair.leg_a == pair.leg_b {
                return Err(StrategyConfigError::SameLegs(pair.leg_a.clone()));
            }
            if pair.threshold < 0 {
                return Err(StrategyConfigError::NegativeThreshold(pair.threshold));
            }
            if pair.quantity <= 0 {
                return Err(StrategyConfigError::NonPositiveQuantity {
                    rule: "Pair",
                    quantity: pair.quantity,
                });
            }
        }

        if self.basket.enabled {
            let basket = &self.basket;
            known("Basket", &basket.target)?;
            if basket.components.is_empty() {
                return Err(StrategyConfigError::EmptyBasket);
            }
            if basket.target_weight <= 0 {
                return Err(StrategyConfigError::NonPositiveWeight {
                    symbol: basket.target.clone(),
                    weight: basket.target_weight,
                });
            }
            for component in &basket.components {
                known("Basket", &component.symbol)?;
                if component.weight <= 0 {
                    return Err(StrategyConfigError::NonPositiveWeight {
                        symbol: component.symbol.clone(),
                        weight: component.weight,
                    });
                }
            }
            if basket.quantity <= 0 {
                return Err(StrategyConfigError::NonPositiveQuantity {
                    rule: "Basket",
                    quantity: basket.quantity,
                });
            }
        }

        Ok(())
    }
}

//! Strategy configuration errors

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StrategyConfigError {
    #[error("{rule} rule trades '{symbol}', which is not in the symbol universe")]
    UnknownSymbol { rule: &'static str, symbol: String },

    #[error("{rule} rule quantity must be positive, got {quantity}")]
    NonPositiveQuantity { rule: &'static str, quantity: i64 },

    #[error("Pair rule threshold must not be negative, got {0}")]
    NegativeThreshold(i64),

    #[error("Pair rule legs must differ, both are '{0}'")]
    SameLegs(String),

    #[error("Basket rule has no components")]
    EmptyBasket,

    #[error("Basket weight for '{symbol}' must be positive, got {weight}")]
    NonPositiveWeight { symbol: String, weight: i64 },
}

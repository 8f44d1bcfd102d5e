//! Strategy Engine
//!
//! Pure functions from a completed tick's snapshot to order intents:
//! - **Pair rule**: trades two related symbols when their prices diverge past a threshold
//! - **Basket rule**: trades a symbol against a weighted basket of its components
//!
//! ## Architecture
//!
//! ```text
//!  TickSnapshot
//!       │
//!  ┌────▼─────────────────────┐
//!  │ RuleBook                 │
//!  │  ├─ PairRule   (VALE/VALBZ)
//!  │  └─ BasketRule (XLF vs BOND, MS, GS, WFC)
//!  └────┬─────────────────────┘
//!       │ Vec<OrderIntent>
//!       ▼
//!  Order Sequencer
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use etc_strategy::{RuleBook, Strategy, StrategyConfig};
//!
//! let rules = RuleBook::from_config(&StrategyConfig::default());
//! let intents = rules.evaluate(&snapshot);
//! ```

pub mod basket;
pub mod config;
pub mod error;
pub mod pair;
pub mod strategy;

// Re-export main types
pub use basket::BasketRule;
pub use config::{BasketComponent, BasketRuleConfig, HedgePolicy, PairRuleConfig, StrategyConfig};
pub use error::StrategyConfigError;
pub use pair::PairRule;
pub use strategy::{RuleBook, Strategy};

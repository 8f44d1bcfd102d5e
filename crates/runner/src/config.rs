//! Session configuration
//!
//! Every field defaults to the reference deployment, so an empty JSON object
//! (or no file at all) gives a working production setup.

use crate::error::ConfigError;
use etc_core::{SymbolUniverse, TickId};
use etc_gateway::ExchangeConfig;
use etc_strategy::StrategyConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Identity sent in the handshake
    pub team_name: String,
    pub exchange: ExchangeConfig,
    /// Number of one-second ticks to trade
    pub tick_budget: TickId,
    /// Tracked symbols, also the report's section order
    pub universe: SymbolUniverse,
    pub strategy: StrategyConfig,
    /// Where the tick history is written; None disables the report
    pub report_path: Option<PathBuf>,
    /// How long to wait for the exchange's closing reply; None skips it
    pub final_reply_timeout_ms: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            team_name: "STOCKOVERFLOW".to_string(),
            exchange: ExchangeConfig::default(),
            tick_budget: 300,
            universe: SymbolUniverse::default(),
            strategy: StrategyConfig::default(),
            report_path: Some(PathBuf::from("stocks.csv")),
            final_reply_timeout_ms: Some(5000),
        }
    }
}

/// Load a session configuration from a JSON file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SessionConfig, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut config: SessionConfig =
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    config.normalize();
    Ok(config)
}

/// Load a session configuration from a JSON string
pub fn load_config_from_str(json: &str) -> Result<SessionConfig, ConfigError> {
    let mut config: SessionConfig =
        serde_json::from_str(json).map_err(|source| ConfigError::Parse {
            path: PathBuf::from("<inline>"),
            source,
        })?;
    config.normalize();
    Ok(config)
}

/// Load the embedded reference configuration
pub fn load_default_config() -> Result<SessionConfig, ConfigError> {
    load_config_from_str(include_str!("session_config.json"))
}

impl SessionConfig {
    /// Upper-case the team name and every rule symbol
    pub fn normalize(&mut self) {
        self.team_name = self.team_name.trim().to_uppercase();
        self.strategy.normalize();
    }

    pub fn final_reply_timeout(&self) -> Option<Duration> {
        self.final_reply_timeout_ms.map(Duration::from_millis)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.team_name.trim().is_empty() {
            return Err(ConfigError::Invalid("team name is empty".to_string()));
        }
        if self.tick_budget == 0 {
            return Err(ConfigError::Invalid("tick budget must be at least 1".to_string()));
        }
        if self.universe.is_empty() {
            return Err(ConfigError::Invalid("symbol universe is empty".to_string()));
        }
        self.strategy.validate(&self.universe)?;
        Ok(())
    }
}

//! Exchange target configuration
//!
//! Selects between the production exchange and one of the named test
//! environments. Each test environment listens on a fixed offset from the
//! base port.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Named test environments, in port-offset order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TestExchange {
    /// Behaves like production
    ProdLike,
    /// Slower market
    #[default]
    Slower,
    /// No other participants
    Empty,
}

impl TestExchange {
    /// Port offset from the base port
    pub fn index(&self) -> u16 {
        match self {
            Self::ProdLike => 0,
            Self::Slower => 1,
            Self::Empty => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProdLike => "prod-like",
            Self::Slower => "slower",
            Self::Empty => "empty",
        }
    }
}

#[derive(Error, Debug)]
#[error("Unknown test exchange '{0}' (expected prod-like, slower or empty)")]
pub struct ParseTestExchangeError(String);

impl FromStr for TestExchange {
    type Err = ParseTestExchangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "prod-like" | "0" => Ok(Self::ProdLike),
            "slower" | "1" => Ok(Self::Slower),
            "empty" | "2" => Ok(Self::Empty),
            _ => Err(ParseTestExchangeError(s.to_string())),
        }
    }
}

/// Host and port to connect to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub host: String,
    pub port: u16,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Where the session connects
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExchangeConfig {
    /// Connect to a test environment instead of production
    pub test_mode: bool,
    /// Which test environment (only used in test mode)
    pub test_exchange: TestExchange,
    pub production_host: String,
    /// Test hosts are `<prefix><team name>`
    pub test_host_prefix: String,
    /// Text protocol port; test environments add their index
    pub base_port: u16,
    /// Explicit host, bypassing the mode selection
    pub host: Option<String>,
    /// Explicit port, bypassing the mode selection
    pub port: Option<u16>,
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        Self {
            test_mode: false,
            test_exchange: TestExchange::default(),
            production_host: "production".to_string(),
            test_host_prefix: "test-exch-".to_string(),
            base_port: 20000,
            host: None,
            port: None,
        }
    }
}

impl ExchangeConfig {
    /// Resolve the endpoint for a team
    pub fn endpoint(&self, team_name: &str) -> Endpoint {
        let (host, port) = if self.test_mode {
            (
                format!("{}{}", self.test_host_prefix, team_name.to_ascii_lowercase()),
                self.base_port.saturating_add(self.test_exchange.index()),
            )
        } else {
            (self.production_host.clone(), self.base_port)
        };

        Endpoint {
            host: self.host.clone().unwrap_or(host),
            port: self.port.unwrap_or(port),
        }
    }
}

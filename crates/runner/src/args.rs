use crate::config::{SessionConfig, load_config, load_default_config};
use crate::error::ConfigError;
use clap::Parser;
use etc_core::TickId;
use etc_gateway::TestExchange;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// JSON session config; defaults apply to anything it leaves out
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Connect to a test exchange instead of production
    #[arg(long)]
    pub test_mode: bool,

    /// Which test exchange to use in test mode
    #[arg(long, value_name = "prod-like|slower|empty")]
    pub test_exchange: Option<TestExchange>,

    /// Exchange host, bypassing the mode selection
    #[arg(long)]
    pub host: Option<String>,

    /// Exchange port, bypassing the mode selection
    #[arg(long)]
    pub port: Option<u16>,

    /// Team name sent in the handshake
    #[arg(long)]
    pub team: Option<String>,

    /// Number of one-second ticks to trade
    #[arg(long)]
    pub ticks: Option<TickId>,

    /// Where to write the tick history
    #[arg(long, conflicts_with = "no_report")]
    pub report: Option<PathBuf>,

    /// Skip the tick history report
    #[arg(long)]
    pub no_report: bool,
}

impl Args {
    /// Build the session config: file (or defaults), then command-line overrides
    pub fn session_config(&self) -> Result<SessionConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => load_default_config()?,
        };

        if self.test_mode {
            config.exchange.test_mode = true;
        }
        if let Some(test_exchange) = self.test_exchange {
            config.exchange.test_exchange = test_exchange;
        }
        if let Some(host) = &self.host {
            config.exchange.host = Some(host.clone());
        }
        if let Some(port) = self.port {
            config.exchange.port = Some(port);
        }
        if let Some(team) = &self.team {
            config.team_name = team.clone();
        }
        if let Some(ticks) = self.ticks {
            config.tick_budget = ticks;
        }
        if let Some(report) = &self.report {
            config.report_path = Some(report.clone());
        }
        if self.no_report {
            config.report_path = None;
        }

        config.normalize();
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_flags() {
        let args = Args::parse_from(["etc-bot"]);
        let config = args.session_config().unwrap();
        assert_eq!(config, SessionConfig::default());
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "etc-bot",
            "--test-mode",
            "--test-exchange",
            "prod-like",
            "--team",
            "bots",
            "--ticks",
            "30",
            "--no-report",
        ]);
        let config = args.session_config().unwrap();

        assert!(config.exchange.test_mode);
        assert_eq!(config.exchange.test_exchange, TestExchange::ProdLike);
        assert_eq!(config.team_name, "BOTS");
        assert_eq!(config.tick_budget, 30);
        assert_eq!(config.report_path, None);

        let endpoint = config.exchange.endpoint(&config.team_name);
        assert_eq!(endpoint.host, "test-exch-bots");
        assert_eq!(endpoint.port, 20000);
    }

    #[test]
    fn test_host_and_port_override() {
        let args = Args::parse_from(["etc-bot", "--host", "127.0.0.1", "--port", "9000"]);
        let config = args.session_config().unwrap();
        let endpoint = config.exchange.endpoint(&config.team_name);
        assert_eq!(endpoint.host, "127.0.0.1");
        assert_eq!(endpoint.port, 9000);
    }

    #[test]
    fn test_zero_ticks_rejected() {
        let args = Args::parse_from(["etc-bot", "--ticks", "0"]);
        assert!(matches!(args.session_config(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_report_conflicts_with_no_report() {
        let result = Args::try_parse_from(["etc-bot", "--report", "a.csv", "--no-report"]);
        assert!(result.is_err());
    }
}

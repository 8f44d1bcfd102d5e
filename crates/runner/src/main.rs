use anyhow::Context;
use clap::Parser;
use etc_runner::{Args, run_session, write_report};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = args.session_config().context("Failed to build session config")?;

    log::info!(
        "Starting session for {} ({} mode)",
        config.team_name,
        if config.exchange.test_mode { "test" } else { "production" }
    );

    let outcome = run_session(&config).await.context("Session aborted")?;

    if let Some(path) = &config.report_path {
        if let Err(e) = write_report(path, &config.universe, &outcome.history) {
            log::error!("Failed to write report to {}: {}", path.display(), e);
        }
    }

    log::info!("Summary: {:?}", outcome.summary);
    Ok(())
}

//! LINEWATCH — DraftKings NFL betting-line scraper.
//!
//! Entry point. Loads configuration, initialises structured logging,
//! and runs the fetch→extract→report loop with graceful shutdown.

use anyhow::Result;
use tracing::info;

use linewatch::config::AppConfig;
use linewatch::engine::ScrapeEngine;
use linewatch::extract::MarketExtractor;
use linewatch::fetch::ChromeFetcher;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (non-fatal if missing)
    let _ = dotenv::dotenv();

    let cfg = AppConfig::load("config.toml")?;

    init_logging();

    info!(
        url = %cfg.scraper.url,
        interval_secs = cfg.scraper.interval_secs,
        page_timeout_secs = cfg.scraper.page_timeout_secs,
        "Starting DraftKings NFL scraper"
    );

    let engine = ScrapeEngine::new(
        Box::new(ChromeFetcher::new()),
        MarketExtractor::new()?,
        cfg.scraper.url.clone(),
        cfg.scraper.page_timeout(),
    );

    let shutdown = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    info!(
        interval_secs = cfg.scraper.interval_secs,
        "Entering scrape loop. Press Ctrl+C to stop."
    );
    engine.run(cfg.scraper.interval(), shutdown).await;

    info!("Scraper shut down cleanly.");
    Ok(())
}

/// Initialise the `tracing` subscriber.
fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("linewatch=info"));

    if std::env::var("LINEWATCH_LOG_JSON").is_ok() {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .init();
    } else {
        fmt().with_env_filter(env_filter).with_target(true).init();
    }
}

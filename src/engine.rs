//! Scrape cycle orchestration.
//!
//! The engine owns the page source and extractor and runs the
//! fetch→extract→report cycle on a fixed interval. Exactly one cycle is
//! in flight at a time; a failed cycle is logged and skipped, and the
//! next one starts on schedule regardless.

use std::future::Future;
use std::time::Duration;

use tokio::time::{interval, MissedTickBehavior};
use tracing::{error, info};

use crate::extract::{selectors, MarketExtractor};
use crate::fetch::{FetchError, PageSource};
use crate::report;
use crate::types::Market;

/// Periodic scraper: fetch the rendered page, extract markets, report.
pub struct ScrapeEngine {
    source: Box<dyn PageSource>,
    extractor: MarketExtractor,
    url: String,
    page_timeout: Duration,
}

impl ScrapeEngine {
    pub fn new(
        source: Box<dyn PageSource>,
        extractor: MarketExtractor,
        url: String,
        page_timeout: Duration,
    ) -> Self {
        Self {
            source,
            extractor,
            url,
            page_timeout,
        }
    }

    /// Run one fetch→extract cycle and return the extracted markets.
    ///
    /// Extraction itself cannot fail; the only error source is the page
    /// fetch.
    pub async fn run_cycle(&self) -> Result<Vec<Market>, FetchError> {
        let html = self
            .source
            .fetch(&self.url, selectors::CONTENT_READY, self.page_timeout)
            .await?;

        info!("Parsing markets...");
        Ok(self.extractor.extract(&html))
    }

    /// Run one cycle and report the outcome. Failures are logged, never
    /// propagated; the interval timer decides when to try again.
    pub async fn scrape_and_report(&self) {
        info!("=== Starting scrape ===");
        match self.run_cycle().await {
            Ok(markets) => report::print_markets(&markets),
            Err(e) => error!(error = %e, "Scrape cycle failed — skipping until next interval"),
        }
    }

    /// Scrape immediately, then on every tick of `every` until `shutdown`
    /// resolves.
    ///
    /// There is no backoff or retry within a cycle, and cycles never
    /// overlap: if one overruns the interval, the next tick is delayed
    /// rather than fired back-to-back.
    pub async fn run(&self, every: Duration, shutdown: impl Future<Output = ()>) {
        let mut ticker = interval(every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = ticker.tick() => self.scrape_and_report().await,
                _ = &mut shutdown => {
                    info!("Shutdown signal received.");
                    break;
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Headless-browser page capture.
//!
//! Drives Chrome over the DevTools protocol via `chromiumoxide`. Each
//! fetch opens a fresh browser session, navigates, waits for the content
//! container selector to appear (the league page renders client-side, so
//! a fixed sleep is unreliable), and captures the rendered document.

use std::time::Duration;

use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::error::CdpError;
use futures::StreamExt;
use tokio::time::{sleep, timeout};
use tracing::{debug, info};

/// How often to re-check the wait selector while the page renders.
const WAIT_POLL_INTERVAL: Duration = Duration::from_millis(250);

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// A page-fetch failure. Always fatal to the current scrape cycle.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("failed to configure browser launch: {0}")]
    Launch(String),

    #[error("browser session error: {0}")]
    Browser(#[from] CdpError),

    #[error("page fetch exceeded the {0:?} deadline")]
    Deadline(Duration),
}

// ---------------------------------------------------------------------------
// Page source seam
// ---------------------------------------------------------------------------

/// Capability that returns rendered page markup for a URL.
///
/// The scrape engine depends on this seam rather than on Chrome directly,
/// so cycles can be driven from fixtures in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch `url`, wait until `wait_selector` matches, and return the
    /// rendered document HTML. The whole operation is bounded by
    /// `deadline`; no retry is attempted within one call.
    async fn fetch(
        &self,
        url: &str,
        wait_selector: &str,
        deadline: Duration,
    ) -> Result<String, FetchError>;
}

// ---------------------------------------------------------------------------
// Chrome implementation
// ---------------------------------------------------------------------------

/// Headless-Chrome implementation of [`PageSource`].
///
/// Stateless: every fetch launches its own browser and tears it down
/// before returning, so a crashed or timed-out session never leaks into
/// the next cycle.
pub struct ChromeFetcher;

impl ChromeFetcher {
    pub fn new() -> Self {
        Self
    }

    async fn fetch_session(url: &str, wait_selector: &str) -> Result<String, FetchError> {
        let config = BrowserConfig::builder()
            .build()
            .map_err(FetchError::Launch)?;
        let (mut browser, mut handler) = Browser::launch(config).await?;

        // The handler stream must be polled for the session to make
        // progress; it ends when the browser goes away.
        let driver = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        let result = Self::capture(&browser, url, wait_selector).await;

        // Release the session before reporting the outcome.
        let _ = browser.close().await;
        let _ = browser.wait().await;
        driver.abort();

        result
    }

    async fn capture(
        browser: &Browser,
        url: &str,
        wait_selector: &str,
    ) -> Result<String, FetchError> {
        let page = browser.new_page(url).await?;
        page.wait_for_navigation().await?;

        // Poll until the market container exists. Navigation completing
        // only means the shell document arrived; the markets themselves
        // are rendered client-side afterwards.
        while page.find_element(wait_selector).await.is_err() {
            sleep(WAIT_POLL_INTERVAL).await;
        }
        debug!(selector = wait_selector, "Content container rendered");

        Ok(page.content().await?)
    }
}

impl Default for ChromeFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PageSource for ChromeFetcher {
    async fn fetch(
        &self,
        url: &str,
        wait_selector: &str,
        deadline: Duration,
    ) -> Result<String, FetchError> {
        info!(url, deadline_secs = deadline.as_secs(), "Loading page with headless Chrome");

        // On expiry the in-flight future is dropped, which tears down the
        // browser session along with it.
        match timeout(deadline, Self::fetch_session(url, wait_selector)).await {
            Ok(result) => result,
            Err(_) => Err(FetchError::Deadline(deadline)),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

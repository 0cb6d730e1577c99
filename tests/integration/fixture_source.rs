//! Fixture page source for integration testing.
//!
//! Provides a deterministic `PageSource` implementation that serves
//! canned HTML — no browser, no network. The served page and an optional
//! forced error are fully controllable from test code.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use linewatch::fetch::{FetchError, PageSource};

/// A page source that serves a fixed document.
pub struct FixtureSource {
    html: String,
    fetch_count: Arc<Mutex<u32>>,
    /// If set, every fetch fails with a deadline error instead.
    force_timeout: bool,
}

impl FixtureSource {
    pub fn new(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            fetch_count: Arc::new(Mutex::new(0)),
            force_timeout: false,
        }
    }

    /// A source whose every fetch times out.
    pub fn timing_out() -> Self {
        Self {
            html: String::new(),
            fetch_count: Arc::new(Mutex::new(0)),
            force_timeout: true,
        }
    }

    /// Handle to the fetch counter, usable after the source is boxed
    /// into an engine.
    pub fn counter(&self) -> Arc<Mutex<u32>> {
        Arc::clone(&self.fetch_count)
    }
}

#[async_trait]
impl PageSource for FixtureSource {
    async fn fetch(
        &self,
        _url: &str,
        _wait_selector: &str,
        deadline: Duration,
    ) -> Result<String, FetchError> {
        *self.fetch_count.lock().unwrap() += 1;
        if self.force_timeout {
            return Err(FetchError::Deadline(deadline));
        }
        Ok(self.html.clone())
    }
}

// ---------------------------------------------------------------------------
// Fixture markup
// ---------------------------------------------------------------------------

/// One betting button with the given points and odds text.
pub fn button(points: &str, odds: &str) -> String {
    format!(
        "<div class=\"cb-market__button\">\
           <span class=\"cb-market__button-points\">{points}</span>\
           <span class=\"cb-market__button-odds\">{odds}</span>\
         </div>"
    )
}

/// A game wrapper with two team labels and the given buttons.
pub fn game(team_a: &str, team_b: &str, buttons: &[String]) -> String {
    format!(
        "<div class=\"cb-market__template\">\
           <div class=\"cb-market__label-inner\">{team_a}</div>\
           <div class=\"cb-market__label-inner\">{team_b}</div>\
           {}\
         </div>",
        buttons.join("")
    )
}

/// A complete 6-button game row: spread/total/moneyline for each side.
pub fn full_game(team_a: &str, team_b: &str) -> String {
    game(
        team_a,
        team_b,
        &[
            button("-2.5", "\u{2212}110"),
            button("47.5", "-105"),
            button("", "+120"),
            button("+2.5", "-110"),
            button("47.5", "-115"),
            button("", "-140"),
        ],
    )
}

/// Wrap game rows in the rendered-page shell.
pub fn page(body: &str) -> String {
    format!(
        "<html><body><div class=\"cms-market-selector-content\">{body}</div></body></html>"
    )
}

//! Market extraction from rendered sportsbook markup.
//!
//! Walks the DraftKings league page DOM and recovers one [`Market`] per
//! betting button. The page carries no explicit side or bet-type labels;
//! both are inferred from each button's position via
//! [`slot_assignment`](crate::types::slot_assignment).

use anyhow::{anyhow, Result};
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::odds;
use crate::types::{slot_assignment, Market};

// ---------------------------------------------------------------------------
// Selectors
// ---------------------------------------------------------------------------

/// CSS selectors for the DraftKings league page DOM.
pub mod selectors {
    /// One wrapper per matchup.
    pub const GAME_WRAPPER: &str = ".cb-market__template";
    /// Team name labels inside a wrapper; the first two are the matchup.
    pub const TEAM_LABEL: &str = ".cb-market__label-inner";
    /// Betting buttons inside a wrapper, six per game.
    pub const MARKET_BUTTON: &str = ".cb-market__button";
    /// Point value cell inside a button (blank for moneyline).
    pub const BUTTON_POINTS: &str = ".cb-market__button-points";
    /// American odds cell inside a button.
    pub const BUTTON_ODDS: &str = ".cb-market__button-odds";
    /// Container whose appearance signals the page has finished rendering.
    pub const CONTENT_READY: &str = ".cms-market-selector-content";
}

// ---------------------------------------------------------------------------
// Extractor
// ---------------------------------------------------------------------------

/// Extracts betting markets from rendered page HTML.
///
/// Selectors are compiled once at construction; extraction itself never
/// fails and degrades to an empty result on markup it cannot make sense
/// of.
pub struct MarketExtractor {
    game_wrapper: Selector,
    team_label: Selector,
    market_button: Selector,
    button_points: Selector,
    button_odds: Selector,
}

impl MarketExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            game_wrapper: compile(selectors::GAME_WRAPPER)?,
            team_label: compile(selectors::TEAM_LABEL)?,
            market_button: compile(selectors::MARKET_BUTTON)?,
            button_points: compile(selectors::BUTTON_POINTS)?,
            button_odds: compile(selectors::BUTTON_ODDS)?,
        })
    }

    /// Extract all markets from a rendered page, in document order.
    ///
    /// A wrapper with fewer than two non-empty team labels contributes
    /// zero markets. html5ever recovers from arbitrarily broken markup,
    /// so a document that yields no wrappers reads as "no markets found",
    /// never as an error.
    pub fn extract(&self, html: &str) -> Vec<Market> {
        let doc = Html::parse_document(html);
        let mut markets = Vec::new();

        for wrapper in doc.select(&self.game_wrapper) {
            // The first two labels are the matchup; any further labels
            // in the wrapper are promotional noise and ignored.
            let mut labels = wrapper.select(&self.team_label);
            let team_a = labels.next().map(element_text).unwrap_or_default();
            let team_b = labels.next().map(element_text).unwrap_or_default();

            if team_a.is_empty() || team_b.is_empty() {
                debug!("Skipping game wrapper without two team labels");
                continue;
            }

            let game = format!("{team_a} vs {team_b}");

            for (j, button) in wrapper.select(&self.market_button).enumerate() {
                let line = odds::normalize(&sub_text(button, &self.button_points));
                let odds = odds::normalize(&sub_text(button, &self.button_odds));
                let (side, bet_type) = slot_assignment(j);

                markets.push(Market {
                    game: game.clone(),
                    side,
                    bet_type,
                    line,
                    odds,
                });
            }
        }

        debug!(count = markets.len(), "Markets extracted");
        markets
    }
}

fn compile(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| anyhow!("invalid selector `{css}`: {e}"))
}

/// Concatenated, trimmed text content of an element.
fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Text of the first `sel` match under `el`, or empty when absent.
fn sub_text(el: ElementRef<'_>, sel: &Selector) -> String {
    el.select(sel).next().map(element_text).unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

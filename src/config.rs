//! Configuration loading from TOML.
//!
//! Reads `config.toml` when present and falls back to compiled-in
//! defaults otherwise. There are no secrets; the only knobs are the
//! target page and the cycle timing.

use std::fs;
use std::io::ErrorKind;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Default target: the DraftKings NFL league page.
const DEFAULT_URL: &str = "https://sportsbook.draftkings.com/leagues/football/nfl";
/// Default seconds between cycle starts.
const DEFAULT_INTERVAL_SECS: u64 = 30;
/// Default overall deadline for one page fetch.
const DEFAULT_PAGE_TIMEOUT_SECS: u64 = 120;

/// Top-level application configuration.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub scraper: ScraperConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ScraperConfig {
    /// Page to scrape.
    pub url: String,
    /// Seconds between cycle starts.
    pub interval_secs: u64,
    /// Overall deadline for one page fetch, in seconds.
    pub page_timeout_secs: u64,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            interval_secs: DEFAULT_INTERVAL_SECS,
            page_timeout_secs: DEFAULT_PAGE_TIMEOUT_SECS,
        }
    }
}

impl ScraperConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    pub fn page_timeout(&self) -> Duration {
        Duration::from_secs(self.page_timeout_secs)
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// A missing file is not an error; the compiled-in defaults apply.
    /// A file that exists but fails to read or parse is fatal.
    pub fn load(path: &str) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read config file: {path}"))
            }
        };

        let config: AppConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {path}"))?;
        Ok(config)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

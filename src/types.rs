//! Shared types for the LINEWATCH scraper.
//!
//! These types form the data model used across all modules. A scrape
//! cycle builds a fresh collection of [`Market`] records from scratch;
//! nothing here carries identity across cycles.

use std::fmt;

// ---------------------------------------------------------------------------
// Bet type & side
// ---------------------------------------------------------------------------

/// Category of wager offered for a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BetType {
    Spread,
    Total,
    Moneyline,
}

impl BetType {
    /// The fixed left-to-right column order DraftKings renders for each
    /// game row. Button index `j` carries the bet type `CYCLE[j % 3]`.
    pub const CYCLE: [BetType; 3] = [BetType::Spread, BetType::Total, BetType::Moneyline];
}

impl fmt::Display for BetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            BetType::Spread => "Spread",
            BetType::Total => "Total",
            BetType::Moneyline => "Moneyline",
        })
    }
}

/// The two opposing selections within a bet type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Over,
    Under,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Side::Over => "over",
            Side::Under => "under",
        })
    }
}

/// Map a button's position within its game row to the side and bet type
/// it represents.
///
/// The page carries no explicit labels: each game row renders six buttons,
/// the first three for the over side and the last three for the under
/// side, with bet type cycling Spread, Total, Moneyline within each half.
/// A missing or extra button silently shifts every assignment after it;
/// that fragile assumption lives here and nowhere else.
pub fn slot_assignment(index: usize) -> (Side, BetType) {
    let side = if index < 3 { Side::Over } else { Side::Under };
    (side, BetType::CYCLE[index % 3])
}

// ---------------------------------------------------------------------------
// Market
// ---------------------------------------------------------------------------

/// One bettable selection for a game: a specific side/bet-type/line/odds
/// combination.
///
/// `line == 0.0` doubles as the "no line" sentinel (moneyline buttons
/// render no point value), so a genuine zero line is indistinguishable
/// from absence. Constructed once per detected button and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Market {
    /// Game identifier, e.g. "Chiefs vs Bills".
    pub game: String,
    pub side: Side,
    pub bet_type: BetType,
    /// Point spread or total line; 0.0 means "no line".
    pub line: f64,
    /// Signed American odds.
    pub odds: f64,
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.line != 0.0 {
            write!(
                f,
                "{:<10} | {:<8} | Line: {:6.1} | Odds: {:+6.0}",
                self.bet_type, self.side, self.line, self.odds,
            )
        } else {
            write!(
                f,
                "{:<10} | {:<8} | Odds: {:+6.0}",
                self.bet_type, self.side, self.odds,
            )
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

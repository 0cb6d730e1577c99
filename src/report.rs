//! Console presentation of a scrape cycle's results.
//!
//! Operational messages go through `tracing`; the market report itself is
//! plain stdout, grouped by game in first-seen document order.

use tracing::info;

use crate::types::Market;

/// Group markets by game, preserving first-seen order.
///
/// Cycles hold a handful of games at most, so a linear scan beats
/// a map that would also scramble the order.
fn group_by_game(markets: &[Market]) -> Vec<(&str, Vec<&Market>)> {
    let mut groups: Vec<(&str, Vec<&Market>)> = Vec::new();
    for market in markets {
        match groups.iter_mut().find(|(game, _)| *game == market.game) {
            Some((_, group)) => group.push(market),
            None => groups.push((market.game.as_str(), vec![market])),
        }
    }
    groups
}

/// Print a human-readable report of one cycle's markets.
pub fn print_markets(markets: &[Market]) {
    if markets.is_empty() {
        info!("No markets found");
        return;
    }

    println!("\n=== Found {} Markets ===\n", markets.len());

    for (game, group) in group_by_game(markets) {
        println!("{game}");
        println!("{}", "-".repeat(game.len()));
        for market in group {
            println!("  {market}");
        }
        println!();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

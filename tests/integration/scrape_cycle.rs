//! End-to-end scrape cycle tests driven by fixture markup.

use std::time::Duration;

use linewatch::engine::ScrapeEngine;
use linewatch::extract::MarketExtractor;
use linewatch::fetch::FetchError;
use linewatch::types::{BetType, Side};

use crate::fixture_source::{self, FixtureSource};

fn engine_with(source: FixtureSource) -> ScrapeEngine {
    ScrapeEngine::new(
        Box::new(source),
        MarketExtractor::new().unwrap(),
        "https://sportsbook.example.com/leagues/football/nfl".to_string(),
        Duration::from_secs(10),
    )
}

#[tokio::test]
async fn two_games_yield_twelve_markets_grouped_by_game() {
    let body = format!(
        "{}{}",
        fixture_source::full_game("Kansas City Chiefs", "Buffalo Bills"),
        fixture_source::full_game("Philadelphia Eagles", "Dallas Cowboys"),
    );
    let engine = engine_with(FixtureSource::new(fixture_source::page(&body)));

    let markets = engine.run_cycle().await.unwrap();

    assert_eq!(markets.len(), 12);

    let chiefs: Vec<_> = markets
        .iter()
        .filter(|m| m.game == "Kansas City Chiefs vs Buffalo Bills")
        .collect();
    let eagles: Vec<_> = markets
        .iter()
        .filter(|m| m.game == "Philadelphia Eagles vs Dallas Cowboys")
        .collect();
    assert_eq!(chiefs.len(), 6);
    assert_eq!(eagles.len(), 6);

    // Both games carry the same positional structure.
    for group in [&chiefs, &eagles] {
        for (j, market) in group.iter().enumerate() {
            let expected_side = if j < 3 { Side::Over } else { Side::Under };
            let expected_type = BetType::CYCLE[j % 3];
            assert_eq!(market.side, expected_side, "button {j}");
            assert_eq!(market.bet_type, expected_type, "button {j}");
        }
    }

    // Spot-check the normalized numbers, unicode minus included.
    assert_eq!(chiefs[0].line, -2.5);
    assert_eq!(chiefs[0].odds, -110.0);
    assert_eq!(chiefs[2].line, 0.0);
    assert_eq!(chiefs[2].odds, 120.0);
    assert_eq!(chiefs[5].odds, -140.0);
}

#[tokio::test]
async fn repeated_cycles_are_idempotent() {
    let body = fixture_source::full_game("Chiefs", "Bills");
    let source = FixtureSource::new(fixture_source::page(&body));
    let fetches = source.counter();
    let engine = engine_with(source);

    let first = engine.run_cycle().await.unwrap();
    let second = engine.run_cycle().await.unwrap();
    assert_eq!(first, second);
    // Each cycle refetches from scratch; nothing is cached across cycles.
    assert_eq!(*fetches.lock().unwrap(), 2);
}

#[tokio::test]
async fn page_without_games_yields_empty_not_error() {
    let engine = engine_with(FixtureSource::new(fixture_source::page("")));

    let markets = engine.run_cycle().await.unwrap();
    assert!(markets.is_empty());
}

#[tokio::test]
async fn incomplete_game_is_dropped_entirely() {
    // One wrapper is missing its second team label; the other is intact.
    let body = format!(
        "{}{}",
        fixture_source::game("Orphan Team", "", &[fixture_source::button("1.5", "-110")]),
        fixture_source::full_game("Eagles", "Cowboys"),
    );
    let engine = engine_with(FixtureSource::new(fixture_source::page(&body)));

    let markets = engine.run_cycle().await.unwrap();
    assert_eq!(markets.len(), 6);
    assert!(markets.iter().all(|m| m.game == "Eagles vs Cowboys"));
}

#[tokio::test]
async fn fetch_timeout_fails_the_cycle() {
    let engine = engine_with(FixtureSource::timing_out());

    let result = engine.run_cycle().await;
    assert!(matches!(result, Err(FetchError::Deadline(_))));
}

#[tokio::test]
async fn failed_cycle_leaves_next_cycle_untouched() {
    // A timeout in one cycle must not poison the engine: the same engine
    // keeps serving cycles afterwards.
    let engine = engine_with(FixtureSource::timing_out());
    assert!(engine.run_cycle().await.is_err());
    assert!(engine.run_cycle().await.is_err());

    // And the report wrapper absorbs the failure without panicking.
    engine.scrape_and_report().await;
}

#[tokio::test]
async fn shutdown_ends_the_loop() {
    let body = fixture_source::full_game("Chiefs", "Bills");
    let source = FixtureSource::new(fixture_source::page(&body));
    let engine = engine_with(source);

    let (tx, rx) = tokio::sync::oneshot::channel::<()>();
    tx.send(()).unwrap();
    let shutdown = async {
        let _ = rx.await;
    };

    tokio::time::timeout(
        Duration::from_secs(5),
        engine.run(Duration::from_secs(3600), shutdown),
    )
    .await
    .expect("loop should exit once the shutdown signal resolves");
}

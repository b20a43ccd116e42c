use super::common::*;
use anyhow::Result;
use mailfeed_engine::SequencerState;
use mailfeed_testing::assertions::{assert_separator_hygiene, layout};
use mailfeed_testing::{FakeFeedApi, fixtures};
use std::time::Duration;

const SCREEN: f64 = 800.0;

fn two_sections() -> FakeFeedApi {
    FakeFeedApi::new()
        .with_tab(TAB, vec![fixtures::section("a"), fixtures::section("b")])
        .with_messages("a", fixtures::messages("a", NEWEST, 40))
        .with_messages("b", fixtures::messages("b", NEWEST, 5))
}

#[tokio::test]
async fn test_initial_load_stops_when_viewport_satisfied() -> Result<()> {
    let h = harness(two_sections(), SCREEN);

    h.engine.load_next().await?;

    assert_eq!(h.api.queries().len(), 1);
    assert_eq!(h.engine.surface().card_count(), 30);
    assert!(!h.engine.is_near_bottom());
    assert_eq!(
        h.engine.state(),
        SequencerState::SectionActive {
            index: 0,
            cursor: Some(NEWEST - 29 * fixtures::MESSAGE_SPACING)
        }
    );
    Ok(())
}

#[tokio::test]
async fn test_scrolling_to_end_loads_following_pages() -> Result<()> {
    let h = harness(two_sections(), SCREEN);
    h.engine.load_next().await?;

    // Second page of A is short; B's separator goes up before its cards
    h.scroll_to_end();
    assert!(h.engine.on_scroll().await?);
    assert_eq!(h.engine.surface().card_count(), 40);
    assert_eq!(layout(&h.engine.surface()).last().map(String::as_str), Some("#b"));
    assert!(h.api.cursors_for("b").is_empty());

    h.scroll_to_end();
    assert!(h.engine.on_scroll().await?);
    assert_eq!(h.engine.surface().card_count(), 45);
    assert!(h.engine.is_finished());
    assert_separator_hygiene(&h.engine.surface())?;
    Ok(())
}

#[tokio::test]
async fn test_scroll_far_from_bottom_loads_nothing() -> Result<()> {
    let h = harness(two_sections(), SCREEN);
    h.engine.load_next().await?;

    assert!(h.engine.on_scroll().await?);
    assert_eq!(h.api.queries().len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_scroll_events_within_interval_are_swallowed() -> Result<()> {
    let h = harness_with(two_sections(), SCREEN, |b| {
        b.throttle_interval(Duration::from_secs(60))
    });
    h.engine.load_next().await?;

    // Nothing to load: the dispatch still starts a cooling period
    assert!(h.engine.on_scroll().await?);

    h.scroll_to_end();
    assert!(!h.engine.on_scroll().await?);
    assert_eq!(h.api.queries().len(), 1);

    // Explicit loads are not throttled
    assert!(h.engine.load_next().await?);
    assert_eq!(h.api.queries().len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_growing_viewport_loads_more() -> Result<()> {
    let h = harness(two_sections(), SCREEN);
    h.engine.load_next().await?;

    h.viewport.resize(ENDLESS_VIEWPORT);
    h.engine.load_while_near_bottom().await?;

    assert!(h.engine.is_finished());
    assert_eq!(h.engine.surface().card_count(), 45);
    Ok(())
}

use super::common::*;
use anyhow::Result;
use mailfeed_engine::SequencerState;
use mailfeed_runtime::{Error, RetryPolicy};
use mailfeed_testing::assertions::assert_unique_cards;
use mailfeed_testing::{FakeFeedApi, fixtures};
use mailfeed_types::Message;

fn single_section(count: usize) -> FakeFeedApi {
    FakeFeedApi::new()
        .with_tab(TAB, vec![fixtures::section("a")])
        .with_messages("a", fixtures::messages("a", NEWEST, count))
}

fn date_of(index: i64) -> i64 {
    NEWEST - index * fixtures::MESSAGE_SPACING
}

#[tokio::test]
async fn test_full_last_page_needs_one_more_request() -> Result<()> {
    // Exactly one page worth: the section is only known to be done after an
    // empty follow-up page
    let h = harness(single_section(30), ENDLESS_VIEWPORT);

    h.engine.load_next().await?;

    assert_eq!(h.api.cursors_for("a"), vec![None, Some(date_of(29))]);
    assert_eq!(h.engine.surface().card_count(), 30);
    assert!(h.engine.is_finished());
    Ok(())
}

#[tokio::test]
async fn test_cursor_follows_last_item_of_each_page() -> Result<()> {
    let h = harness(single_section(95), ENDLESS_VIEWPORT);

    h.engine.load_next().await?;

    let cursors = h.api.cursors_for("a");
    assert_eq!(
        cursors,
        vec![None, Some(date_of(29)), Some(date_of(59)), Some(date_of(89))]
    );
    let dates: Vec<i64> = cursors.into_iter().flatten().collect();
    assert!(dates.windows(2).all(|pair| pair[1] < pair[0]));
    assert_eq!(h.engine.surface().card_count(), 95);
    Ok(())
}

#[tokio::test]
async fn test_page_size_override() -> Result<()> {
    let h = harness_with(single_section(25), ENDLESS_VIEWPORT, |b| b.page_size(10));

    h.engine.load_next().await?;

    let queries = h.api.queries();
    assert_eq!(queries.len(), 3);
    assert!(queries.iter().all(|q| q.limit == 10));
    assert!(queries.iter().all(|q| q.tab == TAB));
    assert!(h.engine.is_finished());
    Ok(())
}

#[tokio::test]
async fn test_failed_page_surfaces_error_and_keeps_cursor() -> Result<()> {
    let h = harness(single_section(5), ENDLESS_VIEWPORT);
    h.api.fail_next_pages(1);

    let err = h.engine.load_next().await.unwrap_err();
    assert!(matches!(err, Error::Status { status: 500, .. }));
    assert_eq!(
        h.engine.state(),
        SequencerState::SectionActive {
            index: 0,
            cursor: None
        }
    );
    assert!(!h.engine.is_loading());

    // The next signal retries the same page
    assert!(h.engine.load_next().await?);
    assert_eq!(h.api.cursors_for("a"), vec![None, None]);
    assert_eq!(h.engine.surface().card_count(), 5);
    Ok(())
}

#[tokio::test]
async fn test_retry_policy_absorbs_transient_failures() -> Result<()> {
    let h = harness_with(single_section(5), ENDLESS_VIEWPORT, |b| {
        b.retry(RetryPolicy { max_attempts: 3 })
    });
    h.api.fail_next_pages(2);

    assert!(h.engine.load_next().await?);

    assert_eq!(h.api.cursors_for("a"), vec![None, None, None]);
    assert_eq!(h.engine.surface().card_count(), 5);
    Ok(())
}

#[tokio::test]
async fn test_unknown_tab_fails_section_listing() {
    let api = FakeFeedApi::new().with_tab("other", vec![fixtures::section("a")]);
    let h = harness(api, ENDLESS_VIEWPORT);

    let err = h.engine.load_next().await.unwrap_err();
    assert!(matches!(err, Error::Status { status: 404, .. }));
    assert_eq!(h.engine.state(), SequencerState::NoSectionsLoaded);
    assert!(!h.engine.is_loading());
}

#[tokio::test]
async fn test_inclusive_cursor_redelivery_keeps_one_card_per_id() -> Result<()> {
    let api = single_section(65).inclusive_cursor();
    let h = harness(api, ENDLESS_VIEWPORT);

    h.engine.load_next().await?;

    // Each follow-up page starts with the previous page's last item again
    assert_eq!(
        h.api.cursors_for("a"),
        vec![None, Some(date_of(29)), Some(date_of(58))]
    );
    let surface = h.engine.surface();
    assert_unique_cards(&surface)?;
    assert_eq!(surface.card_count(), 65);
    assert!(h.engine.is_finished());
    Ok(())
}

#[tokio::test]
async fn test_cursor_stuck_on_one_instant_ends_section() -> Result<()> {
    // More same-timestamp messages than fit on a page: the inclusive cursor
    // can never move past them
    let same_instant: Vec<Message> = (0..31)
        .map(|i| Message::new(format!("a-{}", i), NEWEST, "a@example.com"))
        .collect();
    let api = FakeFeedApi::new()
        .with_tab(TAB, vec![fixtures::section("a"), fixtures::section("b")])
        .with_messages("a", same_instant)
        .with_messages("b", fixtures::messages("b", NEWEST, 2))
        .inclusive_cursor();
    let h = harness(api, ENDLESS_VIEWPORT);

    assert!(h.engine.load_next().await?);

    assert_eq!(h.api.cursors_for("a"), vec![None, Some(NEWEST)]);
    assert_eq!(h.api.cursors_for("b"), vec![None]);
    assert_eq!(h.engine.surface().card_count(), 32);
    assert_unique_cards(&h.engine.surface())?;
    assert!(h.engine.is_finished());
    Ok(())
}

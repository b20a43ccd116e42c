use super::common::*;
use anyhow::Result;
use mailfeed_testing::{FakeFeedApi, fixtures};

fn yielding_api() -> FakeFeedApi {
    FakeFeedApi::new()
        .with_tab(TAB, vec![fixtures::section("a")])
        .with_messages("a", fixtures::messages("a", NEWEST, 12))
        .yielding()
}

#[tokio::test]
async fn test_overlapping_load_is_noop() -> Result<()> {
    let h = harness(yielding_api(), ENDLESS_VIEWPORT);

    let (first, second) = futures::join!(h.engine.load_next(), h.engine.load_next());

    assert!(first?);
    assert!(!second?);
    assert_eq!(h.api.section_requests(), 1);
    assert_eq!(h.api.queries().len(), 1);
    assert_eq!(h.engine.surface().card_count(), 12);
    Ok(())
}

#[tokio::test]
async fn test_loading_flag_set_only_during_cycle() -> Result<()> {
    let h = harness(yielding_api(), ENDLESS_VIEWPORT);
    assert!(!h.engine.is_loading());

    let (loaded, observed) = futures::join!(h.engine.load_next(), async {
        tokio::task::yield_now().await;
        h.engine.is_loading()
    });

    assert!(loaded?);
    assert!(observed);
    assert!(!h.engine.is_loading());
    Ok(())
}

#[tokio::test]
async fn test_loading_flag_cleared_after_failure() -> Result<()> {
    let h = harness(yielding_api(), ENDLESS_VIEWPORT);
    h.api.fail_next_pages(1);

    assert!(h.engine.load_next().await.is_err());
    assert!(!h.engine.is_loading());

    // A later signal is not wedged by the failed cycle
    assert!(h.engine.load_next().await?);
    assert_eq!(h.engine.surface().card_count(), 12);
    Ok(())
}

#[tokio::test]
async fn test_overlapping_scroll_is_throttled() -> Result<()> {
    let h = harness(yielding_api(), ENDLESS_VIEWPORT);

    let (first, second) = futures::join!(h.engine.on_scroll(), h.engine.on_scroll());

    assert!(first?);
    assert!(!second?);
    assert_eq!(h.api.section_requests(), 1);
    assert!(h.engine.is_finished());
    Ok(())
}

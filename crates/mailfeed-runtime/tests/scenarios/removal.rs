use super::common::*;
use anyhow::Result;
use mailfeed_engine::Animation;
use mailfeed_testing::assertions::{assert_separator_hygiene, layout};
use mailfeed_testing::{FakeFeedApi, GatedAnimator, fixtures};
use mailfeed_types::MessageId;
use std::rc::Rc;

fn one_each() -> FakeFeedApi {
    FakeFeedApi::new()
        .with_tab(TAB, vec![fixtures::section("a"), fixtures::section("b")])
        .with_messages("a", fixtures::messages("a", NEWEST, 1))
        .with_messages("b", fixtures::messages("b", NEWEST, 1))
}

#[tokio::test]
async fn test_remove_unknown_card() -> Result<()> {
    let h = harness(one_each(), ENDLESS_VIEWPORT);
    h.engine.load_next().await?;

    assert!(!h.engine.remove(&MessageId::new("ghost"), None).await?);
    assert_eq!(h.engine.surface().card_count(), 2);
    Ok(())
}

#[tokio::test]
async fn test_removing_last_card_of_section_drops_its_separator() -> Result<()> {
    let h = harness(one_each(), ENDLESS_VIEWPORT);
    h.engine.load_next().await?;
    assert_eq!(layout(&h.engine.surface()), vec!["#a", "a-0", "#b", "b-0"]);

    assert!(h.engine.remove(&MessageId::new("a-0"), None).await?);
    assert_eq!(layout(&h.engine.surface()), vec!["#b", "b-0"]);
    assert_separator_hygiene(&h.engine.surface())?;

    assert!(h.engine.remove(&MessageId::new("b-0"), None).await?);
    assert!(h.engine.surface().entries().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_card_stays_until_animation_completes() -> Result<()> {
    let animator = Rc::new(GatedAnimator::new());
    let h = harness_with(one_each(), ENDLESS_VIEWPORT, |b| b.animator(animator.clone()));
    h.engine.load_next().await?;
    let id = MessageId::new("a-0");

    let (removed, during) = futures::join!(
        h.engine.remove(&id, Some(Animation::SwipeLeft)),
        async {
            tokio::task::yield_now().await;
            let during = h
                .engine
                .surface()
                .card(&id)
                .map(|card| card.removal());
            animator.release();
            during
        }
    );

    assert!(removed?);
    assert_eq!(during, Some(Some(Animation::SwipeLeft)));
    assert_eq!(animator.started(), vec![(id.clone(), Animation::SwipeLeft)]);
    assert!(!h.engine.surface().contains(&id));
    assert_eq!(layout(&h.engine.surface()), vec!["#b", "b-0"]);
    Ok(())
}

#[tokio::test]
async fn test_removal_near_bottom_loads_more() -> Result<()> {
    let api = FakeFeedApi::new()
        .with_tab(TAB, vec![fixtures::section("a"), fixtures::section("b")])
        .with_messages("a", fixtures::messages("a", NEWEST, 40))
        .with_messages("b", fixtures::messages("b", NEWEST, 5));
    let h = harness(api, 800.0);
    h.engine.load_next().await?;

    // Just short of the near-bottom band; one card less crosses into it
    h.viewport.scroll_to(3000.0);
    assert!(!h.engine.is_near_bottom());

    assert!(h.engine.remove(&MessageId::new("a-0"), None).await?);

    assert_eq!(h.api.cursors_for("a").len(), 2);
    assert_eq!(h.engine.surface().card_count(), 39);
    assert!(!h.engine.surface().contains(&MessageId::new("a-0")));
    Ok(())
}

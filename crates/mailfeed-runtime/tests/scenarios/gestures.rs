use super::common::*;
use anyhow::Result;
use mailfeed_engine::{Animation, Gesture, GestureEvent};
use mailfeed_testing::{FakeFeedApi, RecordingAnimator, fixtures};
use mailfeed_types::MessageId;
use std::rc::Rc;

fn loaded_with_recorder() -> (Harness, Rc<RecordingAnimator>) {
    let api = FakeFeedApi::new()
        .with_tab(TAB, vec![fixtures::section("a")])
        .with_messages("a", fixtures::messages("a", NEWEST, 3));
    let animator = Rc::new(RecordingAnimator::new());
    let h = harness_with(api, ENDLESS_VIEWPORT, |b| b.animator(animator.clone()));
    (h, animator)
}

#[tokio::test]
async fn test_swipes_remove_with_matching_animation() -> Result<()> {
    let (h, animator) = loaded_with_recorder();
    h.engine.load_next().await?;
    let left = MessageId::new("a-0");
    let right = MessageId::new("a-1");

    h.engine
        .handle_gesture(&left, GestureEvent::new(Gesture::SwipeLeft))
        .await?;
    h.engine
        .handle_gesture(&right, GestureEvent::new(Gesture::SwipeRight))
        .await?;

    assert_eq!(
        animator.played(),
        vec![
            (left.clone(), Animation::SwipeLeft),
            (right.clone(), Animation::SwipeRight)
        ]
    );
    assert!(!h.engine.surface().contains(&left));
    assert!(!h.engine.surface().contains(&right));
    assert_eq!(h.engine.surface().card_count(), 1);
    Ok(())
}

#[tokio::test]
async fn test_prevented_gesture_is_ignored() -> Result<()> {
    let (h, animator) = loaded_with_recorder();
    h.engine.load_next().await?;
    let id = MessageId::new("a-0");

    h.engine
        .handle_gesture(&id, GestureEvent::prevented(Gesture::SwipeLeft))
        .await?;
    h.engine
        .handle_gesture(&id, GestureEvent::prevented(Gesture::Tap))
        .await?;

    assert!(animator.played().is_empty());
    assert!(h.api.opened().is_empty());
    assert!(h.engine.surface().contains(&id));
    Ok(())
}

#[tokio::test]
async fn test_tap_opens_message() -> Result<()> {
    let (h, _animator) = loaded_with_recorder();
    h.engine.load_next().await?;
    let id = MessageId::new("a-2");

    h.engine
        .handle_gesture(&id, GestureEvent::new(Gesture::Tap))
        .await?;

    let opened = h.api.opened();
    assert_eq!(opened.len(), 1);
    assert_eq!(opened[0].id(), &id);
    assert_eq!(opened[0].subject.as_deref(), Some("a message 2"));
    assert!(h.engine.surface().contains(&id));
    Ok(())
}

#[tokio::test]
async fn test_open_failure_is_not_an_error() -> Result<()> {
    let (h, _animator) = loaded_with_recorder();
    h.engine.load_next().await?;
    h.api.fail_opens(true);

    h.engine
        .handle_gesture(&MessageId::new("a-0"), GestureEvent::new(Gesture::Tap))
        .await?;

    assert!(h.api.opened().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_gesture_on_missing_card() -> Result<()> {
    let (h, animator) = loaded_with_recorder();
    h.engine.load_next().await?;

    h.engine
        .handle_gesture(&MessageId::new("ghost"), GestureEvent::new(Gesture::SwipeLeft))
        .await?;

    assert!(animator.played().is_empty());
    assert_eq!(h.engine.surface().card_count(), 3);
    Ok(())
}

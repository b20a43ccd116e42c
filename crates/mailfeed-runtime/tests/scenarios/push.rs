use super::common::*;
use anyhow::Result;
use mailfeed_engine::Upsert;
use mailfeed_runtime::Error;
use mailfeed_testing::assertions::{assert_unique_cards, layout};
use mailfeed_testing::{FakeFeedApi, fixtures};
use mailfeed_types::{Message, MessageId};

async fn loaded() -> Result<Harness> {
    let api = FakeFeedApi::new()
        .with_tab(TAB, vec![fixtures::section("a")])
        .with_messages("a", fixtures::messages("a", NEWEST, 2));
    let h = harness(api, ENDLESS_VIEWPORT);
    h.engine.load_next().await?;
    Ok(h)
}

#[tokio::test]
async fn test_redelivery_updates_in_place() -> Result<()> {
    let h = loaded().await?;
    let edited = Message::new("a-0", NEWEST, "a@example.com").with_subject("edited");

    assert_eq!(h.engine.deliver(&edited), Upsert::Updated);

    let surface = h.engine.surface();
    assert_eq!(layout(&surface), vec!["#a", "a-0", "a-1"]);
    let card = surface.card(&MessageId::new("a-0")).unwrap();
    assert_eq!(card.fields().subject, "edited");
    assert_eq!(card.message().subject.as_deref(), Some("edited"));
    Ok(())
}

#[tokio::test]
async fn test_new_push_appends_card() -> Result<()> {
    let h = loaded().await?;
    let pushed = Message::new("p-0", NEWEST + 60, "p@example.com");

    assert_eq!(h.engine.deliver(&pushed), Upsert::Created);
    assert_eq!(layout(&h.engine.surface()), vec!["#a", "a-0", "a-1", "p-0"]);
    Ok(())
}

#[tokio::test]
async fn test_summary_push_fills_card() -> Result<()> {
    let h = loaded().await?;
    {
        let surface = h.engine.surface();
        assert!(surface.card(&MessageId::new("a-1")).unwrap().fields().loading);
    }

    let summarized = fixtures::summarized("a-1", NEWEST - 60, &[("isWork", 0.9), ("isSpam", 0.1)]);
    assert!(h.engine.update(&summarized));

    let surface = h.engine.surface();
    let fields = surface.card(&MessageId::new("a-1")).unwrap().fields();
    assert!(!fields.loading);
    assert_eq!(fields.summary.as_deref(), Some("Summary of a-1"));
    assert_eq!(fields.badges.len(), 1);
    assert_eq!(fields.badges[0].text(), "Work: 90%");
    Ok(())
}

#[tokio::test]
async fn test_update_for_missing_card() -> Result<()> {
    let h = loaded().await?;

    assert!(!h.engine.update(&Message::new("ghost", NEWEST, "g@example.com")));
    assert_eq!(h.engine.surface().card_count(), 2);
    Ok(())
}

#[tokio::test]
async fn test_consume_pushed_batches() -> Result<()> {
    let h = loaded().await?;
    let batches = vec![
        fixtures::messages("p", NEWEST + 600, 3),
        // Overlaps the first batch and the paged messages
        vec![
            Message::new("p-1", NEWEST + 540, "p@example.com").with_subject("again"),
            Message::new("a-0", NEWEST, "a@example.com"),
        ],
    ];

    let delivered = h.engine.consume_pushed(futures::stream::iter(batches)).await;

    assert_eq!(delivered, 5);
    let surface = h.engine.surface();
    assert_eq!(surface.card_count(), 5);
    assert_unique_cards(&surface)?;
    Ok(())
}

#[tokio::test]
async fn test_request_summary() -> Result<()> {
    let h = loaded().await?;

    h.engine.request_summary(&MessageId::new("a-0")).await?;
    assert_eq!(h.api.summary_requests(), vec![MessageId::new("a-0")]);

    let err = h
        .engine
        .request_summary(&MessageId::new("ghost"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Api(_)));
    assert_eq!(h.api.summary_requests().len(), 1);
    Ok(())
}

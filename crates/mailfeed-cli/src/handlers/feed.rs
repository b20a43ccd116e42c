use super::HandlerContext;
use crate::presentation::text::format_feed;
use crate::presentation::view_models::FeedView;
use crate::types::OutputFormat;
use anyhow::Result;
use mailfeed_engine::{Gesture, GestureEvent};
use mailfeed_runtime::{FeedEngine, StaticViewport, TimedAnimator};
use mailfeed_types::MessageId;
use std::rc::Rc;
use tracing::{debug, warn};

pub struct FeedOptions {
    pub viewport_height: f64,
    pub scroll_steps: usize,
    pub dismiss: Vec<String>,
    pub open: Vec<String>,
}

pub async fn handle(ctx: &HandlerContext, options: FeedOptions) -> Result<()> {
    let api = Rc::new(ctx.api()?);
    let viewport = Rc::new(StaticViewport::new(options.viewport_height));
    let animator = Rc::new(TimedAnimator::new(ctx.config.animation.duration()));
    let engine = FeedEngine::builder(api, ctx.config.tab.clone())
        .config(&ctx.config)?
        .viewport(viewport.clone())
        .animator(animator)
        .build();

    engine.load_next().await?;

    for step in 0..options.scroll_steps {
        if engine.is_finished() {
            debug!(step, "nothing left to load");
            break;
        }
        let metrics = engine.metrics();
        viewport.scroll_to(metrics.content_height - metrics.viewport_height);
        if !engine.on_scroll().await? {
            debug!(step, "scroll throttled");
        }
    }

    for id in options.dismiss.iter().map(MessageId::new) {
        if !engine.surface().contains(&id) {
            warn!(card_id = %id, "no card to dismiss");
            continue;
        }
        engine
            .handle_gesture(&id, GestureEvent::new(Gesture::SwipeLeft))
            .await?;
    }

    for id in options.open.iter().map(MessageId::new) {
        if !engine.surface().contains(&id) {
            warn!(card_id = %id, "no card to open");
            continue;
        }
        engine
            .handle_gesture(&id, GestureEvent::new(Gesture::Tap))
            .await?;
    }

    if ctx.format == OutputFormat::Markup {
        println!("{}", engine.surface().to_markup());
        return Ok(());
    }

    let view = FeedView::build(&engine.tab(), engine.is_finished(), &engine.surface());
    ctx.emit(&view, |color| format_feed(&view, color))
}

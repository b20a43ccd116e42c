#![allow(dead_code)]

use mailfeed_engine::LayoutMetrics;
use mailfeed_runtime::{FeedEngine, FeedEngineBuilder, StaticViewport};
use mailfeed_testing::FakeFeedApi;
use std::rc::Rc;

pub const TAB: &str = "general";
pub const NEWEST: i64 = 1_700_000_000;

/// Large enough that the feed is always near the bottom
pub const ENDLESS_VIEWPORT: f64 = 1.0e9;

pub const LAYOUT: LayoutMetrics = LayoutMetrics {
    card_height: 160.0,
    separator_height: 56.0,
};

pub struct Harness {
    pub api: Rc<FakeFeedApi>,
    pub viewport: Rc<StaticViewport>,
    pub engine: FeedEngine,
}

pub fn harness(api: FakeFeedApi, viewport_height: f64) -> Harness {
    harness_with(api, viewport_height, |builder| builder)
}

pub fn harness_with(
    api: FakeFeedApi,
    viewport_height: f64,
    configure: impl FnOnce(FeedEngineBuilder) -> FeedEngineBuilder,
) -> Harness {
    let api = Rc::new(api);
    let viewport = Rc::new(StaticViewport::new(viewport_height));
    let builder = FeedEngine::builder(api.clone(), TAB)
        .viewport(viewport.clone())
        .layout(LAYOUT);
    Harness {
        api,
        viewport,
        engine: configure(builder).build(),
    }
}

impl Harness {
    /// Scroll so the end of the content sits at the bottom of the viewport
    pub fn scroll_to_end(&self) {
        let metrics = self.engine.metrics();
        self.viewport
            .scroll_to(metrics.content_height - metrics.viewport_height);
    }
}

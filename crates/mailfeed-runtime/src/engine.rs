//! The feed engine: one feed view's session state plus the operations that
//! drive it.
//!
//! Everything runs on a single thread. Network fetches, removal animations
//! and the scroll throttle are the only suspension points, so shared state
//! lives in `Cell`/`RefCell` and no borrow is ever held across an `.await`.

use crate::animation::{Animator, ImmediateAnimator};
use crate::api::FeedApi;
use crate::config::Config;
use crate::fetcher::{PageFetcher, RetryPolicy};
use crate::viewport::{StaticViewport, Viewport};
use crate::{Error, Result};
use futures::stream::{Stream, StreamExt};
use mailfeed_engine::{
    Animation, FeedSurface, GestureAction, GestureEvent, LayoutMetrics, NEAR_BOTTOM_THRESHOLD,
    PageOutcome, SCROLL_THROTTLE_INTERVAL, ScrollThrottle, SectionSequencer, SequencerState,
    Templates, Upsert, ViewportMetrics,
};
use mailfeed_types::{Message, MessageId};
use std::cell::{Cell, Ref, RefCell};
use std::rc::Rc;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

/// Clears the loading flag when the cycle ends, including on error
struct LoadGuard<'a> {
    flag: &'a Cell<bool>,
}

impl<'a> LoadGuard<'a> {
    fn engage(flag: &'a Cell<bool>) -> Self {
        flag.set(true);
        Self { flag }
    }
}

impl Drop for LoadGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

pub struct FeedEngineBuilder {
    api: Rc<dyn FeedApi>,
    tab: String,
    viewport: Option<Rc<dyn Viewport>>,
    animator: Option<Rc<dyn Animator>>,
    templates: Templates,
    layout: LayoutMetrics,
    page_size: Option<usize>,
    retry: RetryPolicy,
    threshold: f64,
    throttle_interval: Duration,
}

impl FeedEngineBuilder {
    fn new(api: Rc<dyn FeedApi>, tab: String) -> Self {
        Self {
            api,
            tab,
            viewport: None,
            animator: None,
            templates: Templates::default(),
            layout: LayoutMetrics::default(),
            page_size: None,
            retry: RetryPolicy::default(),
            threshold: NEAR_BOTTOM_THRESHOLD,
            throttle_interval: SCROLL_THROTTLE_INTERVAL,
        }
    }

    /// Apply feed, layout and template settings from a config file
    pub fn config(mut self, config: &Config) -> Result<Self> {
        self.templates = config.load_templates()?;
        self.layout = config.layout;
        self.page_size = Some(config.feed.page_size);
        self.retry = config.feed.retry;
        self.threshold = config.feed.near_bottom_threshold;
        self.throttle_interval = config.feed.scroll_throttle();
        Ok(self)
    }

    pub fn viewport(mut self, viewport: Rc<dyn Viewport>) -> Self {
        self.viewport = Some(viewport);
        self
    }

    pub fn animator(mut self, animator: Rc<dyn Animator>) -> Self {
        self.animator = Some(animator);
        self
    }

    pub fn templates(mut self, templates: Templates) -> Self {
        self.templates = templates;
        self
    }

    pub fn layout(mut self, layout: LayoutMetrics) -> Self {
        self.layout = layout;
        self
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn near_bottom_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn throttle_interval(mut self, interval: Duration) -> Self {
        self.throttle_interval = interval;
        self
    }

    pub fn build(self) -> FeedEngine {
        let mut fetcher = PageFetcher::new(self.api.clone()).with_retry(self.retry);
        if let Some(page_size) = self.page_size {
            fetcher = fetcher.with_page_size(page_size);
        }

        FeedEngine {
            api: self.api,
            fetcher,
            viewport: self
                .viewport
                .unwrap_or_else(|| Rc::new(StaticViewport::default())),
            animator: self.animator.unwrap_or_else(|| Rc::new(ImmediateAnimator)),
            templates: self.templates,
            layout: self.layout,
            threshold: self.threshold,
            throttle: ScrollThrottle::new(self.throttle_interval),
            session: RefCell::new(SectionSequencer::new(self.tab)),
            surface: RefCell::new(FeedSurface::new()),
            loading: Cell::new(false),
        }
    }
}

pub struct FeedEngine {
    api: Rc<dyn FeedApi>,
    fetcher: PageFetcher,
    viewport: Rc<dyn Viewport>,
    animator: Rc<dyn Animator>,
    templates: Templates,
    layout: LayoutMetrics,
    threshold: f64,
    throttle: ScrollThrottle,
    session: RefCell<SectionSequencer>,
    surface: RefCell<FeedSurface>,
    loading: Cell<bool>,
}

impl FeedEngine {
    pub fn builder(api: Rc<dyn FeedApi>, tab: impl Into<String>) -> FeedEngineBuilder {
        FeedEngineBuilder::new(api, tab.into())
    }

    // --- Load orchestration ---

    /// Run one load cycle.
    ///
    /// Returns `Ok(false)` without side effects if a cycle is already in
    /// progress. Otherwise drains sections until the viewport is satisfied or
    /// every section is exhausted, and returns `Ok(true)`.
    pub async fn load_next(&self) -> Result<bool> {
        if self.loading.get() {
            debug!("load cycle already running");
            return Ok(false);
        }
        let _guard = LoadGuard::engage(&self.loading);
        self.drain_sections().await?;
        Ok(true)
    }

    async fn drain_sections(&self) -> Result<()> {
        if self.session.borrow().needs_sections() {
            let tab = self.session.borrow().tab().to_string();
            let sections = self.api.list_sections(&tab).await?;
            info!(tab = %tab, count = sections.len(), "loaded sections");

            let mut session = self.session.borrow_mut();
            if let Some(first) = session.begin(sections) {
                self.surface
                    .borrow_mut()
                    .append_separator(first, &self.templates);
            }
        }

        loop {
            let Some(request) = self.session.borrow().next_request() else {
                break;
            };

            let page = self.fetcher.fetch_page(&request).await?;
            {
                let mut surface = self.surface.borrow_mut();
                for message in &page.items {
                    surface.upsert(message, &self.templates);
                }
            }

            let outcome = self
                .session
                .borrow_mut()
                .record_page(&page.items, page.exhausted);
            if outcome == PageOutcome::Exhausted {
                let mut session = self.session.borrow_mut();
                let mut surface = self.surface.borrow_mut();
                surface.remove_orphan_separators();
                match session.advance() {
                    Some(next) => surface.append_separator(next, &self.templates),
                    None => break,
                }
            }

            if !self.is_near_bottom() {
                break;
            }
        }
        Ok(())
    }

    /// Keep loading for as long as the viewport wants more and there is more
    pub async fn load_while_near_bottom(&self) -> Result<()> {
        while self.is_near_bottom() && !self.is_finished() {
            if !self.load_next().await? {
                break;
            }
        }
        Ok(())
    }

    /// Throttled scroll handler.
    ///
    /// Returns `Ok(false)` when the event was swallowed by the throttle.
    pub async fn on_scroll(&self) -> Result<bool> {
        if !self.throttle.try_dispatch(Instant::now()) {
            return Ok(false);
        }

        let result = self.drain_on_scroll().await;
        self.throttle.finish(Instant::now());
        result.map(|()| true)
    }

    async fn drain_on_scroll(&self) -> Result<()> {
        while self.is_near_bottom() && !self.is_finished() {
            debug!("near bottom, loading next page");
            if !self.load_next().await? {
                break;
            }
            self.throttle.reset();
        }
        Ok(())
    }

    // --- Card registry ---

    /// Apply a message delivered outside the paged path (e.g. a server push)
    pub fn deliver(&self, message: &Message) -> Upsert {
        self.surface.borrow_mut().upsert(message, &self.templates)
    }

    /// Apply every batch from a push channel; returns the number of messages
    pub async fn consume_pushed<S>(&self, stream: S) -> usize
    where
        S: Stream<Item = Vec<Message>>,
    {
        let mut stream = std::pin::pin!(stream);
        let mut delivered = 0;
        while let Some(batch) = stream.next().await {
            for message in &batch {
                self.deliver(message);
            }
            delivered += batch.len();
            debug!(count = batch.len(), "applied pushed batch");
        }
        delivered
    }

    /// Refresh an existing card's fields. A missing card is logged, not fatal.
    pub fn update(&self, message: &Message) -> bool {
        self.surface.borrow_mut().refresh(message)
    }

    /// Remove a card, optionally after a removal animation.
    ///
    /// Returns `Ok(false)` if there was no such card. Removal can shrink the
    /// feed enough to need more content, so loading may follow.
    pub async fn remove(&self, id: &MessageId, animation: Option<Animation>) -> Result<bool> {
        if !self.surface.borrow().contains(id) {
            return Ok(false);
        }

        if let Some(animation) = animation {
            self.surface.borrow_mut().mark_removing(id, animation);
            self.animator.play(id, animation).await;
        }

        let removed = self.surface.borrow_mut().destroy(id).is_some();
        if removed {
            info!(card_id = %id, "card removed");
            self.load_while_near_bottom().await?;
        }
        Ok(removed)
    }

    /// Dispatch a gesture recognized on a card
    pub async fn handle_gesture(&self, id: &MessageId, event: GestureEvent) -> Result<()> {
        let action = {
            let surface = self.surface.borrow();
            let Some(card) = surface.card(id) else {
                return Ok(());
            };
            card.bindings().resolve(event)
        };

        match action {
            None => debug!(card_id = %id, gesture = ?event.gesture, "gesture already handled"),
            Some(GestureAction::Remove(animation)) => {
                self.remove(id, animation).await?;
            }
            Some(GestureAction::Open) => self.open(id).await,
        }
        Ok(())
    }

    /// Hand the card's message to the mail source. Failures are only logged.
    pub async fn open(&self, id: &MessageId) {
        let message = match self.surface.borrow().card(id) {
            Some(card) => card.message().clone(),
            None => return,
        };
        match self.api.open_email(&message).await {
            Ok(()) => info!(card_id = %id, "opened message"),
            Err(err) => error!(card_id = %id, error = %err, "failed to open message"),
        }
    }

    /// Ask the server to summarize a message that has no summary yet
    pub async fn request_summary(&self, id: &MessageId) -> Result<()> {
        if !self.surface.borrow().contains(id) {
            return Err(Error::Api(format!("no card for {}", id)));
        }
        self.api.enqueue_summary(id).await
    }

    // --- Viewport ---

    pub fn metrics(&self) -> ViewportMetrics {
        ViewportMetrics {
            scroll_top: self.viewport.scroll_top(),
            viewport_height: self.viewport.viewport_height(),
            content_height: self.content_height(),
        }
    }

    pub fn is_near_bottom(&self) -> bool {
        self.metrics().is_near_bottom(self.threshold)
    }

    pub fn content_height(&self) -> f64 {
        self.surface.borrow().content_height(&self.layout)
    }

    // --- Inspection ---

    pub fn surface(&self) -> Ref<'_, FeedSurface> {
        self.surface.borrow()
    }

    pub fn state(&self) -> SequencerState {
        self.session.borrow().state()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }

    pub fn is_finished(&self) -> bool {
        self.session.borrow().is_finished()
    }

    pub fn tab(&self) -> String {
        self.session.borrow().tab().to_string()
    }
}

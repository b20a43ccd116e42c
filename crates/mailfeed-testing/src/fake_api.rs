//! In-memory feed server.
//!
//! Serves sections per tab and messages per section: newest first, `limit`
//! items, strictly older than `start_from` when given. With
//! [`inclusive_cursor`](FakeFeedApi::inclusive_cursor) items dated exactly
//! `start_from` are served again, as the production server does.

use futures::future::{FutureExt, LocalBoxFuture};
use mailfeed_runtime::{EmailQuery, Error, FeedApi, Result};
use mailfeed_types::{Message, MessageId, Section, Tab};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct FakeFeedApi {
    tabs: Vec<Tab>,
    sections: HashMap<String, Vec<Section>>,
    messages: RefCell<HashMap<String, Vec<Message>>>,
    yield_on_request: bool,
    inclusive_cursor: bool,
    failing_pages: Cell<usize>,
    failing_opens: Cell<bool>,
    section_requests: Cell<usize>,
    queries: RefCell<Vec<EmailQuery>>,
    opened: RefCell<Vec<Message>>,
    summary_requests: RefCell<Vec<MessageId>>,
}

impl FakeFeedApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tab(mut self, tab: &str, sections: Vec<Section>) -> Self {
        self.tabs.push(Tab {
            name: tab.to_string(),
            display_name: tab.to_string(),
        });
        self.sections.insert(tab.to_string(), sections);
        self
    }

    /// Messages for a section; stored newest first regardless of input order
    pub fn with_messages(self, section: &str, mut messages: Vec<Message>) -> Self {
        messages.sort_by(|a, b| b.date.cmp(&a.date));
        self.messages
            .borrow_mut()
            .insert(section.to_string(), messages);
        self
    }

    /// Suspend once on every request, so concurrent callers interleave
    pub fn yielding(mut self) -> Self {
        self.yield_on_request = true;
        self
    }

    /// Page with `date <= start_from`, repeating the boundary item
    pub fn inclusive_cursor(mut self) -> Self {
        self.inclusive_cursor = true;
        self
    }

    /// Make the next `count` page requests fail
    pub fn fail_next_pages(&self, count: usize) {
        self.failing_pages.set(count);
    }

    pub fn fail_opens(&self, fail: bool) {
        self.failing_opens.set(fail);
    }

    /// Replace a stored message in place (same id), as a server-side edit would
    pub fn replace_message(&self, section: &str, message: Message) {
        let mut messages = self.messages.borrow_mut();
        if let Some(list) = messages.get_mut(section)
            && let Some(slot) = list
                .iter_mut()
                .find(|m| m.header_message_id == message.header_message_id)
        {
            *slot = message;
        }
    }

    pub fn section_requests(&self) -> usize {
        self.section_requests.get()
    }

    pub fn queries(&self) -> Vec<EmailQuery> {
        self.queries.borrow().clone()
    }

    /// Cursors sent for one section, in request order
    pub fn cursors_for(&self, section: &str) -> Vec<Option<i64>> {
        self.queries
            .borrow()
            .iter()
            .filter(|q| q.section == section)
            .map(|q| q.start_from)
            .collect()
    }

    pub fn opened(&self) -> Vec<Message> {
        self.opened.borrow().clone()
    }

    pub fn summary_requests(&self) -> Vec<MessageId> {
        self.summary_requests.borrow().clone()
    }

    async fn maybe_yield(&self) {
        if self.yield_on_request {
            tokio::task::yield_now().await;
        }
    }

    fn page(&self, query: &EmailQuery) -> Vec<Message> {
        self.messages
            .borrow()
            .get(&query.section)
            .map(|messages| {
                messages
                    .iter()
                    .filter(|m| {
                        query.start_from.is_none_or(|cursor| {
                            m.date < cursor || (self.inclusive_cursor && m.date == cursor)
                        })
                    })
                    .take(query.limit)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl FeedApi for FakeFeedApi {
    fn list_tabs(&self) -> LocalBoxFuture<'_, Result<Vec<Tab>>> {
        async move {
            self.maybe_yield().await;
            Ok(self.tabs.clone())
        }
        .boxed_local()
    }

    fn list_sections<'a>(&'a self, tab: &'a str) -> LocalBoxFuture<'a, Result<Vec<Section>>> {
        async move {
            self.section_requests.set(self.section_requests.get() + 1);
            self.maybe_yield().await;
            self.sections
                .get(tab)
                .cloned()
                .ok_or_else(|| Error::Status {
                    url: format!("/api/tabs/{}/sections", tab),
                    status: 404,
                })
        }
        .boxed_local()
    }

    fn list_emails<'a>(&'a self, query: &'a EmailQuery) -> LocalBoxFuture<'a, Result<Vec<Message>>> {
        async move {
            self.queries.borrow_mut().push(query.clone());
            self.maybe_yield().await;

            let failing = self.failing_pages.get();
            if failing > 0 {
                self.failing_pages.set(failing - 1);
                return Err(Error::Status {
                    url: format!(
                        "/api/tabs/{}/sections/{}/emails",
                        query.tab, query.section
                    ),
                    status: 500,
                });
            }
            Ok(self.page(query))
        }
        .boxed_local()
    }

    fn open_email<'a>(&'a self, message: &'a Message) -> LocalBoxFuture<'a, Result<()>> {
        async move {
            self.maybe_yield().await;
            if self.failing_opens.get() {
                return Err(Error::Api("mail client unavailable".to_string()));
            }
            self.opened.borrow_mut().push(message.clone());
            Ok(())
        }
        .boxed_local()
    }

    fn enqueue_summary<'a>(&'a self, id: &'a MessageId) -> LocalBoxFuture<'a, Result<()>> {
        async move {
            self.maybe_yield().await;
            self.summary_requests.borrow_mut().push(id.clone());
            Ok(())
        }
        .boxed_local()
    }
}

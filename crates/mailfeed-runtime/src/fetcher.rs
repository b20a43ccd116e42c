use crate::Result;
use crate::api::{EmailQuery, FeedApi};
use mailfeed_engine::{PAGE_SIZE, PageRequest, is_exhausted};
use mailfeed_types::Message;
use serde::{Deserialize, Serialize};
use std::rc::Rc;
use tracing::{debug, warn};

/// How often a failed page request is attempted before giving up.
///
/// Attempts are immediate; there is no backoff. The default of one attempt
/// leaves a failed page to the next near-bottom signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    pub max_attempts: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self { max_attempts: 1 }
    }
}

impl RetryPolicy {
    pub fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub items: Vec<Message>,
    /// Short page: the section has nothing further
    pub exhausted: bool,
}

/// Issues cursor-based page requests. Holds no pagination state of its own.
pub struct PageFetcher {
    api: Rc<dyn FeedApi>,
    page_size: usize,
    retry: RetryPolicy,
}

impl PageFetcher {
    pub fn new(api: Rc<dyn FeedApi>) -> Self {
        Self {
            api,
            page_size: PAGE_SIZE,
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub async fn fetch_page(&self, request: &PageRequest) -> Result<Page> {
        let query = EmailQuery {
            tab: request.tab.clone(),
            section: request.section.name.clone(),
            limit: self.page_size,
            start_from: request.cursor,
        };

        let attempts = self.retry.attempts();
        let mut attempt = 1;
        let items = loop {
            match self.api.list_emails(&query).await {
                Ok(items) => break items,
                Err(err) if attempt < attempts => {
                    warn!(
                        section = %query.section,
                        attempt,
                        error = %err,
                        "page request failed, retrying"
                    );
                    attempt += 1;
                }
                Err(err) => {
                    warn!(section = %query.section, error = %err, "page request failed");
                    return Err(err);
                }
            }
        };

        let exhausted = is_exhausted(items.len(), self.page_size);
        debug!(
            section = %query.section,
            cursor = ?query.start_from,
            count = items.len(),
            exhausted,
            "loaded page"
        );
        Ok(Page { items, exhausted })
    }
}

use crate::Result;
use futures::future::LocalBoxFuture;
use mailfeed_types::{Message, MessageId, Section, Tab, Timestamp};

/// Parameters of one page request against a section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailQuery {
    pub tab: String,
    pub section: String,
    pub limit: usize,
    /// Resume after this timestamp; omitted on a section's first page
    pub start_from: Option<Timestamp>,
}

/// The feed server, as seen by the client.
///
/// Futures are not `Send`: the engine runs on a single thread and
/// interleaves requests with scroll, gesture and animation events.
pub trait FeedApi {
    fn list_tabs(&self) -> LocalBoxFuture<'_, Result<Vec<Tab>>>;

    fn list_sections<'a>(&'a self, tab: &'a str) -> LocalBoxFuture<'a, Result<Vec<Section>>>;

    /// One page of a section, newest first
    fn list_emails<'a>(&'a self, query: &'a EmailQuery) -> LocalBoxFuture<'a, Result<Vec<Message>>>;

    /// Ask the mail source to show this message
    fn open_email<'a>(&'a self, message: &'a Message) -> LocalBoxFuture<'a, Result<()>>;

    /// Ask the server to (re)summarize a message
    fn enqueue_summary<'a>(&'a self, id: &'a MessageId) -> LocalBoxFuture<'a, Result<()>>;
}

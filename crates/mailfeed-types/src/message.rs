use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Seconds or milliseconds since the Unix epoch, as delivered by the server.
///
/// The unit is not fixed by the wire format; see
/// `mailfeed_engine::format::format_timestamp` for how it is interpreted.
pub type Timestamp = i64;

/// Stable, feed-wide identifier of a message (the mail `Message-ID` header)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(String);

impl MessageId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for MessageId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for MessageId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for MessageId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A message as served by the feed API.
///
/// The client only reads a handful of fields; everything else the server
/// sends (read/flagged state, folder, tags, recipients...) is kept in
/// `extra` so that the payload can be handed back verbatim to open-email.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub header_message_id: MessageId,

    /// Server timestamp, seconds or milliseconds
    pub date: Timestamp,

    #[serde(default)]
    pub author_name: Option<String>,

    #[serde(default)]
    pub author_email: String,

    #[serde(default)]
    pub subject: Option<String>,

    /// Absent until the server has produced a summary for this message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<MessageSummary>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Message {
    pub fn new(id: impl Into<MessageId>, date: Timestamp, author_email: impl Into<String>) -> Self {
        Self {
            header_message_id: id.into(),
            date,
            author_name: None,
            author_email: author_email.into(),
            subject: None,
            summary: None,
            extra: Map::new(),
        }
    }

    pub fn with_author_name(mut self, name: impl Into<String>) -> Self {
        self.author_name = Some(name.into());
        self
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn with_summary(mut self, summary: MessageSummary) -> Self {
        self.summary = Some(summary);
        self
    }

    pub fn id(&self) -> &MessageId {
        &self.header_message_id
    }
}

/// Server-side summary of a message.
///
/// Besides the summary text, the server attaches probabilistic category
/// scores (`isWork`, `isSpam`, ...). The set of categories is open-ended, and
/// values are not guaranteed to be numbers, so they stay raw JSON here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageSummary {
    #[serde(default)]
    pub summary: Option<String>,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl MessageSummary {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            summary: Some(text.into()),
            fields: Map::new(),
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }
}

use crate::badge::{Badge, compute_badges};
use crate::format::{escape, format_timestamp};
use crate::gesture::{Animation, GestureBindings};
use mailfeed_types::{Message, MessageId};
use serde::Serialize;

/// Display values of a card, already escaped
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardFields {
    pub author_name: String,
    pub author_name_visible: bool,
    pub author_email: String,
    pub datetime: String,
    pub subject: String,
    pub summary: Option<String>,
    /// Shown while the server has not summarized the message yet
    pub loading: bool,
    pub badges: Vec<Badge>,
}

impl CardFields {
    pub fn from_message(message: &Message) -> Self {
        let author_name = message.author_name.as_deref().unwrap_or_default();
        let summary = message.summary.as_ref();
        Self {
            author_name: escape(author_name),
            author_name_visible: !author_name.is_empty(),
            author_email: escape(&message.author_email),
            datetime: escape(&format_timestamp(message.date)),
            subject: escape(message.subject.as_deref().unwrap_or_default()),
            summary: summary.and_then(|s| s.summary.as_deref()).map(escape),
            loading: summary.is_none(),
            badges: compute_badges(summary),
        }
    }
}

/// Rendered projection of one message
#[derive(Debug, Clone)]
pub struct Card {
    id: MessageId,
    markup: String,
    fields: CardFields,
    message: Message,
    bindings: GestureBindings,
    removal: Option<Animation>,
}

impl Card {
    pub(crate) fn new(message: &Message, markup: String) -> Self {
        Self {
            id: message.id().clone(),
            markup,
            fields: CardFields::from_message(message),
            message: message.clone(),
            bindings: GestureBindings::default(),
            removal: None,
        }
    }

    pub(crate) fn refresh(&mut self, message: &Message) {
        self.fields = CardFields::from_message(message);
        self.message = message.clone();
    }

    pub(crate) fn set_removal(&mut self, animation: Animation) {
        self.removal = Some(animation);
    }

    pub fn id(&self) -> &MessageId {
        &self.id
    }

    pub fn markup(&self) -> &str {
        &self.markup
    }

    pub fn fields(&self) -> &CardFields {
        &self.fields
    }

    /// Latest delivered payload for this card
    pub fn message(&self) -> &Message {
        &self.message
    }

    pub fn bindings(&self) -> &GestureBindings {
        &self.bindings
    }

    /// Animation currently playing ahead of destruction, if any
    pub fn removal(&self) -> Option<Animation> {
        self.removal
    }
}

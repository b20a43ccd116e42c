//! The rendered feed: an ordered run of section separators and cards.
//!
//! Cards are keyed by message id; at most one card exists per id. Order in
//! `entries` is insertion order, and a card keeps its slot when updated.

use crate::card::Card;
use crate::gesture::Animation;
use crate::template::Templates;
use crate::viewport::LayoutMetrics;
use mailfeed_types::{Message, MessageId, Section};
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, error};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Separator {
    pub section: String,
    pub display_name: String,
    pub filters: Vec<String>,
    #[serde(skip)]
    pub markup: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Separator(Separator),
    Card(MessageId),
}

impl Entry {
    fn is_separator(&self) -> bool {
        matches!(self, Entry::Separator(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    Created,
    Updated,
}

#[derive(Debug, Default)]
pub struct FeedSurface {
    entries: Vec<Entry>,
    cards: HashMap<MessageId, Card>,
}

impl FeedSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the card if absent, then refresh its fields from `message`
    pub fn upsert(&mut self, message: &Message, templates: &Templates) -> Upsert {
        let id = message.id();
        if let Some(card) = self.cards.get_mut(id) {
            card.refresh(message);
            debug!(card_id = %id, "card updated");
            return Upsert::Updated;
        }

        let card = Card::new(message, templates.render_card(id));
        self.cards.insert(id.clone(), card);
        self.entries.push(Entry::Card(id.clone()));
        debug!(card_id = %id, "card created");
        Upsert::Created
    }

    /// Refresh an existing card; logs and returns false if there is none
    pub fn refresh(&mut self, message: &Message) -> bool {
        match self.cards.get_mut(message.id()) {
            Some(card) => {
                card.refresh(message);
                true
            }
            None => {
                error!(card_id = %message.id(), "card not found for update");
                false
            }
        }
    }

    /// Flag a card as animating out. The card stays in place until destroyed.
    pub fn mark_removing(&mut self, id: &MessageId, animation: Animation) -> bool {
        match self.cards.get_mut(id) {
            Some(card) => {
                card.set_removal(animation);
                true
            }
            None => false,
        }
    }

    /// Drop a card and tidy up the separators around it
    pub fn destroy(&mut self, id: &MessageId) -> Option<Card> {
        let card = self.cards.remove(id)?;
        self.entries
            .retain(|entry| !matches!(entry, Entry::Card(card_id) if card_id == id));
        self.collapse_consecutive_separators();
        self.remove_orphan_separators();
        debug!(card_id = %id, "card destroyed");
        Some(card)
    }

    pub fn append_separator(&mut self, section: &Section, templates: &Templates) {
        self.entries.push(Entry::Separator(Separator {
            section: section.name.clone(),
            display_name: section.display_name.clone(),
            filters: section.filters.clone(),
            markup: templates.render_section(section),
        }));
    }

    /// A separator directly followed by another separator has no cards; the
    /// later one wins.
    pub fn collapse_consecutive_separators(&mut self) {
        let mut kept = Vec::with_capacity(self.entries.len());
        let mut entries = self.entries.drain(..).peekable();
        while let Some(entry) = entries.next() {
            let followed_by_separator = entries.peek().is_some_and(Entry::is_separator);
            if entry.is_separator() && followed_by_separator {
                continue;
            }
            kept.push(entry);
        }
        drop(entries);
        self.entries = kept;
    }

    /// Remove separators with nothing after them
    pub fn remove_orphan_separators(&mut self) {
        while self.entries.last().is_some_and(Entry::is_separator) {
            self.entries.pop();
        }
    }

    pub fn content_height(&self, layout: &LayoutMetrics) -> f64 {
        self.entries
            .iter()
            .map(|entry| match entry {
                Entry::Separator(_) => layout.separator_height,
                Entry::Card(_) => layout.card_height,
            })
            .sum()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn card(&self, id: &MessageId) -> Option<&Card> {
        self.cards.get(id)
    }

    pub fn contains(&self, id: &MessageId) -> bool {
        self.cards.contains_key(id)
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    pub fn separator_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_separator()).count()
    }

    /// Cards in display order
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.entries.iter().filter_map(|entry| match entry {
            Entry::Card(id) => self.cards.get(id),
            Entry::Separator(_) => None,
        })
    }

    /// Concatenated markup of every entry, in order
    pub fn to_markup(&self) -> String {
        self.entries
            .iter()
            .filter_map(|entry| match entry {
                Entry::Separator(separator) => Some(separator.markup.as_str()),
                Entry::Card(id) => self.cards.get(id).map(Card::markup),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

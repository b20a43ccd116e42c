use mailfeed_engine::{Badge, Card, Entry, FeedSurface, Separator, format_timestamp};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct FeedView {
    pub tab: String,
    pub finished: bool,
    pub sections: Vec<SectionView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionView {
    pub name: String,
    pub display_name: String,
    pub filters: Vec<String>,
    pub cards: Vec<CardView>,
}

/// Terminal-facing card: raw text, not the escaped markup fields
#[derive(Debug, Clone, Serialize)]
pub struct CardView {
    pub id: String,
    pub author_name: Option<String>,
    pub author_email: String,
    pub datetime: String,
    pub subject: String,
    pub summary: Option<String>,
    pub summarizing: bool,
    pub badges: Vec<Badge>,
}

impl FeedView {
    /// Group the surface's cards under the separator that precedes them
    pub fn build(tab: &str, finished: bool, surface: &FeedSurface) -> Self {
        let mut sections: Vec<SectionView> = Vec::new();
        for entry in surface.entries() {
            match entry {
                Entry::Separator(separator) => sections.push(SectionView::from(separator)),
                Entry::Card(id) => {
                    let Some(card) = surface.card(id) else {
                        continue;
                    };
                    if sections.is_empty() {
                        sections.push(SectionView::unsectioned());
                    }
                    if let Some(section) = sections.last_mut() {
                        section.cards.push(CardView::from(card));
                    }
                }
            }
        }

        Self {
            tab: tab.to_string(),
            finished,
            sections,
        }
    }

    pub fn card_count(&self) -> usize {
        self.sections.iter().map(|s| s.cards.len()).sum()
    }
}

impl SectionView {
    /// Holds cards delivered before any separator
    fn unsectioned() -> Self {
        Self {
            name: String::new(),
            display_name: String::new(),
            filters: Vec::new(),
            cards: Vec::new(),
        }
    }
}

impl From<&Separator> for SectionView {
    fn from(separator: &Separator) -> Self {
        Self {
            name: separator.section.clone(),
            display_name: separator.display_name.clone(),
            filters: separator.filters.clone(),
            cards: Vec::new(),
        }
    }
}

impl From<&Card> for CardView {
    fn from(card: &Card) -> Self {
        let message = card.message();
        let fields = card.fields();
        Self {
            id: card.id().to_string(),
            author_name: message.author_name.clone().filter(|name| !name.is_empty()),
            author_email: message.author_email.clone(),
            datetime: format_timestamp(message.date),
            subject: message.subject.clone().unwrap_or_default(),
            summary: message.summary.as_ref().and_then(|s| s.summary.clone()),
            summarizing: fields.loading,
            badges: fields.badges.clone(),
        }
    }
}

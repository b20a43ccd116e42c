use mailfeed_types::{MessageId, Section};

pub const ID_TOKEN: &str = "{{id}}";
pub const DISPLAY_NAME_TOKEN: &str = "{{display_name}}";
pub const FILTERS_TOKEN: &str = "{{filters}}";

const DEFAULT_CARD: &str = include_str!("../templates/card.html");
const DEFAULT_SECTION: &str = include_str!("../templates/section.html");

/// Externally supplied markup for cards and section separators.
///
/// Only the placeholder tokens are substituted; the rest of the markup is
/// opaque and never validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Templates {
    card: String,
    section: String,
}

impl Default for Templates {
    fn default() -> Self {
        Self::new(DEFAULT_CARD, DEFAULT_SECTION)
    }
}

impl Templates {
    pub fn new(card: impl Into<String>, section: impl Into<String>) -> Self {
        Self {
            card: card.into(),
            section: section.into(),
        }
    }

    pub fn with_card(mut self, card: impl Into<String>) -> Self {
        self.card = card.into();
        self
    }

    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = section.into();
        self
    }

    pub fn render_card(&self, id: &MessageId) -> String {
        self.card.replacen(ID_TOKEN, id.as_str(), 1).trim().to_string()
    }

    pub fn render_section(&self, section: &Section) -> String {
        let filters: String = section
            .filters
            .iter()
            .map(|filter| format!("<li>{}</li>", filter))
            .collect();
        self.section
            .replacen(DISPLAY_NAME_TOKEN, &section.display_name, 1)
            .replacen(FILTERS_TOKEN, &filters, 1)
            .trim()
            .to_string()
    }
}

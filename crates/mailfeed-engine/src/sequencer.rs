//! Section-by-section pagination state for one feed view.
//!
//! ```text
//! NoSectionsLoaded -> SectionActive(0) -> SectionExhausted(0)
//!                  -> SectionActive(1) -> ... -> AllSectionsDone
//! ```

use mailfeed_types::{Message, Section, Timestamp};
use serde::Serialize;
use tracing::{info, warn};

/// Items requested per page
pub const PAGE_SIZE: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SequencerState {
    NoSectionsLoaded,
    SectionActive {
        index: usize,
        /// Timestamp of the last item seen in this section
        cursor: Option<Timestamp>,
    },
    SectionExhausted {
        index: usize,
    },
    AllSectionsDone,
}

/// Everything needed to ask for the next page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub tab: String,
    pub index: usize,
    pub section: Section,
    pub cursor: Option<Timestamp>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOutcome {
    /// Section may have more items
    Continue,
    Exhausted,
    /// No section was active; the page was not applied
    Ignored,
}

#[derive(Debug, Clone)]
pub struct SectionSequencer {
    tab: String,
    sections: Vec<Section>,
    state: SequencerState,
}

impl SectionSequencer {
    pub fn new(tab: impl Into<String>) -> Self {
        Self {
            tab: tab.into(),
            sections: Vec::new(),
            state: SequencerState::NoSectionsLoaded,
        }
    }

    pub fn tab(&self) -> &str {
        &self.tab
    }

    pub fn state(&self) -> SequencerState {
        self.state
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn needs_sections(&self) -> bool {
        self.state == SequencerState::NoSectionsLoaded
    }

    pub fn is_finished(&self) -> bool {
        self.state == SequencerState::AllSectionsDone
    }

    /// Install the tab's section list and activate the first section.
    ///
    /// Returns the section whose separator should be rendered, or `None`
    /// when the tab has no sections at all.
    pub fn begin(&mut self, sections: Vec<Section>) -> Option<&Section> {
        self.sections = sections;
        if self.sections.is_empty() {
            self.state = SequencerState::AllSectionsDone;
            return None;
        }
        self.state = SequencerState::SectionActive {
            index: 0,
            cursor: None,
        };
        self.sections.first()
    }

    pub fn current_section(&self) -> Option<&Section> {
        match self.state {
            SequencerState::SectionActive { index, .. }
            | SequencerState::SectionExhausted { index } => self.sections.get(index),
            _ => None,
        }
    }

    pub fn next_request(&self) -> Option<PageRequest> {
        let SequencerState::SectionActive { index, cursor } = self.state else {
            return None;
        };
        let section = self.sections.get(index)?;
        Some(PageRequest {
            tab: self.tab.clone(),
            index,
            section: section.clone(),
            cursor,
        })
    }

    /// Apply a fetched page to the active section's cursor
    pub fn record_page(&mut self, items: &[Message], exhausted: bool) -> PageOutcome {
        let SequencerState::SectionActive { index, cursor } = self.state else {
            return PageOutcome::Ignored;
        };

        let next_cursor = match items.last() {
            Some(last) => {
                if let Some(previous) = cursor
                    && last.date > previous
                {
                    warn!(
                        section = %self.sections[index].name,
                        previous,
                        next = last.date,
                        "page cursor moved forward in time"
                    );
                }
                Some(last.date)
            }
            None => cursor,
        };

        // A page ending on the current cursor would be requested again verbatim
        let stalled = !items.is_empty() && cursor.is_some() && next_cursor == cursor;
        if stalled && !exhausted {
            warn!(
                section = %self.sections[index].name,
                cursor = ?cursor,
                "page cursor did not advance, ending section"
            );
        }

        if exhausted || stalled {
            self.state = SequencerState::SectionExhausted { index };
            PageOutcome::Exhausted
        } else {
            self.state = SequencerState::SectionActive {
                index,
                cursor: next_cursor,
            };
            PageOutcome::Continue
        }
    }

    /// Move past an exhausted section.
    ///
    /// Returns the newly active section, or `None` once every section is done.
    pub fn advance(&mut self) -> Option<&Section> {
        let SequencerState::SectionExhausted { index } = self.state else {
            return None;
        };
        info!(section = %self.sections[index].name, "reached end of section");

        let next = index + 1;
        if next < self.sections.len() {
            self.state = SequencerState::SectionActive {
                index: next,
                cursor: None,
            };
            self.sections.get(next)
        } else {
            info!(tab = %self.tab, "finished loading all sections");
            self.state = SequencerState::AllSectionsDone;
            None
        }
    }
}

/// A page is the last one iff it came back short
pub fn is_exhausted(len: usize, page_size: usize) -> bool {
    len < page_size
}

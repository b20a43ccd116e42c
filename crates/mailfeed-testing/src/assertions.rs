//! Checks over a rendered feed surface.

use anyhow::Result;
use mailfeed_engine::{Entry, FeedSurface};
use std::collections::HashSet;

/// Entries as strings: `#name` for separators, the message id for cards
pub fn layout(surface: &FeedSurface) -> Vec<String> {
    surface
        .entries()
        .iter()
        .map(|entry| match entry {
            Entry::Separator(separator) => format!("#{}", separator.section),
            Entry::Card(id) => id.to_string(),
        })
        .collect()
}

/// Section names of separators, in order
pub fn separators(surface: &FeedSurface) -> Vec<String> {
    surface
        .entries()
        .iter()
        .filter_map(|entry| match entry {
            Entry::Separator(separator) => Some(separator.section.clone()),
            Entry::Card(_) => None,
        })
        .collect()
}

/// Every card id appears exactly once in the entry list
pub fn assert_unique_cards(surface: &FeedSurface) -> Result<()> {
    let mut seen = HashSet::new();
    for entry in surface.entries() {
        if let Entry::Card(id) = entry
            && !seen.insert(id.clone())
        {
            anyhow::bail!("card {} rendered more than once", id);
        }
    }

    if seen.len() != surface.card_count() {
        anyhow::bail!(
            "{} cards in entries but {} registered",
            seen.len(),
            surface.card_count()
        );
    }
    Ok(())
}

/// No two separators in a row and none at the very end
pub fn assert_separator_hygiene(surface: &FeedSurface) -> Result<()> {
    let entries = surface.entries();
    for pair in entries.windows(2) {
        if let [Entry::Separator(a), Entry::Separator(_)] = pair {
            anyhow::bail!("separator {} has no cards after it", a.section);
        }
    }
    if let Some(Entry::Separator(last)) = entries.last() {
        anyhow::bail!("trailing separator {}", last.section);
    }
    Ok(())
}

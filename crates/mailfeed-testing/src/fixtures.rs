//! Sample data for feed tests.

use mailfeed_types::{Message, MessageSummary, Section, Timestamp};

/// Gap between consecutive fixture messages, in seconds
pub const MESSAGE_SPACING: Timestamp = 60;

/// `count` messages with ids `{prefix}-0..`, newest first, starting at `newest`
pub fn messages(prefix: &str, newest: Timestamp, count: usize) -> Vec<Message> {
    (0..count)
        .map(|i| {
            let date = newest - i as Timestamp * MESSAGE_SPACING;
            Message::new(format!("{}-{}", prefix, i), date, format!("{}@example.com", prefix))
                .with_author_name(format!("Sender {}", i))
                .with_subject(format!("{} message {}", prefix, i))
        })
        .collect()
}

/// A message with a summary carrying the given category scores
pub fn summarized(id: &str, date: Timestamp, scores: &[(&str, f64)]) -> Message {
    let summary = scores
        .iter()
        .fold(MessageSummary::new(format!("Summary of {}", id)), |s, (k, v)| {
            s.with_field(*k, *v)
        });
    Message::new(id, date, "someone@example.com")
        .with_subject(format!("Subject {}", id))
        .with_summary(summary)
}

pub fn section(name: &str) -> Section {
    Section::new(name, name.to_uppercase()).with_filters([format!("section: {}", name)])
}

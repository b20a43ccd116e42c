use super::view_models::{CardView, FeedView, SectionView};
use mailfeed_engine::{Badge, BadgeStyle};
use mailfeed_types::{Section, Tab};
use owo_colors::OwoColorize;

const INDENT: &str = "    ";

pub fn format_feed(view: &FeedView, color: bool) -> Vec<String> {
    let mut lines = Vec::new();

    if view.sections.is_empty() {
        let msg = format!("No messages in tab '{}'", view.tab);
        lines.push(if color {
            format!("{}", msg.bright_black())
        } else {
            msg
        });
        return lines;
    }

    for section in &view.sections {
        lines.extend(format_section_header(section, color));
        for card in &section.cards {
            lines.extend(format_card(card, color));
        }
        lines.push(String::new());
    }

    let footer = if view.finished {
        format!("{} messages, end of feed", view.card_count())
    } else {
        format!("{} messages, more available", view.card_count())
    };
    lines.push(if color {
        format!("{}", footer.bright_black())
    } else {
        footer
    });
    lines
}

fn format_section_header(section: &SectionView, color: bool) -> Vec<String> {
    if section.name.is_empty() {
        return Vec::new();
    }

    let title = format!("== {} ==", section.display_name);
    let mut lines = vec![if color {
        format!("{}", title.bold())
    } else {
        title
    }];
    if !section.filters.is_empty() {
        let filters = section.filters.join(", ");
        lines.push(if color {
            format!("{}", filters.bright_black())
        } else {
            filters
        });
    }
    lines
}

fn format_card(card: &CardView, color: bool) -> Vec<String> {
    let author = match &card.author_name {
        Some(name) => format!("{} <{}>", name, card.author_email),
        None => card.author_email.clone(),
    };

    let mut lines = Vec::new();
    if color {
        lines.push(format!("  {}  {}", card.datetime.bright_black(), author.cyan()));
        lines.push(format!("{}{}", INDENT, card.subject.bold()));
    } else {
        lines.push(format!("  {}  {}", card.datetime, author));
        lines.push(format!("{}{}", INDENT, card.subject));
    }

    match &card.summary {
        Some(summary) => lines.push(format!("{}{}", INDENT, summary)),
        None if card.summarizing => lines.push(if color {
            format!("{}{}", INDENT, "Summarizing...".yellow())
        } else {
            format!("{}Summarizing...", INDENT)
        }),
        None => {}
    }

    if !card.badges.is_empty() {
        let badges: Vec<String> = card
            .badges
            .iter()
            .map(|badge| format_badge(badge, color))
            .collect();
        lines.push(format!("{}{}", INDENT, badges.join(" ")));
    }
    lines
}

fn format_badge(badge: &Badge, color: bool) -> String {
    let text = format!("[{}]", badge.text());
    if !color {
        return text;
    }
    match badge.style {
        BadgeStyle::Danger => format!("{}", text.red()),
        BadgeStyle::Secondary => format!("{}", text.bright_black()),
    }
}

pub fn format_tabs(tabs: &[Tab], current: &str, color: bool) -> Vec<String> {
    tabs.iter()
        .map(|tab| {
            let marker = if tab.name == current { "*" } else { " " };
            let line = format!("{} {:<16} {}", marker, tab.name, tab.display_name);
            if color && tab.name == current {
                format!("{}", line.green())
            } else {
                line
            }
        })
        .collect()
}

pub fn format_sections(sections: &[Section], color: bool) -> Vec<String> {
    let mut lines = Vec::new();
    for section in sections {
        lines.push(if color {
            format!("{}", section.label().bold())
        } else {
            section.label().to_string()
        });
        for filter in &section.filters {
            lines.push(format!("{}- {}", INDENT, filter));
        }
    }
    lines
}

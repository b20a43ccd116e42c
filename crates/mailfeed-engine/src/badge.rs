use mailfeed_types::MessageSummary;
use serde::Serialize;

/// Summary fields carrying a category probability start with this prefix
pub const CATEGORY_PREFIX: &str = "is";

/// Scores at or below this probability produce no badge
pub const CHANCE_THRESHOLD: f64 = 0.3;

/// The one category rendered with the danger style
pub const DANGER_CATEGORY: &str = "isWork";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeStyle {
    Danger,
    Secondary,
}

impl BadgeStyle {
    pub fn css_class(self) -> &'static str {
        match self {
            BadgeStyle::Danger => "badge-danger",
            BadgeStyle::Secondary => "badge-secondary",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub label: String,
    pub percent: i64,
    pub style: BadgeStyle,
}

impl Badge {
    /// `Work: 31%`
    pub fn text(&self) -> String {
        format!("{}: {}%", self.label, self.percent)
    }
}

/// Derive the badge set for a summary.
///
/// Non-numeric scores are skipped. The returned set replaces whatever badges
/// a card showed before.
pub fn compute_badges(summary: Option<&MessageSummary>) -> Vec<Badge> {
    let Some(summary) = summary else {
        return Vec::new();
    };

    summary
        .fields
        .iter()
        .filter_map(|(key, value)| {
            let label = key.strip_prefix(CATEGORY_PREFIX)?;
            let chance = value.as_f64()?;
            if chance <= CHANCE_THRESHOLD {
                return None;
            }
            let style = if key == DANGER_CATEGORY {
                BadgeStyle::Danger
            } else {
                BadgeStyle::Secondary
            };
            Some(Badge {
                label: label.to_string(),
                percent: (chance * 100.0).round() as i64,
                style,
            })
        })
        .collect()
}

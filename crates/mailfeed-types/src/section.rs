use serde::{Deserialize, Serialize};

/// A named, ordered slice of a tab's feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Machine name, used in API paths
    pub name: String,

    #[serde(default)]
    pub display_name: String,

    /// Human-readable filter descriptions, e.g. `sender_domain: example.com`
    #[serde(default)]
    pub filters: Vec<String>,
}

impl Section {
    pub fn new(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            filters: Vec::new(),
        }
    }

    pub fn with_filters<I, S>(mut self, filters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filters = filters.into_iter().map(Into::into).collect();
        self
    }

    /// Display name, falling back to the machine name
    pub fn label(&self) -> &str {
        if self.display_name.is_empty() {
            &self.name
        } else {
            &self.display_name
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    pub name: String,

    #[serde(default)]
    pub display_name: String,
}

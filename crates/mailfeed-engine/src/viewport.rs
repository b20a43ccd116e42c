use serde::{Deserialize, Serialize};

/// Distance from the end of content, in layout units, under which the
/// viewport counts as near the bottom
pub const NEAR_BOTTOM_THRESHOLD: f64 = 1000.0;

/// Snapshot of the scrollable surface geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportMetrics {
    /// Offset of the top of the visible area
    pub scroll_top: f64,
    pub viewport_height: f64,
    pub content_height: f64,
}

impl ViewportMetrics {
    pub fn distance_to_bottom(&self) -> f64 {
        self.content_height - (self.scroll_top + self.viewport_height)
    }

    pub fn is_near_bottom(&self, threshold: f64) -> bool {
        self.distance_to_bottom() < threshold
    }
}

/// Heights used to lay out the rendered surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutMetrics {
    pub card_height: f64,
    pub separator_height: f64,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            card_height: 160.0,
            separator_height: 56.0,
        }
    }
}

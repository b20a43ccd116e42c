use serde::{Deserialize, Serialize};

/// Removal animation played before a card is destroyed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Animation {
    SwipeLeft,
    SwipeRight,
}

impl Animation {
    pub fn css_class(self) -> &'static str {
        match self {
            Animation::SwipeLeft => "card-removal-swipe-left",
            Animation::SwipeRight => "card-removal-swipe-right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gesture {
    SwipeLeft,
    SwipeRight,
    Tap,
}

/// A recognized gesture as reported by the rendering surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureEvent {
    pub gesture: Gesture,
    /// Set when something upstream already handled the event
    pub default_prevented: bool,
}

impl GestureEvent {
    pub fn new(gesture: Gesture) -> Self {
        Self {
            gesture,
            default_prevented: false,
        }
    }

    pub fn prevented(gesture: Gesture) -> Self {
        Self {
            gesture,
            default_prevented: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureAction {
    Remove(Option<Animation>),
    Open,
}

/// Per-card gesture table, fixed when the card is created
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureBindings {
    pub swipe_left: GestureAction,
    pub swipe_right: GestureAction,
    pub tap: GestureAction,
}

impl Default for GestureBindings {
    fn default() -> Self {
        Self {
            swipe_left: GestureAction::Remove(Some(Animation::SwipeLeft)),
            swipe_right: GestureAction::Remove(Some(Animation::SwipeRight)),
            tap: GestureAction::Open,
        }
    }
}

impl GestureBindings {
    /// Action for an event, or `None` if the event was already prevented
    pub fn resolve(&self, event: GestureEvent) -> Option<GestureAction> {
        if event.default_prevented {
            return None;
        }
        Some(match event.gesture {
            Gesture::SwipeLeft => self.swipe_left,
            Gesture::SwipeRight => self.swipe_right,
            Gesture::Tap => self.tap,
        })
    }
}

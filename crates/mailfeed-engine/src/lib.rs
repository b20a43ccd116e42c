// Engine - synchronous feed reconciliation core.
// Owns no I/O: the runtime crate feeds it pages and drives it from scroll,
// gesture and animation events.

pub mod badge;
pub mod card;
pub mod format;
pub mod gesture;
pub mod sequencer;
pub mod surface;
pub mod template;
pub mod throttle;
pub mod viewport;

pub use badge::{Badge, BadgeStyle, compute_badges};
pub use card::{Card, CardFields};
pub use format::{escape, format_timestamp};
pub use gesture::{Animation, Gesture, GestureAction, GestureBindings, GestureEvent};
pub use sequencer::{
    PAGE_SIZE, PageOutcome, PageRequest, SectionSequencer, SequencerState, is_exhausted,
};
pub use surface::{Entry, FeedSurface, Separator, Upsert};
pub use template::Templates;
pub use throttle::{SCROLL_THROTTLE_INTERVAL, ScrollThrottle};
pub use viewport::{LayoutMetrics, NEAR_BOTTOM_THRESHOLD, ViewportMetrics};

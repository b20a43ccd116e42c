//! Testing infrastructure for mailfeed integration tests.
//!
//! - `FakeFeedApi`: in-memory feed server that records every request
//! - `animators`: animators whose completion the test controls
//! - `fixtures`: message and section builders
//! - `assertions`: checks over a rendered feed surface

pub mod animators;
pub mod assertions;
pub mod fake_api;
pub mod fixtures;

pub use animators::{GatedAnimator, RecordingAnimator};
pub use fake_api::FakeFeedApi;

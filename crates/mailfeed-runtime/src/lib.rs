//! mailfeed-runtime: drives a feed view against the feed server.
//!
//! The pure reconciliation logic lives in `mailfeed-engine`; this crate adds
//! the collaborators it talks to (feed API, viewport, animator), the paged
//! fetcher and the reentrancy-guarded [`FeedEngine`] that ties them together.
//!
//! ```no_run
//! use mailfeed_runtime::{FeedEngine, HttpFeedApi, StaticViewport};
//! use std::rc::Rc;
//!
//! # async fn run() -> mailfeed_runtime::Result<()> {
//! let api = Rc::new(HttpFeedApi::new("http://127.0.0.1:5000")?);
//! let viewport = Rc::new(StaticViewport::new(900.0));
//! let engine = FeedEngine::builder(api, "general")
//!     .viewport(viewport)
//!     .build();
//!
//! engine.load_next().await?;
//! println!("{} cards", engine.surface().card_count());
//! # Ok(())
//! # }
//! ```

pub mod animation;
pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod fetcher;
pub mod http;
pub mod viewport;

pub use animation::{Animator, ImmediateAnimator, TimedAnimator};
pub use api::{EmailQuery, FeedApi};
pub use config::{Config, FeedConfig, resolve_config_path};
pub use engine::{FeedEngine, FeedEngineBuilder};
pub use error::{Error, Result};
pub use fetcher::{Page, PageFetcher, RetryPolicy};
pub use http::HttpFeedApi;
pub use viewport::{StaticViewport, Viewport};

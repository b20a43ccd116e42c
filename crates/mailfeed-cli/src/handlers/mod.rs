mod context;

pub mod config;
pub mod feed;
pub mod sections;
pub mod summarize;
pub mod tabs;

pub use context::HandlerContext;

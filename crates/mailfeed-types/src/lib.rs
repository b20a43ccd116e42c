pub mod message;
pub mod section;

pub use message::*;
pub use section::*;

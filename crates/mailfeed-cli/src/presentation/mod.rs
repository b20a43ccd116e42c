pub mod text;
pub mod view_models;

pub use view_models::{CardView, FeedView, SectionView};

pub mod loader;
pub mod recommendations;

pub use loader::load_questions;
pub use recommendations::{RecommendationMap, NO_RECOMMENDATION};

pub mod types;

pub use types::QuizError;

pub mod question;
pub mod submission;

pub use question::*;
pub use submission::*;

pub mod health;
pub mod questions;
pub mod report;
pub mod submit;

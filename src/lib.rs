pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod models;
pub mod questions;
pub mod reporting;
pub mod store;

pub mod responses;

pub use responses::{ResponseStore, STORE_HEADER};

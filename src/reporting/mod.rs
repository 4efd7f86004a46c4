pub mod assembler;
pub mod document;
pub mod fonts;
pub mod layout;
pub mod pdf;

pub use assembler::generate_report;
pub use document::{ReportDocument, ReportEntry};

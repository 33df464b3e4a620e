//! Output formatters (text and JSONL)

pub mod jsonl;
pub mod text;

pub use jsonl::JsonlFormatter;
pub use text::{format_finding, write_finding};

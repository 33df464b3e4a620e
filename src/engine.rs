//! File discovery and check execution

pub mod executor;
pub mod file_walker;

pub use executor::{ExecutionResult, FileReport, check_snippet, execute};
pub use file_walker::{FileWalker, FileWalkerError};

//! Error types for the checker
//!
//! Per-file problems (unreadable or unparseable sources) are handled where
//! they occur and never surface here; these variants cover failures of the
//! run itself.

use crate::engine::file_walker::FileWalkerError;

/// Top-level error type
#[derive(Debug, thiserror::Error)]
pub enum KwonlyError {
    /// File discovery error
    #[error("File walker error: {0}")]
    Walk(#[from] FileWalkerError),

    /// I/O error writing output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

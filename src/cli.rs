//! CLI argument parsing and check dispatch

pub mod args;
pub mod check;

// Re-export types for convenient access
pub use args::{Cli, ColorChoice, OutputFormat};
pub use check::run_check;

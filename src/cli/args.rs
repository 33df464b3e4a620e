//! CLI argument parsing using clap

use clap::{Parser, ValueEnum};

/// Output format for check results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable `path:line:col` lines
    Human,
    /// JSON Lines format (one JSON object per line)
    Jsonl,
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Automatically detect if terminal supports color
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}

/// kwonly CLI entry point
#[derive(Parser, Debug)]
#[command(name = "kwonly")]
#[command(about = "Flag defaulted Python parameters that can still be passed positionally")]
#[command(version)]
pub struct Cli {
    /// Paths to check: directories are searched recursively for .py files,
    /// file paths are checked directly (defaults to current directory)
    #[arg(default_value = ".")]
    pub paths: Vec<String>,

    /// Output format
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,

    /// Output coloring
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Additional glob patterns to exclude (repeatable)
    #[arg(long, value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Report skipped paths during file discovery
    #[arg(short, long)]
    pub verbose: bool,
}

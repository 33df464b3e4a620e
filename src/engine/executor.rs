#![forbid(unsafe_code)]

//! Parallel check execution across discovered files
//!
//! Files are checked with rayon, one parser per file. Results come back in
//! discovery order so repeated runs over the same tree print identically.

use crate::output::format_finding;
use crate::rules::{Finding, check_source};
use rayon::prelude::*;
use std::fs;
use std::path::PathBuf;

/// Display name used in place of a path when checking in-memory snippets
pub const MEMORY_DISPLAY: &str = "<memory>";

/// Findings for a single checked file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// Path as discovered (relative roots stay relative)
    pub path: PathBuf,
    /// Findings in source order; empty for clean, unreadable, and
    /// unparseable files alike
    pub findings: Vec<Finding>,
}

/// Result of checking all discovered files
#[derive(Debug)]
pub struct ExecutionResult {
    /// Per-file reports in discovery order
    pub reports: Vec<FileReport>,
}

impl ExecutionResult {
    /// Number of files checked
    pub fn files_checked(&self) -> usize {
        self.reports.len()
    }

    /// Total findings across all files
    pub fn total_findings(&self) -> usize {
        self.reports.iter().map(|r| r.findings.len()).sum()
    }

    /// True when at least one finding was produced
    pub fn has_findings(&self) -> bool {
        self.reports.iter().any(|r| !r.findings.is_empty())
    }
}

/// Checks all files in parallel, preserving the given order in the result.
pub fn execute(files: Vec<PathBuf>) -> ExecutionResult {
    let reports: Vec<FileReport> = files.into_par_iter().map(check_file).collect();
    ExecutionResult { reports }
}

/// Checks a single file.
///
/// A file that cannot be read is reported on stderr and contributes no
/// findings; the run continues.
pub fn check_file(path: PathBuf) -> FileReport {
    let findings = match fs::read_to_string(&path) {
        Ok(content) => check_source(&content),
        Err(e) => {
            eprintln!("Warning: Failed to read file {}: {}", path.display(), e);
            Vec::new()
        }
    };
    FileReport { path, findings }
}

/// Checks an in-memory snippet and returns its findings as formatted lines.
///
/// The snippet is dedented and stripped of leading blank lines first, so
/// indented test snippets check like a file whose content starts at column
/// one. Lines use [`MEMORY_DISPLAY`] as the display name.
pub fn check_snippet(snippet: &str) -> Vec<String> {
    let source = dedent(snippet);
    let source = source.trim_start_matches('\n');
    check_source(source)
        .iter()
        .map(|finding| format_finding(MEMORY_DISPLAY, finding))
        .collect()
}

/// Removes the longest common leading whitespace from all non-blank lines.
///
/// Whitespace-only lines are ignored when computing the margin and come out
/// empty. Every line in the result ends with a newline.
fn dedent(text: &str) -> String {
    let margin = common_margin(text);

    let mut out = String::with_capacity(text.len());
    for line in text.lines() {
        if line.trim_start().is_empty() {
            out.push('\n');
            continue;
        }
        out.push_str(line.strip_prefix(margin).unwrap_or(line));
        out.push('\n');
    }
    out
}

/// Longest whitespace prefix shared by every non-blank line.
fn common_margin(text: &str) -> &str {
    let mut margin: Option<&str> = None;
    for line in text.lines() {
        let trimmed = line.trim_start();
        if trimmed.is_empty() {
            continue;
        }
        let indent = &line[..line.len() - trimmed.len()];
        margin = Some(match margin {
            None => indent,
            Some(current) => {
                let mut end = 0;
                for (a, b) in current.chars().zip(indent.chars()) {
                    if a != b {
                        break;
                    }
                    end += a.len_utf8();
                }
                &current[..end]
            }
        });
    }
    margin.unwrap_or("")
}

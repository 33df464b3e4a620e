//! Check pipeline
//!
//! This module drives a full run:
//! - Discovers `.py` files under the given paths
//! - Checks them in parallel
//! - Prints findings to stdout (human or JSONL)
//! - Returns the process exit code

use crate::cli::args::{Cli, ColorChoice, OutputFormat};
use crate::engine::executor::{ExecutionResult, execute};
use crate::engine::file_walker::{FileWalker, SkipReason, WalkResult};
use crate::error::KwonlyError;
use crate::output::jsonl::JsonlFormatter;
use crate::output::text::write_finding;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use termcolor::StandardStream;

/// Exit code when no findings were produced
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code when at least one finding was produced
pub const EXIT_FINDINGS: i32 = 1;
/// Exit code for run failures (bad exclude pattern, output error)
pub const EXIT_ERROR: i32 = 2;

/// Run a full check
///
/// # Returns
///
/// Exit code:
/// - 0: no findings
/// - 1: one or more findings
/// - 2: the run itself failed
pub fn run_check(cli: &Cli) -> i32 {
    match run_check_inner(cli) {
        Ok(result) => {
            if result.has_findings() {
                EXIT_FINDINGS
            } else {
                EXIT_SUCCESS
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_ERROR
        }
    }
}

/// Internal implementation of the check pipeline
fn run_check_inner(cli: &Cli) -> Result<ExecutionResult, KwonlyError> {
    let files = discover_files(cli)?;
    let result = execute(files);

    match cli.format {
        OutputFormat::Human => print_text_output(&result, cli.color)?,
        OutputFormat::Jsonl => print!("{}", JsonlFormatter::new().format(&result)),
    }

    Ok(result)
}

/// Discover files to check using FileWalker
///
/// Walk errors below a root (for example an unreadable subdirectory) are
/// reported on stderr and skipped; only an invalid exclude pattern fails
/// discovery as a whole.
fn discover_files(cli: &Cli) -> Result<Vec<PathBuf>, KwonlyError> {
    let roots: Vec<PathBuf> = cli.paths.iter().map(PathBuf::from).collect();
    let walker = FileWalker::with_verbose(&roots, &cli.exclude, cli.verbose)?;

    let mut files = Vec::new();
    for result in walker.walk_with_skip_info() {
        match result {
            Ok(WalkResult::File(path)) => files.push(path),
            Ok(WalkResult::Skipped { path, reason }) => report_skip(&path, &reason),
            Err(e) => eprintln!("Warning: {}", e),
        }
    }
    Ok(files)
}

/// Explain a skipped path on stderr; only produced in verbose mode.
fn report_skip(path: &Path, reason: &SkipReason) {
    let why = match reason {
        SkipReason::Excluded => "under an excluded directory",
        SkipReason::ExcludedByPattern => "matches an exclude pattern",
        SkipReason::NotPython => "not a Python file",
        SkipReason::MissingRoot => "path does not exist",
        // Directory entries carry no information worth a line of output.
        SkipReason::NotAFile => return,
    };
    eprintln!("Skipped {}: {}", path.display(), why);
}

/// Print findings as text lines on stdout
fn print_text_output(result: &ExecutionResult, color: ColorChoice) -> Result<(), KwonlyError> {
    let mut stdout = StandardStream::stdout(termcolor_choice(color));
    for report in &result.reports {
        let display = report.path.display().to_string();
        for finding in &report.findings {
            write_finding(&mut stdout, &display, finding)?;
        }
    }
    Ok(())
}

/// Map the CLI color choice onto termcolor's, downgrading `auto` to `never`
/// when stdout is not a terminal.
fn termcolor_choice(color: ColorChoice) -> termcolor::ColorChoice {
    match color {
        ColorChoice::Always => termcolor::ColorChoice::Always,
        ColorChoice::Never => termcolor::ColorChoice::Never,
        ColorChoice::Auto => {
            if std::io::stdout().is_terminal() {
                termcolor::ColorChoice::Auto
            } else {
                termcolor::ColorChoice::Never
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(EXIT_SUCCESS, 0);
        assert_eq!(EXIT_FINDINGS, 1);
        assert_eq!(EXIT_ERROR, 2);
    }

    #[test]
    fn test_termcolor_choice_respects_explicit_flags() {
        assert!(matches!(
            termcolor_choice(ColorChoice::Always),
            termcolor::ColorChoice::Always
        ));
        assert!(matches!(
            termcolor_choice(ColorChoice::Never),
            termcolor::ColorChoice::Never
        ));
    }

    #[test]
    fn test_invalid_exclude_pattern_fails_the_run() {
        let cli = Cli {
            paths: vec![".".to_string()],
            format: OutputFormat::Human,
            color: ColorChoice::Never,
            exclude: vec!["[bad".to_string()],
            verbose: false,
        };
        assert_eq!(run_check(&cli), EXIT_ERROR);
    }
}

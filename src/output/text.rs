//! Human-readable text output
//!
//! One line per finding in `path:line:col: CODE message` form, the format
//! editors and CI scripts already know how to parse.

use crate::rules::Finding;
use std::io;
use termcolor::{Color, ColorSpec, WriteColor};

/// Formats one finding as `display:line:col: CODE message`.
pub fn format_finding(display: &str, finding: &Finding) -> String {
    format!(
        "{}:{}:{}: {} {}",
        display, finding.line, finding.column, finding.code, finding.message
    )
}

/// Writes one finding line, coloring the rule code when the stream allows.
///
/// With coloring disabled the output is byte-identical to
/// [`format_finding`] plus a trailing newline.
pub fn write_finding<W: WriteColor>(
    out: &mut W,
    display: &str,
    finding: &Finding,
) -> io::Result<()> {
    write!(out, "{}:{}:{}: ", display, finding.line, finding.column)?;
    out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
    write!(out, "{}", finding.code)?;
    out.reset()?;
    writeln!(out, " {}", finding.message)
}

#![forbid(unsafe_code)]

//! The KWONLY001 check
//!
//! Reports every function definition whose parameter list lets a defaulted
//! argument be passed positionally. A signature is clean once a `*` (bare or
//! as `*args`) appears before its first defaulted parameter, making every
//! defaulted parameter keyword-only.

use serde::Serialize;
use tree_sitter::{Node, Point};

use crate::parser::PythonParser;

/// Code attached to every finding
pub const RULE_CODE: &str = "KWONLY001";

/// Message attached to every finding
pub const RULE_MESSAGE: &str =
    "defaulted parameter must be keyword-only; insert '*' before the first defaulted parameter";

/// Marker that disables the check for one definition when it appears
/// anywhere on the definition line
pub const SUPPRESSION_MARKER: &str = "kwonly: ignore";

/// A single occurrence reported within one source file
///
/// `line` and `column` are 1-indexed and locate the first defaulted
/// parameter that can still be passed positionally. Columns count bytes
/// within the line, matching the offsets CPython reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub line: u32,
    pub column: u32,
    pub code: &'static str,
    pub message: &'static str,
}

/// Checks one Python module and returns its findings in source order.
///
/// Definitions are visited in pre-order, so an enclosing function is always
/// reported before any function nested inside it. Source that does not parse
/// cleanly yields no findings.
pub fn check_source(source: &str) -> Vec<Finding> {
    let Ok(mut parser) = PythonParser::new() else {
        return Vec::new();
    };
    let Some(tree) = parser.parse(source) else {
        return Vec::new();
    };
    if tree.root_node().has_error() {
        return Vec::new();
    }

    let lines: Vec<&str> = source.lines().collect();
    let mut findings = Vec::new();
    walk(tree.root_node(), &lines, &mut findings);
    findings
}

/// Recursive pre-order walk collecting findings from every `def`.
///
/// `function_definition` covers both `def` and `async def`. The walk always
/// descends into a definition's body: suppressing an enclosing function has
/// no effect on the functions nested inside it.
fn walk(node: Node<'_>, lines: &[&str], findings: &mut Vec<Finding>) {
    if node.kind() == "function_definition"
        && let Some(finding) = check_definition(node, lines)
    {
        findings.push(finding);
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        walk(child, lines, findings);
    }
}

/// Inspects a single function definition node.
fn check_definition(def: Node<'_>, lines: &[&str]) -> Option<Finding> {
    if is_suppressed(lines, def.start_position().row) {
        return None;
    }

    let params = def.child_by_field_name("parameters")?;
    let positional = positional_parameters(params);

    // Defaulted positional parameters form a suffix in code CPython accepts,
    // so only a trailing run of defaults counts.
    let defaulted = positional
        .iter()
        .rev()
        .take_while(|(_, has_default)| *has_default)
        .count();
    if defaulted == 0 {
        return None;
    }

    let (first, _) = positional[positional.len() - defaulted];
    Some(Finding {
        line: first.row as u32 + 1,
        column: first.column as u32 + 1,
        code: RULE_CODE,
        message: RULE_MESSAGE,
    })
}

/// Collects the parameters that can be passed positionally, in source order.
///
/// Each entry pairs the parameter's start position with whether it carries a
/// default. Collection stops at the first `*`, `*args`, or `**kwargs`, since
/// everything after those is keyword-only. A `/` separator only partitions
/// the positional parameters and is skipped.
fn positional_parameters(params: Node<'_>) -> Vec<(Point, bool)> {
    let mut collected = Vec::new();
    let mut cursor = params.walk();
    for child in params.named_children(&mut cursor) {
        match child.kind() {
            "identifier" | "tuple_pattern" => {
                collected.push((child.start_position(), false));
            }
            "typed_parameter" => {
                // `*args: int` and `**kw: int` parse as a typed_parameter
                // wrapping the splat; only a typed plain name is positional.
                match child.child(0).map(|inner| inner.kind()) {
                    Some("list_splat_pattern" | "dictionary_splat_pattern") => break,
                    _ => collected.push((child.start_position(), false)),
                }
            }
            "default_parameter" | "typed_default_parameter" => {
                collected.push((child.start_position(), true));
            }
            "keyword_separator" | "list_splat_pattern" | "dictionary_splat_pattern" => break,
            _ => {}
        }
    }
    collected
}

/// True when the definition line carries the suppression marker.
///
/// Only the line holding the definition's first token (`def`, or `async` for
/// an async function) is consulted. A marker on a decorator line or on a
/// later line of a multi-line signature has no effect.
fn is_suppressed(lines: &[&str], def_row: usize) -> bool {
    lines
        .get(def_row)
        .is_some_and(|line| line.contains(SUPPRESSION_MARKER))
}

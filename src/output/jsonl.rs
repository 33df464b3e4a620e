#![forbid(unsafe_code)]

//! JSONL output formatter for machine-readable output
//!
//! Outputs one JSON object per line:
//! 1. One finding record per finding, in discovery and source order
//! 2. One status record

use crate::engine::executor::ExecutionResult;
use serde::Serialize;

/// JSONL output formatter
///
/// Formats an execution result as JSON Lines (one JSON object per line).
pub struct JsonlFormatter;

impl JsonlFormatter {
    /// Creates a new JsonlFormatter
    pub fn new() -> Self {
        JsonlFormatter
    }

    /// Format the execution result as JSONL
    ///
    /// Finding records keep the order the engine produced them in; the
    /// final line is always a status record.
    pub fn format(&self, result: &ExecutionResult) -> String {
        let mut output = String::new();

        for report in &result.reports {
            for finding in &report.findings {
                let record = FindingRecord {
                    record_type: "finding",
                    path: report.path.display().to_string(),
                    line: finding.line,
                    column: finding.column,
                    code: finding.code,
                    message: finding.message,
                };
                if let Ok(json) = serde_json::to_string(&record) {
                    output.push_str(&json);
                    output.push('\n');
                }
            }
        }

        let status = StatusRecord {
            record_type: "status",
            passed: !result.has_findings(),
            files_checked: result.files_checked() as u64,
            total_findings: result.total_findings() as u64,
        };
        if let Ok(json) = serde_json::to_string(&status) {
            output.push_str(&json);
            output.push('\n');
        }

        output
    }
}

impl Default for JsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Finding record for JSONL output
#[derive(Debug, Serialize)]
struct FindingRecord {
    #[serde(rename = "type")]
    record_type: &'static str,
    path: String,
    line: u32,
    column: u32,
    code: &'static str,
    message: &'static str,
}

/// Status record for JSONL output
#[derive(Debug, Serialize)]
struct StatusRecord {
    #[serde(rename = "type")]
    record_type: &'static str,
    passed: bool,
    files_checked: u64,
    total_findings: u64,
}

#![forbid(unsafe_code)]

//! kwonly: flag defaulted Python parameters that can still be passed positionally
//!
//! A parameter with a default communicates "callers may omit this"; passing it
//! positionally anyway couples call sites to parameter order. This checker
//! walks Python syntax trees and reports one `KWONLY001` finding per function
//! whose defaulted parameters are not keyword-only, pointing at the spot where
//! a `*` separator belongs.

pub mod cli;
pub mod engine;
pub mod error;
pub mod output;
pub mod parser;
pub mod rules;

// Re-export error type for convenient access
pub use error::KwonlyError;

// Re-export the checking surface for convenient access
pub use engine::executor::{ExecutionResult, FileReport, check_snippet, execute};
pub use rules::{Finding, RULE_CODE, RULE_MESSAGE, SUPPRESSION_MARKER, check_source};

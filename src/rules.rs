#![forbid(unsafe_code)]

//! Rule definitions

mod keyword_only;

// Re-export the rule surface
pub use keyword_only::{Finding, RULE_CODE, RULE_MESSAGE, SUPPRESSION_MARKER, check_source};

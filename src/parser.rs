#![forbid(unsafe_code)]

//! Python parsing via tree-sitter

use thiserror::Error;
use tree_sitter::{Parser, Tree};

/// Errors that can occur while setting up the parser
#[derive(Debug, Error)]
pub enum ParserError {
    /// The bundled Python grammar is incompatible with the linked
    /// tree-sitter runtime
    #[error("failed to load python grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),
}

/// A tree-sitter parser configured for the Python grammar
///
/// Parsers are cheap to construct and are not shared across threads;
/// create one per unit of work.
pub struct PythonParser {
    parser: Parser,
}

impl PythonParser {
    /// Creates a parser with the Python grammar loaded
    ///
    /// # Errors
    ///
    /// Returns `ParserError::Language` if the grammar version does not match
    /// the tree-sitter runtime.
    pub fn new() -> Result<Self, ParserError> {
        let mut parser = Parser::new();
        parser.set_language(&tree_sitter_python::language())?;
        Ok(Self { parser })
    }

    /// Parses source text into a syntax tree
    ///
    /// Returns `None` only when tree-sitter halts the parse, which does not
    /// happen without a timeout or cancellation flag configured. Malformed
    /// input still produces a tree; callers that need to reject it should
    /// check `root_node().has_error()`.
    pub fn parse(&mut self, source: &str) -> Option<Tree> {
        self.parser.parse(source, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_valid_python() {
        let mut parser = PythonParser::new().unwrap();
        let tree = parser.parse("def f():\n    pass\n").unwrap();
        assert_eq!(tree.root_node().kind(), "module");
        assert!(!tree.root_node().has_error());
    }

    #[test]
    fn test_flags_syntax_errors_in_tree() {
        let mut parser = PythonParser::new().unwrap();
        let tree = parser.parse("def f(:\n").unwrap();
        assert!(tree.root_node().has_error());
    }

    #[test]
    fn test_parser_is_reusable() {
        let mut parser = PythonParser::new().unwrap();
        assert!(parser.parse("x = 1\n").is_some());
        assert!(parser.parse("y = 2\n").is_some());
    }
}

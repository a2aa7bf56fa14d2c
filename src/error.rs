//! Contains the primary `ParseError` type for the library.
use std::fmt;

/// Which stage of the pipeline rejected the input.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorKind {
    /// Raised by the `Scanner` on an invalid character sequence.
    Lexical,
    /// Raised by the `Parser` on a grammar violation or when the
    /// nesting depth is exceeded.
    Syntax,
}

/// The primary error type for all scanning and parsing operations.
///
/// This struct contains a human-readable error message and the
/// location (line and column) where the error occurred.
#[derive(Debug, PartialEq, Clone)]
pub struct ParseError {
    /// Whether the scanner or the parser produced this error.
    pub kind: ErrorKind,
    /// A description of what went wrong.
    pub message: String,
    /// The line number (1-indexed) where the error was detected.
    pub line: usize,
    /// The column number (1-indexed) where the error was detected.
    pub column: usize,
}

impl ParseError {
    pub(crate) fn lexical(message: impl Into<String>, line: usize, column: usize) -> Self {
        ParseError {
            kind: ErrorKind::Lexical,
            message: message.into(),
            line,
            column,
        }
    }

    pub(crate) fn syntax(message: impl Into<String>, line: usize, column: usize) -> Self {
        ParseError {
            kind: ErrorKind::Syntax,
            message: message.into(),
            line,
            column,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Error: {} at line {}, column {}.",
            self.message, self.line, self.column
        )
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = ParseError::syntax("expected comma, found NUMBER '2'", 10, 5);
        assert_eq!(
            error.to_string(),
            "Error: expected comma, found NUMBER '2' at line 10, column 5."
        );
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            ParseError::lexical("unterminated string", 1, 1).kind,
            ErrorKind::Lexical
        );
        assert_eq!(
            ParseError::syntax("expected EOF", 1, 4).kind,
            ErrorKind::Syntax
        );
    }
}

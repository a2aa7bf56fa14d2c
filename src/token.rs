//! Defines the `Token`, `TokenKind` and `Literal` types.
//!
//! These are the intermediate representation between the `Scanner`
//! (lexer) and the `Parser`. A token is created once by the scanner
//! and only ever read afterwards.

use std::fmt;

/// The specific kind of a `Token`.
///
/// This represents the smallest meaningful units of JSON grammar.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// A string, e.g., `"hello"`
    String,
    /// A number, e.g., `123.4`
    Number,
    /// `true`
    True,
    /// `false`
    False,
    /// `null`
    Null,
    /// End of input. Always the last token of a scan.
    Eof,
}

impl TokenKind {
    /// The upper-case name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::LeftBrace => "LEFT_BRACE",
            TokenKind::RightBrace => "RIGHT_BRACE",
            TokenKind::LeftBracket => "LEFT_BRACKET",
            TokenKind::RightBracket => "RIGHT_BRACKET",
            TokenKind::Colon => "COLON",
            TokenKind::Comma => "COMMA",
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::Null => "NULL",
            TokenKind::Eof => "EOF",
        }
    }

    /// Whether a token of this kind carries a `Literal`.
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::String
                | TokenKind::Number
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Null
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The decoded value carried by a literal-kind token.
#[derive(Debug, PartialEq, Clone)]
pub enum Literal {
    Null,
    Boolean(bool),
    Number(f64),
    /// The string with quotes stripped and escapes resolved.
    String(String),
}

/// A single token produced by the `Scanner`.
#[derive(Debug, PartialEq, Clone)]
pub struct Token<'a> {
    /// The kind of the token.
    pub kind: TokenKind,
    /// The 1-indexed line number where the token starts.
    pub line: usize,
    /// The 1-indexed column number where the token starts.
    pub column: usize,
    /// The exact source text of the token. `None` only for `Eof`.
    pub lexeme: Option<&'a str>,
    /// The decoded value. `None` for punctuation and `Eof`.
    pub literal: Option<Literal>,
}

impl<'a> Token<'a> {
    pub(crate) fn eof(line: usize, column: usize) -> Self {
        Token {
            kind: TokenKind::Eof,
            line,
            column,
            lexeme: None,
            literal: None,
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[type: {}] line: {}", self.kind, self.line)?;
        if let Some(lexeme) = self.lexeme {
            write!(f, ", lexeme: {}", lexeme)?;
        }
        Ok(())
    }
}

//! Contains the recursive-descent `Parser`.
//!
//! The parser walks the token sequence produced by the `Scanner` with one
//! procedure per grammar production and builds a `Value` bottom-up. It owns
//! every structural decision, including the nesting-depth limit.

use crate::error::ParseError;
use crate::options::DEFAULT_MAX_DEPTH;
use crate::token::{Literal, Token, TokenKind};
use crate::value::{Map, Value};

/// The JSON parser.
///
/// The token slice must end with an `Eof` token, which is always the case
/// for the output of [`Scanner::scan`](crate::Scanner::scan).
pub struct Parser<'t, 'a> {
    /// The tokens being parsed.
    tokens: &'t [Token<'a>],
    /// Index of the current token.
    current: usize,
    /// The maximum allowed nesting depth to prevent stack exhaustion.
    max_depth: usize,
    /// The *current* nesting depth of the parser.
    depth: usize,
}

impl<'t, 'a> Parser<'t, 'a> {
    /// Creates a parser over `tokens` with the default depth limit.
    pub fn new(tokens: &'t [Token<'a>]) -> Self {
        Self::with_max_depth(tokens, DEFAULT_MAX_DEPTH)
    }

    /// Creates a parser over `tokens` that allows at most `max_depth` nested containers.
    pub fn with_max_depth(tokens: &'t [Token<'a>], max_depth: usize) -> Self {
        Parser {
            tokens,
            current: 0,
            max_depth,
            depth: 0,
        }
    }

    /// Parses exactly one value and requires the input to end after it.
    ///
    /// # Errors
    /// Returns a syntax `ParseError` at the first structural violation.
    pub fn parse(&mut self) -> Result<Value, ParseError> {
        let value = self.element()?;
        if self.peek_kind() != TokenKind::Eof {
            return Err(self.unexpected("expected EOF"));
        }
        Ok(value)
    }

    /// The current token. Sticks to the last token (`Eof`) once reached.
    fn peek(&self) -> Option<&'t Token<'a>> {
        self.tokens
            .get(self.current)
            .or_else(|| self.tokens.last())
    }

    fn peek_kind(&self) -> TokenKind {
        self.peek().map_or(TokenKind::Eof, |t| t.kind)
    }

    fn advance(&mut self) {
        if self.current < self.tokens.len() {
            self.current += 1;
        }
    }

    /// Builds a syntax error at the current token, naming it after `expected`.
    fn unexpected(&self, expected: &str) -> ParseError {
        match self.peek() {
            Some(token) => {
                let found = match token.lexeme {
                    Some(lexeme) => format!("{} '{}'", token.kind, lexeme),
                    None => token.kind.to_string(),
                };
                ParseError::syntax(
                    format!("{}, found {}", expected, found),
                    token.line,
                    token.column,
                )
            }
            None => ParseError::syntax(format!("{}, found EOF", expected), 1, 1),
        }
    }

    /// `element`: the top-level value.
    fn element(&mut self) -> Result<Value, ParseError> {
        match self.peek_kind() {
            TokenKind::LeftBrace | TokenKind::LeftBracket => self.value(),
            kind if kind.is_literal() => self.value(),
            _ => Err(self.unexpected("invalid token")),
        }
    }

    /// `value`: a value in any position. Consumes the token it dispatches on.
    fn value(&mut self) -> Result<Value, ParseError> {
        match self.peek_kind() {
            TokenKind::LeftBrace => self.object(),
            TokenKind::LeftBracket => self.array(),
            TokenKind::String
            | TokenKind::Number
            | TokenKind::True
            | TokenKind::False
            | TokenKind::Null => self.literal(),
            TokenKind::RightBrace
            | TokenKind::RightBracket
            | TokenKind::Colon
            | TokenKind::Comma
            | TokenKind::Eof => Err(self.unexpected("invalid token: expected value")),
        }
    }

    fn literal(&mut self) -> Result<Value, ParseError> {
        let value = match self.peek().and_then(|t| t.literal.as_ref()) {
            Some(Literal::Null) => Value::Null,
            Some(Literal::Boolean(b)) => Value::Boolean(*b),
            Some(Literal::Number(n)) => Value::Number(*n),
            Some(Literal::String(s)) => Value::String(s.clone()),
            None => return Err(self.unexpected("invalid token: literal has no value")),
        };
        self.advance();
        Ok(value)
    }

    /// Enters an array or object, failing before recursion if too deep.
    fn enter(&mut self, container: &str) -> Result<(), ParseError> {
        if self.depth >= self.max_depth {
            return Err(self.unexpected(&format!(
                "{} exceeds max depth of {}",
                container, self.max_depth
            )));
        }
        self.depth += 1;
        Ok(())
    }

    /// `object`: `{` (member (`,` member)*)? `}`
    fn object(&mut self) -> Result<Value, ParseError> {
        self.enter("object")?;
        self.advance(); // Consume '{'

        let mut map = Map::new();
        if self.peek_kind() == TokenKind::RightBrace {
            self.advance();
            self.depth -= 1;
            return Ok(Value::Object(map));
        }

        loop {
            let key = match self.peek() {
                Some(Token {
                    kind: TokenKind::Eof,
                    ..
                }) => return Err(self.unexpected("expected right brace")),
                Some(Token {
                    kind: TokenKind::String,
                    literal: Some(Literal::String(key)),
                    ..
                }) => key.clone(),
                _ => return Err(self.unexpected("expected string key")),
            };
            self.advance();

            if self.peek_kind() != TokenKind::Colon {
                return Err(self.unexpected("expected colon"));
            }
            self.advance();

            let value = self.value()?;
            // Later duplicates overwrite earlier ones.
            map.insert(key, value);

            match self.peek_kind() {
                TokenKind::RightBrace => {
                    self.advance();
                    break;
                }
                TokenKind::Comma => {
                    self.advance();
                    if self.peek_kind() == TokenKind::RightBrace {
                        return Err(self.unexpected("expected string key after comma"));
                    }
                }
                TokenKind::Eof => return Err(self.unexpected("expected right brace")),
                _ => return Err(self.unexpected("expected comma")),
            }
        }

        self.depth -= 1;
        Ok(Value::Object(map))
    }

    /// `array`: `[` (value (`,` value)*)? `]`
    fn array(&mut self) -> Result<Value, ParseError> {
        self.enter("array")?;
        self.advance(); // Consume '['

        let mut items = Vec::new();
        if self.peek_kind() == TokenKind::RightBracket {
            self.advance();
            self.depth -= 1;
            return Ok(Value::Array(items));
        }

        loop {
            if self.peek_kind() == TokenKind::Eof {
                return Err(self.unexpected("expected right bracket"));
            }
            items.push(self.value()?);

            match self.peek_kind() {
                TokenKind::RightBracket => {
                    self.advance();
                    break;
                }
                TokenKind::Comma => {
                    self.advance();
                    if self.peek_kind() == TokenKind::RightBracket {
                        return Err(self.unexpected("expected value after comma"));
                    }
                }
                TokenKind::Eof => return Err(self.unexpected("expected right bracket")),
                _ => return Err(self.unexpected("expected comma")),
            }
        }

        self.depth -= 1;
        Ok(Value::Array(items))
    }
}

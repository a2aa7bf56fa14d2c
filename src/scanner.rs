//! The byte-based scanner (lexer).
//!
//! The scanner makes one left-to-right pass over the input and produces the
//! complete token sequence, terminated by a single `Eof` token. It owns every
//! character-level decision: whitespace, line counting, string escapes,
//! number syntax and keyword matching. The first invalid character sequence
//! aborts the scan.

use crate::error::ParseError;
use crate::options::Options;
use crate::token::{Literal, Token, TokenKind};
use memchr::memchr2;

// --- Byte classes ---
// A 256-entry table mapping every byte to the scanning routine that
// handles it, so the main loop dispatches with a single lookup.
const INVALID: u8 = 0;
const WHITESPACE: u8 = 1;
const STRUCTURAL: u8 = 2;
const KEYWORD: u8 = 3;
const NUMBER: u8 = 4;
const QUOTE: u8 = 5;

static BYTE_CLASSES: [u8; 256] = {
    let mut table = [INVALID; 256];
    table[b' ' as usize] = WHITESPACE;
    table[b'\n' as usize] = WHITESPACE;
    table[b'\r' as usize] = WHITESPACE;
    table[b'\t' as usize] = WHITESPACE;

    table[b'{' as usize] = STRUCTURAL;
    table[b'}' as usize] = STRUCTURAL;
    table[b'[' as usize] = STRUCTURAL;
    table[b']' as usize] = STRUCTURAL;
    table[b':' as usize] = STRUCTURAL;
    table[b',' as usize] = STRUCTURAL;

    table[b't' as usize] = KEYWORD;
    table[b'f' as usize] = KEYWORD;
    table[b'n' as usize] = KEYWORD;

    table[b'"' as usize] = QUOTE;

    table[b'-' as usize] = NUMBER;
    table[b'+' as usize] = NUMBER;
    let mut digit = b'0';
    while digit <= b'9' {
        table[digit as usize] = NUMBER;
        digit += 1;
    }
    table
};

/// The JSON scanner.
///
/// Create one per input with [`Scanner::new`] and consume it with
/// [`Scanner::scan`].
pub struct Scanner<'a> {
    /// The input text. Lexemes borrow from it.
    source: &'a str,
    /// `source` as bytes; the cursor always indexes into this.
    bytes: &'a [u8],
    /// Index of the next unread byte.
    cursor: usize,
    /// Index of the first byte of the token being scanned.
    start: usize,
    /// The current line number (1-indexed).
    line: usize,
    /// The current column number (1-indexed, counted in characters).
    column: usize,
    /// Line and column where the token being scanned began.
    start_line: usize,
    start_column: usize,
    options: Options,
    tokens: Vec<Token<'a>>,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner with the default [`Options`].
    pub fn new(source: &'a str) -> Self {
        Self::with_options(source, &Options::default())
    }

    /// Creates a scanner over `source` that applies the given [`Options`].
    pub fn with_options(source: &'a str, options: &Options) -> Self {
        Scanner {
            source,
            bytes: source.as_bytes(),
            cursor: 0,
            start: 0,
            line: 1,
            column: 1,
            start_line: 1,
            start_column: 1,
            options: *options,
            tokens: Vec::new(),
        }
    }

    /// Scans the whole input.
    ///
    /// On success the returned sequence always ends with exactly one
    /// `Eof` token, even for empty input.
    ///
    /// # Errors
    /// Returns a lexical `ParseError` at the first invalid character
    /// sequence. No partial token sequence is returned.
    pub fn scan(mut self) -> Result<Vec<Token<'a>>, ParseError> {
        if self.bytes.len() > self.options.max_input_bytes {
            return Err(ParseError::lexical(
                format!(
                    "input of {} bytes exceeds maximum size limit of {} bytes",
                    self.bytes.len(),
                    self.options.max_input_bytes
                ),
                1,
                1,
            ));
        }

        while let Some(byte) = self.peek() {
            self.start = self.cursor;
            self.start_line = self.line;
            self.start_column = self.column;

            match BYTE_CLASSES[byte as usize] {
                WHITESPACE => {
                    self.advance_byte();
                }
                STRUCTURAL => {
                    self.advance_byte();
                    let kind = match byte {
                        b'{' => TokenKind::LeftBrace,
                        b'}' => TokenKind::RightBrace,
                        b'[' => TokenKind::LeftBracket,
                        b']' => TokenKind::RightBracket,
                        b':' => TokenKind::Colon,
                        _ => TokenKind::Comma,
                    };
                    self.add_token(kind, None);
                }
                KEYWORD => self.keyword(byte)?,
                NUMBER => self.number()?,
                QUOTE => self.string()?,
                _ => {
                    let c = self.current_char().unwrap_or(char::REPLACEMENT_CHARACTER);
                    return Err(self.error(format!("unexpected token '{}'", c)));
                }
            }
        }

        self.tokens.push(Token::eof(self.line, self.column));
        Ok(self.tokens)
    }

    /// Creates a lexical `ParseError` at the current line and column.
    fn error(&self, message: impl Into<String>) -> ParseError {
        ParseError::lexical(message, self.line, self.column)
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.cursor).copied()
    }

    #[inline]
    fn peek_is_digit(&self) -> bool {
        self.peek().map_or(false, |b| b.is_ascii_digit())
    }

    /// The full character at the cursor, which may span several bytes.
    fn current_char(&self) -> Option<char> {
        self.source.get(self.cursor..)?.chars().next()
    }

    /// Advances the cursor by one byte, updating line/col, and returns the byte.
    /// Assumes the cursor is not at the end.
    #[inline]
    fn advance_byte(&mut self) -> u8 {
        let byte = self.bytes[self.cursor];
        self.cursor += 1;
        if byte == b'\n' {
            self.line += 1;
            self.column = 1;
        } else if byte & 0xC0 != 0x80 {
            // UTF-8 continuation bytes belong to the previous character.
            self.column += 1;
        }
        byte
    }

    #[inline]
    fn advance_by(&mut self, n: usize) {
        for _ in 0..n {
            self.advance_byte();
        }
    }

    fn consume_digits(&mut self) {
        while self.peek_is_digit() {
            self.advance_byte();
        }
    }

    fn add_token(&mut self, kind: TokenKind, literal: Option<Literal>) {
        let source = self.source;
        self.tokens.push(Token {
            kind,
            line: self.start_line,
            column: self.start_column,
            lexeme: Some(&source[self.start..self.cursor]),
            literal,
        });
    }

    /// Scans `true`, `false` or `null`.
    fn keyword(&mut self, first: u8) -> Result<(), ParseError> {
        let (expected, kind, literal) = match first {
            b't' => ("true", TokenKind::True, Literal::Boolean(true)),
            b'f' => ("false", TokenKind::False, Literal::Boolean(false)),
            _ => ("null", TokenKind::Null, Literal::Null),
        };

        let end = self.cursor + expected.len();
        if self.bytes.get(self.cursor..end) != Some(expected.as_bytes()) {
            return Err(self.error(format!("expected value of {}", expected)));
        }
        self.advance_by(expected.len());

        // A keyword must be followed by a delimiter, so `truex` or
        // `nullnull` are rejected here rather than as two tokens.
        let next = self.bytes[self.cursor..]
            .iter()
            .copied()
            .find(|&b| BYTE_CLASSES[b as usize] != WHITESPACE);
        match next {
            None | Some(b',') | Some(b'}') | Some(b']') => {
                self.add_token(kind, Some(literal));
                Ok(())
            }
            Some(_) => Err(self.error("expected comma, right bracket, or right brace after value")),
        }
    }

    /// Scans a number: `-? (0 | [1-9][0-9]*) (. [0-9]+)? ([eE] [+-]? [0-9]+)?`
    fn number(&mut self) -> Result<(), ParseError> {
        let mut first = self.advance_byte();

        if first == b'-' || first == b'+' {
            if !self.peek_is_digit() {
                return Err(self.error("expected digit after symbol"));
            }
            if first == b'+' && !self.options.allow_leading_plus {
                return Err(ParseError::lexical(
                    "leading plus sign is invalid",
                    self.start_line,
                    self.start_column,
                ));
            }
            first = self.advance_byte();
        }

        if first == b'0' {
            if self.peek_is_digit() {
                return Err(self.error("leading zero is invalid"));
            }
        } else {
            self.consume_digits();
        }

        if self.peek() == Some(b'.') {
            self.advance_byte();
            if !self.peek_is_digit() {
                return Err(self.error("expected digit after decimal point"));
            }
            self.consume_digits();
        }

        if let Some(b'e' | b'E') = self.peek() {
            self.advance_byte();
            if let Some(b'+' | b'-') = self.peek() {
                self.advance_byte();
            }
            if !self.peek_is_digit() {
                return Err(self.error("expected digit in exponent"));
            }
            self.consume_digits();
        }

        let source = self.source;
        let lexeme = &source[self.start..self.cursor];
        let value: f64 = lexeme
            .parse()
            .map_err(|_| self.error(format!("invalid number '{}'", lexeme)))?;
        if !value.is_finite() {
            return Err(ParseError::lexical(
                format!("number out of range '{}'", lexeme),
                self.start_line,
                self.start_column,
            ));
        }

        self.add_token(TokenKind::Number, Some(Literal::Number(value)));
        Ok(())
    }

    /// Scans a string, decoding escapes as they are met.
    fn string(&mut self) -> Result<(), ParseError> {
        self.advance_byte(); // Consume opening '"'
        let bytes = self.bytes;
        let mut decoded = String::new();

        loop {
            // Copy the run of plain characters up to the next quote or backslash.
            let rest = &bytes[self.cursor..];
            let run = memchr2(b'"', b'\\', rest).unwrap_or(rest.len());

            if let Some(offset) = rest[..run].iter().position(|&b| b < 0x20) {
                self.advance_by(offset);
                let message = match rest[offset] {
                    b'\n' => "unexpected line break in string",
                    b'\t' => "unexpected tab character in string",
                    _ => "unescaped control character in string",
                };
                return Err(self.error(message));
            }

            decoded.push_str(&self.source[self.cursor..self.cursor + run]);
            self.advance_by(run);

            match self.peek() {
                None => return Err(self.error("unterminated string")),
                Some(b'"') => {
                    self.advance_byte();
                    break;
                }
                Some(_) => self.escape(&mut decoded)?,
            }
        }

        self.add_token(TokenKind::String, Some(Literal::String(decoded)));
        Ok(())
    }

    /// Decodes one escape sequence. The cursor is on the backslash.
    fn escape(&mut self, decoded: &mut String) -> Result<(), ParseError> {
        self.advance_byte(); // Consume '\'

        let c = match self.peek() {
            None => return Err(self.error("unterminated string")),
            Some(b'"') => '"',
            Some(b'\\') => '\\',
            Some(b'/') => '/',
            Some(b'b') => '\u{0008}',
            Some(b'f') => '\u{000C}',
            Some(b'n') => '\n',
            Some(b'r') => '\r',
            Some(b't') => '\t',
            Some(b'u') => {
                self.advance_byte();
                decoded.push(self.unicode_escape()?);
                return Ok(());
            }
            Some(_) => {
                let c = self.current_char().unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(self.error(format!("invalid escape sequence '\\{}'", c)));
            }
        };

        self.advance_byte();
        decoded.push(c);
        Ok(())
    }

    /// Decodes the code unit(s) after `\u`, joining surrogate pairs.
    fn unicode_escape(&mut self) -> Result<char, ParseError> {
        let unit = self.hex4()?;

        let code = match unit {
            0xD800..=0xDBFF => {
                if self.bytes.get(self.cursor..self.cursor + 2) != Some(b"\\u") {
                    return Err(self.error("invalid unicode escape: unpaired high surrogate"));
                }
                self.advance_by(2);
                let low = self.hex4()?;
                if !(0xDC00..=0xDFFF).contains(&low) {
                    return Err(self.error("invalid unicode escape: expected low surrogate"));
                }
                0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00)
            }
            0xDC00..=0xDFFF => {
                return Err(self.error("invalid unicode escape: unpaired low surrogate"));
            }
            _ => unit,
        };

        char::from_u32(code).ok_or_else(|| self.error("invalid unicode escape"))
    }

    /// Reads exactly four hex digits.
    fn hex4(&mut self) -> Result<u32, ParseError> {
        let mut value = 0;
        for _ in 0..4 {
            let digit = self
                .peek()
                .and_then(|b| (b as char).to_digit(16))
                .ok_or_else(|| self.error("invalid unicode escape: expected 4 hex digits"))?;
            self.advance_byte();
            value = value * 16 + digit;
        }
        Ok(value)
    }
}

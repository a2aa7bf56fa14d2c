//! # strictjson
//!
//! `strictjson` is a strict, RFC 8259-compliant JSON scanner and
//! recursive-descent parser, built from scratch in pure Rust.
//!
//! Parsing happens in two passes: the [`Scanner`] turns the input text into a
//! sequence of [`Token`]s, then the [`Parser`] turns those tokens into a
//! [`Value`] tree.
//!
//! ## Key Features
//!
//! * **Strict:** rejects leading zeros, trailing commas, invalid escapes,
//!   unescaped control characters and lone surrogates.
//! * **Bounded:** array and object nesting is limited (20 levels by default),
//!   so adversarial input cannot exhaust the stack.
//! * **Located errors:** every [`ParseError`] carries a line and column.
//!
//! ## Quick Start
//!
//! ```
//! use strictjson::Value;
//!
//! let value = strictjson::parse(r#"{ "name": "Babbage", "id": 1815 }"#).unwrap();
//! assert_eq!(value.get("name").and_then(Value::as_str), Some("Babbage"));
//! assert_eq!(value.get("id").and_then(Value::as_f64), Some(1815.0));
//!
//! assert!(strictjson::parse("[1, 2,]").is_err());
//! ```
//!
//! The two passes can also be driven by hand:
//!
//! ```
//! use strictjson::{Parser, Scanner, TokenKind};
//!
//! let tokens = Scanner::new("[true, null]").scan().unwrap();
//! assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
//!
//! let value = Parser::with_max_depth(&tokens, 4).parse().unwrap();
//! assert_eq!(value.stringify().unwrap(), "[true,null]");
//! ```

/// Contains the `ParseError` type shared by the scanner and the parser.
pub mod error;
/// Contains the `Options` controlling limits and leniencies.
pub mod options;
/// Contains the recursive-descent `Parser`.
pub mod parser;
/// Contains the `Scanner` (lexer).
pub mod scanner;
/// Contains the `Token`, `TokenKind` and `Literal` types.
pub mod token;
/// Contains the `Value` enum and the serialization (stringify) logic.
pub mod value;

pub use error::{ErrorKind, ParseError};
pub use options::{Options, DEFAULT_MAX_DEPTH, DEFAULT_MAX_INPUT_BYTES};
pub use parser::Parser;
pub use scanner::Scanner;
pub use token::{Literal, Token, TokenKind};
pub use value::{Map, Value};

/// Parses a JSON document with the default [`Options`].
///
/// # Errors
/// Returns a lexical `ParseError` if the scanner rejects the input, or a
/// syntax `ParseError` if the tokens do not form exactly one JSON value.
///
/// # Examples
/// ```
/// use strictjson::{parse, Value};
///
/// assert_eq!(parse("[]").unwrap(), Value::Array(vec![]));
/// assert_eq!(parse("01").unwrap_err().message, "leading zero is invalid");
/// ```
pub fn parse(input: &str) -> Result<Value, ParseError> {
    parse_with_options(input, &Options::default())
}

/// Parses a JSON document with explicit [`Options`].
///
/// # Errors
/// See [`parse`].
pub fn parse_with_options(input: &str, options: &Options) -> Result<Value, ParseError> {
    let tokens = Scanner::with_options(input, options).scan()?;
    Parser::with_max_depth(&tokens, options.max_depth).parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value as SerdeValue;

    /// Converts the reference implementation's value into ours so the two
    /// can be compared structurally.
    fn from_serde(value: &SerdeValue) -> Value {
        match value {
            SerdeValue::Null => Value::Null,
            SerdeValue::Bool(b) => Value::Boolean(*b),
            SerdeValue::Number(n) => Value::Number(n.as_f64().unwrap()),
            SerdeValue::String(s) => Value::String(s.clone()),
            SerdeValue::Array(items) => Value::Array(items.iter().map(from_serde).collect()),
            SerdeValue::Object(map) => Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), from_serde(v)))
                    .collect(),
            ),
        }
    }

    fn assert_matches_reference(input: &str) {
        let expected: SerdeValue = serde_json::from_str(input).unwrap();
        assert_eq!(parse(input).unwrap(), from_serde(&expected), "input: {}", input);
    }

    fn assert_both_reject(input: &str) {
        assert!(
            serde_json::from_str::<SerdeValue>(input).is_err(),
            "reference accepts {:?}",
            input
        );
        assert!(parse(input).is_err(), "accepted {:?}", input);
    }

    #[test]
    fn test_literal_documents() {
        assert_eq!(parse("{}").unwrap(), Value::Object(Map::new()));
        assert_eq!(parse("[]").unwrap(), Value::Array(vec![]));

        let value = parse(r#"{"key": "value"}"#).unwrap();
        assert_eq!(value.get("key"), Some(&Value::String("value".to_string())));

        let value =
            parse(r#"{ "key1": true, "key2": false, "key3": null, "key4": "value", "key5": 101.101 }"#)
                .unwrap();
        assert_eq!(value.as_object().map(Map::len), Some(5));
        assert_eq!(value.get("key5"), Some(&Value::Number(101.101)));

        let value = parse(
            r#"{ "key": "value", "key-n": 101, "key-o": { "key-o-a": "nested" }, "key-l": [] }"#,
        )
        .unwrap();
        assert_eq!(
            value.get("key-o").and_then(|o| o.get("key-o-a")),
            Some(&Value::String("nested".to_string()))
        );
        assert_eq!(value.get("key-l"), Some(&Value::Array(vec![])));
    }

    #[test]
    fn test_literal_rejections() {
        let err = parse("01").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Lexical);

        let err = parse(r#"{"a": 1,}"#).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Syntax);

        let err = parse(r#""unterminated"#).unwrap_err();
        assert_eq!(err.message, "unterminated string");

        let err = parse(r#""\x""#).unwrap_err();
        assert_eq!(err.message, "invalid escape sequence '\\x'");
    }

    #[test]
    fn test_agrees_with_reference() {
        let documents = [
            r#"{ "name": "Babbage", "age": 30, "admin": true,
                 "friends": ["Ada", "Charles", "Grace"],
                 "tasks": [ { "id": 1, "done": false }, { "id": 2, "done": true } ],
                 "nested": {"key": [null, 1, 1.23e4, -0.5E-2]} }"#,
            r#"[1, -1, 0, -0, 0.5, 1e2, 1E+2, 1e-2, 123456789012]"#,
            r#""\" \\ \/ \b \f \n \r \t é 😀""#,
            r#"["\ud83d\ude00", "\u00E9\u00e9", "\uD834\uDD1E"]"#,
            r#"{"a": 1, "a": 2}"#,
            "  \n\t[ [ ] , { } ]\r\n",
            r#"{"key": true   }"#,
            "null",
            "\"日本語\"",
        ];
        for document in documents {
            assert_matches_reference(document);
        }
    }

    #[test]
    fn test_rejects_what_reference_rejects() {
        let documents = [
            "", "01", "-", "1.", ".5", "1e", "+1", "[1,]", r#"{"a":1,}"#, r#"{"a" 1}"#,
            "[1 2]", "[", "{", "]", "[1] [2]", "nul", "truex", r#""\x""#, "\"a\tb\"",
            r#""\ud800""#, "'a'", "/* c */ 1", "NaN", "[1,,2]", r#"{"a":}"#, "1e999",
        ];
        for document in documents {
            assert_both_reject(document);
        }
    }

    #[test]
    fn test_repeated_parses_are_equal() {
        let input = r#"{"a": [1, {"b": null}], "c": "d"}"#;
        let first = parse(input).unwrap();
        for _ in 0..3 {
            assert_eq!(parse(input).unwrap(), first);
        }
    }

    #[test]
    fn test_options_are_honored() {
        let deep = "[".repeat(30) + &"]".repeat(30);
        assert!(parse(&deep).is_err());
        assert!(parse_with_options(&deep, &Options::default().max_depth(30)).is_ok());

        let lenient = Options::default().allow_leading_plus(true);
        assert_eq!(
            parse_with_options("[+1]", &lenient).unwrap(),
            Value::Array(vec![Value::Number(1.0)])
        );
    }

    #[test]
    fn test_value_parse_matches_parse() {
        assert_eq!(Value::parse("[1]").unwrap(), parse("[1]").unwrap());
    }
}

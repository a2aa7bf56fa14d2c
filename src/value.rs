//! Contains the `Value` enum, a native Rust representation of any
//! valid JSON value.
//!
//! This module also includes the "stringify" (serialization) logic
//! for converting a `Value` back into a JSON string.
use crate::error::ParseError;
use indexmap::IndexMap;
use std::fmt;

/// The map type backing `Value::Object`.
///
/// Iteration follows first-insertion order; equality ignores order.
pub type Map = IndexMap<String, Value>;

/// A native Rust representation of any valid JSON value.
#[derive(Debug, PartialEq, Clone)]
pub enum Value {
    /// Represents a JSON `null`.
    Null,
    /// Represents a JSON `true` or `false`.
    Boolean(bool),
    /// Represents a JSON number.
    Number(f64),
    /// Represents a JSON string.
    String(String),
    /// Represents a JSON array (list).
    Array(Vec<Value>),
    /// Represents a JSON object (map).
    Object(Map),
}

impl Value {
    /// Parses a JSON string into a `Value` using the default options.
    ///
    /// # Errors
    /// Returns a `ParseError` if the JSON is invalid, empty, or has trailing tokens.
    pub fn parse(input: &str) -> Result<Value, ParseError> {
        crate::parse(input)
    }

    /// Looks up `key` if this is an object.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(map) => map.get(key),
            _ => None,
        }
    }

    /// Returns `true` if this is `null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the boolean if this is a `Boolean`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the number if this is a `Number`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the string slice if this is a `String`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the elements if this is an `Array`.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the map if this is an `Object`.
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }
}

impl Value {
    /// Serializes the `Value` into a compact, minified JSON string.
    ///
    /// # Errors
    /// Returns `fmt::Error` if the value contains `f64::NAN` or `f64::INFINITY`.
    pub fn stringify(&self) -> Result<String, fmt::Error> {
        let mut output = String::new();
        Self::write_value(self, &mut output)?;
        Ok(output)
    }

    /// Recursive helper function to write any `Value` to a string buffer.
    fn write_value<W: fmt::Write>(value: &Value, w: &mut W) -> fmt::Result {
        match value {
            Value::Array(a) => Self::write_array(a, w),
            Value::Object(o) => Self::write_object(o, w),
            scalar => Self::write_scalar(scalar, w),
        }
    }

    /// Writes `null`, booleans, numbers and strings.
    fn write_scalar<W: fmt::Write>(value: &Value, w: &mut W) -> fmt::Result {
        match value {
            Value::Null => w.write_str("null"),
            Value::Boolean(b) => w.write_str(if *b { "true" } else { "false" }),
            // NaN and infinity have no JSON representation.
            Value::Number(n) if !n.is_finite() => Err(fmt::Error),
            Value::Number(n) => write!(w, "{}", n),
            Value::String(s) => Self::write_string(s, w),
            Value::Array(_) | Value::Object(_) => Self::write_value(value, w),
        }
    }

    /// Helper to write a JSON array (compact).
    fn write_array<W: fmt::Write>(arr: &[Value], w: &mut W) -> fmt::Result {
        w.write_char('[')?;
        for (i, val) in arr.iter().enumerate() {
            if i > 0 {
                w.write_char(',')?;
            }
            Self::write_value(val, w)?;
        }
        w.write_char(']')
    }

    /// Helper to write a JSON object (compact).
    fn write_object<W: fmt::Write>(obj: &Map, w: &mut W) -> fmt::Result {
        w.write_char('{')?;
        for (i, (key, val)) in obj.iter().enumerate() {
            if i > 0 {
                w.write_char(',')?;
            }
            Self::write_string(key, w)?;
            w.write_char(':')?;
            Self::write_value(val, w)?;
        }
        w.write_char('}')
    }

    /// Helper to write an escaped JSON string.
    fn write_string<W: fmt::Write>(s: &str, w: &mut W) -> fmt::Result {
        w.write_char('"')?;
        for c in s.chars() {
            match c {
                '"' => w.write_str("\\\""),
                '\\' => w.write_str("\\\\"),
                '\u{0008}' => w.write_str("\\b"),
                '\u{000C}' => w.write_str("\\f"),
                '\n' => w.write_str("\\n"),
                '\r' => w.write_str("\\r"),
                '\t' => w.write_str("\\t"),
                // Control characters must be escaped as \uXXXX
                '\u{0000}'..='\u{001F}' => write!(w, "\\u{:04x}", c as u32),
                _ => w.write_char(c),
            }?;
        }
        w.write_char('"')
    }

    // --- Pretty-Printing Logic ---
    /// The indentation string to use for pretty-printing (two spaces).
    const INDENT: &'static str = "  ";

    /// Serializes the `Value` into a human-readable,
    /// indented JSON string ("pretty-print").
    ///
    /// # Errors
    /// Returns `fmt::Error` if the value contains `f64::NAN` or `f64::INFINITY`.
    pub fn stringify_pretty(&self) -> Result<String, fmt::Error> {
        let mut output = String::new();
        Self::write_value_pretty(self, &mut output, 0)?;
        Ok(output)
    }

    fn write_value_pretty<W: fmt::Write>(value: &Value, w: &mut W, depth: usize) -> fmt::Result {
        match value {
            Value::Array(a) => Self::write_array_pretty(a, w, depth),
            Value::Object(o) => Self::write_object_pretty(o, w, depth),
            scalar => Self::write_scalar(scalar, w),
        }
    }

    fn write_array_pretty<W: fmt::Write>(arr: &[Value], w: &mut W, depth: usize) -> fmt::Result {
        if arr.is_empty() {
            return w.write_str("[]");
        }

        let indent = Self::INDENT.repeat(depth + 1);
        w.write_str("[\n")?;
        for (i, val) in arr.iter().enumerate() {
            if i > 0 {
                w.write_str(",\n")?;
            }
            w.write_str(&indent)?;
            Self::write_value_pretty(val, w, depth + 1)?;
        }
        write!(w, "\n{}]", Self::INDENT.repeat(depth))
    }

    fn write_object_pretty<W: fmt::Write>(obj: &Map, w: &mut W, depth: usize) -> fmt::Result {
        if obj.is_empty() {
            return w.write_str("{}");
        }

        let indent = Self::INDENT.repeat(depth + 1);
        w.write_str("{\n")?;
        for (i, (key, val)) in obj.iter().enumerate() {
            if i > 0 {
                w.write_str(",\n")?;
            }
            w.write_str(&indent)?;
            Self::write_string(key, w)?;
            w.write_str(": ")?;
            Self::write_value_pretty(val, w, depth + 1)?;
        }
        write!(w, "\n{}}}", Self::INDENT.repeat(depth))
    }
}

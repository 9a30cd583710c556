//! A recursive-descent JSON parser with trial-based backtracking.
//!
//! `jparse` reads a complete JSON document into a dynamic [`Value`] tree that
//! mirrors the JSON data model: null, booleans, numbers (always `f64`),
//! strings, arrays and objects (keys kept in insertion order).
//!
//! ```
//! use jparse::Value;
//!
//! let value = jparse::parse(r#"{"Names": ["Alice", "Bob"], "Age": 4}"#).unwrap();
//! assert_eq!(value.get("Age"), Some(&Value::Number(4.0)));
//! assert_eq!(value.to_string(), r#"{"Names":["Alice","Bob"],"Age":4.0}"#);
//! ```
//!
//! Failures are reported as a [`ParseError`] carrying the byte offset and the
//! line and column where the input stopped matching:
//!
//! ```
//! let error = jparse::parse("[1, 2,]").unwrap_err();
//! assert_eq!(error.to_string(), "invalid character ']' at 1:7");
//! assert_eq!(error.offset, 6);
//! ```
//!
//! Parsed objects can be projected onto plain structs; see [`record!`] and
//! [`project`].

mod cursor;
mod error;
mod options;
mod parser;
pub mod project;
mod value;

#[cfg(test)]
mod tests;

pub use error::{ParseError, SyntaxError};
pub use options::ParserOptions;
pub use parser::Parser;
pub use project::{FromValue, ProjectionError, Record, convert, project};
pub use value::{Array, Map, Value};

/// Parses a complete JSON document.
///
/// # Errors
///
/// Returns a [`ParseError`] if `text` is not exactly one JSON value with
/// optional surrounding whitespace.
pub fn parse(text: &str) -> Result<Value, ParseError> {
    Parser::new(text).parse()
}

/// Parses a complete JSON document from bytes.
///
/// The bytes are decoded as UTF-8 while parsing; an invalid sequence fails
/// with [`SyntaxError::InvalidUtf8`] at its offset.
///
/// # Errors
///
/// Returns a [`ParseError`] if `input` is not exactly one JSON value.
pub fn parse_slice(input: &[u8]) -> Result<Value, ParseError> {
    Parser::from_slice(input, ParserOptions::default()).parse()
}

/// Parses a complete JSON document with the given options.
///
/// # Errors
///
/// Returns a [`ParseError`] if `text` is not exactly one JSON value.
pub fn parse_with_options(text: &str, options: ParserOptions) -> Result<Value, ParseError> {
    Parser::with_options(text, options).parse()
}

/// Parses a sequence of JSON documents, such as JSON Lines.
///
/// Multiple values are accepted only when
/// [`ParserOptions::allow_multiple_json_values`] is set.
///
/// ```
/// use jparse::{ParserOptions, Value};
///
/// let options = ParserOptions { allow_multiple_json_values: true, ..Default::default() };
/// let values = jparse::parse_values("{\"a\":1}\n{\"a\":2}\n", options).unwrap();
/// assert_eq!(values.len(), 2);
/// ```
///
/// # Errors
///
/// Returns a [`ParseError`] for the first malformed value.
pub fn parse_values(text: &str, options: ParserOptions) -> Result<Vec<Value>, ParseError> {
    Parser::with_options(text, options).parse_values()
}

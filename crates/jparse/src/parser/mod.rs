//! Recursive-descent JSON parser with trial-based backtracking.
//!
//! Overview
//! - Every grammar rule is a method on [`Parser`] returning
//!   [`Production<T>`]: the produced value, or a [`Failure`].
//! - The value rule is ambiguous in the sense that several productions could
//!   start at the same position, so it tries them in a fixed order (object,
//!   array, string, number, `true`, `false`, `null`) through
//!   [`Parser::attempt`]. A trial that fails with [`Failure::Grammar`] leaves
//!   the cursor exactly where it started, and the next alternative runs.
//! - [`Failure::Fatal`] is never absorbed by a trial. It is reserved for
//!   inputs no alternative could accept either (an unpaired surrogate escape,
//!   a number outside the `f64` range, the depth limit), and it aborts the
//!   parse at once with its own location.
//!
//! Productions live next to the grammar they implement:
//! - [`composite`]: objects, members and arrays
//! - [`string`]: strings, characters and escapes
//! - [`number`]: `int [frac] [exp]`
//!
//! Diagnostics
//! - A grammar failure carries no payload. Instead the parser records the
//!   failure furthest into the input (a later record wins a tie). When the
//!   whole document fails, that record becomes the reported [`ParseError`],
//!   which points at the deepest place the input stopped matching rather than
//!   at the start of the outermost alternative.

mod composite;
mod escape;
mod number;
mod string;

use crate::{
    cursor::Cursor,
    error::{ParseError, SyntaxError},
    options::ParserOptions,
    value::Value,
};

/// Outcome of running one production.
pub(crate) type Production<T> = Result<T, Failure>;

#[derive(Debug)]
pub(crate) enum Failure {
    /// The production does not match at the cursor. Recoverable by an
    /// enclosing trial.
    Grammar,
    /// The input cannot be parsed at all.
    Fatal(ParseError),
}

/// A single-use parser over one document.
///
/// Each parser owns its cursor, so separate documents may be parsed on
/// separate threads without any coordination.
///
/// # Examples
///
/// ```
/// use jparse::{Parser, ParserOptions, Value};
///
/// let options = ParserOptions {
///     allow_multiple_json_values: true,
///     ..Default::default()
/// };
/// let values = Parser::with_options("1 [] {}", options).parse_values().unwrap();
/// assert_eq!(values.len(), 3);
/// assert_eq!(values[0], Value::Number(1.0));
/// ```
#[derive(Debug)]
pub struct Parser<'src> {
    cursor: Cursor<'src>,
    options: ParserOptions,
    depth: usize,
    furthest: Option<(usize, SyntaxError)>,
}

impl<'src> Parser<'src> {
    /// Creates a parser with default options.
    #[must_use]
    pub fn new(text: &'src str) -> Self {
        Self::with_options(text, ParserOptions::default())
    }

    /// Creates a parser with the given options.
    #[must_use]
    pub fn with_options(text: &'src str, options: ParserOptions) -> Self {
        Self::from_slice(text.as_bytes(), options)
    }

    /// Creates a parser over bytes that are expected, but not known, to be
    /// UTF-8. Invalid sequences fail the parse where they are encountered.
    #[must_use]
    pub fn from_slice(input: &'src [u8], options: ParserOptions) -> Self {
        Self {
            cursor: Cursor::new(input),
            options,
            depth: 0,
            furthest: None,
        }
    }

    /// Parses exactly one value, surrounded by optional whitespace.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the input is not a single JSON document.
    pub fn parse(mut self) -> Result<Value, ParseError> {
        let value = self.document()?;
        self.expect_end()?;
        Ok(value)
    }

    /// Parses every value in the input.
    ///
    /// With [`ParserOptions::allow_multiple_json_values`] unset this is
    /// [`Parser::parse`] returning a one-element vector.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] for the first value that fails to parse.
    pub fn parse_values(mut self) -> Result<Vec<Value>, ParseError> {
        if !self.options.allow_multiple_json_values {
            return self.parse().map(|value| vec![value]);
        }

        let mut values = Vec::new();
        loop {
            values.push(self.document()?);
            if self.cursor.is_eof() {
                return Ok(values);
            }
        }
    }

    fn document(&mut self) -> Result<Value, ParseError> {
        self.furthest = None;
        match self.element() {
            Ok(value) => Ok(value),
            Err(Failure::Fatal(error)) => Err(error),
            Err(Failure::Grammar) => Err(self.diagnostic()),
        }
    }

    fn expect_end(&self) -> Result<(), ParseError> {
        let error = match self.cursor.peek_char() {
            None => return Ok(()),
            Some(Ok((ch, _))) => SyntaxError::TrailingContent(ch),
            Some(Err(())) => SyntaxError::InvalidUtf8,
        };
        Err(self.error_at(self.cursor.position(), error))
    }

    // --------------------------------------------------------------------------------------------
    // Trial wrapper and failure bookkeeping
    // --------------------------------------------------------------------------------------------

    /// Runs `production` as a trial.
    ///
    /// On success the cursor stays where the production left it. On a grammar
    /// failure the cursor is restored and `Ok(None)` lets the caller try
    /// something else. Fatal failures pass through untouched.
    pub(crate) fn attempt<T>(
        &mut self,
        production: impl FnOnce(&mut Self) -> Production<T>,
    ) -> Production<Option<T>> {
        let start = self.cursor.position();
        match production(self) {
            Ok(value) => Ok(Some(value)),
            Err(Failure::Grammar) => {
                self.cursor.reset(start);
                Ok(None)
            }
            Err(fatal) => Err(fatal),
        }
    }

    /// Records a grammar failure at the cursor.
    pub(crate) fn fail(&mut self, error: SyntaxError) -> Failure {
        let offset = self.cursor.position();
        let error = if self.cursor.is_eof() {
            SyntaxError::UnexpectedEndOfInput
        } else {
            error
        };
        if self
            .furthest
            .as_ref()
            .is_none_or(|(furthest, _)| offset >= *furthest)
        {
            self.furthest = Some((offset, error));
        }
        Failure::Grammar
    }

    /// A grammar failure describing whatever is at the cursor.
    pub(crate) fn unexpected(&mut self) -> Failure {
        let error = match self.cursor.peek_char() {
            Some(Ok((ch, _))) => SyntaxError::UnexpectedCharacter(ch),
            Some(Err(())) => SyntaxError::InvalidUtf8,
            None => SyntaxError::UnexpectedEndOfInput,
        };
        self.fail(error)
    }

    /// Consumes `expected` or fails.
    pub(crate) fn expect(&mut self, expected: u8) -> Production<()> {
        if self.cursor.eat(expected) {
            return Ok(());
        }
        let error = match self.cursor.peek_char() {
            Some(Ok((found, _))) => SyntaxError::ExpectedCharacter {
                expected: char::from(expected),
                found,
            },
            Some(Err(())) => SyntaxError::InvalidUtf8,
            None => SyntaxError::UnexpectedEndOfInput,
        };
        Err(self.fail(error))
    }

    pub(crate) fn fatal_at(&self, offset: usize, error: SyntaxError) -> Failure {
        Failure::Fatal(self.error_at(offset, error))
    }

    fn error_at(&self, offset: usize, source: SyntaxError) -> ParseError {
        let (line, column) = self.cursor.line_column(offset);
        ParseError {
            source,
            offset,
            line,
            column,
        }
    }

    fn diagnostic(&mut self) -> ParseError {
        let (offset, error) = self
            .furthest
            .take()
            .unwrap_or((self.cursor.position(), SyntaxError::ExpectedValue));
        self.error_at(offset, error)
    }

    // --------------------------------------------------------------------------------------------
    // Element / Value
    // --------------------------------------------------------------------------------------------

    /// A value with its surrounding insignificant whitespace.
    pub(crate) fn element(&mut self) -> Production<Value> {
        self.cursor.skip_whitespace();
        let value = self.value()?;
        self.cursor.skip_whitespace();
        Ok(value)
    }

    fn value(&mut self) -> Production<Value> {
        if let Some(object) = self.attempt(Self::object)? {
            return Ok(object);
        }
        if let Some(array) = self.attempt(Self::array)? {
            return Ok(array);
        }
        if let Some(string) = self.attempt(Self::string)? {
            return Ok(Value::String(string));
        }
        if let Some(number) = self.attempt(Self::number)? {
            return Ok(Value::Number(number));
        }

        if self.cursor.eat_literal(b"true") {
            return Ok(Value::Boolean(true));
        }
        if self.cursor.eat_literal(b"false") {
            return Ok(Value::Boolean(false));
        }
        if self.cursor.eat_literal(b"null") {
            return Ok(Value::Null);
        }

        Err(self.unexpected())
    }

    /// Runs the body of an array or object one nesting level deeper.
    pub(crate) fn nested<T>(
        &mut self,
        production: impl FnOnce(&mut Self) -> Production<T>,
    ) -> Production<T> {
        if self.depth >= self.options.max_depth {
            let offset = self.cursor.position().saturating_sub(1);
            return Err(self.fatal_at(
                offset,
                SyntaxError::DepthLimitExceeded(self.options.max_depth),
            ));
        }
        self.depth += 1;
        let result = production(self);
        self.depth -= 1;
        result
    }
}

//! Number production: `int [frac] [exp]`.
//!
//! ```text
//! int  = ["-"] ("0" | digit1-9 digit*)
//! frac = "." digit+
//! exp  = ("e" | "E") ["+" | "-"] digit+
//! ```
//!
//! Seeing `.` or an exponent marker commits to the part it introduces: a
//! missing digit after it fails the whole number instead of leaving the
//! marker for someone else. The matched lexeme is handed to the standard
//! library's correctly rounded `f64` parser.

use super::{Parser, Production};
use crate::error::SyntaxError;

impl Parser<'_> {
    pub(crate) fn number(&mut self) -> Production<f64> {
        let start = self.cursor.position();
        self.int()?;
        if self.cursor.eat(b'.') {
            self.digits()?;
        }
        if self.cursor.eat(b'e') || self.cursor.eat(b'E') {
            if !self.cursor.eat(b'+') {
                self.cursor.eat(b'-');
            }
            self.digits()?;
        }

        // The lexeme is ASCII by construction.
        let lexeme = core::str::from_utf8(self.cursor.since(start)).unwrap_or_default();
        match lexeme.parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(n),
            _ => Err(self.fatal_at(start, SyntaxError::NumberOutOfRange)),
        }
    }

    fn int(&mut self) -> Production<()> {
        self.cursor.eat(b'-');
        match self.cursor.peek() {
            Some(b'0') => {
                self.cursor.advance(1);
                if self.cursor.peek_digit() {
                    return Err(self.fail(SyntaxError::LeadingZero));
                }
                Ok(())
            }
            Some(b'1'..=b'9') => {
                self.cursor.eat_digits();
                Ok(())
            }
            _ => Err(self.unexpected()),
        }
    }

    /// One or more digits.
    fn digits(&mut self) -> Production<()> {
        if self.cursor.eat_digits() == 0 {
            return Err(self.fail(SyntaxError::MissingDigits));
        }
        Ok(())
    }
}

//! String production: `'"' character* '"'`.
//!
//! A character is any scalar value from U+0020 up, other than `"` and `\`, or
//! one of the escapes `\" \\ \/ \b \f \n \r \t \uXXXX`. Characters are consumed
//! one trial at a time; the first trial that fails ends the loop and the
//! closing quote must follow.

use super::{
    Parser, Production,
    escape::{UnicodeEscape, Utf16Unit, combine_surrogates},
};
use crate::error::SyntaxError;

impl Parser<'_> {
    pub(crate) fn string(&mut self) -> Production<String> {
        self.expect(b'"')?;
        let mut out = String::new();
        while let Some(ch) = self.attempt(Self::character)? {
            out.push(ch);
        }
        self.expect(b'"')?;
        Ok(out)
    }

    fn character(&mut self) -> Production<char> {
        match self.cursor.peek() {
            Some(b'\\') => self.escape(),
            Some(b'"') | None => Err(self.unexpected()),
            Some(_) => match self.cursor.peek_char() {
                Some(Ok((ch, len))) if ch >= ' ' => {
                    self.cursor.advance(len);
                    Ok(ch)
                }
                Some(Ok((ch, _))) => Err(self.fail(SyntaxError::ControlCharacterInString(ch))),
                _ => Err(self.unexpected()),
            },
        }
    }

    fn escape(&mut self) -> Production<char> {
        let start = self.cursor.position();
        self.expect(b'\\')?;
        let decoded = match self.cursor.peek() {
            Some(b'"') => '"',
            Some(b'\\') => '\\',
            Some(b'/') => '/',
            Some(b'b') => '\u{08}',
            Some(b'f') => '\u{0C}',
            Some(b'n') => '\n',
            Some(b'r') => '\r',
            Some(b't') => '\t',
            Some(b'u') => {
                self.cursor.advance(1);
                return self.unicode_escape(start);
            }
            _ => {
                let error = match self.cursor.peek_char() {
                    Some(Ok((ch, _))) => SyntaxError::InvalidEscape(ch),
                    _ => SyntaxError::InvalidUtf8,
                };
                return Err(self.fail(error));
            }
        };
        self.cursor.advance(1);
        Ok(decoded)
    }

    /// The part of a `\u` escape after the `u`. `start` is the offset of the
    /// backslash, used to locate an unpaired surrogate.
    fn unicode_escape(&mut self, start: usize) -> Production<char> {
        match Utf16Unit::from(self.hex_quad()?) {
            Utf16Unit::Scalar(ch) => Ok(ch),
            Utf16Unit::High(high) => {
                if self.cursor.lookahead(b"\\u") {
                    let resume = self.cursor.position();
                    self.cursor.advance(2);
                    if let Utf16Unit::Low(low) = Utf16Unit::from(self.hex_quad()?) {
                        return Ok(combine_surrogates(high, low));
                    }
                    self.cursor.reset(resume);
                }
                self.lone_surrogate(start, high)
            }
            Utf16Unit::Low(low) => self.lone_surrogate(start, low),
        }
    }

    /// Exactly four hex digits.
    fn hex_quad(&mut self) -> Production<u16> {
        let mut escape = UnicodeEscape::default();
        loop {
            let Some(b) = self.cursor.peek() else {
                return Err(self.fail(SyntaxError::UnexpectedEndOfInput));
            };
            match escape.feed(b) {
                Ok(Some(unit)) => {
                    self.cursor.advance(1);
                    return Ok(unit);
                }
                Ok(None) => self.cursor.advance(1),
                Err(error) => {
                    let error = match self.cursor.peek_char() {
                        Some(Ok(_)) if b.is_ascii() => error,
                        Some(Ok((ch, _))) => SyntaxError::InvalidUnicodeEscapeChar(ch),
                        _ => SyntaxError::InvalidUtf8,
                    };
                    return Err(self.fail(error));
                }
            }
        }
    }

    fn lone_surrogate(&self, start: usize, unit: u16) -> Production<char> {
        if self.options.lossy_surrogates {
            Ok(char::REPLACEMENT_CHARACTER)
        } else {
            Err(self.fatal_at(start, SyntaxError::LoneSurrogate(u32::from(unit))))
        }
    }
}

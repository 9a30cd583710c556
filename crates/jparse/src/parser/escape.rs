//! Decoding of four-digit Unicode escapes.
//!
//! [`UnicodeEscape`] accumulates exactly four ASCII hexadecimal digits
//! (`0-9`, `A-F`, `a-f`) into a UTF-16 code unit. [`Utf16Unit`] then classifies
//! that unit so the string production can pair a high surrogate with the low
//! surrogate escape that must follow it.

use crate::error::SyntaxError;

#[derive(Debug, Default)]
pub(crate) struct UnicodeEscape {
    acc: u32,
    len: u8,
}

impl UnicodeEscape {
    /// Convert a single ASCII hex digit into its 0..=15 value.
    #[inline]
    fn hex_val(b: u8) -> Option<u32> {
        match b {
            b'0'..=b'9' => Some(u32::from(b - b'0')),
            b'a'..=b'f' => Some(u32::from(b - b'a') + 10),
            b'A'..=b'F' => Some(u32::from(b - b'A') + 10),
            _ => None,
        }
    }

    /// Feeds one digit. Returns the code unit once the fourth digit arrives.
    pub fn feed(&mut self, b: u8) -> Result<Option<u16>, SyntaxError> {
        let d = Self::hex_val(b).ok_or(SyntaxError::InvalidUnicodeEscapeChar(char::from(b)))?;
        debug_assert!(self.len < 4);

        self.acc = (self.acc << 4) | d;
        self.len += 1;
        if self.len < 4 {
            return Ok(None);
        }

        let unit = self.acc;
        *self = Self::default();
        // Four hex digits never exceed 0xFFFF.
        Ok(Some(u16::try_from(unit).unwrap_or(u16::MAX)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Utf16Unit {
    Scalar(char),
    High(u16),
    Low(u16),
}

impl From<u16> for Utf16Unit {
    fn from(unit: u16) -> Self {
        match unit {
            0xD800..=0xDBFF => Self::High(unit),
            0xDC00..=0xDFFF => Self::Low(unit),
            // Every other BMP code unit is a scalar value.
            _ => char::from_u32(u32::from(unit)).map_or(Self::Low(unit), Self::Scalar),
        }
    }
}

/// Combine a surrogate pair into the scalar value it encodes.
pub(crate) fn combine_surrogates(high: u16, low: u16) -> char {
    let code = 0x1_0000 + ((u32::from(high) - 0xD800) << 10) + (u32::from(low) - 0xDC00);
    char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(digits: &str) -> Result<Option<u16>, SyntaxError> {
        let mut buf = UnicodeEscape::default();
        let mut out = None;
        for b in digits.bytes() {
            out = buf.feed(b)?;
        }
        Ok(out)
    }

    #[test]
    fn basic_decoding() {
        let mut buf = UnicodeEscape::default();
        assert_eq!(buf.feed(b'0').unwrap(), None);
        assert_eq!(buf.feed(b'0').unwrap(), None);
        assert_eq!(buf.feed(b'4').unwrap(), None);
        assert_eq!(buf.feed(b'1').unwrap(), Some(0x41));
        // The accumulator starts over after four digits.
        assert_eq!(buf.feed(b'F').unwrap(), None);
    }

    #[test]
    fn mixed_case_hex() {
        assert_eq!(decode("AbCd").unwrap(), Some(0xABCD));
        assert_eq!(decode("abcd"), decode("ABCD"));
    }

    #[test]
    fn invalid_hex_error() {
        assert_eq!(
            decode("12G4").unwrap_err(),
            SyntaxError::InvalidUnicodeEscapeChar('G')
        );
    }

    #[test]
    fn classifies_units() {
        assert_eq!(Utf16Unit::from(0x1234), Utf16Unit::Scalar('\u{1234}'));
        assert_eq!(Utf16Unit::from(0xD83D), Utf16Unit::High(0xD83D));
        assert_eq!(Utf16Unit::from(0xDE00), Utf16Unit::Low(0xDE00));
    }

    #[test]
    fn combines_pairs() {
        assert_eq!(combine_surrogates(0xD83D, 0xDE00), '😀');
        assert_eq!(combine_surrogates(0xD800, 0xDC00), '\u{10000}');
        assert_eq!(combine_surrogates(0xDBFF, 0xDFFF), '\u{10FFFF}');
    }
}

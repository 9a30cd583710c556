//! Read position over the immutable input.
//!
//! The cursor is a byte index into the document. Productions read through
//! it, advance it as they match, and the trial wrapper in the parser saves and
//! restores it to undo a failed alternative. Nothing else mutates it.
//!
//! Input is held as bytes so that [`crate::parse_slice`] can accept data that
//! has not been validated as UTF-8; characters are decoded lazily with `bstr`
//! only where a production needs one (string contents and diagnostics).

/// Insignificant whitespace between tokens: tab, line feed, carriage return
/// and space. Nothing else qualifies.
#[inline]
pub(crate) fn is_whitespace(b: u8) -> bool {
    matches!(b, b'\t' | b'\n' | b'\r' | b' ')
}

#[derive(Debug, Clone)]
pub(crate) struct Cursor<'src> {
    input: &'src [u8],
    index: usize,
}

impl<'src> Cursor<'src> {
    pub fn new(input: &'src [u8]) -> Self {
        Self { input, index: 0 }
    }

    /// Current byte offset, `0 <= position <= len`.
    #[inline]
    pub fn position(&self) -> usize {
        self.index
    }

    /// Move back to a position previously returned by [`Cursor::position`].
    #[inline]
    pub fn reset(&mut self, position: usize) {
        debug_assert!(position <= self.input.len());
        self.index = position;
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.index >= self.input.len()
    }

    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.input.get(self.index).copied()
    }

    /// Whether the unread input begins with `literal`.
    #[inline]
    pub fn lookahead(&self, literal: &[u8]) -> bool {
        self.input[self.index..].starts_with(literal)
    }

    #[inline]
    pub fn peek_digit(&self) -> bool {
        self.peek().is_some_and(|b| b.is_ascii_digit())
    }

    /// Decode the character at the cursor without consuming it.
    ///
    /// Returns `None` at end of input and `Some(Err(()))` when the bytes at the
    /// cursor are not valid UTF-8.
    pub fn peek_char(&self) -> Option<Result<(char, usize), ()>> {
        if self.is_eof() {
            return None;
        }
        let (ch, len) = bstr::decode_utf8(&self.input[self.index..]);
        Some(ch.map(|ch| (ch, len)).ok_or(()))
    }

    #[inline]
    pub fn advance(&mut self, len: usize) {
        self.index = (self.index + len).min(self.input.len());
    }

    /// Consume `b` if it is the next byte.
    #[inline]
    pub fn eat(&mut self, b: u8) -> bool {
        if self.peek() == Some(b) {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Consume `literal` if the unread input begins with it.
    pub fn eat_literal(&mut self, literal: &[u8]) -> bool {
        if self.lookahead(literal) {
            self.index += literal.len();
            true
        } else {
            false
        }
    }

    /// Consume a run of ASCII digits, returning how many were consumed.
    pub fn eat_digits(&mut self) -> usize {
        let start = self.index;
        while self.peek_digit() {
            self.index += 1;
        }
        self.index - start
    }

    pub fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(is_whitespace) {
            self.index += 1;
        }
    }

    /// The input between `start` and the cursor.
    #[inline]
    pub fn since(&self, start: usize) -> &'src [u8] {
        &self.input[start..self.index]
    }

    /// 1-based line and column of a byte offset. Columns count characters;
    /// invalid UTF-8 sequences count as one column each.
    pub fn line_column(&self, offset: usize) -> (usize, usize) {
        let prefix = &self.input[..offset.min(self.input.len())];
        let line_start = prefix
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(0, |i| i + 1);
        let line = 1 + prefix.iter().filter(|&&b| b == b'\n').count();
        let mut column = 1;
        let mut rest = &prefix[line_start..];
        while !rest.is_empty() {
            let (_, len) = bstr::decode_utf8(rest);
            rest = &rest[len.max(1)..];
            column += 1;
        }
        (line, column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_is_exactly_four_characters() {
        for b in [b'\t', b'\n', b'\r', b' '] {
            assert!(is_whitespace(b));
        }
        for b in [0x0b, 0x0c, b'a', 0] {
            assert!(!is_whitespace(b));
        }
        let mut cursor = Cursor::new("\u{a0}x".as_bytes());
        cursor.skip_whitespace();
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn eat_and_reset() {
        let mut cursor = Cursor::new(b" \t\r\ntrue,");
        cursor.skip_whitespace();
        assert_eq!(cursor.position(), 4);
        let saved = cursor.position();
        assert!(cursor.eat_literal(b"true"));
        assert!(!cursor.eat(b']'));
        assert!(cursor.eat(b','));
        assert!(cursor.is_eof());
        cursor.reset(saved);
        assert_eq!(cursor.since(0), b" \t\r\n");
        assert!(cursor.lookahead(b"tr"));
    }

    #[test]
    fn peek_char_decodes_multibyte() {
        let cursor = Cursor::new("é!".as_bytes());
        assert_eq!(cursor.peek_char(), Some(Ok(('é', 2))));
        let cursor = Cursor::new(b"\xff");
        assert_eq!(cursor.peek_char(), Some(Err(())));
        let cursor = Cursor::new(b"");
        assert_eq!(cursor.peek_char(), None);
    }

    #[test]
    fn eat_digits_counts() {
        let mut cursor = Cursor::new(b"0123x");
        assert_eq!(cursor.eat_digits(), 4);
        assert_eq!(cursor.eat_digits(), 0);
        assert_eq!(cursor.peek(), Some(b'x'));
    }

    #[test]
    fn line_column_counts_characters() {
        let cursor = Cursor::new("ab\n\"é\" x".as_bytes());
        assert_eq!(cursor.line_column(0), (1, 1));
        assert_eq!(cursor.line_column(2), (1, 3));
        assert_eq!(cursor.line_column(3), (2, 1));
        // `"é" ` is five bytes but four characters.
        assert_eq!(cursor.line_column(8), (2, 5));
    }
}

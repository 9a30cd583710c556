use thiserror::Error;

/// A parse failure, located in the input.
///
/// `offset` is a byte offset into the input; `line` and `column` are 1-based
/// and count characters, so they are suitable for showing to a person.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{source} at {line}:{column}")]
pub struct ParseError {
    pub(crate) source: SyntaxError,
    /// Byte offset of the failure.
    pub offset: usize,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column, in characters.
    pub column: usize,
}

impl ParseError {
    /// What went wrong, without location.
    #[must_use]
    pub fn syntax_error(&self) -> &SyntaxError {
        &self.source
    }
}

/// The kinds of syntax error the parser reports.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// A character no production accepts here.
    #[error("invalid character '{0}'")]
    UnexpectedCharacter(char),
    /// A specific punctuator was required.
    #[error("expected '{expected}', found '{found}'")]
    ExpectedCharacter {
        /// The required character.
        expected: char,
        /// The character actually present.
        found: char,
    },
    /// None of the value alternatives matched.
    #[error("expected a value")]
    ExpectedValue,
    /// A backslash followed by something other than a known escape.
    #[error("invalid escape sequence '\\{0}'")]
    InvalidEscape(char),
    /// A `\u` escape with a non-hex digit.
    #[error("invalid unicode escape sequence at character: '{0}'")]
    InvalidUnicodeEscapeChar(char),
    /// A `\u` escape naming half of a surrogate pair on its own.
    #[error("unpaired surrogate in unicode escape sequence \\u{0:04X}")]
    LoneSurrogate(u32),
    /// A raw character below U+0020 inside a string.
    #[error("control character {0:?} must be escaped")]
    ControlCharacterInString(char),
    /// `0` followed by more digits.
    #[error("leading zeros are not allowed")]
    LeadingZero,
    /// `.` or an exponent marker not followed by a digit.
    #[error("expected at least one digit")]
    MissingDigits,
    /// The literal does not fit in a finite `f64`.
    #[error("number out of range")]
    NumberOutOfRange,
    /// Input bytes that are not valid UTF-8.
    #[error("invalid UTF-8")]
    InvalidUtf8,
    /// Input left over after a complete document.
    #[error("unexpected '{0}' after the end of the value")]
    TrailingContent(char),
    /// Arrays and objects nested deeper than [`ParserOptions::max_depth`].
    ///
    /// [`ParserOptions::max_depth`]: crate::ParserOptions::max_depth
    #[error("nesting exceeds the maximum depth of {0}")]
    DepthLimitExceeded(usize),
    /// The input ended inside a production.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
}

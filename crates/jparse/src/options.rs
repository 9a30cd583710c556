/// Configuration options for the parser.
///
/// The grammar itself is fixed; these options only bound resource use and
/// choose how a few inputs outside strict JSON are treated.
///
/// # Default
///
/// `max_depth` is 128; all other options default to `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Maximum nesting of arrays and objects.
    ///
    /// Each array or object opened inside another counts one level; the root
    /// container is level one. Exceeding the limit aborts the parse with
    /// [`SyntaxError::DepthLimitExceeded`], which keeps recursion bounded on
    /// hostile input such as a long run of `[`.
    ///
    /// # Default
    ///
    /// `128`
    ///
    /// [`SyntaxError::DepthLimitExceeded`]: crate::SyntaxError::DepthLimitExceeded
    pub max_depth: usize,

    /// Whether to parse multiple JSON values from one input.
    ///
    /// Only consulted by [`Parser::parse_values`]. When `true`, values may
    /// follow one another directly or separated by whitespace, as in JSON
    /// Lines. When `false`, exactly one value is accepted.
    ///
    /// # Examples
    ///
    /// ```json
    /// {}{}{}
    /// ```
    ///
    /// ```json
    /// 123 45 678 9
    /// ```
    ///
    /// # Default
    ///
    /// `false`
    ///
    /// [`Parser::parse_values`]: crate::Parser::parse_values
    pub allow_multiple_json_values: bool,

    /// Whether an unpaired UTF-16 surrogate escape decodes to U+FFFD.
    ///
    /// A `\uD800`-`\uDBFF` escape immediately followed by a `\uDC00`-`\uDFFF`
    /// escape always combines into one character. Any other surrogate escape
    /// cannot be represented in a Rust string: by default it aborts the parse
    /// with [`SyntaxError::LoneSurrogate`].
    ///
    /// # Default
    ///
    /// `false`
    ///
    /// [`SyntaxError::LoneSurrogate`]: crate::SyntaxError::LoneSurrogate
    pub lossy_surrogates: bool,
}

impl ParserOptions {
    /// Default nesting limit.
    pub const DEFAULT_MAX_DEPTH: usize = 128;
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
            allow_multiple_json_values: false,
            lossy_surrogates: false,
        }
    }
}

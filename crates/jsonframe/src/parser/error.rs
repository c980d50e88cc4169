use thiserror::Error;

/// Error raised when a fed character cannot extend the value in progress.
///
/// Renders as `<description> at position <N>`, where `N` indexes the whole
/// accumulated buffer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{source} at position {position}")]
pub struct ParserError {
    pub(crate) source: ErrorSource,
    /// Index of the last accepted character, `buffer length - 1`.
    ///
    /// Saturates at 0, so a rejected first character also reports 0; use
    /// [`StreamingReassembler::buffered_len`](crate::StreamingReassembler::buffered_len)
    /// to tell the two apart.
    pub position: usize,
}

impl ParserError {
    /// The structural error, if this is not an internal invariant failure.
    #[must_use]
    pub fn syntax_error(&self) -> Option<&SyntaxError> {
        match &self.source {
            ErrorSource::SyntaxError(err) => Some(err),
            ErrorSource::Internal(_) => None,
        }
    }

    /// Returns `true` if the dispatch core hit a broken invariant.
    #[must_use]
    pub fn is_internal(&self) -> bool {
        matches!(self.source, ErrorSource::Internal(_))
    }
}

/// Origin of a [`ParserError`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorSource {
    /// The character is invalid for the active context.
    #[error("{0}")]
    SyntaxError(#[from] SyntaxError),
    /// A handler ran without the frame it requires.
    #[error("internal error: {0}")]
    Internal(&'static str),
}

/// Structural errors, one per rejected grammar transition.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// No value can start with this character.
    #[error("unexpected '{0}', expected one of t, f, n, \", {{, [, -, 0-9")]
    ExpectedValue(char),
    /// A `true`, `false` or `null` literal was misspelled.
    #[error("unexpected '{found}', expected '{expected}' in '{literal}'")]
    LiteralMismatch {
        /// The character that was fed.
        found: char,
        /// The character the literal requires at this position.
        expected: char,
        /// The literal being matched.
        literal: &'static str,
    },
    /// The character is not allowed here.
    #[error("unexpected '{0}'")]
    UnexpectedCharacter(char),
    /// A number ended, or was continued, before it had its required digits.
    #[error("unexpected '{0}', expected a number")]
    ExpectedNumber(char),
    /// Two array elements were not separated by a comma.
    #[error("unexpected '{0}', expected ','")]
    ExpectedComma(char),
    /// An object member did not start with a quoted key.
    #[error("unexpected '{0}', expected '\"'")]
    ExpectedKey(char),
    /// An object key was not followed by a colon.
    #[error("unexpected '{0}', expected ':'")]
    ExpectedColon(char),
    /// Input ended inside a number that still needs digits.
    #[error("unexpected end of input, expected a number")]
    UnexpectedEndOfInput,
    /// Appending would grow the buffer past `ParserOptions::max_buffer_len`.
    #[error("buffer limit of {0} characters exceeded")]
    BufferLimitExceeded(usize),
    /// Pushing would nest past `ParserOptions::max_depth`.
    #[error("nesting limit of {0} frames exceeded")]
    DepthLimitExceeded(usize),
}

//! Character-at-a-time JSON reassembly.
//!
//! Overview
//! - `buffer: Buffer` records every accepted character of the value in
//!   progress. Insignificant whitespace between tokens is never appended, so
//!   the buffer always holds the compact text of the value. It only grows;
//!   `reset` is the one place it is cleared.
//! - `stack: ContextStack` holds one `Frame` per open grammar context. The
//!   top frame decides how the next character is read. An empty stack means
//!   no value is in progress.
//! - Each frame remembers its `origin`, the buffer index of the character
//!   that opened it. Literal and number rules look back within their own
//!   token through it.
//!
//! Dispatch
//! - `feed` hands the character to the handler of the top frame. A handler
//!   either settles the character (appends it, or skips it as whitespace) or
//!   asks for a retry. A retry pops the frame without consuming the
//!   character, and the loop runs again against the frame below, or against
//!   the value-start rules once the stack is empty.
//! - Every retry removes one frame, so a single character is examined at
//!   most `depth + 1` times.
//! - A value is complete on exactly the character that drains a non-empty
//!   stack. `feed` then returns a copy of the buffer. The buffer itself is
//!   left alone; callers that reuse the instance call `reset` in between.
//!
//! Numbers never close themselves: they retry on the first terminator and
//! let the enclosing context consume it. A bare top-level number is
//! therefore complete only once a trailing whitespace character is fed, or
//! when the caller signals end of input with `finish`.

mod buffer;
mod containers;
mod context;
mod error;
mod literal;
mod numbers;
mod options;
mod string;


use alloc::string::String;

use bstr::ByteSlice;
use buffer::Buffer;
use context::{Context, ContextStack, Frame, Literal};
pub use error::{ErrorSource, ParserError, SyntaxError};
pub use options::ParserOptions;

/// Outcome of running one handler against one character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// The character was appended or deliberately skipped.
    Settled,
    /// Pop the active frame and offer the same character to the one below.
    Retry,
}

/// Space, tab, carriage return, and line feed.
#[inline]
pub(crate) fn is_json_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Incrementally validates one JSON value at a time and hands back its
/// compact text once the value is complete.
///
/// ```rust
/// use jsonframe::StreamingReassembler;
///
/// let mut reassembler = StreamingReassembler::default();
/// let mut complete = None;
/// for c in "{\"id\": 7,\n \"ok\": true}".chars() {
///     if let Some(text) = reassembler.feed(c)? {
///         complete = Some(text);
///     }
/// }
/// assert_eq!(complete.as_deref(), Some("{\"id\":7,\"ok\":true}"));
/// # Ok::<(), jsonframe::ParserError>(())
/// ```
#[derive(Debug)]
pub struct StreamingReassembler {
    buffer: Buffer,
    stack: ContextStack,
    options: ParserOptions,
}

impl Default for StreamingReassembler {
    fn default() -> Self {
        Self::new(ParserOptions::default())
    }
}

impl StreamingReassembler {
    /// Creates a reassembler with an empty buffer and no value in progress.
    #[must_use]
    pub fn new(options: ParserOptions) -> Self {
        Self {
            buffer: Buffer::new(),
            stack: ContextStack::new(),
            options,
        }
    }

    /// The options this reassembler was created with.
    #[must_use]
    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Feeds a single character.
    ///
    /// Returns the text of the top-level value if this character completed
    /// it, and `None` while the value is still in progress.
    ///
    /// # Errors
    ///
    /// Returns a [`ParserError`] if the character cannot continue the value.
    /// The reassembler must be [`reset`](Self::reset) before further use.
    pub fn feed(&mut self, c: char) -> Result<Option<String>, ParserError> {
        let was_active = !self.stack.is_empty();

        loop {
            let step = match self.stack.top() {
                Some(frame) => self.step(frame, c)?,
                None => self.value_start(c)?,
            };
            match step {
                Step::Settled => break,
                Step::Retry => {
                    let Some(frame) = self.stack.pop() else {
                        return Err(self.internal_error("retry requested with no active frame"));
                    };
                    log::trace!("retry {c:?}: pop {:?}", frame.context);
                }
            }
        }

        if was_active && self.stack.is_empty() {
            log::debug!("value complete after {} characters", self.buffer.len());
            return Ok(Some(self.buffer.to_text()));
        }
        Ok(None)
    }

    /// Feeds characters in order until one of them completes a value.
    ///
    /// Characters after the completing one are not consumed. Returns `None`
    /// if the input runs out first.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParserError`] raised by [`feed`](Self::feed).
    pub fn feed_all<I>(&mut self, chars: I) -> Result<Option<String>, ParserError>
    where
        I: IntoIterator<Item = char>,
    {
        for c in chars {
            if let Some(text) = self.feed(c)? {
                return Ok(Some(text));
            }
        }
        Ok(None)
    }

    /// [`feed_all`](Self::feed_all) over the characters of `text`.
    ///
    /// # Errors
    ///
    /// See [`feed_all`](Self::feed_all).
    pub fn feed_str(&mut self, text: &str) -> Result<Option<String>, ParserError> {
        self.feed_all(text.chars())
    }

    /// [`feed_all`](Self::feed_all) over raw bytes decoded as UTF-8.
    ///
    /// Invalid sequences are replaced by U+FFFD rather than reported.
    ///
    /// # Errors
    ///
    /// See [`feed_all`](Self::feed_all).
    pub fn feed_bytes(&mut self, bytes: &[u8]) -> Result<Option<String>, ParserError> {
        self.feed_all(bytes.chars())
    }

    /// Signals that no more input will arrive.
    ///
    /// Completes a bare top-level number, which otherwise waits for a
    /// terminator that will never come. Any other unfinished value is left
    /// pending and `None` is returned.
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxError::UnexpectedEndOfInput`] if the pending number
    /// still needs digits, as in `1.` or `2e+`.
    pub fn finish(&mut self) -> Result<Option<String>, ParserError> {
        let &[frame] = self.stack.frames() else {
            return Ok(None);
        };
        if frame.context != Context::Number {
            return Ok(None);
        }
        if !self.buffer.last().is_some_and(|c| c.is_ascii_digit()) {
            return Err(self.syntax_error(SyntaxError::UnexpectedEndOfInput));
        }

        self.close();
        log::debug!("value complete at end of input after {} characters", self.buffer.len());
        Ok(Some(self.buffer.to_text()))
    }

    /// Discards the buffer and every open context.
    ///
    /// Texts returned earlier are independent copies and stay valid.
    pub fn reset(&mut self) {
        log::debug!("reset: dropping {} buffered characters", self.buffer.len());
        self.buffer.clear();
        self.stack.clear();
    }

    /// Returns `true` if no value is in progress.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.stack.is_empty()
    }

    /// Number of open contexts.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Number of characters accepted since the last reset.
    #[must_use]
    pub fn buffered_len(&self) -> usize {
        self.buffer.len()
    }

    fn step(&mut self, frame: Frame, c: char) -> Result<Step, ParserError> {
        match frame.context {
            Context::Literal(literal) => self.literal(frame, literal, c),
            Context::String => self.string(frame, c),
            Context::Number => self.number(frame, c),
            Context::Array => self.array(c),
            Context::Object => self.object(c),
            Context::ObjectKey => self.object_key(c),
            Context::ObjectValue => self.object_value(c),
        }
    }

    /// Rules for the first character of a value.
    fn value_start(&mut self, c: char) -> Result<Step, ParserError> {
        if is_json_whitespace(c) {
            return Ok(Step::Settled);
        }

        let context = match c {
            '"' => Context::String,
            '{' => Context::Object,
            '[' => Context::Array,
            '-' | '0'..='9' => Context::Number,
            _ => match Literal::from_first(c) {
                Some(literal) => Context::Literal(literal),
                None => return Err(self.syntax_error(SyntaxError::ExpectedValue(c))),
            },
        };

        self.open(context, c)?;
        Ok(Step::Settled)
    }

    /// Previous character within the token `frame` opened.
    fn previous_in(&self, frame: Frame) -> Option<char> {
        let last = self.buffer.len().checked_sub(1)?;
        if last < frame.origin {
            return None;
        }
        self.buffer.get(last)
    }

    fn append(&mut self, c: char) -> Result<(), ParserError> {
        if let Some(limit) = self
            .options
            .max_buffer_len
            .filter(|&limit| self.buffer.len() >= limit)
        {
            return Err(self.syntax_error(SyntaxError::BufferLimitExceeded(limit)));
        }
        self.buffer.push(c);
        Ok(())
    }

    /// Appends `c` and opens a frame whose token starts at it.
    fn open(&mut self, context: Context, c: char) -> Result<(), ParserError> {
        self.append(c)?;
        self.push_frame(context)
    }

    /// Opens a frame anchored at the last buffered character.
    fn push_frame(&mut self, context: Context) -> Result<(), ParserError> {
        if let Some(limit) = self
            .options
            .max_depth
            .filter(|&limit| self.stack.len() >= limit)
        {
            return Err(self.syntax_error(SyntaxError::DepthLimitExceeded(limit)));
        }
        let origin = self.buffer.len().saturating_sub(1);
        log::trace!("push {context:?} at {origin}");
        self.stack.push(Frame { context, origin });
        Ok(())
    }

    /// Swaps the active frame's context in place.
    fn switch_to(&mut self, context: Context) -> Result<(), ParserError> {
        match self.stack.replace_top(context) {
            Some(previous) => {
                log::trace!("switch {previous:?} -> {context:?}");
                Ok(())
            }
            None => Err(self.internal_error("context switch with no active frame")),
        }
    }

    /// Pops the active frame after its closing character was appended.
    fn close(&mut self) {
        if let Some(frame) = self.stack.pop() {
            log::trace!("pop {:?} at {}", frame.context, self.buffer.len());
        }
    }

    fn syntax_error(&self, err: SyntaxError) -> ParserError {
        self.parser_error(ErrorSource::SyntaxError(err))
    }

    fn internal_error(&self, what: &'static str) -> ParserError {
        self.parser_error(ErrorSource::Internal(what))
    }

    fn parser_error(&self, source: ErrorSource) -> ParserError {
        let err = ParserError {
            source,
            position: self.buffer.len().saturating_sub(1),
        };
        log::debug!("rejected input: {err}");
        #[cfg(any(test, feature = "fuzzing"))]
        assert!(!self.options.panic_on_error, "{err}");
        err
    }
}

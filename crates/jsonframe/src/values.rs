use alloc::string::String;
use core::iter::FusedIterator;

use crate::parser::{ParserError, StreamingReassembler};

/// Iterator over every top-level value in a stream of concatenated values.
///
/// Created by [`StreamingReassembler::values`]. The reassembler is reset
/// after each value, so every item holds the text of exactly one value. At
/// the end of the input [`StreamingReassembler::finish`] is called, which
/// yields a trailing bare number. The iterator stops after the first error.
#[derive(Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Values<'p, I> {
    reassembler: &'p mut StreamingReassembler,
    chars: I,
    done: bool,
}

impl StreamingReassembler {
    /// Splits a stream of whitespace-separated JSON values.
    ///
    /// ```rust
    /// use jsonframe::StreamingReassembler;
    ///
    /// let mut reassembler = StreamingReassembler::default();
    /// let values: Vec<_> = reassembler
    ///     .values("{\"a\": 1} [2]\n3".chars())
    ///     .collect::<Result<_, _>>()?;
    /// assert_eq!(values, ["{\"a\":1}", "[2]", "3"]);
    /// # Ok::<(), jsonframe::ParserError>(())
    /// ```
    pub fn values<I>(&mut self, chars: I) -> Values<'_, I::IntoIter>
    where
        I: IntoIterator<Item = char>,
    {
        Values {
            reassembler: self,
            chars: chars.into_iter(),
            done: false,
        }
    }
}

impl<I: Iterator<Item = char>> Values<'_, I> {
    fn complete(&mut self, text: String) -> Option<Result<String, ParserError>> {
        self.reassembler.reset();
        Some(Ok(text))
    }

    fn fail(&mut self, err: ParserError) -> Option<Result<String, ParserError>> {
        self.done = true;
        Some(Err(err))
    }
}

impl<I: Iterator<Item = char>> Iterator for Values<'_, I> {
    type Item = Result<String, ParserError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        while let Some(c) = self.chars.next() {
            match self.reassembler.feed(c) {
                Ok(Some(text)) => return self.complete(text),
                Ok(None) => {}
                Err(err) => return self.fail(err),
            }
        }

        self.done = true;
        match self.reassembler.finish() {
            Ok(Some(text)) => self.complete(text),
            Ok(None) => None,
            Err(err) => self.fail(err),
        }
    }
}

impl<I: Iterator<Item = char>> FusedIterator for Values<'_, I> {}

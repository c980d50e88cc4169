use super::{
    ParserError, Step, StreamingReassembler, SyntaxError,
    context::{Frame, Literal},
};

impl StreamingReassembler {
    /// Matches the remaining characters of `true`, `false`, or `null`.
    ///
    /// The first character was consumed by the value-start rules, so the
    /// index into the word is the distance from the frame origin.
    pub(super) fn literal(
        &mut self,
        frame: Frame,
        literal: Literal,
        c: char,
    ) -> Result<Step, ParserError> {
        let word = literal.word();
        let index = self.buffer.len() - frame.origin;
        let Some(expected) = word.chars().nth(index) else {
            return Err(self.internal_error("literal frame outlived its word"));
        };

        if c != expected {
            return Err(self.syntax_error(SyntaxError::LiteralMismatch {
                found: c,
                expected,
                literal: word,
            }));
        }

        self.append(c)?;
        if index + 1 == word.len() {
            self.close();
        }
        Ok(Step::Settled)
    }
}

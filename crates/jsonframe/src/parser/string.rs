use super::{ParserError, Step, StreamingReassembler, context::Frame};

impl StreamingReassembler {
    /// Appends string content verbatim; escapes are not decoded.
    ///
    /// A quote closes the string unless the character before it is a
    /// backslash. Only one character is looked at, so `"\\"` (an escaped
    /// backslash followed by the closing quote) keeps the string open.
    pub(super) fn string(&mut self, frame: Frame, c: char) -> Result<Step, ParserError> {
        let escaped = self.previous_in(frame) == Some('\\');
        self.append(c)?;
        if c == '"' && !escaped {
            self.close();
        }
        Ok(Step::Settled)
    }
}

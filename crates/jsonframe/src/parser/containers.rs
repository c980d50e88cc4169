//! Arrays and objects.
//!
//! Container rules inspect the last buffered character rather than the
//! frame origin: whitespace is never buffered, so that character is always
//! the previous meaningful one, whether it was appended by the container
//! itself or closed a nested value.

use super::{
    ParserError, Step, StreamingReassembler, SyntaxError, context::Context, is_json_whitespace,
};

impl StreamingReassembler {
    pub(super) fn array(&mut self, c: char) -> Result<Step, ParserError> {
        if is_json_whitespace(c) {
            return Ok(Step::Settled);
        }

        let previous = self.buffer.last();
        match c {
            ']' if previous == Some(',') => Err(self.syntax_error(SyntaxError::UnexpectedCharacter(c))),
            ']' => {
                self.append(c)?;
                self.close();
                Ok(Step::Settled)
            }
            ',' if matches!(previous, Some('[' | ',')) => {
                Err(self.syntax_error(SyntaxError::UnexpectedCharacter(c)))
            }
            ',' => {
                self.append(c)?;
                Ok(Step::Settled)
            }
            _ if matches!(previous, Some('[' | ',')) => self.value_start(c),
            _ => Err(self.syntax_error(SyntaxError::ExpectedComma(c))),
        }
    }

    /// An object frame only ever sees its first character and the closing
    /// brace handed back by its key or value frame.
    pub(super) fn object(&mut self, c: char) -> Result<Step, ParserError> {
        if c == '}' {
            self.append(c)?;
            self.close();
            return Ok(Step::Settled);
        }

        self.push_frame(Context::ObjectKey)?;
        self.object_key(c)
    }

    pub(super) fn object_key(&mut self, c: char) -> Result<Step, ParserError> {
        if is_json_whitespace(c) {
            return Ok(Step::Settled);
        }

        match (self.buffer.last(), c) {
            (Some('{' | ','), '"') => {
                self.open(Context::String, c)?;
                Ok(Step::Settled)
            }
            (Some('"'), ':') => {
                self.append(c)?;
                self.switch_to(Context::ObjectValue)?;
                Ok(Step::Settled)
            }
            (Some('"'), _) => Err(self.syntax_error(SyntaxError::ExpectedColon(c))),
            _ => Err(self.syntax_error(SyntaxError::ExpectedKey(c))),
        }
    }

    pub(super) fn object_value(&mut self, c: char) -> Result<Step, ParserError> {
        if is_json_whitespace(c) {
            return Ok(Step::Settled);
        }

        match (self.buffer.last(), c) {
            (Some(':'), _) => self.value_start(c),
            (_, ',') => {
                self.append(c)?;
                self.switch_to(Context::ObjectKey)?;
                Ok(Step::Settled)
            }
            (_, '}') => Ok(Step::Retry),
            _ => Err(self.syntax_error(SyntaxError::UnexpectedCharacter(c))),
        }
    }
}

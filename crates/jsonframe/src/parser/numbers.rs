use super::{ParserError, Step, StreamingReassembler, SyntaxError, context::Frame};

/// Characters that end a number and belong to the enclosing context.
fn is_terminator(c: char) -> bool {
    matches!(c, ']' | '}' | ',' | '\r' | '\n' | ' ' | '\t')
}

/// Characters a number cannot end on.
fn is_incomplete_tail(c: char) -> bool {
    matches!(c, 'e' | 'E' | '+' | '-' | '.')
}

impl StreamingReassembler {
    /// Validates one more character of a number.
    ///
    /// The frame never pops itself. A terminator is handed back with
    /// [`Step::Retry`] so the enclosing array, object, or value-start rules
    /// consume it.
    pub(super) fn number(&mut self, frame: Frame, c: char) -> Result<Step, ParserError> {
        let previous = self.previous_in(frame);
        let token = self.buffer.tail(frame.origin..);

        let rejected = match c {
            '-' if !matches!(previous, None | Some('e' | 'E')) => {
                Some(SyntaxError::UnexpectedCharacter(c))
            }
            '+' if !matches!(previous, Some('e' | 'E')) => Some(SyntaxError::UnexpectedCharacter(c)),
            '-' | '+' => None,
            '.' if token.iter().any(|&t| matches!(t, '.' | 'e' | 'E')) || previous == Some('-') => {
                Some(SyntaxError::UnexpectedCharacter(c))
            }
            '.' => None,
            'e' | 'E' if !previous.is_some_and(|p| p.is_ascii_digit()) => {
                Some(SyntaxError::ExpectedNumber(c))
            }
            'e' | 'E' => None,
            _ if is_terminator(c) => {
                if previous.is_some_and(is_incomplete_tail) {
                    return Err(self.syntax_error(SyntaxError::ExpectedNumber(c)));
                }
                return Ok(Step::Retry);
            }
            // No digit may follow a standalone leading zero.
            '0'..='9' if matches!(token, ['0'] | ['-', '0']) => {
                Some(SyntaxError::UnexpectedCharacter(c))
            }
            '0'..='9' => None,
            _ => Some(SyntaxError::UnexpectedCharacter(c)),
        };

        if let Some(err) = rejected {
            return Err(self.syntax_error(err));
        }
        self.append(c)?;
        Ok(Step::Settled)
    }
}

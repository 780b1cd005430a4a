use thiserror::Error;

#[derive(Debug, Error)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// The lexer found text that does not form any token.
    #[error("Error on line {line}: Invalid token: {token}.")]
    InvalidToken {
        /// The offending source slice.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Found an unexpected token while parsing.
    #[error("Error on line {line}: Unexpected token: {token}.")]
    UnexpectedToken {
        /// A description of the token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A specific keyword was required at this position.
    #[error("Error on line {line}: Expected '{expected}' but found {found}.")]
    ExpectedKeyword {
        /// The keyword (or keyword sequence) that was required.
        expected: &'static str,
        /// A description of what was found instead.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Reached the end of input unexpectedly.
    #[error("Error on line {line}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Found extra tokens after the end of a statement or after `KTHXBYE`.
    #[error("Error on line {line}: Extra tokens after statement: {token}.")]
    UnexpectedTrailingTokens {
        /// The extra/unexpected token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl ParseError {
    /// Returns the source line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::InvalidToken { line, .. }
            | Self::UnexpectedToken { line, .. }
            | Self::ExpectedKeyword { line, .. }
            | Self::UnexpectedEndOfInput { line }
            | Self::UnexpectedTrailingTokens { line, .. } => *line,
        }
    }

    /// Attaches `end_line` to an error raised at the end of input, which the
    /// parser reports on line 0.
    #[must_use]
    pub(crate) fn with_end_line(mut self, end_line: usize) -> Self {
        let (Self::InvalidToken { line, .. }
             | Self::UnexpectedToken { line, .. }
             | Self::ExpectedKeyword { line, .. }
             | Self::UnexpectedEndOfInput { line }
             | Self::UnexpectedTrailingTokens { line, .. }) = &mut self;
        if *line == 0 {
            *line = end_line;
        }
        self
    }
}

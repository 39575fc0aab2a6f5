use miette::{Diagnostic, SourceOffset, SourceSpan};

use crate::{lexer::error::LexerError, range::Range, tree::error::ParseError};

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum InnerError {
    #[error(transparent)]
    Lexer(#[from] LexerError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl InnerError {
    fn range(&self) -> Option<&Range> {
        match self {
            InnerError::Lexer(e) => e.range(),
            InnerError::Parse(e) => e.range(),
        }
    }
}

/// Represents a high-level error with diagnostic information for the user.
#[derive(PartialEq, Debug, thiserror::Error)]
#[error("{cause}")]
pub struct Error {
    /// The underlying cause of the error.
    pub cause: InnerError,
    /// The source code related to the error.
    pub source_code: String,
    /// The location in the source code for diagnostics.
    pub location: SourceSpan,
}

impl Error {
    pub fn from_error(source_code: impl Into<String>, cause: InnerError) -> Self {
        let source_code = source_code.into();
        let location = match cause.range() {
            Some(range) => {
                let start = SourceOffset::from_location(
                    &source_code,
                    range.start.line as usize,
                    range.start.column,
                );
                let len = std::cmp::max(range.end.column.saturating_sub(range.start.column), 1);
                SourceSpan::new(start, len)
            }
            None => SourceSpan::new(SourceOffset::from_location(&source_code, 1, 1), 1),
        };

        Self {
            cause,
            source_code,
            location,
        }
    }
}

impl Diagnostic for Error {
    fn code<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        let code = match &self.cause {
            InnerError::Lexer(LexerError::InvalidToken(_, _)) => "LexerError::InvalidToken",
            InnerError::Parse(ParseError::EmptyExpression) => "ParseError::EmptyExpression",
            InnerError::Parse(ParseError::UnbalancedExpression(_)) => {
                "ParseError::UnbalancedExpression"
            }
            InnerError::Parse(ParseError::RecursionLimitExceeded(_)) => {
                "ParseError::RecursionLimitExceeded"
            }
        };

        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        let msg = match &self.cause {
            InnerError::Lexer(LexerError::InvalidToken(_, _)) => {
                "Each token must be one of `* / + - % ^` or a base-10 integer."
            }
            InnerError::Parse(ParseError::EmptyExpression) => {
                "The expression contains no tokens. Provide at least one operand."
            }
            InnerError::Parse(ParseError::UnbalancedExpression(_)) => {
                "An operator is missing an operand. Check the expression arity."
            }
            InnerError::Parse(ParseError::RecursionLimitExceeded(_)) => {
                "The expression has too many tokens to build without exhausting the call stack."
            }
        };

        Some(Box::new(msg))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = miette::LabeledSpan> + '_>> {
        Some(Box::new(std::iter::once(
            miette::LabeledSpan::new_with_span(Some(format!("{}", self.cause)), self.location),
        )))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.source_code)
    }
}

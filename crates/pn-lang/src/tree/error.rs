use thiserror::Error;

use crate::{lexer::token::Token, range::Range};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Empty expression")]
    EmptyExpression,
    #[error("Unbalanced expression near `{}`", if .0.is_eof() { "EOF".to_string() } else { .0.to_string() })]
    UnbalancedExpression(Token),
    #[error("Maximum recursion depth exceeded `{0}`")]
    RecursionLimitExceeded(u32),
}

impl ParseError {
    pub(crate) fn range(&self) -> Option<&Range> {
        match self {
            ParseError::UnbalancedExpression(token) => Some(&token.range),
            ParseError::EmptyExpression | ParseError::RecursionLimitExceeded(_) => None,
        }
    }
}

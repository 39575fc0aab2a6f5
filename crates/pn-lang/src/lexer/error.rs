use smol_str::SmolStr;
use thiserror::Error;

use crate::range::Range;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LexerError {
    #[error("Unexpected token `{0}`")]
    InvalidToken(SmolStr, Range),
}

impl LexerError {
    pub(crate) fn range(&self) -> Option<&Range> {
        match self {
            LexerError::InvalidToken(_, range) => Some(range),
        }
    }
}

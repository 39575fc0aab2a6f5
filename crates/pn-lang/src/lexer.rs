pub mod error;
pub mod token;

use error::LexerError;
use nom::{
    IResult, Parser,
    bytes::complete::{is_not, take_while, take_while1},
    multi::separated_list0,
    sequence::delimited,
};
use smol_str::SmolStr;
use token::{Token, TokenKind};

use crate::{op::OpKind, range::Span};

/// Splits a prefix expression into classified tokens.
///
/// Tokens are separated by runs of ASCII spaces. Each token is either one of
/// the six operator symbols or an optionally signed base-10 integer; anything
/// else fails the whole tokenization.
#[derive(Debug, Clone, Default)]
pub struct Lexer;

impl Lexer {
    pub fn new() -> Self {
        Self
    }

    pub fn tokenize(&self, input: &str) -> Result<Vec<Token>, LexerError> {
        match symbols(Span::new(input)) {
            Ok((rest, fragments)) => {
                let mut tokens = fragments
                    .iter()
                    .map(classify)
                    .collect::<Result<Vec<_>, _>>()?;

                tokens.push(Token {
                    range: rest.into(),
                    kind: TokenKind::Eof,
                });

                Ok(tokens)
            }
            Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => Err(LexerError::InvalidToken(
                SmolStr::new(e.input.fragment()),
                e.input.into(),
            )),
            _ => unreachable!(),
        }
    }
}

fn classify(fragment: &Span) -> Result<Token, LexerError> {
    let text = *fragment.fragment();
    let kind = match OpKind::from_symbol(text) {
        Some(kind) => TokenKind::Op(kind),
        None => match text.parse::<i64>() {
            Ok(value) => TokenKind::Int(value),
            Err(_) => {
                return Err(LexerError::InvalidToken(
                    SmolStr::new(text),
                    (*fragment).into(),
                ));
            }
        },
    };

    Ok(Token {
        range: (*fragment).into(),
        kind,
    })
}

fn spaces0(input: Span) -> IResult<Span, Span> {
    take_while(|c| c == ' ').parse(input)
}

fn spaces1(input: Span) -> IResult<Span, Span> {
    take_while1(|c| c == ' ').parse(input)
}

fn symbol(input: Span) -> IResult<Span, Span> {
    is_not(" ").parse(input)
}

fn symbols(input: Span) -> IResult<Span, Vec<Span>> {
    delimited(spaces0, separated_list0(spaces1, symbol), spaces0).parse(input)
}

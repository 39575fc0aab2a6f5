//! `pn-lang` parses space-separated prefix (Polish-notation) arithmetic
//! expressions into binary expression trees and renders them back as prefix
//! or fully parenthesized infix text.
//!
//! ## Examples
//!
//! ```
//! let tree = pn_lang::parse("+ 1 2").unwrap();
//!
//! assert_eq!(tree.to_infix(), "(1 + 2)");
//! assert_eq!(tree.to_prefix(), "+ 1 2");
//! assert_eq!(tree.evaluate(), 0);
//!
//! // The construction algorithm attaches the two operands following a
//! // nested operator in reversed order; the rendering preserves it.
//! let tree = pn_lang::parse("+ 1 * 2 3").unwrap();
//!
//! assert_eq!(tree.to_infix(), "(1 + (3 * 2))");
//! ```
mod error;
mod infix;
mod lexer;
mod op;
mod range;
mod tree;

use error::InnerError;

pub use error::Error;
pub use lexer::Lexer;
pub use lexer::token::{Token, TokenKind};
pub use op::OpKind;
pub use range::{Position, Range};
pub use tree::ExprTree;
pub use tree::builder::Options as ParseOptions;
pub use tree::node::Node;

/// Builds an expression tree from a prefix expression.
pub fn parse(code: &str) -> Result<ExprTree, Error> {
    parse_with_options(code, ParseOptions::default())
}

/// Builds an expression tree, optionally rejecting expressions whose
/// operators are short of operands.
pub fn parse_with_options(code: &str, options: ParseOptions) -> Result<ExprTree, Error> {
    let mut tree = ExprTree::new();
    tree.set_expression_with(code, options)?;

    Ok(tree)
}

/// Splits a prefix expression into classified tokens.
pub fn tokenize(code: &str) -> Result<Vec<Token>, Error> {
    Lexer::new()
        .tokenize(code)
        .map_err(|e| Error::from_error(code, InnerError::Lexer(e)))
}

/// Returns `true` if `text` is exactly one of the six operator symbols.
pub fn is_operator(text: &str) -> bool {
    OpKind::from_symbol(text).is_some()
}

use super::{error::ParseError, node::Node};
use crate::lexer::token::{Token, TokenKind};

/// Construction recurses one frame per token; expressions longer than this
/// are rejected instead of exhausting the call stack.
pub(crate) const MAX_DEPTH: u32 = 4_096;

#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// Reject expressions whose operators end up without both operands,
    /// instead of silently truncating.
    pub strict: bool,
}

/// Builds an expression tree from a classified token sequence.
///
/// The construction algorithm is deliberately non-standard: an operator
/// token always becomes the right child of the current node and carries the
/// operand side flag over unchanged, so the two operands following a nested
/// operator attach in reversed order relative to the input text.
#[derive(Debug)]
pub struct Builder<'a> {
    tokens: &'a [Token],
    cursor: usize,
    options: Options,
}

impl<'a> Builder<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self::with_options(tokens, Options::default())
    }

    pub fn with_options(tokens: &'a [Token], options: Options) -> Self {
        Builder {
            tokens,
            cursor: 0,
            options,
        }
    }

    pub fn build(mut self) -> Result<Node, ParseError> {
        let mut root = match self.tokens.first() {
            Some(token) if !token.is_eof() => match &token.kind {
                TokenKind::Op(kind) => Node::operator(*kind),
                TokenKind::Int(value) => Node::operand(*value),
                TokenKind::Eof => return Err(ParseError::EmptyExpression),
            },
            _ => return Err(ParseError::EmptyExpression),
        };

        self.attach(&mut root, false, 1)?;

        if self.options.strict {
            self.check_balanced(&root)?;
        }

        Ok(root)
    }

    /// One recursive step per token: `current` is the node children attach
    /// to, `right_next` the operand side flag.
    fn attach(&mut self, current: &mut Node, right_next: bool, depth: u32) -> Result<(), ParseError> {
        self.cursor += 1;
        let kind = match self.tokens.get(self.cursor) {
            Some(token) if !token.is_eof() => token.kind.clone(),
            _ => return Ok(()),
        };

        if depth >= MAX_DEPTH {
            return Err(ParseError::RecursionLimitExceeded(MAX_DEPTH));
        }

        match kind {
            TokenKind::Op(op) => match current.set_right(Node::operator(op)) {
                Some(child) => self.attach(child, right_next, depth + 1),
                // a leaf cannot take children; the token is dropped
                None => self.attach(current, right_next, depth + 1),
            },
            TokenKind::Int(value) => {
                let operand = Node::operand(value);
                let _ = if right_next {
                    current.set_right(operand)
                } else {
                    current.set_left(operand)
                };
                self.attach(current, !right_next, depth + 1)
            }
            TokenKind::Eof => Ok(()),
        }
    }

    fn check_balanced(&self, root: &Node) -> Result<(), ParseError> {
        let token_count = self
            .tokens
            .iter()
            .filter(|token| !token.is_eof())
            .count();

        if root.count() == token_count && root.is_complete() {
            return Ok(());
        }

        match self
            .tokens
            .iter()
            .rev()
            .find(|token| !token.is_eof())
            .cloned()
        {
            Some(token) => Err(ParseError::UnbalancedExpression(token)),
            None => Err(ParseError::EmptyExpression),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{lexer::Lexer, op::OpKind};
    use rstest::rstest;

    fn tokens(input: &str) -> Vec<Token> {
        Lexer::new().tokenize(input).unwrap()
    }

    fn full(kind: OpKind, left: Node, right: Node) -> Node {
        Node::Operator {
            kind,
            left: Some(Box::new(left)),
            right: Some(Box::new(right)),
        }
    }

    #[rstest]
    #[case("42", Node::operand(42))]
    #[case("-42", Node::operand(-42))]
    #[case("+ 1 2", full(OpKind::Add, Node::operand(1), Node::operand(2)))]
    #[case("^ 2 8", full(OpKind::Pow, Node::operand(2), Node::operand(8)))]
    // the operands following a nested operator attach in reversed order
    #[case("+ 1 * 2 3", full(OpKind::Add, Node::operand(1), full(OpKind::Mul, Node::operand(3), Node::operand(2))))]
    #[case("- 1 / 2 3", full(OpKind::Sub, Node::operand(1), full(OpKind::Div, Node::operand(3), Node::operand(2))))]
    fn test_build(#[case] input: &str, #[case] expected: Node) {
        let tokens = tokens(input);
        assert_eq!(Builder::new(&tokens).build(), Ok(expected));
    }

    #[test]
    fn test_build_operator_without_operands() {
        let tokens = tokens("+ -");
        assert_eq!(
            Builder::new(&tokens).build(),
            Ok(Node::Operator {
                kind: OpKind::Add,
                left: None,
                right: Some(Box::new(Node::operator(OpKind::Sub))),
            })
        );
    }

    #[test]
    fn test_build_drops_tokens_after_operand_root() {
        let tokens = tokens("1 2 3");
        assert_eq!(Builder::new(&tokens).build(), Ok(Node::operand(1)));
    }

    #[rstest]
    #[case("")]
    #[case("    ")]
    fn test_build_empty(#[case] input: &str) {
        let tokens = tokens(input);
        assert_eq!(
            Builder::new(&tokens).build(),
            Err(ParseError::EmptyExpression)
        );
    }

    #[rstest]
    #[case("42")]
    #[case("+ 1 2")]
    #[case("+ 1 * 2 3")]
    fn test_strict_accepts_balanced(#[case] input: &str) {
        let tokens = tokens(input);
        let options = Options { strict: true };
        assert!(Builder::with_options(&tokens, options).build().is_ok());
    }

    #[rstest]
    #[case("+ 1")]
    #[case("+ -")]
    #[case("1 2 3")]
    #[case("+ 1 2 3")]
    fn test_strict_rejects_unbalanced(#[case] input: &str) {
        let tokens = tokens(input);
        let options = Options { strict: true };
        assert!(matches!(
            Builder::with_options(&tokens, options).build(),
            Err(ParseError::UnbalancedExpression(_))
        ));
    }

    #[test]
    fn test_recursion_limit() {
        let mut input = "- ".repeat(MAX_DEPTH as usize);
        input.push('1');
        let tokens = tokens(&input);
        assert_eq!(
            Builder::new(&tokens).build(),
            Err(ParseError::RecursionLimitExceeded(MAX_DEPTH))
        );
    }

    #[test]
    fn test_long_expression_within_limit() {
        let mut input = "- ".repeat(1_000);
        input.push('1');
        let tokens = tokens(&input);
        assert!(Builder::new(&tokens).build().is_ok());
    }
}

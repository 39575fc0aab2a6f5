pub mod builder;
pub mod error;
pub mod node;

use std::fmt::{self, Display, Formatter};

use itertools::Itertools;

#[cfg(feature = "tree-json")]
use serde::{Deserialize, Serialize};

use builder::{Builder, Options};
use node::Node;

use crate::{
    error::{Error, InnerError},
    infix,
    lexer::Lexer,
};

/// A binary expression tree built from a prefix (Polish-notation)
/// arithmetic expression.
///
/// A tree is built in a single pass and replaced wholesale on re-parse;
/// nodes are never shared between trees.
#[cfg_attr(feature = "tree-json", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExprTree {
    root: Option<Node>,
}

impl ExprTree {
    /// An empty tree. It renders as `"0"` and evaluates to zero.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes reachable from the root.
    pub fn node_count(&self) -> usize {
        self.root.as_ref().map_or(0, Node::count)
    }

    /// Replaces the tree's content with the expression parsed from `code`.
    /// On error the previous content is left untouched.
    pub fn set_expression(&mut self, code: &str) -> Result<(), Error> {
        self.set_expression_with(code, Options::default())
    }

    pub fn set_expression_with(&mut self, code: &str, options: Options) -> Result<(), Error> {
        let tokens = Lexer::new()
            .tokenize(code)
            .map_err(|e| Error::from_error(code, InnerError::Lexer(e)))?;
        let root = Builder::with_options(&tokens, options)
            .build()
            .map_err(|e| Error::from_error(code, InnerError::Parse(e)))?;

        self.root = Some(root);

        Ok(())
    }

    /// Prefix form of the tree, normalized to single spaces. The empty tree
    /// yields an empty string.
    pub fn to_prefix(&self) -> String {
        self.root
            .as_ref()
            .map(|node| node.to_string().split_whitespace().join(" "))
            .unwrap_or_default()
    }

    /// Fully parenthesized infix form. The empty tree yields the literal
    /// `"0"`, a rendering convention rather than an evaluation.
    pub fn to_infix(&self) -> String {
        match &self.root {
            None => "0".to_string(),
            Some(node) => {
                let prefix = node.to_string();
                let tokens = prefix.split_whitespace().collect::<Vec<_>>();
                infix::from_prefix_tokens(&tokens)
            }
        }
    }

    /// Numeric value of the expression. Always zero; arithmetic evaluation
    /// over the built tree is not implemented.
    ///
    /// TODO: evaluate the tree's actual shape, reversed-operand order
    /// included.
    pub fn evaluate(&self) -> i64 {
        0
    }
}

impl Display for ExprTree {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", self.to_infix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::op::OpKind;
    use rstest::rstest;

    #[test]
    fn test_empty_tree() {
        let tree = ExprTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.node_count(), 0);
        assert_eq!(tree.to_prefix(), "");
        assert_eq!(tree.to_infix(), "0");
        assert_eq!(tree.evaluate(), 0);
    }

    #[rstest]
    #[case("7", "7", "7")]
    #[case("  7  ", "7", "7")]
    #[case("+ 1 2", "+ 1 2", "(1 + 2)")]
    #[case("+   1   2", "+ 1 2", "(1 + 2)")]
    #[case("- -1 -2", "- -1 -2", "(-1 - -2)")]
    #[case("+ 1 * 2 3", "+ 1 * 3 2", "(1 + (3 * 2))")]
    fn test_set_expression(
        #[case] code: &str,
        #[case] prefix: &str,
        #[case] infix: &str,
    ) {
        let mut tree = ExprTree::new();
        tree.set_expression(code).unwrap();
        assert_eq!(tree.to_prefix(), prefix);
        assert_eq!(tree.to_infix(), infix);
        assert_eq!(tree.to_string(), infix);
        assert_eq!(tree.evaluate(), 0);
    }

    #[test]
    fn test_set_expression_replaces_root() {
        let mut tree = ExprTree::new();
        tree.set_expression("+ 1 2").unwrap();
        tree.set_expression("9").unwrap();
        assert_eq!(tree.root(), Some(&Node::operand(9)));
        assert_eq!(tree.node_count(), 1);
    }

    #[test]
    fn test_set_expression_keeps_tree_on_error() {
        let mut tree = ExprTree::new();
        tree.set_expression("+ 1 2").unwrap();
        assert!(tree.set_expression("+ 1 x").is_err());
        assert_eq!(tree.to_infix(), "(1 + 2)");
    }

    #[test]
    fn test_prefix_normalizes_missing_child_spacing() {
        let mut tree = ExprTree::new();
        tree.set_expression("- 5 /").unwrap();
        // raw emission carries irregular spaces around the childless operator
        assert_eq!(tree.root().map(|node| node.to_string()), Some("- 5 /  ".to_string()));
        assert_eq!(tree.to_prefix(), "- 5 /");
        assert_eq!(tree.to_infix(), "(5 - ( / ))");
    }

    #[test]
    fn test_strict_option_rejects_missing_operand() {
        let mut tree = ExprTree::new();
        let options = Options { strict: true };
        assert!(tree.set_expression_with("+ 1", options).is_err());
        assert!(tree.is_empty());
        assert!(tree.set_expression_with("+ 1 2", options).is_ok());
    }

    #[test]
    fn test_root_accessor() {
        let mut tree = ExprTree::new();
        tree.set_expression("* 2 3").unwrap();
        match tree.root() {
            Some(Node::Operator { kind, .. }) => assert_eq!(*kind, OpKind::Mul),
            other => panic!("expected operator root, got {:?}", other),
        }
    }
}
